//! # Servo Control Module
//!
//! This module defines the interface the leg coordination engine uses to
//! command servos. The driver itself (the board talking to the physical
//! servos) is an external collaborator - the embedding application implements
//! [`ServoDriver`] for whatever hardware it runs on and hands eight driver
//! handles to the rig at construction time. Channel/pin assignment is a
//! deployment concern and never appears in this library.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod mock;

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// Trait to provide a unified API for commanding a single servo.
///
/// Implementations are assumed to be synchronous and side-effect-only: the
/// servo applies the angle immediately and there is no acknowledgment and no
/// rate limit enforced by the driver. Rate limiting is entirely the caller's
/// responsibility (see [`crate::sweep::sweep`]).
pub trait ServoDriver {

    /// Command the servo to assume the given angle.
    ///
    /// ## Arguments
    /// - `angle_deg` - The target angle in degrees, relative to the servo's
    ///   zero position.
    fn set_angle(&mut self, angle_deg: f64) -> Result<(), ServoError>;

}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// An error raised by the underlying servo driver.
///
/// These faults are not recoverable by the engine - they are propagated to
/// the caller, aborting the in-progress behaviour. After a fault the rig's
/// recorded positions may be stale relative to physical reality, so callers
/// should perform an explicit `reset_all` before reusing the rig.
#[derive(Debug, thiserror::Error)]
pub enum ServoError {
    #[error("An I2C error occured while commanding the servo")]
    I2c,

    #[error("The servo rejected the commanded angle")]
    AngleRejected
}
