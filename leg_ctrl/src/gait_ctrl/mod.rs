//! Gait control module
//!
//! A continuous diagonal-trot walking cycle built from the rig's leg
//! primitives. One front leg and the diagonally opposite back leg swing
//! together while the other two support the body, then the pairs swap. The
//! cycle repeats until cancelled, and always exits through the neutral-lean
//! stopping pose.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod cancel;
mod params;
mod phases;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use cancel::*;
pub use params::*;
pub use phases::*;
pub use state::*;

use crate::leg::LegError;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Fraction of the push angles commanded to the trailing pair.
///
/// Empirical tuning constant with no physical derivation - preserved
/// literally for behavioural fidelity.
pub const TRAIL_PUSH_SCALE: f64 = 0.7;

/// Inner angle of the neutral-lean stopping pose.
///
/// The walk cycle always exits through this forward-leaning stable stance
/// rather than the (0, 0) reset pose.
///
/// Units: degrees
pub const NEUTRAL_LEAN_INNER_DEG: f64 = -10.0;

/// Outer angle of the neutral-lean stopping pose.
///
/// Units: degrees
pub const NEUTRAL_LEAN_OUTER_DEG: f64 = 10.0;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during gait control.
#[derive(Debug, thiserror::Error)]
pub enum GaitError {
    #[error("Walk speed must be a strictly positive number, got {0}")]
    InvalidSpeed(f64),

    #[error("Leg movement failed: {0}")]
    Leg(#[from] LegError)
}
