//! Single leg control module
//!
//! A Theo Jansen leg turns two independent rotary inputs into a walking foot
//! trajectory. This module hides the two mechanically-coupled servos of one
//! limb behind a single two-angle interface.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use params::*;
pub use state::*;

use crate::servo_ctrl::ServoError;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur while moving a leg.
#[derive(Debug, thiserror::Error)]
pub enum LegError {
    #[error(
        "Commanded angle of {angle_deg} deg is outside the safe range \
         [{min_deg}, {max_deg}] deg"
    )]
    AngleOutOfRange {
        angle_deg: f64,
        min_deg: f64,
        max_deg: f64
    },

    #[error("Servo fault: {0}")]
    Servo(#[from] ServoError)
}
