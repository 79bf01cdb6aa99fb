//! Rig control module
//!
//! The rig owns the four legs of the quadruped and builds on the single-leg
//! primitive in two layers: composite raise/lower/reset operations which keep
//! the body stable by playing one leg pair off against the other, and the
//! named behaviour library (happy, sad, sit, ...) built from those
//! operations.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod behaviours;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use params::*;
pub use state::*;

use crate::leg::LegError;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The number of legs on the rig.
pub const NUM_LEGS: usize = 4;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Identifies one of the rig's four legs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegId {
    FrontRight,
    FrontLeft,
    BackRight,
    BackLeft
}

/// Possible errors that can occur during rig construction.
#[derive(Debug, thiserror::Error)]
pub enum RigError {
    #[error(
        "The raise angle ({raise_deg} deg) must be the negative of the lower \
         angle ({lower_deg} deg)"
    )]
    AsymmetricTravel {
        raise_deg: f64,
        lower_deg: f64
    },

    #[error("Failed to initialise a leg: {0}")]
    Leg(#[from] LegError)
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LegId {
    /// All legs, in the deterministic front-to-back order used by
    /// [`Rig::reset_all`].
    pub const ALL: [LegId; NUM_LEGS] = [
        LegId::FrontRight,
        LegId::FrontLeft,
        LegId::BackRight,
        LegId::BackLeft
    ];

    /// The front leg pair.
    pub const FRONT: [LegId; 2] = [LegId::FrontRight, LegId::FrontLeft];

    /// The back leg pair.
    pub const BACK: [LegId; 2] = [LegId::BackRight, LegId::BackLeft];
}
