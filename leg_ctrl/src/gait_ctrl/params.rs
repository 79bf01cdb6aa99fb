//! Parameters structure for gait control

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the walking gait.
///
/// The lift and push angles are empirical tuning constants - they were
/// found on the real robot, not derived from the linkage geometry.
#[derive(Clone, Debug, Deserialize)]
pub struct GaitParams {

    /// Inner angle of the lift and forward-swing move.
    ///
    /// Units: degrees
    pub inner_lift_deg: f64,

    /// Outer angle of the lift and forward-swing move.
    ///
    /// Units: degrees
    pub outer_lift_deg: f64,

    /// Inner angle of the plant and push move.
    ///
    /// Units: degrees
    pub inner_push_deg: f64,

    /// Outer angle of the plant and push move.
    ///
    /// Units: degrees
    pub outer_push_deg: f64
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for GaitParams {
    fn default() -> Self {
        GaitParams {
            inner_lift_deg: 30.0,
            outer_lift_deg: 20.0,
            inner_push_deg: -20.0,
            outer_push_deg: -15.0
        }
    }
}
