//! Parameters structure for the rig

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

use crate::leg::LegParams;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the rig.
#[derive(Clone, Debug, Deserialize)]
pub struct RigParams {

    /// Angle used to raise one end of the body.
    ///
    /// Must be the negative of `lower_angle_deg` (symmetric travel budget).
    ///
    /// Units: degrees
    pub raise_angle_deg: f64,

    /// Angle used to lower one end of the body.
    ///
    /// Units: degrees
    pub lower_angle_deg: f64,

    /// Parameters applied to every leg.
    pub leg: LegParams
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for RigParams {
    fn default() -> Self {
        RigParams {
            raise_angle_deg: 20.0,
            lower_angle_deg: -20.0,
            leg: LegParams::default()
        }
    }
}
