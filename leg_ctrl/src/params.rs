//! Combined parameters for the leg control library

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

use crate::gait_ctrl::GaitParams;
use crate::rig::RigParams;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// All parameters of the leg control library, as loaded from a single
/// parameter file (see `params/leg_ctrl.toml`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LegCtrlParams {
    pub rig: RigParams,
    pub gait: GaitParams
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LegCtrlParams {

    /// Load the parameters from the given file.
    ///
    /// The path is relative to the software root's "params" directory.
    pub fn load(param_file_path: &str) -> Result<Self, util::params::LoadError> {
        util::params::load(param_file_path)
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_load_reference_params() {
        // The workspace root doubles as the software root in development
        std::env::set_var(
            "STRIDER_SW_ROOT",
            concat!(env!("CARGO_MANIFEST_DIR"), "/..")
        );

        let params = LegCtrlParams::load("leg_ctrl.toml").unwrap();

        // The shipped file must satisfy the symmetric travel invariant
        assert_eq!(
            params.rig.raise_angle_deg,
            -params.rig.lower_angle_deg
        );
        assert_eq!(params.gait.inner_lift_deg, 30.0);
        assert_eq!(params.rig.leg.settle_delay_s, 0.02);
    }
}
