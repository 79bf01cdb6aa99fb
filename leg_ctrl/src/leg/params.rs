//! Parameters structure for a single leg

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;
use std::time::Duration;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for a single leg.
#[derive(Clone, Debug, Deserialize)]
pub struct LegParams {

    /// Delay slept between successive servo commands during a sweep.
    ///
    /// Units: seconds
    pub sweep_delay_s: f64,

    /// Settle delay between the end of the inner servo's sweep and the start
    /// of the outer servo's sweep. Bounds the peak current draw by never
    /// letting the two servos of a leg start moving simultaneously.
    ///
    /// Units: seconds
    pub settle_delay_s: f64,

    /// Lowest angle any servo of this leg may be commanded to.
    ///
    /// Units: degrees
    pub min_angle_deg: f64,

    /// Highest angle any servo of this leg may be commanded to.
    ///
    /// Units: degrees
    pub max_angle_deg: f64
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LegParams {
    pub fn sweep_delay(&self) -> Duration {
        Duration::from_secs_f64(self.sweep_delay_s)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs_f64(self.settle_delay_s)
    }
}

impl Default for LegParams {
    fn default() -> Self {
        LegParams {
            sweep_delay_s: 0.005,
            settle_delay_s: 0.02,
            min_angle_deg: -45.0,
            max_angle_deg: 45.0
        }
    }
}
