//! Walk cycle phase schedule

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use std::time::Duration;

// Internal
use super::{GaitParams, TRAIL_PUSH_SCALE};
use crate::rig::LegId;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// One phase of the walk cycle: a diagonal pair is driven to a target
/// (inner, outer) angle pair, then the dwell is slept.
#[derive(Clone, Copy, Debug)]
pub struct GaitPhase {

    /// The pair of legs moved during this phase.
    pub pair: DiagonalPair,

    /// Inner angle target for both legs of the pair.
    ///
    /// Units: degrees
    pub inner_deg: f64,

    /// Outer angle target for both legs of the pair.
    ///
    /// Units: degrees
    pub outer_deg: f64,

    /// Time to dwell after the pair move completes.
    pub dwell: Duration
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The two diagonal leg pairs of the trot gait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagonalPair {
    /// Front-right and back-left.
    RightLead,
    /// Front-left and back-right.
    LeftLead
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl DiagonalPair {
    /// The legs making up this pair.
    pub fn legs(self) -> [LegId; 2] {
        match self {
            DiagonalPair::RightLead => [LegId::FrontRight, LegId::BackLeft],
            DiagonalPair::LeftLead => [LegId::FrontLeft, LegId::BackRight]
        }
    }

    /// The other diagonal pair.
    pub fn opposite(self) -> Self {
        match self {
            DiagonalPair::RightLead => DiagonalPair::LeftLead,
            DiagonalPair::LeftLead => DiagonalPair::RightLead
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Build the six-phase schedule of one full walk cycle.
///
/// Per half-cycle the active pair lifts and swings forward, then plants and
/// pushes, then the trailing pair pushes back at [`TRAIL_PUSH_SCALE`] times
/// the push angles. The second half-cycle mirrors the first with the
/// opposite pair active.
///
/// `step_delay` is the dwell after every pair move; the trailing-pair
/// phases additionally dwell for half a step before the diagonals swap.
pub fn cycle(params: &GaitParams, step_delay: Duration) -> [GaitPhase; 6] {
    let [a, b, c] = half_cycle(DiagonalPair::RightLead, params, step_delay);
    let [d, e, f] = half_cycle(DiagonalPair::LeftLead, params, step_delay);
    [a, b, c, d, e, f]
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Build the three phases of one half-cycle with the given pair active.
fn half_cycle(
    active: DiagonalPair,
    params: &GaitParams,
    step_delay: Duration
) -> [GaitPhase; 3] {
    [
        // Lift and swing the active pair forward
        GaitPhase {
            pair: active,
            inner_deg: params.inner_lift_deg,
            outer_deg: params.outer_lift_deg,
            dwell: step_delay
        },
        // Plant the active pair and push
        GaitPhase {
            pair: active,
            inner_deg: params.inner_push_deg,
            outer_deg: params.outer_push_deg,
            dwell: step_delay
        },
        // The trailing pair pushes back at a reduced angle, then the cycle
        // dwells an extra half step before the diagonals swap
        GaitPhase {
            pair: active.opposite(),
            inner_deg: params.inner_push_deg * TRAIL_PUSH_SCALE,
            outer_deg: params.outer_push_deg * TRAIL_PUSH_SCALE,
            dwell: step_delay + step_delay.mul_f64(0.5)
        }
    ]
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
