//! Implementations for the Rig structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;

// Internal
use super::{LegId, RigError, RigParams};
use crate::leg::{Leg, LegError};
use crate::servo_ctrl::ServoDriver;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The pair of servo driver handles for one leg.
pub struct LegServos<S: ServoDriver> {
    pub inner: S,
    pub outer: S
}

/// The eight servo driver handles for the whole rig, one pair per leg.
///
/// Which physical channel each handle talks to is a deployment concern -
/// the embedding application wires this up from its own configuration.
pub struct RigServos<S: ServoDriver> {
    pub front_right: LegServos<S>,
    pub front_left: LegServos<S>,
    pub back_right: LegServos<S>,
    pub back_left: LegServos<S>
}

/// The four-legged rig.
pub struct Rig<S: ServoDriver> {

    front_right: Leg<S>,
    front_left: Leg<S>,
    back_right: Leg<S>,
    back_left: Leg<S>,

    /// Angle used to raise one end of the body.
    ///
    /// Units: degrees
    raise_angle_deg: f64,

    /// Angle used to lower one end of the body.
    ///
    /// Units: degrees
    lower_angle_deg: f64
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<S: ServoDriver> Rig<S> {

    /// Create a new rig, driving every leg to the neutral (0, 0) position.
    pub fn new(servos: RigServos<S>, params: &RigParams) -> Result<Self, RigError> {

        // The composite operations assume the travel budget is symmetric
        if params.raise_angle_deg != -params.lower_angle_deg {
            return Err(RigError::AsymmetricTravel {
                raise_deg: params.raise_angle_deg,
                lower_deg: params.lower_angle_deg
            })
        }

        Ok(Rig {
            front_right: Leg::new(
                servos.front_right.inner,
                servos.front_right.outer,
                params.leg.clone()
            )?,
            front_left: Leg::new(
                servos.front_left.inner,
                servos.front_left.outer,
                params.leg.clone()
            )?,
            back_right: Leg::new(
                servos.back_right.inner,
                servos.back_right.outer,
                params.leg.clone()
            )?,
            back_left: Leg::new(
                servos.back_left.inner,
                servos.back_left.outer,
                params.leg.clone()
            )?,
            raise_angle_deg: params.raise_angle_deg,
            lower_angle_deg: params.lower_angle_deg
        })
    }

    /// Get a reference to the given leg.
    pub fn leg(&self, id: LegId) -> &Leg<S> {
        match id {
            LegId::FrontRight => &self.front_right,
            LegId::FrontLeft => &self.front_left,
            LegId::BackRight => &self.back_right,
            LegId::BackLeft => &self.back_left
        }
    }

    /// Get a mutable reference to the given leg.
    pub fn leg_mut(&mut self, id: LegId) -> &mut Leg<S> {
        match id {
            LegId::FrontRight => &mut self.front_right,
            LegId::FrontLeft => &mut self.front_left,
            LegId::BackRight => &mut self.back_right,
            LegId::BackLeft => &mut self.back_left
        }
    }

    /// Move a pair of legs to the same (inner, outer) angles, one leg after
    /// the other.
    pub fn move_pair(
        &mut self,
        legs: [LegId; 2],
        inner_deg: f64,
        outer_deg: f64
    ) -> Result<(), LegError> {
        for &id in legs.iter() {
            self.leg_mut(id).move_leg(inner_deg, outer_deg)?;
        }
        Ok(())
    }

    /// Reset all legs to the neutral (0, 0) position.
    ///
    /// Legs are reset in the deterministic order front-right, front-left,
    /// back-right, back-left.
    pub fn reset_all(&mut self) -> Result<(), LegError> {
        debug!("Rig: reset all legs");
        for &id in LegId::ALL.iter() {
            self.leg_mut(id).reset_position()?;
        }
        Ok(())
    }

    /// Raise the front of the body.
    ///
    /// The front pair takes the full raise angle while the back pair lowers
    /// by half the lower angle to keep the body stable.
    pub fn raise_front(&mut self) -> Result<(), LegError> {
        debug!("Rig: raise front");
        let raise = self.raise_angle_deg;
        let comp = self.lower_angle_deg / 2.0;
        self.move_pair(LegId::FRONT, raise, raise)?;
        self.move_pair(LegId::BACK, comp, comp)
    }

    /// Lower the front of the body.
    pub fn lower_front(&mut self) -> Result<(), LegError> {
        debug!("Rig: lower front");
        let lower = self.lower_angle_deg;
        let comp = self.raise_angle_deg / 2.0;
        self.move_pair(LegId::FRONT, lower, lower)?;
        self.move_pair(LegId::BACK, comp, comp)
    }

    /// Raise the back of the body.
    pub fn raise_back(&mut self) -> Result<(), LegError> {
        debug!("Rig: raise back");
        let raise = self.raise_angle_deg;
        let comp = self.lower_angle_deg / 2.0;
        self.move_pair(LegId::BACK, raise, raise)?;
        self.move_pair(LegId::FRONT, comp, comp)
    }

    /// Lower the back of the body.
    pub fn lower_back(&mut self) -> Result<(), LegError> {
        debug!("Rig: lower back");
        let lower = self.lower_angle_deg;
        let comp = self.raise_angle_deg / 2.0;
        self.move_pair(LegId::BACK, lower, lower)?;
        self.move_pair(LegId::FRONT, comp, comp)
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
