//! Implementations for the GaitEngine structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info};
use std::thread;
use std::time::Duration;

// Internal
use super::{
    phases, CancelToken, GaitError, GaitParams, GaitPhase,
    NEUTRAL_LEAN_INNER_DEG, NEUTRAL_LEAN_OUTER_DEG
};
use crate::rig::{LegId, Rig};
use crate::servo_ctrl::ServoDriver;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The walking state machine.
///
/// Borrows the rig for the duration of the walk so no other behaviour can
/// interleave with the gait - the rig's eight servos are a single shared
/// physical resource (total current draw) and every move must stay
/// serialised.
pub struct GaitEngine<'a, S: ServoDriver> {
    rig: &'a mut Rig<S>,
    params: GaitParams
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<'a, S: ServoDriver> GaitEngine<'a, S> {

    pub fn new(rig: &'a mut Rig<S>, params: GaitParams) -> Self {
        GaitEngine { rig, params }
    }

    /// Walk continuously at the given speed until cancelled.
    ///
    /// `speed` scales the cycle timing: the base delay is `1 / speed`
    /// seconds and the dwell after each pair move is a quarter of that. It
    /// must be a strictly positive number - anything else is rejected
    /// before any servo is commanded.
    ///
    /// This is a long-lived blocking call. The cancel token is checked once
    /// per phase boundary, never mid-sweep; on cancellation the rig is
    /// driven to the neutral-lean stopping pose and `Ok(())` is returned.
    pub fn walk(
        &mut self,
        speed: f64,
        cancel: &CancelToken
    ) -> Result<(), GaitError> {

        if !(speed > 0.0) {
            return Err(GaitError::InvalidSpeed(speed))
        }

        let base_delay = Duration::from_secs_f64(1.0 / speed);
        let step_delay = base_delay.mul_f64(0.25);
        let cycle = phases::cycle(&self.params, step_delay);

        info!(
            "Walking at speed {} (step delay {:?}) until cancelled",
            speed,
            step_delay
        );

        'walk: loop {
            for phase in cycle.iter() {
                if cancel.is_cancelled() {
                    break 'walk
                }
                self.apply_phase(phase)?;
            }
        }

        info!("Walk cancelled, assuming the neutral lean pose");
        self.neutral_lean()?;

        Ok(())
    }

    /// Execute a single phase: move the pair, then dwell.
    fn apply_phase(&mut self, phase: &GaitPhase) -> Result<(), GaitError> {
        debug!(
            "Gait phase: {:?} -> ({}, {}) deg",
            phase.pair,
            phase.inner_deg,
            phase.outer_deg
        );

        self.rig.move_pair(
            phase.pair.legs(),
            phase.inner_deg,
            phase.outer_deg
        )?;

        thread::sleep(phase.dwell);

        Ok(())
    }

    /// Drive every leg to the forward-leaning stable stance used as the
    /// walk's stopping point. Deliberately not the (0, 0) reset pose.
    fn neutral_lean(&mut self) -> Result<(), GaitError> {
        for &id in LegId::ALL.iter() {
            self.rig
                .leg_mut(id)
                .move_leg(NEUTRAL_LEAN_INNER_DEG, NEUTRAL_LEAN_OUTER_DEG)?;
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::servo_ctrl::mock::{mock_rig, new_log};

    #[test]
    fn test_invalid_speed_rejected() {
        let log = new_log();
        let mut rig = mock_rig(&log);
        let mut engine = GaitEngine::new(&mut rig, GaitParams::default());
        let cancel = CancelToken::new();

        for &speed in [0.0, -5.0, f64::NAN].iter() {
            assert!(matches!(
                engine.walk(speed, &cancel),
                Err(GaitError::InvalidSpeed(_))
            ));
        }

        // Rejected before any servo was commanded
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_precancelled_walk_reaches_neutral_lean() {
        let log = new_log();
        let mut rig = mock_rig(&log);

        let cancel = CancelToken::new();
        cancel.cancel();

        {
            let mut engine = GaitEngine::new(&mut rig, GaitParams::default());
            engine.walk(10.0, &cancel).unwrap();
        }

        // No phase ran, but the rig still exits through the neutral lean
        for &id in LegId::ALL.iter() {
            let leg = rig.leg(id);
            assert_eq!(leg.current_inner_deg(), 10.0);
            assert_eq!(leg.current_outer_deg(), 10.0);
        }
    }

    #[test]
    fn test_walk_cancels_into_neutral_lean() {
        let log = new_log();
        let cancel = CancelToken::new();

        let walk_cancel = cancel.clone();
        let walk_log = log.clone();
        let handle = std::thread::spawn(move || {
            let mut rig = mock_rig(&walk_log);
            let mut engine =
                GaitEngine::new(&mut rig, GaitParams::default());

            let result = engine.walk(50.0, &walk_cancel);

            let poses: Vec<(f64, f64)> = LegId::ALL
                .iter()
                .map(|&id| {
                    let leg = rig.leg(id);
                    (leg.current_inner_deg(), leg.current_outer_deg())
                })
                .collect();

            (result, poses)
        });

        // Let a few cycles run, then cancel
        std::thread::sleep(Duration::from_millis(200));
        cancel.cancel();
        let (result, poses) = handle.join().unwrap();

        assert!(result.is_ok());
        for &pose in poses.iter() {
            assert_eq!(pose, (10.0, 10.0));
        }

        // The trailing pair was commanded at 0.7x the push angles: the
        // front-left inner servo (channel 11) saw the inverted trailing
        // inner push of +14 deg
        let cmds = log.lock().unwrap().clone();
        assert!(cmds.contains(&(11, 14.0)));
    }
}
