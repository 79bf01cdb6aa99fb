//! Implementations for the Leg structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use std::thread;
use std::time::Duration;

// Internal
use super::{LegError, LegParams};
use crate::servo_ctrl::ServoDriver;
use crate::sweep::sweep;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A single Theo Jansen leg driven by an inner and an outer servo.
///
/// The engine never reads servo state back, so the `current_*_deg` fields
/// are the sole source of truth for where the leg is. They always hold the
/// last angle value issued to the corresponding servo.
pub struct Leg<S: ServoDriver> {

    inner: S,
    outer: S,

    params: LegParams,

    /// Last angle issued to the inner servo (post-inversion).
    ///
    /// Units: degrees
    current_inner_deg: f64,

    /// Last angle issued to the outer servo.
    ///
    /// Units: degrees
    current_outer_deg: f64
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<S: ServoDriver> Leg<S> {

    /// Create a new leg and drive it to the neutral (0, 0) position.
    pub fn new(inner: S, outer: S, params: LegParams) -> Result<Self, LegError> {
        let mut leg = Leg {
            inner,
            outer,
            params,
            current_inner_deg: 0.0,
            current_outer_deg: 0.0
        };

        leg.reset_position()?;

        Ok(leg)
    }

    /// Move the leg to the given (inner, outer) angles.
    ///
    /// Sweeps at the leg's configured sweep delay, see [`Leg::move_leg_at`].
    pub fn move_leg(
        &mut self,
        inner_target_deg: f64,
        outer_target_deg: f64
    ) -> Result<(), LegError> {
        let delay = self.params.sweep_delay();
        self.move_leg_at(inner_target_deg, outer_target_deg, delay)
    }

    /// Move the leg to the given (inner, outer) angles, sweeping with the
    /// given delay between servo commands.
    ///
    /// The inner servo is mounted mirrored to the outer one, so the command
    /// actually issued to it is `-inner_target_deg`.
    ///
    /// The inner servo is swept to completion before the outer servo starts,
    /// separated by the settle delay. The two sweeps must never be
    /// parallelised - the stagger exists to bound the peak current draw of
    /// the leg.
    ///
    /// All commanded angles are validated against the safe range before any
    /// command is issued: a move either happens in full or not at all, and
    /// on rejection the recorded position is unchanged.
    pub fn move_leg_at(
        &mut self,
        inner_target_deg: f64,
        outer_target_deg: f64,
        delay: Duration
    ) -> Result<(), LegError> {

        // Inner servo orientation is opposite to the outer one
        let actual_inner_deg = -inner_target_deg;

        self.check_angle(inner_target_deg)?;
        self.check_angle(actual_inner_deg)?;
        self.check_angle(outer_target_deg)?;

        trace!(
            "Leg move: inner {} -> {} deg, outer {} -> {} deg",
            self.current_inner_deg,
            actual_inner_deg,
            self.current_outer_deg,
            outer_target_deg
        );

        // Inner servo first, swept to completion. The sweep itself is
        // end-exclusive so the terminal angle is issued here.
        sweep(&mut self.inner, self.current_inner_deg, actual_inner_deg, delay)?;
        self.inner.set_angle(actual_inner_deg)?;
        self.current_inner_deg = actual_inner_deg;

        // Settle before starting the outer servo
        thread::sleep(self.params.settle_delay());

        sweep(&mut self.outer, self.current_outer_deg, outer_target_deg, delay)?;
        self.outer.set_angle(outer_target_deg)?;
        self.current_outer_deg = outer_target_deg;

        Ok(())
    }

    /// Return the leg to the neutral (0, 0) position.
    ///
    /// Sweeps both servos back to zero from their recorded angles, in the
    /// same inner-then-outer stagger order as [`Leg::move_leg_at`].
    pub fn reset_position(&mut self) -> Result<(), LegError> {
        let delay = self.params.sweep_delay();

        sweep(&mut self.inner, self.current_inner_deg, 0.0, delay)?;
        self.inner.set_angle(0.0)?;
        self.current_inner_deg = 0.0;

        thread::sleep(self.params.settle_delay());

        sweep(&mut self.outer, self.current_outer_deg, 0.0, delay)?;
        self.outer.set_angle(0.0)?;
        self.current_outer_deg = 0.0;

        Ok(())
    }

    /// Last angle issued to the inner servo (post-inversion), in degrees.
    pub fn current_inner_deg(&self) -> f64 {
        self.current_inner_deg
    }

    /// Last angle issued to the outer servo, in degrees.
    pub fn current_outer_deg(&self) -> f64 {
        self.current_outer_deg
    }

    /// Check a commanded angle against the leg's safe range.
    fn check_angle(&self, angle_deg: f64) -> Result<(), LegError> {
        if angle_deg < self.params.min_angle_deg
            || angle_deg > self.params.max_angle_deg
        {
            return Err(LegError::AngleOutOfRange {
                angle_deg,
                min_deg: self.params.min_angle_deg,
                max_deg: self.params.max_angle_deg
            })
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
    use crate::servo_ctrl::mock::{new_log, CommandLog, MockServo};

    /// Leg on the reference front-right channels (inner 5, outer 7) with all
    /// delays zeroed.
    fn test_leg(log: &CommandLog) -> Leg<MockServo> {
        let params = LegParams {
            sweep_delay_s: 0.0,
            settle_delay_s: 0.0,
            ..LegParams::default()
        };

        let leg = Leg::new(
            MockServo::new(5, log),
            MockServo::new(7, log),
            params
        ).unwrap();

        log.lock().unwrap().clear();
        leg
    }

    #[test]
    fn test_move_leg_inverts_inner() {
        let log = new_log();
        let mut leg = test_leg(&log);

        leg.move_leg(20.0, 20.0).unwrap();

        assert_eq!(leg.current_inner_deg(), -20.0);
        assert_eq!(leg.current_outer_deg(), 20.0);
    }

    #[test]
    fn test_move_leg_command_sequences() {
        let log = new_log();
        let mut leg = test_leg(&log);

        leg.move_leg(20.0, 20.0).unwrap();

        let cmds = log.lock().unwrap().clone();
        let inner: Vec<f64> =
            cmds.iter().filter(|c| c.0 == 5).map(|c| c.1).collect();
        let outer: Vec<f64> =
            cmds.iter().filter(|c| c.0 == 7).map(|c| c.1).collect();

        // Inner servo walks a strictly decreasing sequence ending at the
        // inverted target
        let expected_inner: Vec<f64> = (0..21).map(|i| -f64::from(i)).collect();
        assert_eq!(inner, expected_inner);

        // Outer servo walks a strictly increasing sequence ending at the
        // target
        let expected_outer: Vec<f64> = (0..21).map(f64::from).collect();
        assert_eq!(outer, expected_outer);

        // Every inner command precedes every outer command
        let last_inner_idx =
            cmds.iter().rposition(|c| c.0 == 5).unwrap();
        let first_outer_idx =
            cmds.iter().position(|c| c.0 == 7).unwrap();
        assert!(last_inner_idx < first_outer_idx);
    }

    #[test]
    fn test_reset_position() {
        let log = new_log();
        let mut leg = test_leg(&log);

        leg.move_leg(15.0, -10.0).unwrap();
        leg.reset_position().unwrap();

        assert_eq!(leg.current_inner_deg(), 0.0);
        assert_eq!(leg.current_outer_deg(), 0.0);

        // Both servos were left explicitly commanded to zero
        let cmds = log.lock().unwrap().clone();
        assert_eq!(cmds.iter().filter(|c| c.0 == 5).last().unwrap().1, 0.0);
        assert_eq!(cmds.iter().filter(|c| c.0 == 7).last().unwrap().1, 0.0);
    }

    #[test]
    fn test_out_of_range_rejected_before_any_command() {
        let log = new_log();
        let mut leg = test_leg(&log);

        // Inner target out of range
        assert!(matches!(
            leg.move_leg(50.0, 0.0),
            Err(LegError::AngleOutOfRange { .. })
        ));

        // Outer target out of range - the inner servo must not have moved
        // either, partial moves are disallowed
        assert!(matches!(
            leg.move_leg(0.0, -50.0),
            Err(LegError::AngleOutOfRange { .. })
        ));

        assert!(log.lock().unwrap().is_empty());
        assert_eq!(leg.current_inner_deg(), 0.0);
        assert_eq!(leg.current_outer_deg(), 0.0);
    }

    #[test]
    fn test_servo_fault_aborts_move() {
        let log = new_log();
        let params = LegParams {
            sweep_delay_s: 0.0,
            settle_delay_s: 0.0,
            ..LegParams::default()
        };

        let mut leg = Leg::new(
            MockServo::new(5, &log),
            MockServo::new(7, &log),
            params
        ).unwrap();

        // Fail the outer servo only: the inner sweep completes, then the
        // move aborts leaving the recorded outer position stale at zero
        leg.outer.fail = true;

        assert!(matches!(
            leg.move_leg(10.0, 10.0),
            Err(LegError::Servo(_))
        ));
        assert_eq!(leg.current_inner_deg(), -10.0);
        assert_eq!(leg.current_outer_deg(), 0.0);
    }
}
