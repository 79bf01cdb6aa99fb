//! Smooth servo sweep primitive
//!
//! Servos are never snapped straight to a target - they are walked through
//! the intermediate angles one degree at a time with a fixed delay between
//! steps, which both smooths the motion and rate-limits the command stream.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use std::thread;
use std::time::Duration;

// Internal
use crate::servo_ctrl::{ServoDriver, ServoError};

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Sweep a servo from `from_deg` to `to_deg` in unit-degree steps.
///
/// The sequence is signed by direction (`+1` if `to_deg > from_deg`, `-1`
/// otherwise) and is **exclusive of the final value**: the servo is never
/// commanded to assume `to_deg` within this call. Callers that need the
/// terminal angle issued must issue it themselves. In particular, if
/// `from_deg == to_deg` the sequence is empty and no command is issued at
/// all.
///
/// `delay` is slept after every command. It is an explicit per-call
/// parameter so that some moves can run instantly (zero delay) while others
/// run smoothly, without any shared delay configuration being mutated.
pub fn sweep<S: ServoDriver>(
    servo: &mut S,
    from_deg: f64,
    to_deg: f64,
    delay: Duration
) -> Result<(), ServoError> {

    let from = from_deg as i64;
    let to = to_deg as i64;
    let step: i64 = if to > from { 1 } else { -1 };

    let mut angle = from;
    while angle != to {
        servo.set_angle(angle as f64)?;
        thread::sleep(delay);
        angle += step;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::servo_ctrl::mock::{new_log, MockServo};

    #[test]
    fn test_ascending() {
        let log = new_log();
        let mut servo = MockServo::new(0, &log);

        sweep(&mut servo, 0.0, 5.0, Duration::from_secs(0)).unwrap();

        let cmds: Vec<f64> = log.lock().unwrap().iter().map(|c| c.1).collect();
        assert_eq!(cmds, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_descending() {
        let log = new_log();
        let mut servo = MockServo::new(0, &log);

        sweep(&mut servo, 3.0, -2.0, Duration::from_secs(0)).unwrap();

        let cmds: Vec<f64> = log.lock().unwrap().iter().map(|c| c.1).collect();
        assert_eq!(cmds, vec![3.0, 2.0, 1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_equal_endpoints_issues_nothing() {
        let log = new_log();
        let mut servo = MockServo::new(0, &log);

        // The sequence is end-exclusive, so a zero-length sweep never
        // commands the servo - not even to the target itself.
        sweep(&mut servo, 10.0, 10.0, Duration::from_secs(0)).unwrap();

        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_fault_propagated() {
        let log = new_log();
        let mut servo = MockServo::new(0, &log);
        servo.fail = true;

        assert!(matches!(
            sweep(&mut servo, 0.0, 5.0, Duration::from_secs(0)),
            Err(ServoError::I2c)
        ));
        assert!(log.lock().unwrap().is_empty());
    }
}
