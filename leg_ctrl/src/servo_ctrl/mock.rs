//! Mock servo driver used by the unit tests

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use std::sync::{Arc, Mutex};

// Internal
use super::{ServoDriver, ServoError};
use crate::leg::LegParams;
use crate::rig::{LegServos, Rig, RigParams, RigServos};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Shared record of every `(channel, angle_deg)` command issued, in order.
///
/// `Arc<Mutex<_>>` rather than `Rc<RefCell<_>>` so that walk tests can cancel
/// from a second thread while the rig is moving.
pub(crate) type CommandLog = Arc<Mutex<Vec<(u8, f64)>>>;

/// A servo driver that records every command it receives.
pub(crate) struct MockServo {
    channel: u8,
    log: CommandLog,

    /// When set, every command fails with an I2C error.
    pub fail: bool
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl MockServo {
    pub fn new(channel: u8, log: &CommandLog) -> Self {
        MockServo {
            channel,
            log: log.clone(),
            fail: false
        }
    }
}

impl ServoDriver for MockServo {
    fn set_angle(&mut self, angle_deg: f64) -> Result<(), ServoError> {
        if self.fail {
            return Err(ServoError::I2c)
        }

        self.log.lock().unwrap().push((self.channel, angle_deg));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

pub(crate) fn new_log() -> CommandLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Rig parameters with all delays zeroed so tests run instantly.
pub(crate) fn test_params() -> RigParams {
    RigParams {
        raise_angle_deg: 20.0,
        lower_angle_deg: -20.0,
        leg: LegParams {
            sweep_delay_s: 0.0,
            settle_delay_s: 0.0,
            min_angle_deg: -45.0,
            max_angle_deg: 45.0
        }
    }
}

/// Build a rig of mock servos on the reference channel assignment.
///
/// The construction-time reset commands are cleared from the log so tests
/// only see the commands they themselves caused.
pub(crate) fn mock_rig(log: &CommandLog) -> Rig<MockServo> {
    let servos = RigServos {
        front_right: LegServos {
            inner: MockServo::new(5, log),
            outer: MockServo::new(7, log)
        },
        front_left: LegServos {
            inner: MockServo::new(11, log),
            outer: MockServo::new(9, log)
        },
        back_right: LegServos {
            inner: MockServo::new(8, log),
            outer: MockServo::new(10, log)
        },
        back_left: LegServos {
            inner: MockServo::new(6, log),
            outer: MockServo::new(4, log)
        }
    };

    let rig = Rig::new(servos, &test_params()).unwrap();
    log.lock().unwrap().clear();
    rig
}
