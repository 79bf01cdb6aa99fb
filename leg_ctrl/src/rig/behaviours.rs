//! Named behaviour library
//!
//! Each behaviour is a fixed, literal choreography of rig operations and
//! holds. The timing and angle literals are empirical - they were tuned on
//! the real robot and there is no physical model deriving them, so they must
//! be reproduced exactly. Behaviours hold no state between invocations and
//! can only be interrupted between rig calls, never inside one.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;
use std::thread;
use std::time::Duration;

// Internal
use super::{LegId, Rig};
use crate::leg::LegError;
use crate::servo_ctrl::ServoDriver;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<S: ServoDriver> Rig<S> {

    /// Bounce the body front-to-back twice.
    pub fn happy(&mut self) -> Result<(), LegError> {
        debug!("Behaviour: happy");

        for _ in 0..2 {
            self.raise_front()?;
            hold_ms(200);
            self.reset_all()?;
            hold_ms(100);
            self.raise_back()?;
            hold_ms(200);
            self.reset_all()?;
            hold_ms(100);
        }

        self.reset_all()
    }

    /// Droop the front, then the back, slowly.
    pub fn sad(&mut self) -> Result<(), LegError> {
        debug!("Behaviour: sad");

        self.move_pair(LegId::FRONT, -30.0, -30.0)?;
        hold_ms(1000);
        self.move_pair(LegId::BACK, -10.0, -10.0)?;
        hold_ms(2000);

        self.reset_all()
    }

    /// Bounce the whole body up and down three times.
    pub fn excited(&mut self) -> Result<(), LegError> {
        debug!("Behaviour: excited");

        for _ in 0..3 {
            self.move_pair(LegId::FRONT, 30.0, 30.0)?;
            self.move_pair(LegId::BACK, 30.0, 30.0)?;
            hold_ms(200);
            self.move_pair(LegId::FRONT, -10.0, -10.0)?;
            self.move_pair(LegId::BACK, -10.0, -10.0)?;
            hold_ms(200);
        }

        self.reset_all()
    }

    /// Sit on the haunches, front legs up. Ends holding the sit pose.
    pub fn sit(&mut self) -> Result<(), LegError> {
        debug!("Behaviour: sit");

        self.move_pair(LegId::BACK, -40.0, -40.0)?;
        hold_ms(500);
        self.move_pair(LegId::FRONT, 10.0, 10.0)?;
        hold_ms(2000);

        Ok(())
    }

    /// Stand squarely on all four legs.
    pub fn stand(&mut self) -> Result<(), LegError> {
        debug!("Behaviour: stand");

        self.reset_all()
    }

    /// Lie down flat. Ends holding the lying pose.
    pub fn lie_down(&mut self) -> Result<(), LegError> {
        debug!("Behaviour: lie down");

        self.move_pair(LegId::BACK, -40.0, -40.0)?;
        hold_ms(500);
        self.move_pair(LegId::FRONT, -30.0, -30.0)?;
        hold_ms(2000);

        Ok(())
    }

    /// Sit back and lift the front legs to beg, then stand back up.
    pub fn beg(&mut self) -> Result<(), LegError> {
        debug!("Behaviour: beg");

        self.beg_pose()?;
        self.reset_all()
    }

    /// Wag the body by rocking the back legs in antiphase.
    pub fn wag(&mut self) -> Result<(), LegError> {
        debug!("Behaviour: wag");

        for _ in 0..4 {
            self.leg_mut(LegId::BackRight).move_leg(15.0, 15.0)?;
            self.leg_mut(LegId::BackLeft).move_leg(-15.0, -15.0)?;
            hold_ms(200);
            self.leg_mut(LegId::BackRight).move_leg(-15.0, -15.0)?;
            self.leg_mut(LegId::BackLeft).move_leg(15.0, 15.0)?;
            hold_ms(200);
        }

        self.reset_all()
    }

    /// Stretch the front and back legs in opposite directions.
    pub fn stretch(&mut self) -> Result<(), LegError> {
        debug!("Behaviour: stretch");

        self.move_pair(LegId::FRONT, -30.0, 20.0)?;
        hold_ms(1000);
        self.move_pair(LegId::BACK, 20.0, -30.0)?;
        hold_ms(1000);

        self.reset_all()
    }

    /// Full greeting: wag, get excited, then beg. Ends holding the beg pose.
    pub fn greet(&mut self) -> Result<(), LegError> {
        debug!("Behaviour: greet");

        self.wag()?;
        hold_ms(500);
        self.excited()?;
        hold_ms(500);
        self.beg_pose()
    }

    /// Assume the beg pose and hold it, without standing back up.
    fn beg_pose(&mut self) -> Result<(), LegError> {
        self.move_pair(LegId::FRONT, 45.0, 45.0)?;
        self.move_pair(LegId::BACK, -20.0, -20.0)?;
        hold_ms(2000);

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Hold the current pose for the given number of milliseconds.
fn hold_ms(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
