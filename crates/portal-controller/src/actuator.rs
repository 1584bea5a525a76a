//! Relay actuator.
//!
//! The physical opener is driven through a relay wired in parallel with its
//! wall button: a timed high pulse on the relay output registers as one
//! button press, which is the only way to start or stop door motion.

use portal_core::{Result, constants::RELAY_PULSE};
use portal_hardware::{DigitalOutput, Level};
use std::time::Duration;
use tracing::debug;

/// Actuator that pulses the relay output to emulate a button press.
pub struct RelayActuator<R> {
    relay: R,
    pulse_width: Duration,
}

impl<R: DigitalOutput> RelayActuator<R> {
    /// Create an actuator over the relay output pin.
    ///
    /// The pulse width is the hardware-determined button press duration
    /// ([`RELAY_PULSE`]); it is not configurable per call.
    pub fn new(relay: R) -> Self {
        Self {
            relay,
            pulse_width: RELAY_PULSE,
        }
    }

    /// Pulse the relay: drive high, hold for the pulse width, drive low.
    ///
    /// This call blocks the calling task for the full pulse width. It must
    /// not be invoked while holding a lock the timer completion path needs.
    ///
    /// # Errors
    ///
    /// Returns an error if either relay write fails. A failure after the
    /// high write leaves the relay driven; the caller cannot distinguish
    /// this from a missed press and the next position query is what would
    /// surface the door's actual state.
    pub async fn pulse(&mut self) -> Result<()> {
        self.relay.write(Level::High).await?;
        tokio::time::sleep(self.pulse_width).await;
        self.relay.write(Level::Low).await?;
        debug!("Relay pulsed");
        Ok(())
    }
}
