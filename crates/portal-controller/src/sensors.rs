//! Limit switch sensor reader.
//!
//! Two proximity switches report the door's limit positions: one engages when
//! the door is fully open, one when it is fully closed. Between limits the
//! reader confirms nothing; in-transit positions are inferred elsewhere by
//! the command path and the operation timer.

use portal_core::{ConfirmedPosition, Result};
use portal_hardware::DigitalInput;

/// Reader for the open and closed limit switch inputs.
///
/// Both switches are wired active-low: an engaged switch pulls its input to
/// ground, so `Level::Low` means "at this limit".
pub struct LimitSensors<I> {
    open: I,
    closed: I,
}

impl<I: DigitalInput> LimitSensors<I> {
    /// Create a sensor reader over the two limit switch inputs.
    pub fn new(open: I, closed: I) -> Self {
        Self { open, closed }
    }

    /// Read both limit switches and derive a confirmed position.
    ///
    /// Returns `Some(Closed)` if the closed switch is engaged, otherwise
    /// `Some(Open)` if the open switch is engaged, otherwise `None` (the door
    /// is between limits, in transit or stalled). The closed switch takes
    /// precedence if both read active, which only happens on a wiring fault.
    ///
    /// This read has no side effects and never blocks beyond the hardware
    /// access itself. It does not decide `Opening` vs `Closing`; that
    /// distinction is owned by the command path.
    ///
    /// # Errors
    ///
    /// Returns an error if either hardware read fails.
    pub async fn read_position(&self) -> Result<Option<ConfirmedPosition>> {
        if self.closed.read().await?.is_low() {
            return Ok(Some(ConfirmedPosition::Closed));
        }
        if self.open.read().await?.is_low() {
            return Ok(Some(ConfirmedPosition::Open));
        }
        Ok(None)
    }
}
