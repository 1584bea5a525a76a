//! Mock digital input implementation for testing and development.
//!
//! This module provides a simulated input pin whose level can be driven
//! programmatically, standing in for a limit switch without physical
//! hardware.

use crate::{Result, traits::DigitalInput, types::Level};
use tokio::sync::watch;

/// Mock digital input pin for testing and development.
///
/// Simulates an active-low limit switch input: the pin idles [`Level::High`]
/// (pulled up) and reads [`Level::Low`] while the switch is engaged.
///
/// # Examples
///
/// ```
/// use portal_hardware::mock::MockInput;
/// use portal_hardware::traits::DigitalInput;
/// use portal_hardware::types::Level;
///
/// #[tokio::main]
/// async fn main() -> portal_hardware::Result<()> {
///     let (sensor, handle) = MockInput::new("closed limit");
///
///     // Idle: pulled up, switch not engaged
///     assert_eq!(sensor.read().await?, Level::High);
///
///     // Engage the switch
///     handle.activate();
///     assert_eq!(sensor.read().await?, Level::Low);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockInput {
    /// Channel carrying the simulated pin level.
    level_rx: watch::Receiver<Level>,

    /// Pin name, used in error messages.
    name: String,
}

impl MockInput {
    /// Create a new mock input pin with the given name.
    ///
    /// Returns a tuple of (MockInput, MockInputHandle) where the handle can
    /// be used to drive the simulated level. The pin starts at
    /// [`Level::High`] (pulled up, switch not engaged).
    ///
    /// # Examples
    ///
    /// ```
    /// use portal_hardware::mock::MockInput;
    ///
    /// let (sensor, handle) = MockInput::new("open limit");
    /// ```
    pub fn new(name: impl Into<String>) -> (Self, MockInputHandle) {
        let (level_tx, level_rx) = watch::channel(Level::High);
        let name = name.into();

        let input = Self {
            level_rx,
            name: name.clone(),
        };

        let handle = MockInputHandle { level_tx, name };

        (input, handle)
    }

    /// Get the pin name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl DigitalInput for MockInput {
    async fn read(&self) -> Result<Level> {
        Ok(*self.level_rx.borrow())
    }
}

/// Handle for controlling a mock input pin.
///
/// The handle drives the level the paired [`MockInput`] reads, simulating
/// the limit switch engaging and releasing.
///
/// # Examples
///
/// ```
/// use portal_hardware::mock::MockInput;
/// use portal_hardware::types::Level;
///
/// let (_sensor, handle) = MockInput::new("closed limit");
///
/// handle.activate();
/// assert_eq!(handle.level(), Level::Low);
///
/// handle.deactivate();
/// assert_eq!(handle.level(), Level::High);
/// ```
#[derive(Debug, Clone)]
pub struct MockInputHandle {
    /// Channel sender driving the simulated level.
    level_tx: watch::Sender<Level>,

    /// Pin name.
    name: String,
}

impl MockInputHandle {
    /// Drive the pin to an explicit level.
    pub fn set_level(&self, level: Level) {
        // send_replace never fails; the sender keeps the value even with no
        // live receivers
        self.level_tx.send_replace(level);
    }

    /// Engage the simulated switch (active-low: drives the pin low).
    pub fn activate(&self) {
        self.set_level(Level::Low);
    }

    /// Release the simulated switch (pin returns to the pulled-up high level).
    pub fn deactivate(&self) {
        self.set_level(Level::High);
    }

    /// Get the level currently driven.
    pub fn level(&self) -> Level {
        *self.level_tx.borrow()
    }

    /// Get the pin name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_input_starts_inactive() {
        let (sensor, _handle) = MockInput::new("closed limit");
        assert_eq!(sensor.read().await.unwrap(), Level::High);
    }

    #[tokio::test]
    async fn test_mock_input_follows_handle() {
        let (sensor, handle) = MockInput::new("closed limit");

        handle.activate();
        assert_eq!(sensor.read().await.unwrap(), Level::Low);

        handle.deactivate();
        assert_eq!(sensor.read().await.unwrap(), Level::High);

        handle.set_level(Level::Low);
        assert_eq!(sensor.read().await.unwrap(), Level::Low);
    }

    #[tokio::test]
    async fn test_mock_input_read_has_no_side_effects() {
        let (sensor, handle) = MockInput::new("open limit");

        handle.activate();
        for _ in 0..3 {
            assert_eq!(sensor.read().await.unwrap(), Level::Low);
        }
        assert_eq!(handle.level(), Level::Low);
    }

    #[test]
    fn test_mock_input_handle_clone_shares_pin() {
        let (_sensor, handle) = MockInput::new("closed limit");

        let clone = handle.clone();
        clone.activate();

        // Both handles observe the same simulated pin
        assert_eq!(handle.level(), Level::Low);
        assert_eq!(handle.name(), clone.name());
    }
}
