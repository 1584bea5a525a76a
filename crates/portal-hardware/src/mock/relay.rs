//! Mock relay output implementation for testing and development.
//!
//! This module provides a simulated relay pin that records its level and
//! counts actuation pulses, so tests can assert exactly how often the door
//! button was "pressed".

use crate::{Result, traits::DigitalOutput, types::Level};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::watch;

/// Mock relay output pin for testing and development.
///
/// The relay idles [`Level::Low`]; a low-to-high transition counts as the
/// start of one actuation pulse.
///
/// # Examples
///
/// ```
/// use portal_hardware::mock::MockRelay;
/// use portal_hardware::traits::DigitalOutput;
/// use portal_hardware::types::Level;
///
/// #[tokio::main]
/// async fn main() -> portal_hardware::Result<()> {
///     let (mut relay, handle) = MockRelay::new("door relay");
///
///     relay.write(Level::High).await?;
///     relay.write(Level::Low).await?;
///
///     assert_eq!(handle.pulse_count(), 1);
///     assert_eq!(handle.level(), Level::Low);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockRelay {
    /// Channel publishing the driven level.
    level_tx: watch::Sender<Level>,

    /// Count of low-to-high transitions.
    pulses: Arc<AtomicUsize>,

    /// Pin name, used in error messages.
    name: String,
}

impl MockRelay {
    /// Create a new mock relay with the given name.
    ///
    /// Returns a tuple of (MockRelay, MockRelayHandle) where the handle can
    /// be used to observe the driven level and count pulses. The relay
    /// starts at [`Level::Low`] (released).
    ///
    /// # Examples
    ///
    /// ```
    /// use portal_hardware::mock::MockRelay;
    ///
    /// let (relay, handle) = MockRelay::new("door relay");
    /// ```
    pub fn new(name: impl Into<String>) -> (Self, MockRelayHandle) {
        let (level_tx, level_rx) = watch::channel(Level::Low);
        let pulses = Arc::new(AtomicUsize::new(0));
        let name = name.into();

        let relay = Self {
            level_tx,
            pulses: Arc::clone(&pulses),
            name: name.clone(),
        };

        let handle = MockRelayHandle {
            level_rx,
            pulses,
            name,
        };

        (relay, handle)
    }

    /// Get the pin name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl DigitalOutput for MockRelay {
    async fn write(&mut self, level: Level) -> Result<()> {
        let previous = *self.level_tx.borrow();
        if previous == Level::Low && level == Level::High {
            self.pulses.fetch_add(1, Ordering::SeqCst);
        }
        self.level_tx.send_replace(level);
        Ok(())
    }
}

/// Handle for observing a mock relay.
///
/// # Examples
///
/// ```
/// use portal_hardware::mock::MockRelay;
/// use portal_hardware::types::Level;
///
/// let (_relay, handle) = MockRelay::new("door relay");
///
/// assert_eq!(handle.level(), Level::Low);
/// assert_eq!(handle.pulse_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockRelayHandle {
    /// Channel receiver observing the driven level.
    level_rx: watch::Receiver<Level>,

    /// Count of low-to-high transitions.
    pulses: Arc<AtomicUsize>,

    /// Pin name.
    name: String,
}

impl MockRelayHandle {
    /// Get the level the relay is currently driven to.
    pub fn level(&self) -> Level {
        *self.level_rx.borrow()
    }

    /// Get the number of actuation pulses started so far.
    ///
    /// A pulse is counted on each low-to-high transition.
    pub fn pulse_count(&self) -> usize {
        self.pulses.load(Ordering::SeqCst)
    }

    /// Wait until the relay is driven to the given level.
    ///
    /// Useful for observing the high phase of a pulse from a test.
    ///
    /// # Errors
    ///
    /// Returns an error if the relay has been dropped.
    pub async fn wait_for(&mut self, level: Level) -> Result<()> {
        self.level_rx
            .wait_for(|current| *current == level)
            .await
            .map_err(|_| crate::HardwareError::disconnected(self.name.clone()))?;
        Ok(())
    }

    /// Get the pin name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
