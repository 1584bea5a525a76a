//! GPIO pin trait definitions.
//!
//! These traits establish the contract between the door controller core and
//! its pins, enabling substitution between mock and real hardware
//! implementations.
//!
//! All traits use native `async fn` methods (Rust 1.90 + Edition 2024 RPITIT),
//! eliminating the need for the `async_trait` macro.

#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::types::Level;

/// A digital input pin.
///
/// Reads take `&self` so multiple readers (the command path and the timer
/// completion path) can share one input without exclusive access. A read has
/// no side effects and must not block beyond the hardware access itself.
///
/// # Examples
///
/// ```no_run
/// use portal_hardware::traits::DigitalInput;
/// use portal_hardware::error::Result;
///
/// async fn sensor_engaged<I: DigitalInput>(sensor: &I) -> Result<bool> {
///     // Active-low wiring: engaged reads Low
///     Ok(sensor.read().await?.is_low())
/// }
/// ```
pub trait DigitalInput: Send + Sync {
    /// Read the current logic level of the pin.
    ///
    /// # Errors
    ///
    /// Returns an error if the pin driver has lost its backing device or the
    /// read itself fails.
    fn read(&self) -> impl Future<Output = Result<Level>> + Send;
}

/// A digital output pin.
///
/// # Examples
///
/// ```no_run
/// use portal_hardware::traits::DigitalOutput;
/// use portal_hardware::types::Level;
/// use portal_hardware::error::Result;
///
/// async fn release<O: DigitalOutput>(relay: &mut O) -> Result<()> {
///     relay.write(Level::Low).await
/// }
/// ```
pub trait DigitalOutput: Send {
    /// Drive the pin to the given logic level.
    ///
    /// # Errors
    ///
    /// Returns an error if the pin driver has lost its backing device or the
    /// write itself fails.
    async fn write(&mut self, level: Level) -> Result<()>;
}
