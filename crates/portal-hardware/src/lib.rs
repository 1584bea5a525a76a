//! GPIO abstraction layer for the Portal garage door controller.
//!
//! This crate provides trait-based abstractions for the digital pins the door
//! controller drives and reads: the relay output that emulates a button press
//! on the opener, and the two limit switch inputs that confirm the door's
//! position. The traits enable substitution between mock implementations (for
//! development and testing) and real hardware drivers.
//!
//! # Design Philosophy
//!
//! - **Async-first**: All I/O operations are asynchronous using native
//!   `async fn` in traits (Rust 1.90 + Edition 2024 RPITIT).
//! - **Thread-safe**: All traits require `Send` (inputs additionally `Sync`)
//!   for use with the Tokio runtime.
//! - **Error-aware**: All operations return `Result<T>` with detailed error
//!   information.
//!
//! # Pin Traits
//!
//! ## Digital Inputs
//!
//! The [`DigitalInput`] trait represents a level-read input pin. The limit
//! switches are wired active-low with internal pull-ups, so [`Level::Low`]
//! on a sensor input means the switch is engaged:
//!
//! ```no_run
//! use portal_hardware::traits::DigitalInput;
//! use portal_hardware::error::Result;
//!
//! async fn at_limit<I: DigitalInput>(sensor: &I) -> Result<bool> {
//!     Ok(sensor.read().await?.is_low())
//! }
//! ```
//!
//! ## Digital Outputs
//!
//! The [`DigitalOutput`] trait represents a driven output pin, used for the
//! relay:
//!
//! ```no_run
//! use portal_hardware::traits::DigitalOutput;
//! use portal_hardware::types::Level;
//! use portal_hardware::error::Result;
//!
//! async fn press<O: DigitalOutput>(relay: &mut O) -> Result<()> {
//!     relay.write(Level::High).await?;
//!     tokio::time::sleep(std::time::Duration::from_millis(500)).await;
//!     relay.write(Level::Low).await
//! }
//! ```
//!
//! # Mock Implementations
//!
//! The [`mock`] module provides [`MockInput`](mock::MockInput) and
//! [`MockRelay`](mock::MockRelay), each paired with a handle for driving
//! sensor levels and observing relay activity programmatically.
//!
//! [`DigitalInput`]: traits::DigitalInput
//! [`DigitalOutput`]: traits::DigitalOutput
//! [`Level`]: types::Level

pub mod error;
pub mod mock;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{HardwareError, Result};
pub use traits::{DigitalInput, DigitalOutput};
pub use types::Level;
