//! Garage door motion controller.
//!
//! This crate implements the door controller core: a small state machine that
//! maps a binary open/close request onto a relay pulse, tracks door position
//! through two limit switch sensors, and uses a single-shot operation timer to
//! infer completion of an operation that cannot be sensed directly.
//!
//! # Architecture
//!
//! A [`DoorController`] owns four cooperating concerns:
//!
//! - [`LimitSensors`]: reads the open and closed limit switches and derives a
//!   confirmed position, if any.
//! - [`RelayActuator`]: pulses the relay output to emulate a button press on
//!   the physical opener, the only way to start or stop door motion.
//! - An operation timer: a single-shot countdown armed whenever motion
//!   begins, whose expiry is the only signal that an in-transit operation has
//!   (presumably) finished.
//! - The state tracker: the authoritative record of current position, target
//!   state, and obstruction flag.
//!
//! # Concurrency
//!
//! All tracked state lives behind a single `tokio::sync::Mutex`, shared by
//! the command path, the query path, and the timer completion task. The relay
//! pulse blocks its caller for the pulse width and deliberately runs outside
//! that lock, so a concurrent timer expiry or status query is never stalled
//! by an in-flight pulse.
//!
//! # Examples
//!
//! ```
//! use portal_controller::DoorController;
//! use portal_core::{DoorConfig, DoorPosition, TargetState};
//! use portal_hardware::mock::{MockInput, MockRelay};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> portal_core::Result<()> {
//!     let (relay, relay_handle) = MockRelay::new("door relay");
//!     let (open_input, _open) = MockInput::new("open limit");
//!     let (closed_input, closed) = MockInput::new("closed limit");
//!     closed.activate();
//!
//!     let controller =
//!         DoorController::new(DoorConfig::default(), relay, open_input, closed_input).await?;
//!     assert_eq!(controller.current_position().await?, DoorPosition::Closed);
//!
//!     closed.deactivate();
//!     controller.request_target(TargetState::Open).await?;
//!     assert_eq!(controller.current_position().await?, DoorPosition::Opening);
//!     assert_eq!(relay_handle.pulse_count(), 1);
//!
//!     Ok(())
//! }
//! ```

pub mod actuator;
pub mod controller;
pub mod policy;
pub mod sensors;

mod timer;

// Re-export commonly used types
pub use actuator::RelayActuator;
pub use controller::DoorController;
pub use policy::CompletionPolicy;
pub use sensors::LimitSensors;
