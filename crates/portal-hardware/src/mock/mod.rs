//! Mock pin implementations for testing and development.
//!
//! This module provides simulated pins that can be controlled
//! programmatically without requiring physical hardware.

pub mod input;
pub mod relay;

// Re-export commonly used types
pub use input::{MockInput, MockInputHandle};
pub use relay::{MockRelay, MockRelayHandle};
