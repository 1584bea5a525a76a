//! Common types shared across pin implementations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logic level of a digital pin.
///
/// The limit switch inputs are wired active-low (pulled up, switch shorts to
/// ground), so an engaged switch reads [`Level::Low`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Logic low (0V).
    Low,

    /// Logic high (VCC).
    High,
}

impl Level {
    /// Check if the level is low.
    ///
    /// # Examples
    ///
    /// ```
    /// use portal_hardware::types::Level;
    ///
    /// assert!(Level::Low.is_low());
    /// assert!(!Level::High.is_low());
    /// ```
    #[must_use]
    pub fn is_low(&self) -> bool {
        matches!(self, Level::Low)
    }

    /// Check if the level is high.
    #[must_use]
    pub fn is_high(&self) -> bool {
        matches!(self, Level::High)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::High => write!(f, "High"),
        }
    }
}
