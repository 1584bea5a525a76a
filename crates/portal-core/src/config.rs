//! Controller configuration.
//!
//! A [`DoorConfig`] is immutable after construction and carries the only
//! externally configured values the controller consumes: the three hardware
//! pin identifiers and the nominal full-travel duration.

use crate::{
    Result,
    constants::{
        DEFAULT_CLOSED_SENSOR_PIN, DEFAULT_OPEN_SENSOR_PIN, DEFAULT_RELAY_PIN, DEFAULT_TRAVEL_MS,
        MAX_TRAVEL_MS, MIN_TRAVEL_MS,
    },
    error::Error,
    types::PinId,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Immutable configuration for a door controller instance.
///
/// # Invariants
///
/// - The relay, open-sensor, and closed-sensor pins are pairwise distinct.
/// - The travel duration lies within `[MIN_TRAVEL_MS, MAX_TRAVEL_MS]`.
///
/// Both are enforced at construction; a `DoorConfig` that exists is valid.
///
/// # Examples
///
/// ```
/// use portal_core::DoorConfig;
/// use std::time::Duration;
///
/// let config = DoorConfig::new(5, 18, 19, Duration::from_secs(15)).unwrap();
/// assert_eq!(config.travel_duration().as_secs(), 15);
///
/// // Pins must be distinct
/// assert!(DoorConfig::new(5, 5, 19, Duration::from_secs(15)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorConfig {
    relay_pin: PinId,
    open_sensor_pin: PinId,
    closed_sensor_pin: PinId,
    travel_duration: Duration,
}

impl DoorConfig {
    /// Create a new configuration with validation.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if any pin number is out of range, if the
    /// three pins are not pairwise distinct, or if the travel duration is
    /// outside the allowed bounds.
    pub fn new(
        relay_pin: u8,
        open_sensor_pin: u8,
        closed_sensor_pin: u8,
        travel_duration: Duration,
    ) -> Result<Self> {
        let relay_pin = PinId::new(relay_pin)?;
        let open_sensor_pin = PinId::new(open_sensor_pin)?;
        let closed_sensor_pin = PinId::new(closed_sensor_pin)?;

        if relay_pin == open_sensor_pin
            || relay_pin == closed_sensor_pin
            || open_sensor_pin == closed_sensor_pin
        {
            return Err(Error::Config(format!(
                "Relay, open sensor, and closed sensor pins must be distinct, \
                 got {relay_pin}, {open_sensor_pin}, {closed_sensor_pin}"
            )));
        }

        let travel_ms = u64::try_from(travel_duration.as_millis())
            .map_err(|_| Error::Config("Travel duration overflows u64 ms".to_string()))?;
        if !(MIN_TRAVEL_MS..=MAX_TRAVEL_MS).contains(&travel_ms) {
            return Err(Error::Config(format!(
                "Travel duration must be {MIN_TRAVEL_MS}-{MAX_TRAVEL_MS}ms, got {travel_ms}ms"
            )));
        }

        Ok(Self {
            relay_pin,
            open_sensor_pin,
            closed_sensor_pin,
            travel_duration,
        })
    }

    /// The relay control output pin.
    #[must_use]
    pub fn relay_pin(&self) -> PinId {
        self.relay_pin
    }

    /// The open limit switch input pin.
    #[must_use]
    pub fn open_sensor_pin(&self) -> PinId {
        self.open_sensor_pin
    }

    /// The closed limit switch input pin.
    #[must_use]
    pub fn closed_sensor_pin(&self) -> PinId {
        self.closed_sensor_pin
    }

    /// The nominal full-travel duration of the door.
    #[must_use]
    pub fn travel_duration(&self) -> Duration {
        self.travel_duration
    }
}

impl Default for DoorConfig {
    /// The reference hardware layout: relay on GPIO5, open limit on GPIO18,
    /// closed limit on GPIO19, 15 second travel.
    fn default() -> Self {
        Self::new(
            DEFAULT_RELAY_PIN,
            DEFAULT_OPEN_SENSOR_PIN,
            DEFAULT_CLOSED_SENSOR_PIN,
            Duration::from_millis(DEFAULT_TRAVEL_MS),
        )
        .expect("default configuration is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_config_valid() {
        let config = DoorConfig::new(5, 18, 19, Duration::from_secs(15)).unwrap();
        assert_eq!(config.relay_pin().as_u8(), 5);
        assert_eq!(config.open_sensor_pin().as_u8(), 18);
        assert_eq!(config.closed_sensor_pin().as_u8(), 19);
        assert_eq!(config.travel_duration(), Duration::from_secs(15));
    }

    #[rstest]
    #[case(5, 5, 19)]
    #[case(5, 18, 5)]
    #[case(5, 18, 18)]
    #[case(7, 7, 7)]
    fn test_config_rejects_duplicate_pins(#[case] relay: u8, #[case] open: u8, #[case] closed: u8) {
        let result = DoorConfig::new(relay, open, closed, Duration::from_secs(15));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[rstest]
    #[case(Duration::from_millis(999))]
    #[case(Duration::from_millis(0))]
    #[case(Duration::from_millis(120_001))]
    fn test_config_rejects_travel_out_of_bounds(#[case] travel: Duration) {
        let result = DoorConfig::new(5, 18, 19, travel);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[rstest]
    #[case(Duration::from_millis(1_000))]
    #[case(Duration::from_millis(120_000))]
    fn test_config_travel_bounds_inclusive(#[case] travel: Duration) {
        assert!(DoorConfig::new(5, 18, 19, travel).is_ok());
    }

    #[test]
    fn test_config_rejects_pin_out_of_range() {
        let result = DoorConfig::new(64, 18, 19, Duration::from_secs(15));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_config_default_matches_reference_hardware() {
        let config = DoorConfig::default();
        assert_eq!(config.relay_pin().as_u8(), 5);
        assert_eq!(config.open_sensor_pin().as_u8(), 18);
        assert_eq!(config.closed_sensor_pin().as_u8(), 19);
        assert_eq!(config.travel_duration(), Duration::from_secs(15));
    }
}
