//! Core constants for the garage door controller.
//!
//! This module centralizes the hardware-determined and default timing values
//! used throughout the Portal door controller. The relay pulse width and the
//! default pin assignments come from the reference hardware (an ESP32 board
//! driving a single-button garage door opener through a relay); the travel
//! bounds guard against obviously broken configuration.

use std::time::Duration;

// ============================================================================
// Relay Actuation
// ============================================================================

/// Relay pulse width in milliseconds.
///
/// How long the relay output is held high to register as a button press on
/// the door opener. This is a property of the opener hardware, not a user
/// setting, and it is deliberately not configurable per call.
///
/// # Value: 500ms
pub const RELAY_PULSE_MS: u64 = 500;

/// Relay pulse width as a [`Duration`].
///
/// # Examples
///
/// ```
/// use portal_core::constants::RELAY_PULSE;
///
/// assert_eq!(RELAY_PULSE.as_millis(), 500);
/// ```
pub const RELAY_PULSE: Duration = Duration::from_millis(RELAY_PULSE_MS);

// ============================================================================
// Travel Duration
// ============================================================================

/// Default nominal full-travel duration in milliseconds.
///
/// The time a commanded operation is assumed to take from one limit to the
/// other. The operation timer uses this to infer completion, since no sensor
/// reports "still moving".
///
/// # Value: 15000ms (15 seconds)
pub const DEFAULT_TRAVEL_MS: u64 = 15_000;

/// Minimum allowed travel duration (milliseconds).
///
/// Values below this cannot correspond to a real door and would make the
/// operation timer fire while the relay pulse is barely over.
///
/// # Value: 1000ms
pub const MIN_TRAVEL_MS: u64 = 1_000;

/// Maximum allowed travel duration (milliseconds).
///
/// Values above this leave the controller reporting an in-transit position
/// long after any physical door has finished moving.
///
/// # Value: 120000ms (2 minutes)
pub const MAX_TRAVEL_MS: u64 = 120_000;

// ============================================================================
// Pin Identification
// ============================================================================

/// Maximum valid GPIO pin identifier.
///
/// Covers the GPIO banks of the SoCs this controller targets. Pin numbers
/// above this value are rejected at configuration time.
///
/// # Value: 63
pub const MAX_PIN_ID: u8 = 63;

/// Default relay control pin.
///
/// # Value: GPIO 5
pub const DEFAULT_RELAY_PIN: u8 = 5;

/// Default open limit switch pin.
///
/// # Value: GPIO 18
pub const DEFAULT_OPEN_SENSOR_PIN: u8 = 18;

/// Default closed limit switch pin.
///
/// # Value: GPIO 19
pub const DEFAULT_CLOSED_SENSOR_PIN: u8 = 19;
