use crate::{constants::MAX_PIN_ID, error::Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tracked or inferred physical state of the door.
///
/// `Open` and `Closed` are sensor-confirmed limit positions. `Opening` and
/// `Closing` are inferred while an operation is in transit. `Stopped` means
/// an operation ended without the door reaching either limit; it is only
/// reported under the sensor-confirmed completion policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorPosition {
    /// Door is at the open limit (sensor-confirmed or inferred on completion).
    Open,

    /// Door is at the closed limit (sensor-confirmed or inferred on completion).
    Closed,

    /// Door is presumed moving toward the open limit.
    Opening,

    /// Door is presumed moving toward the closed limit.
    Closing,

    /// An operation ended without either limit switch engaging.
    Stopped,
}

impl DoorPosition {
    /// Check whether this position is a limit position (`Open` or `Closed`).
    ///
    /// # Examples
    ///
    /// ```
    /// use portal_core::DoorPosition;
    ///
    /// assert!(DoorPosition::Closed.is_at_limit());
    /// assert!(!DoorPosition::Opening.is_at_limit());
    /// assert!(!DoorPosition::Stopped.is_at_limit());
    /// ```
    #[must_use]
    pub fn is_at_limit(&self) -> bool {
        matches!(self, DoorPosition::Open | DoorPosition::Closed)
    }

    /// Check whether this position represents an operation in transit.
    #[must_use]
    pub fn is_in_transit(&self) -> bool {
        matches!(self, DoorPosition::Opening | DoorPosition::Closing)
    }
}

impl fmt::Display for DoorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DoorPosition::Open => "Open",
            DoorPosition::Closed => "Closed",
            DoorPosition::Opening => "Opening",
            DoorPosition::Closing => "Closing",
            DoorPosition::Stopped => "Stopped",
        };
        write!(f, "{}", s)
    }
}

/// The commanded destination position of the door.
///
/// Independent of [`DoorPosition`]: the target records what was last asked
/// for, not where the door is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetState {
    /// Door commanded to open.
    Open,

    /// Door commanded to close.
    Closed,
}

impl TargetState {
    /// The in-transit position an operation toward this target moves through.
    ///
    /// # Examples
    ///
    /// ```
    /// use portal_core::{DoorPosition, TargetState};
    ///
    /// assert_eq!(TargetState::Open.transit_position(), DoorPosition::Opening);
    /// assert_eq!(TargetState::Closed.transit_position(), DoorPosition::Closing);
    /// ```
    #[must_use]
    pub fn transit_position(&self) -> DoorPosition {
        match self {
            TargetState::Open => DoorPosition::Opening,
            TargetState::Closed => DoorPosition::Closing,
        }
    }

    /// The limit position an operation toward this target ends at.
    ///
    /// # Examples
    ///
    /// ```
    /// use portal_core::{DoorPosition, TargetState};
    ///
    /// assert_eq!(TargetState::Open.final_position(), DoorPosition::Open);
    /// assert_eq!(TargetState::Closed.final_position(), DoorPosition::Closed);
    /// ```
    #[must_use]
    pub fn final_position(&self) -> DoorPosition {
        match self {
            TargetState::Open => DoorPosition::Open,
            TargetState::Closed => DoorPosition::Closed,
        }
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetState::Open => write!(f, "Open"),
            TargetState::Closed => write!(f, "Closed"),
        }
    }
}

/// A position directly evidenced by an active limit switch.
///
/// Unlike [`DoorPosition`], a confirmed position is never inferred from
/// elapsed time: it exists only when a sensor read found one of the limit
/// switches engaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmedPosition {
    /// Open limit switch engaged.
    Open,

    /// Closed limit switch engaged.
    Closed,
}

impl ConfirmedPosition {
    /// The target state consistent with this confirmed position.
    #[must_use]
    pub fn as_target(&self) -> TargetState {
        match self {
            ConfirmedPosition::Open => TargetState::Open,
            ConfirmedPosition::Closed => TargetState::Closed,
        }
    }
}

impl From<ConfirmedPosition> for DoorPosition {
    fn from(confirmed: ConfirmedPosition) -> Self {
        match confirmed {
            ConfirmedPosition::Open => DoorPosition::Open,
            ConfirmedPosition::Closed => DoorPosition::Closed,
        }
    }
}

impl fmt::Display for ConfirmedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmedPosition::Open => write!(f, "Open"),
            ConfirmedPosition::Closed => write!(f, "Closed"),
        }
    }
}

/// GPIO pin identifier (0-63).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinId(u8);

impl PinId {
    /// Create a new pin identifier with validation.
    ///
    /// # Errors
    /// Returns `Error::Config` if the pin number exceeds [`MAX_PIN_ID`].
    pub fn new(pin: u8) -> crate::Result<Self> {
        if pin > MAX_PIN_ID {
            return Err(Error::Config(format!(
                "Pin must be 0-{MAX_PIN_ID}, got {pin}"
            )));
        }
        Ok(PinId(pin))
    }

    /// Get the raw pin number as u8.
    #[must_use]
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

impl std::str::FromStr for PinId {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let pin: u8 = s
            .trim_start_matches("GPIO")
            .parse()
            .map_err(|_| Error::Config(format!("Invalid pin identifier: {s}")))?;
        PinId::new(pin)
    }
}
