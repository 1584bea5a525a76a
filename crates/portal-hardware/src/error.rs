//! Error types for hardware operations.
//!
//! This module defines error types specific to GPIO pin operations, covering
//! failure scenarios such as a driver losing its backing device, failed
//! initialization, and invalid pin configuration.

/// Result type alias for hardware operations.
pub type Result<T> = std::result::Result<T, HardwareError>;

/// Errors that can occur during GPIO pin operations.
#[derive(Debug, thiserror::Error)]
pub enum HardwareError {
    /// Pin driver is not connected or has been disconnected.
    #[error("Pin disconnected: {pin}")]
    Disconnected { pin: String },

    /// Pin driver initialization failed.
    #[error("Initialization failed: {message}")]
    InitializationFailed { message: String },

    /// Pin configuration error.
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl HardwareError {
    /// Create a new disconnected error.
    pub fn disconnected(pin: impl Into<String>) -> Self {
        Self::Disconnected { pin: pin.into() }
    }

    /// Create a new initialization failed error.
    pub fn initialization_failed(message: impl Into<String>) -> Self {
        Self::InitializationFailed {
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// Create a generic error with custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<HardwareError> for portal_core::Error {
    fn from(error: HardwareError) -> Self {
        portal_core::Error::Hardware(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_error() {
        let error = HardwareError::disconnected("GPIO5");
        assert!(matches!(error, HardwareError::Disconnected { .. }));
        assert_eq!(error.to_string(), "Pin disconnected: GPIO5");
    }

    #[test]
    fn test_initialization_failed_error() {
        let error = HardwareError::initialization_failed("gpiochip busy");
        assert!(matches!(error, HardwareError::InitializationFailed { .. }));
        assert_eq!(error.to_string(), "Initialization failed: gpiochip busy");
    }

    #[test]
    fn test_configuration_error() {
        let error = HardwareError::configuration("pin not output-capable");
        assert!(matches!(error, HardwareError::ConfigurationError { .. }));
        assert_eq!(
            error.to_string(),
            "Configuration error: pin not output-capable"
        );
    }

    #[test]
    fn test_core_error_conversion() {
        let error: portal_core::Error = HardwareError::disconnected("GPIO18").into();
        assert!(matches!(error, portal_core::Error::Hardware(_)));
        assert_eq!(
            error.to_string(),
            "Hardware operation failed: Pin disconnected: GPIO18"
        );
    }

    #[test]
    fn test_error_display() {
        let errors = vec![
            HardwareError::disconnected("GPIO5"),
            HardwareError::initialization_failed("busy"),
            HardwareError::other("unknown"),
        ];

        for error in errors {
            let _ = format!("{}", error);
            let _ = format!("{:?}", error);
        }
    }
}
