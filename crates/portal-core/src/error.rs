use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Hardware errors
    #[error("Hardware operation failed: {0}")]
    Hardware(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = Error::Config("travel duration out of range".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: travel duration out of range"
        );
    }

    #[test]
    fn test_hardware_error_display() {
        let error = Error::Hardware("relay write failed".to_string());
        assert_eq!(
            error.to_string(),
            "Hardware operation failed: relay write failed"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gpiochip0");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
    }
}
