//! Operation completion policy.

use std::time::Duration;

/// How the operation timer resolves an expired operation.
///
/// The controller cannot sense "still moving"; when the travel duration
/// elapses it must decide what position to report. The default is the
/// optimistic contract: assume the commanded operation succeeded. A stricter
/// policy can be selected at construction without changing the default
/// behavior for existing callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionPolicy {
    /// Assume the commanded operation always succeeds by the nominal travel
    /// duration: on expiry the position becomes the target's limit position,
    /// with no sensor verification at that instant. A discrepancy only
    /// surfaces on the next position query, which re-reads the sensors.
    Optimistic,

    /// Require a limit switch confirmation before declaring completion. On
    /// expiry the sensors are re-read; if neither switch is engaged, one
    /// grace period is waited and the read repeated. A confirmed position
    /// wins even if it contradicts the target; still unconfirmed after the
    /// grace period, the operation ends at `Stopped`.
    SensorConfirmed {
        /// Extra time allowed for a limit switch to engage after the nominal
        /// travel duration has elapsed.
        grace: Duration,
    },
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        CompletionPolicy::Optimistic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_optimistic() {
        assert_eq!(CompletionPolicy::default(), CompletionPolicy::Optimistic);
    }
}
