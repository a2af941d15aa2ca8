//! Error types for Lostwire

use thiserror::Error;

/// Errors raised while building motion values or validating configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Frame rate outside the supported range
    #[error("Invalid frame rate: {0} (expected 1..={})", crate::config::MAX_FRAME_RATE)]
    InvalidFrameRate(u32),

    /// Color string could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Frame rate text that is not a whole number
    #[error("Invalid frame rate: {0:?} is not a whole number")]
    UnparsableFrameRate(String),

    /// Time values (delays, snapshot instants) must not be negative
    #[error("Negative time: {0}s")]
    NegativeTime(f64),
}

/// Result type alias using MotionError
pub type MotionResult<T> = Result<T, MotionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MotionError::InvalidColor("#zzz".to_string());
        assert_eq!(format!("{}", err), "Invalid color: #zzz");
    }

    #[test]
    fn test_frame_rate_error_mentions_range() {
        let err = MotionError::InvalidFrameRate(0);
        assert_eq!(err.to_string(), "Invalid frame rate: 0 (expected 1..=120)");
    }

    #[test]
    fn test_unparsable_frame_rate_keeps_input() {
        let err = MotionError::UnparsableFrameRate("sixty".to_string());
        assert_eq!(err.to_string(), "Invalid frame rate: \"sixty\" is not a whole number");
    }
}
