//! Frame clock configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{MotionError, MotionResult};

/// Highest frame rate the clock accepts.
pub const MAX_FRAME_RATE: u32 = 120;

/// Frame rate used when none is configured.
pub const DEFAULT_FRAME_RATE: FrameRate = FrameRate(30);

/// Validated frames-per-second for the motion clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRate(u32);

impl FrameRate {
    /// Create a frame rate, rejecting zero and anything above [`MAX_FRAME_RATE`]
    pub fn new(fps: u32) -> MotionResult<Self> {
        if fps == 0 || fps > MAX_FRAME_RATE {
            return Err(MotionError::InvalidFrameRate(fps));
        }
        Ok(Self(fps))
    }

    pub fn fps(&self) -> u32 {
        self.0
    }

    /// Time between two clock ticks
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.0))
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        DEFAULT_FRAME_RATE
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fps", self.0)
    }
}

impl FromStr for FrameRate {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fps = s
            .trim()
            .parse::<u32>()
            .map_err(|_| MotionError::UnparsableFrameRate(s.to_string()))?;
        Self::new(fps)
    }
}

/// Validate a point in time (seconds) used for frozen snapshots
pub fn validate_instant(seconds: f64) -> MotionResult<f64> {
    if seconds.is_nan() || seconds < 0.0 {
        return Err(MotionError::NegativeTime(seconds));
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_rates() {
        assert_eq!(FrameRate::new(0), Err(MotionError::InvalidFrameRate(0)));
        assert_eq!(FrameRate::new(121), Err(MotionError::InvalidFrameRate(121)));
        assert!(FrameRate::new(1).is_ok());
        assert!(FrameRate::new(MAX_FRAME_RATE).is_ok());
    }

    #[test]
    fn frame_interval_matches_rate() {
        let rate = FrameRate::new(50).unwrap();
        assert_eq!(rate.frame_interval(), Duration::from_millis(20));
        assert_eq!(FrameRate::default().fps(), 30);
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("60".parse::<FrameRate>().unwrap().fps(), 60);
        assert_eq!(" 24 ".parse::<FrameRate>().unwrap().fps(), 24);
        assert_eq!(
            "sixty".parse::<FrameRate>(),
            Err(MotionError::UnparsableFrameRate("sixty".to_string()))
        );
        assert_eq!(
            "-5".parse::<FrameRate>(),
            Err(MotionError::UnparsableFrameRate("-5".to_string()))
        );
        assert_eq!("0".parse::<FrameRate>(), Err(MotionError::InvalidFrameRate(0)));
    }

    #[test]
    fn instants_must_be_non_negative() {
        assert_eq!(validate_instant(2.5), Ok(2.5));
        assert_eq!(validate_instant(0.0), Ok(0.0));
        assert!(validate_instant(-0.1).is_err());
        assert!(validate_instant(f64::NAN).is_err());
    }
}
