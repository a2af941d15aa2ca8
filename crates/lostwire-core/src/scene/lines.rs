//! Horizontal scan lines drifting across the background.

use serde::Serialize;

use crate::motion::{Easing, Keyframes, Track, Transition};

pub const SCAN_LINE_COUNT: usize = 8;
/// Loop period shared by every line, in seconds
pub const SCAN_LINE_PERIOD: f64 = 8.0;
/// Start offset added per line index, in seconds
pub const SCAN_LINE_STAGGER: f64 = 0.5;

/// A full-width hairline at a fixed height
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScanLine {
    pub index: usize,
    /// Vertical position, percent of the container
    pub top: f64,
    /// Staggered start offset, in seconds
    pub delay: f64,
}

impl ScanLine {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            top: 10.0 + index as f64 * 10.0,
            delay: index as f64 * SCAN_LINE_STAGGER,
        }
    }

    pub fn transition(&self) -> Transition {
        Transition::looping(SCAN_LINE_PERIOD)
            .delay(self.delay)
            .ease(Easing::EaseInOut)
    }

    pub fn scale_x_track(&self) -> Track<f64> {
        Track::new(Keyframes::of([1.0, 1.05, 0.95, 1.0]), self.transition())
    }

    pub fn opacity_track(&self) -> Track<f64> {
        Track::new(Keyframes::of([0.2, 0.3, 0.2]), self.transition())
    }

    /// Horizontal translation in pixels
    pub fn offset_x_track(&self) -> Track<f64> {
        Track::new(Keyframes::of([0.0, 10.0, -10.0, 0.0]), self.transition())
    }

    pub fn motion(&self) -> SwayMotion {
        SwayMotion {
            opacity: self.opacity_track(),
            offset_x: self.offset_x_track(),
            scale_x: self.scale_x_track(),
        }
    }
}

/// Opacity plus a horizontal shift and stretch.
///
/// Shared by scan lines and both kinds of glitch flash.
#[derive(Debug, Clone, PartialEq)]
pub struct SwayMotion {
    pub opacity: Track<f64>,
    /// Horizontal translation in pixels
    pub offset_x: Track<f64>,
    pub scale_x: Track<f64>,
}

/// The fixed set of scan lines, evenly spaced down the screen
pub fn scan_lines() -> Vec<ScanLine> {
    (0..SCAN_LINE_COUNT).map(ScanLine::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_lines_with_distinct_staggers() {
        let lines = scan_lines();
        assert_eq!(lines.len(), SCAN_LINE_COUNT);

        let delays: Vec<f64> = lines.iter().map(|l| l.delay).collect();
        assert_eq!(delays, vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5]);
    }

    #[test]
    fn lines_are_evenly_spaced() {
        let tops: Vec<f64> = scan_lines().iter().map(|l| l.top).collect();
        assert_eq!(tops, vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]);
    }

    #[test]
    fn tracks_start_at_rest() {
        let line = ScanLine::new(3);
        assert_eq!(line.scale_x_track().value_at(0.0), 1.0);
        assert_eq!(line.opacity_track().value_at(1.0), 0.2);
        assert_eq!(line.offset_x_track().value_at(1.5), 0.0);
        assert_eq!(line.transition().duration, SCAN_LINE_PERIOD);
    }
}
