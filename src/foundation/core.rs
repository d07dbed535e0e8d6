use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{BezPath, Point, Vec2};

/// One captured pointer position.
///
/// `time` is monotonic in whatever unit the capture layer uses (milliseconds in
/// practice). Samples are plain values and never mutated after capture.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sample {
    /// Capture timestamp.
    pub time: f64,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Sample {
    /// Build a sample, rejecting non-finite components.
    pub fn new(time: f64, x: f64, y: f64) -> MotionResult<Self> {
        let s = Self { time, x, y };
        s.validate()?;
        Ok(s)
    }

    /// Check that every component is finite.
    pub fn validate(&self) -> MotionResult<()> {
        if !self.time.is_finite() {
            return Err(MotionError::validation("sample time must be finite"));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(MotionError::validation("sample position must be finite"));
        }
        Ok(())
    }

    /// Position as a kurbo point.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Euclidean distance between the two positions, ignoring time.
    pub fn distance_to(&self, other: &Sample) -> f64 {
        self.point().distance(other.point())
    }
}

/// Parse a JSON array of `{ "time", "x", "y" }` objects.
pub fn samples_from_json(s: &str) -> MotionResult<Vec<Sample>> {
    serde_json::from_str(s).map_err(|e| MotionError::serde(format!("parse samples JSON: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
