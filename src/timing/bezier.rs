use crate::foundation::core::Sample;
use crate::foundation::math::{Fixed2, clamp01};
use std::fmt;

/// Control points of a CSS `cubic-bezier()` timing function from (0,0) to (1,1).
///
/// Every coordinate lies in `[0, 1]`. The curve is not guaranteed to be monotonic.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BezierCurve {
    /// First control point, time axis.
    pub x1: f64,
    /// First control point, progress axis.
    pub y1: f64,
    /// Second control point, time axis.
    pub x2: f64,
    /// Second control point, progress axis.
    pub y2: f64,
}

impl BezierCurve {
    /// Curve used when there is nothing to estimate from.
    pub const DEFAULT: Self = Self {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };

    /// Build a curve, clamping every coordinate into `[0, 1]`.
    pub fn clamped(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: clamp01(x1),
            y1: clamp01(y1),
            x2: clamp01(x2),
            y2: clamp01(y2),
        }
    }
}

impl Default for BezierCurve {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for BezierCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            Fixed2(self.x1),
            Fixed2(self.y1),
            Fixed2(self.x2),
            Fixed2(self.y2)
        )
    }
}

/// Approximate the gesture's pacing with a single cubic-bezier curve.
///
/// Control points sit at the samples one third and two thirds of the way
/// through the list: x is the elapsed-time fraction at that sample, y the
/// fraction of samples traversed. Sample count stands in for arc length.
pub fn estimate_bezier(samples: &[Sample], total_duration: f64) -> BezierCurve {
    let n = samples.len();
    if n < 2 || total_duration.is_nan() || total_duration <= 0.0 {
        return BezierCurve::DEFAULT;
    }

    let i1 = n / 3;
    let i2 = (2 * n) / 3;
    let t0 = samples[0].time;
    let last = (n - 1) as f64;

    BezierCurve::clamped(
        (samples[i1].time - t0) / total_duration,
        i1 as f64 / last,
        (samples[i2].time - t0) / total_duration,
        i2 as f64 / last,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/timing/bezier.rs"]
mod tests;
