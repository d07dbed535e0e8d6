use crate::foundation::core::{BezPath, Point, Sample};
use crate::foundation::math::Fixed2;
use kurbo::PathEl;
use std::fmt;

/// Segment style for emitted paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStyle {
    /// One line segment per sample.
    #[default]
    Straight,
    /// Cubic segments between evenly spaced anchor samples.
    ///
    /// Control points are the recorded samples one third and two thirds of the
    /// way through each anchor span, so the curve bends through points the
    /// pointer actually visited. Spans of fewer than three steps have no such
    /// samples and use the chord's third points instead.
    Curved,
}

/// Build the path geometry relative to `origin` (the first sample when `None`).
///
/// The path always starts with a move to `(0, 0)`. Straight paths add a line to
/// every later sample; curved paths add one cubic per anchor span, anchors every
/// `ceil(n / curve_segments)` samples, ending exactly on the last sample.
pub fn path_geometry(
    samples: &[Sample],
    origin: Option<Point>,
    style: PathStyle,
    curve_segments: usize,
) -> BezPath {
    let mut path = BezPath::new();
    let Some(first) = samples.first() else {
        return path;
    };
    let origin = origin.unwrap_or_else(|| first.point());
    let rel = |p: Point| (p - origin).to_point();

    path.move_to(Point::ORIGIN);
    match style {
        PathStyle::Straight => {
            for s in &samples[1..] {
                path.line_to(rel(s.point()));
            }
        }
        PathStyle::Curved => {
            let anchors = anchor_indices(samples.len(), curve_segments);
            for span in anchors.windows(2) {
                let (a, b) = (span[0], span[1]);
                let (c1, c2) = thirds(samples, a, b);
                path.curve_to(rel(c1), rel(c2), rel(samples[b].point()));
            }
        }
    }
    path
}

/// Serialize samples straight to an SVG path string with two-decimal coordinates.
pub fn generate_path_string(
    samples: &[Sample],
    origin: Option<Point>,
    style: PathStyle,
    curve_segments: usize,
) -> String {
    format_path(&path_geometry(samples, origin, style, curve_segments))
}

/// Render path commands as `M`, `L`, `Q`, `C` and `Z` with fixed precision.
pub fn format_path(path: &BezPath) -> String {
    SvgPath(path).to_string()
}

struct SvgPath<'a>(&'a BezPath);

impl fmt::Display for SvgPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, el) in self.0.elements().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *el {
                PathEl::MoveTo(p) => write!(f, "M{}", Coord(p))?,
                PathEl::LineTo(p) => write!(f, "L{}", Coord(p))?,
                PathEl::QuadTo(c, p) => write!(f, "Q{} {}", Coord(c), Coord(p))?,
                PathEl::CurveTo(c1, c2, p) => {
                    write!(f, "C{} {} {}", Coord(c1), Coord(c2), Coord(p))?
                }
                PathEl::ClosePath => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

struct Coord(Point);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", Fixed2(self.0.x), Fixed2(self.0.y))
    }
}

fn anchor_indices(n: usize, curve_segments: usize) -> Vec<usize> {
    if n < 2 {
        return Vec::new();
    }
    let step = n.div_ceil(curve_segments.max(1)).max(1);
    let mut anchors: Vec<usize> = (0..n).step_by(step).collect();
    if anchors.last() != Some(&(n - 1)) {
        anchors.push(n - 1);
    }
    anchors
}

// Control points at the samples a third and two thirds of the way through the
// span; spans too short to hold interior samples interpolate the chord instead.
fn thirds(samples: &[Sample], a: usize, b: usize) -> (Point, Point) {
    let (pa, pb) = (samples[a].point(), samples[b].point());
    if b - a < 3 {
        return (pa.lerp(pb, 1.0 / 3.0), pa.lerp(pb, 2.0 / 3.0));
    }
    let span = b - a;
    (
        samples[a + span / 3].point(),
        samples[a + (2 * span) / 3].point(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/path/serialize.rs"]
mod tests;
