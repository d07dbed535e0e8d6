use std::fmt;

/// Clamp into `[0, 1]`; NaN collapses to 0.
pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Fixed two-decimal rendering used by every textual output.
///
/// Values that round to zero print as `0.00`, never `-0.00`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fixed2(pub(crate) f64);

impl fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;
        let v = if rounded == 0.0 { 0.0 } else { rounded };
        write!(f, "{v:.2}")
    }
}
