use crate::trajectory::keyframes::Keyframe;

/// Speed over the segment that ends at `sample_index`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SpeedRecord {
    /// Index (into the keyframe list) of the segment's end keyframe.
    pub sample_index: usize,
    /// Distance per unit time, always `>= 0`.
    pub speed: f64,
    /// Progress of the segment's end keyframe.
    pub progress: f64,
}

/// Per-segment speed between consecutive keyframes.
///
/// Segments with a non-positive time delta are skipped rather than reported.
pub fn speed_profile(keyframes: &[Keyframe]) -> Vec<SpeedRecord> {
    keyframes
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            let (prev, cur) = (&pair[0], &pair[1]);
            let dt = cur.time() - prev.time();
            if dt <= 0.0 {
                return None;
            }
            Some(SpeedRecord {
                sample_index: i + 1,
                speed: cur.sample.distance_to(&prev.sample) / dt,
                progress: cur.progress,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/trajectory/speed.rs"]
mod tests;
