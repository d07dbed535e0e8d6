use crate::config::PipelineConfig;
use crate::trajectory::keyframes::{Keyframe, dedup_by_time};
use crate::trajectory::speed::SpeedRecord;

/// Keep the keyframes where the gesture's speed changes sharply.
///
/// The first and last keyframes are always kept. Whenever a segment's speed
/// differs from the running reference by more than
/// `speed_change_threshold` (relative to `max(reference, speed_floor)`), the
/// keyframes on both sides of that change are kept and the reference moves to
/// the new speed.
pub fn extract_significant(
    keyframes: &[Keyframe],
    speeds: &[SpeedRecord],
    cfg: &PipelineConfig,
) -> Vec<Keyframe> {
    let (Some(first), Some(last)) = (keyframes.first(), keyframes.last()) else {
        return Vec::new();
    };

    let mut out = vec![*first];
    let mut last_speed = speeds.first().map_or(0.0, |r| r.speed);

    for rec in speeds.iter().skip(1) {
        let change = (rec.speed - last_speed).abs() / last_speed.max(cfg.speed_floor);
        if change <= cfg.speed_change_threshold {
            continue;
        }
        let (Some(before), Some(at)) = (
            rec.sample_index
                .checked_sub(1)
                .and_then(|i| keyframes.get(i)),
            keyframes.get(rec.sample_index),
        ) else {
            continue;
        };
        out.push(*before);
        out.push(*at);
        last_speed = rec.speed;
    }

    if out.last().map(Keyframe::time) != Some(last.time()) {
        out.push(*last);
    }
    dedup_by_time(&mut out);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/trajectory/extract.rs"]
mod tests;
