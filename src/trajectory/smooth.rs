use crate::config::PipelineConfig;
use crate::trajectory::keyframes::Keyframe;

/// Smoothing only pays off once there are enough samples and keyframes.
pub fn should_smooth(filtered_len: usize, normalized_len: usize, cfg: &PipelineConfig) -> bool {
    filtered_len > cfg.smoothing_min_samples && normalized_len >= cfg.smoothing_min_keyframes
}

/// Fill large progress gaps with the nearest real keyframe.
///
/// For every adjacent pair whose progress gap exceeds `smoothing_gap`, the
/// keyframe from `original` closest to the gap's midpoint is inserted between
/// them (first found wins on ties). A keyframe is never appended twice in a row.
pub fn fill_gaps(
    normalized: &[Keyframe],
    original: &[Keyframe],
    cfg: &PipelineConfig,
) -> Vec<Keyframe> {
    let mut out: Vec<Keyframe> = Vec::with_capacity(normalized.len() * 2);

    for pair in normalized.windows(2) {
        let (cur, next) = (pair[0], pair[1]);
        push_unless_tail(&mut out, cur);

        if next.progress - cur.progress > cfg.smoothing_gap {
            let mid = (cur.progress + next.progress) / 2.0;
            if let Some(nearest) = nearest_to_progress(original, mid) {
                push_unless_tail(&mut out, nearest);
            }
        }
    }
    if let Some(last) = normalized.last() {
        push_unless_tail(&mut out, *last);
    }
    out
}

fn nearest_to_progress(keyframes: &[Keyframe], target: f64) -> Option<Keyframe> {
    let mut best: Option<(f64, Keyframe)> = None;
    for k in keyframes {
        let d = (k.progress - target).abs();
        match best {
            Some((best_d, _)) if d >= best_d => {}
            _ => best = Some((d, *k)),
        }
    }
    best.map(|(_, k)| k)
}

fn push_unless_tail(out: &mut Vec<Keyframe>, k: Keyframe) {
    if out.last().map(Keyframe::time) != Some(k.time()) {
        out.push(k);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trajectory/smooth.rs"]
mod tests;
