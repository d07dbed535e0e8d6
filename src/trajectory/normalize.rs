use crate::config::PipelineConfig;
use crate::trajectory::keyframes::{Keyframe, dedup_by_time};

/// Pull the extracted keyframe count toward the configured band.
///
/// Rules, first match wins:
/// - too sparse (`extracted < sparse_extracted_below` while
///   `original > sparse_original_above`): resample the original list with a
///   stride of `original / sparse_stride_divisor`;
/// - too dense (`extracted > dense_extracted_above`): thin the extracted list
///   with a stride of `extracted / dense_stride_divisor`;
/// - otherwise the extracted list is returned unchanged.
///
/// Output entries are always taken from one of the two inputs.
pub fn normalize_count(
    extracted: &[Keyframe],
    original: &[Keyframe],
    cfg: &PipelineConfig,
) -> Vec<Keyframe> {
    if extracted.len() < cfg.sparse_extracted_below && original.len() > cfg.sparse_original_above
    {
        let stride = original.len() / cfg.sparse_stride_divisor;
        tracing::debug!(
            extracted = extracted.len(),
            original = original.len(),
            stride,
            "keyframes too sparse, resampling original"
        );
        return stride_sample(original, stride);
    }

    if extracted.len() > cfg.dense_extracted_above {
        let stride = extracted.len() / cfg.dense_stride_divisor;
        tracing::debug!(
            extracted = extracted.len(),
            stride,
            "keyframes too dense, thinning"
        );
        return stride_sample(extracted, stride);
    }

    extracted.to_vec()
}

/// Every `stride`-th keyframe starting at the first, plus the last.
///
/// A zero stride is treated as 1.
pub fn stride_sample(keyframes: &[Keyframe], stride: usize) -> Vec<Keyframe> {
    let Some(last) = keyframes.last() else {
        return Vec::new();
    };
    let mut out: Vec<Keyframe> = keyframes.iter().step_by(stride.max(1)).copied().collect();
    if out.last().map(Keyframe::time) != Some(last.time()) {
        out.push(*last);
    }
    dedup_by_time(&mut out);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/trajectory/normalize.rs"]
mod tests;
