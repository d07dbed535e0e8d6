use crate::foundation::error::{MotionError, MotionResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Tunables for every pipeline stage.
///
/// Deserializes from JSON with per-field defaults, so a config file only needs
/// the values it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Minimum distance between kept samples, in input units (px).
    pub min_distance: f64,
    /// Raw samples required before keyframes are attempted.
    pub min_raw_samples: usize,
    /// Lower bound on the reference speed when computing relative change.
    pub speed_floor: f64,
    /// Relative speed change that marks a keyframe as significant.
    pub speed_change_threshold: f64,
    /// Extracted count below which the sparse rebuild may kick in.
    pub sparse_extracted_below: usize,
    /// Original count that must be exceeded for the sparse rebuild.
    pub sparse_original_above: usize,
    /// Sparse rebuild stride is `original_count / sparse_stride_divisor`.
    pub sparse_stride_divisor: usize,
    /// Extracted count above which the list is thinned.
    pub dense_extracted_above: usize,
    /// Dense thinning stride is `extracted_count / dense_stride_divisor`.
    pub dense_stride_divisor: usize,
    /// Smoothing runs only when the filtered count exceeds this.
    pub smoothing_min_samples: usize,
    /// Smoothing runs only when the normalized list has at least this many entries.
    pub smoothing_min_keyframes: usize,
    /// Progress gap above which the smoother inserts a keyframe.
    pub smoothing_gap: f64,
    /// Keyframe count needed to prefer keyframe timing over the bezier fallback.
    pub min_keyframes_for_timing: usize,
    /// Curved paths place an anchor every `ceil(n / curve_segments)` samples.
    pub curve_segments: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_distance: 1.0,
            min_raw_samples: 3,
            speed_floor: 0.1,
            speed_change_threshold: 0.2,
            sparse_extracted_below: 5,
            sparse_original_above: 10,
            sparse_stride_divisor: 8,
            dense_extracted_above: 20,
            dense_stride_divisor: 20,
            smoothing_min_samples: 5,
            smoothing_min_keyframes: 3,
            smoothing_gap: 0.1,
            min_keyframes_for_timing: 3,
            curve_segments: 10,
        }
    }
}

impl PipelineConfig {
    /// Parse a config from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> MotionResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| MotionError::serde(format!("parse pipeline config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MotionResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MotionError::config(format!("open pipeline config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject values the stages cannot work with.
    pub fn validate(&self) -> MotionResult<()> {
        fn non_negative(name: &str, v: f64) -> MotionResult<()> {
            if !v.is_finite() || v < 0.0 {
                return Err(MotionError::config(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
            Ok(())
        }

        non_negative("min_distance", self.min_distance)?;
        non_negative("speed_change_threshold", self.speed_change_threshold)?;
        non_negative("smoothing_gap", self.smoothing_gap)?;
        if !self.speed_floor.is_finite() || self.speed_floor <= 0.0 {
            return Err(MotionError::config("speed_floor must be finite and > 0"));
        }
        if self.sparse_stride_divisor == 0 || self.dense_stride_divisor == 0 {
            return Err(MotionError::config("stride divisors must be > 0"));
        }
        if self.curve_segments == 0 {
            return Err(MotionError::config("curve_segments must be > 0"));
        }
        if self.sparse_extracted_below > self.dense_extracted_above {
            return Err(MotionError::config(
                "sparse_extracted_below must be <= dense_extracted_above",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
