use crate::config::PipelineConfig;
use crate::foundation::core::{Point, Sample};
use crate::foundation::error::MotionResult;
use crate::path::serialize::{PathStyle, generate_path_string};
use crate::timing::AnimationTiming;
use crate::timing::bezier::{BezierCurve, estimate_bezier};
use crate::trajectory::extract::extract_significant;
use crate::trajectory::filter::filter_by_distance;
use crate::trajectory::keyframes::{Keyframe, KeyframeTrack, build_keyframes};
use crate::trajectory::normalize::normalize_count;
use crate::trajectory::smooth::{fill_gaps, should_smooth};
use crate::trajectory::speed::speed_profile;

/// Everything one pipeline run derives from a raw trajectory.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PipelineOutput {
    /// Samples that survived the distance filter.
    pub filtered: Vec<Sample>,
    /// Elapsed time between the first and last filtered sample.
    pub total_duration: f64,
    /// Chosen timing: keyframes when there are enough, otherwise the curve.
    pub timing: AnimationTiming,
    /// Estimated curve; the default curve when fewer than two samples survive.
    pub bezier: BezierCurve,
}

impl PipelineOutput {
    /// The keyframe list, if the keyframe branch was chosen.
    pub fn keyframes(&self) -> Option<&[Keyframe]> {
        self.timing.keyframes()
    }
}

/// Run the full trajectory pipeline over `raw`.
///
/// Never fails: too few samples fall back to cubic-bezier timing (the default
/// curve when nothing can be estimated).
#[tracing::instrument(skip(raw, cfg), fields(raw = raw.len()))]
pub fn run_pipeline(raw: &[Sample], cfg: &PipelineConfig) -> PipelineOutput {
    let filtered = filter_by_distance(raw, cfg.min_distance);
    let track = build_keyframes(&filtered);
    let bezier = estimate_bezier(&filtered, track.total_duration);

    let keyframes = if raw.len() < cfg.min_raw_samples || filtered.len() < 2 {
        tracing::debug!(
            raw = raw.len(),
            filtered = filtered.len(),
            "insufficient samples for keyframes"
        );
        None
    } else {
        Some(reduce_keyframes(&filtered, &track, cfg))
    };

    let timing = match keyframes {
        Some(keyframes) if keyframes.len() >= cfg.min_keyframes_for_timing => {
            tracing::debug!(count = keyframes.len(), "using keyframe timing");
            AnimationTiming::Keyframes { keyframes }
        }
        _ => {
            tracing::debug!(%bezier, "using cubic-bezier timing");
            AnimationTiming::CubicBezier { curve: bezier }
        }
    };

    PipelineOutput {
        filtered,
        total_duration: track.total_duration,
        timing,
        bezier,
    }
}

fn reduce_keyframes(
    filtered: &[Sample],
    track: &KeyframeTrack,
    cfg: &PipelineConfig,
) -> Vec<Keyframe> {
    let speeds = speed_profile(&track.keyframes);
    let extracted = extract_significant(&track.keyframes, &speeds, cfg);
    let normalized = normalize_count(&extracted, &track.keyframes, cfg);

    let out = if should_smooth(filtered.len(), normalized.len(), cfg) {
        fill_gaps(&normalized, &track.keyframes, cfg)
    } else {
        normalized
    };
    tracing::debug!(
        filtered = filtered.len(),
        speeds = speeds.len(),
        extracted = extracted.len(),
        keyframes = out.len(),
        "keyframe reduction"
    );
    out
}

/// Capture context for one gesture at a time.
///
/// Holds the raw sample buffer and the result of the last [`Session::run`].
/// Starting over is done with [`Session::reset`], which hands back a fresh
/// context instead of clearing fields in place.
#[derive(Clone, Debug, Default)]
pub struct Session {
    config: PipelineConfig,
    raw: Vec<Sample>,
    current: Option<PipelineOutput>,
}

impl Session {
    /// Create an empty session after validating `config`.
    pub fn new(config: PipelineConfig) -> MotionResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            raw: Vec::new(),
            current: None,
        })
    }

    /// Pipeline settings for this session.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Append one raw sample. Non-finite samples are rejected and not stored.
    pub fn append(&mut self, sample: Sample) -> MotionResult<()> {
        if let Err(e) = sample.validate() {
            tracing::warn!(error = %e, "rejecting sample");
            return Err(e);
        }
        self.raw.push(sample);
        Ok(())
    }

    /// Append samples in order, stopping at the first invalid one.
    pub fn extend<I>(&mut self, samples: I) -> MotionResult<()>
    where
        I: IntoIterator<Item = Sample>,
    {
        for s in samples {
            self.append(s)?;
        }
        Ok(())
    }

    /// Raw samples captured so far.
    pub fn raw(&self) -> &[Sample] {
        &self.raw
    }

    /// Drop the trajectory and every derived result.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            config: self.config,
            raw: Vec::new(),
            current: None,
        }
    }

    /// Distance-filtered raw samples, recomputed on every call.
    pub fn filtered_samples(&self) -> Vec<Sample> {
        filter_by_distance(&self.raw, self.config.min_distance)
    }

    /// Run the pipeline over the current buffer and keep the result.
    #[tracing::instrument(skip(self), fields(raw = self.raw.len()))]
    pub fn run(&mut self) -> &PipelineOutput {
        self.current.insert(run_pipeline(&self.raw, &self.config))
    }

    /// Result of the last [`Session::run`], if any.
    pub fn current(&self) -> Option<&PipelineOutput> {
        self.current.as_ref()
    }

    /// SVG path of the filtered samples relative to `origin`.
    pub fn path_string(&self, origin: Option<Point>, style: PathStyle) -> String {
        generate_path_string(
            &self.filtered_samples(),
            origin,
            style,
            self.config.curve_segments,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/session.rs"]
mod tests;
