use crate::foundation::core::Sample;
use std::collections::HashSet;

/// A sample tagged with its normalized time progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Keyframe {
    /// Elapsed fraction of the gesture in `[0, 1]`.
    pub progress: f64,
    /// The underlying captured sample.
    pub sample: Sample,
}

impl Keyframe {
    /// Timestamp of the underlying sample.
    pub fn time(&self) -> f64 {
        self.sample.time
    }
}

/// Keyframes for a filtered trajectory plus its elapsed time.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct KeyframeTrack {
    /// One keyframe per filtered sample, in input order.
    pub keyframes: Vec<Keyframe>,
    /// `last.time - first.time`; 0 for an empty track.
    pub total_duration: f64,
}

impl KeyframeTrack {
    /// True when fewer than two samples were available.
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }
}

/// Assign every sample its progress relative to the first and last timestamps.
///
/// Fewer than two samples produce an empty track. A zero-length gesture (every
/// sample sharing one timestamp) maps all progress values to 0.
pub fn build_keyframes(samples: &[Sample]) -> KeyframeTrack {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return KeyframeTrack::default();
    };
    if samples.len() < 2 {
        return KeyframeTrack::default();
    }

    let total_duration = last.time - first.time;
    let keyframes = samples
        .iter()
        .map(|s| Keyframe {
            progress: if total_duration == 0.0 {
                0.0
            } else {
                (s.time - first.time) / total_duration
            },
            sample: *s,
        })
        .collect();

    KeyframeTrack {
        keyframes,
        total_duration,
    }
}

/// Remove keyframes whose timestamp already appeared earlier in the list.
pub fn dedup_by_time(keyframes: &mut Vec<Keyframe>) {
    let mut seen = HashSet::with_capacity(keyframes.len());
    // -0.0 and 0.0 are the same instant.
    keyframes.retain(|k| seen.insert((k.time() + 0.0).to_bits()));
}

#[cfg(test)]
#[path = "../../tests/unit/trajectory/keyframes.rs"]
mod tests;
