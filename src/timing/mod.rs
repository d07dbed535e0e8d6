//! Timing output: either a keyframe list or a single cubic-bezier curve.

/// Cubic-bezier estimation from filtered samples.
pub mod bezier;

use crate::timing::bezier::BezierCurve;
use crate::trajectory::keyframes::Keyframe;

/// How the playback layer should pace the animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationTiming {
    /// Progress-tagged keyframes played with linear timing between them.
    Keyframes {
        /// Ordered keyframes, first at progress 0 and last at progress 1.
        keyframes: Vec<Keyframe>,
    },
    /// A single curve over the whole path.
    CubicBezier {
        /// The estimated timing curve.
        curve: BezierCurve,
    },
}

impl AnimationTiming {
    /// Keyframes when this is the keyframe variant.
    pub fn keyframes(&self) -> Option<&[Keyframe]> {
        match self {
            Self::Keyframes { keyframes } => Some(keyframes),
            Self::CubicBezier { .. } => None,
        }
    }

    /// Curve when this is the cubic-bezier variant.
    pub fn curve(&self) -> Option<BezierCurve> {
        match self {
            Self::Keyframes { .. } => None,
            Self::CubicBezier { curve } => Some(*curve),
        }
    }
}
