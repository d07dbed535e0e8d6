//! motionsketch turns a hand-drawn pointer trajectory into animation parameters.
//!
//! A gesture arrives as a stream of timestamped samples. The pipeline reduces it
//! to one of two timing descriptions plus a motion path:
//!
//! 1. **Filter**: drop samples closer than a few pixels to their predecessor.
//! 2. **Keyframes**: tag every sample with its time progress in `[0, 1]`.
//! 3. **Reduce**: keep keyframes where the speed changes sharply, pull the count
//!    toward a usable band and fill large progress gaps.
//! 4. **Fallback**: estimate a single `cubic-bezier()` curve when too few
//!    keyframes remain.
//! 5. **Path**: serialize the filtered samples as an SVG path relative to an origin.
//!
//! Every stage is a pure function. The only state lives in [`Session`], which
//! owns the raw buffer of the gesture being captured.
//!
//! ```
//! use motionsketch::{PipelineConfig, Sample, run_pipeline};
//!
//! let raw = [
//!     Sample { time: 0.0, x: 0.0, y: 0.0 },
//!     Sample { time: 100.0, x: 1.0, y: 1.0 },
//!     Sample { time: 200.0, x: 50.0, y: 50.0 },
//! ];
//! let out = run_pipeline(&raw, &PipelineConfig::default());
//! let progress: Vec<f64> = out.keyframes().unwrap().iter().map(|k| k.progress).collect();
//! assert_eq!(progress, [0.0, 0.5, 1.0]);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;

/// Textual animation declarations.
pub mod codegen;
/// SVG motion path output.
pub mod path;
/// Pipeline orchestration.
pub mod pipeline;
/// Keyframe or cubic-bezier timing output.
pub mod timing;
/// Trajectory reduction stages.
pub mod trajectory;

pub use crate::codegen::css::{CssOptions, render_css};
pub use crate::config::PipelineConfig;
pub use crate::foundation::core::{BezPath, Point, Sample, Vec2, samples_from_json};
pub use crate::foundation::error::{MotionError, MotionResult};
pub use crate::path::serialize::{PathStyle, format_path, generate_path_string, path_geometry};
pub use crate::pipeline::session::{PipelineOutput, Session, run_pipeline};
pub use crate::timing::AnimationTiming;
pub use crate::timing::bezier::{BezierCurve, estimate_bezier};
pub use crate::trajectory::extract::extract_significant;
pub use crate::trajectory::filter::filter_by_distance;
pub use crate::trajectory::keyframes::{Keyframe, KeyframeTrack, build_keyframes, dedup_by_time};
pub use crate::trajectory::normalize::{normalize_count, stride_sample};
pub use crate::trajectory::smooth::{fill_gaps, should_smooth};
pub use crate::trajectory::speed::{SpeedRecord, speed_profile};
