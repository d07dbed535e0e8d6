//! Stages that turn a raw sample stream into a compact keyframe list.
//!
//! Data flows `filter -> keyframes -> speed -> extract -> normalize -> smooth`.
//! Every stage is a pure function over slices; none keeps state between calls.

/// Minimum-distance jitter filter.
pub mod filter;
/// Time-progress keyframes.
pub mod keyframes;
/// Per-segment speed.
pub mod speed;
/// Significant speed-change extraction.
pub mod extract;
/// Keyframe count normalization.
pub mod normalize;
/// Gap filling between normalized keyframes.
pub mod smooth;
