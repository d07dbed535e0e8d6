//! SVG path output for motion paths.

/// Path geometry construction and fixed-precision serialization.
pub mod serialize;
