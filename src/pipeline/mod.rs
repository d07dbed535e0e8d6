//! Orchestration of the trajectory stages.

/// Pipeline entry point and the per-gesture capture session.
pub mod session;
