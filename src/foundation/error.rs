/// Convenience result type used across motionsketch.
pub type MotionResult<T> = Result<T, MotionError>;

/// Error taxonomy for the boundaries of the trajectory pipeline.
///
/// The pipeline stages themselves never fail: too few samples or a zero-length
/// gesture produce empty or default output instead. Errors are raised only where
/// data enters the crate (samples, configuration, JSON).
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Rejected sample or trajectory input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A pipeline configuration that violates its own constraints.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
