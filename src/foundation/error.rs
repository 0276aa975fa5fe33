/// Convenience result type used across graphreel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by the sequencing APIs.
///
/// Only construction-time problems are represented here. Dangling relationships,
/// missing timeline attributes and unknown type tags are absorbed by the engine
/// and never surface as errors.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// The graph description cannot form a graph (duplicate entity id).
    #[error("malformed graph: {0}")]
    MalformedGraph(String),

    /// Invalid configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing descriptions and configs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::MalformedGraph`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedGraph(msg.into())
    }

    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
