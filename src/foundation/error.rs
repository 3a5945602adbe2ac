/// Result alias used across the crate.
pub type LiquidResult<T> = Result<T, LiquidError>;

/// Error taxonomy for setup, per-frame rendering and scene loading.
#[derive(thiserror::Error, Debug)]
pub enum LiquidError {
    /// Invalid options or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The source outline cannot be sampled (zero length, too few samples, non-finite points).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// The outline's coordinate space cannot be resolved (non-invertible transform).
    #[error("transform error: {0}")]
    Transform(String),

    /// The render target rejected a frame.
    #[error("render error: {0}")]
    Render(String),

    /// JSON encoding/decoding failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LiquidError {
    /// Build a [`LiquidError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LiquidError::Geometry`].
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`LiquidError::Transform`].
    pub fn transform(msg: impl Into<String>) -> Self {
        Self::Transform(msg.into())
    }

    /// Build a [`LiquidError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LiquidError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
