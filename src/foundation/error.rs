/// Convenience result type used across Slidecraft.
pub type SlidecraftResult<T> = Result<T, SlidecraftError>;

/// Top-level error taxonomy used by the generation and theme APIs.
#[derive(thiserror::Error, Debug)]
pub enum SlidecraftError {
    /// Invalid caller-provided geometry or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while sampling or deriving a theme from an image.
    #[error("theme error: {0}")]
    Theme(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlidecraftError {
    /// Build a [`SlidecraftError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SlidecraftError::Theme`] value.
    pub fn theme(msg: impl Into<String>) -> Self {
        Self::Theme(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
