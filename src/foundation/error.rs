/// Convenience result type used across Stripbooth.
pub type BoothResult<T> = Result<T, BoothError>;

/// Top-level error taxonomy used by booth APIs.
#[derive(thiserror::Error, Debug)]
pub enum BoothError {
    /// Invalid user-provided or layout/composition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Camera acquisition or frame-grab failures.
    #[error("capture error: {0}")]
    Capture(String),

    /// Errors while rasterizing or encoding a composite.
    #[error("render error: {0}")]
    Render(String),

    /// Malformed or inconsistent session handoff data.
    #[error("session error: {0}")]
    Session(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoothError {
    /// Build a [`BoothError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BoothError::Capture`] value.
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Build a [`BoothError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BoothError::Session`] value.
    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
