/// Convenience result type used throughout the crate.
pub type WheelResult<T> = Result<T, WheelError>;

/// Every failure the renderer surfaces to its callers.
///
/// Rendering is pure and deterministic, so none of these are retryable without changed input.
#[derive(thiserror::Error, Debug)]
pub enum WheelError {
    /// The item list or render configuration cannot be rendered.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The finished animation could not be serialized.
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WheelError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Whether the failure was caused by the caller's input (as opposed to the output step).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<gif::EncodingError> for WheelError {
    fn from(err: gif::EncodingError) -> Self {
        Self::Encoding(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
