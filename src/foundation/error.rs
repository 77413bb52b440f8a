/// Convenience result type used across the crate.
pub type CountdownResult<T> = Result<T, CountdownError>;

/// Top-level error taxonomy used by the formatter, renderer, registry and driver.
#[derive(thiserror::Error, Debug)]
pub enum CountdownError {
    /// Malformed numeric input (negative remaining time, non-positive total, zero fps).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A style name that is not present in the registry.
    #[error("unsupported style: \"{0}\"")]
    UnsupportedStyle(String),

    /// Non-positive (or backend-unrepresentable) canvas size.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: i64,
        /// Requested height in pixels.
        height: i64,
    },

    /// Malformed style definitions or font data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when deserializing style packs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors raised by frame sinks while persisting output.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CountdownError {
    /// Build a [`CountdownError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`CountdownError::UnsupportedStyle`] value.
    pub fn unsupported_style(name: impl Into<String>) -> Self {
        Self::UnsupportedStyle(name.into())
    }

    /// Build a [`CountdownError::InvalidDimensions`] value.
    pub fn invalid_dimensions(width: i64, height: i64) -> Self {
        Self::InvalidDimensions { width, height }
    }

    /// Build a [`CountdownError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CountdownError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`CountdownError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
