//! Unified error types for cvescope.
//!
//! Library functions return [`Result`]; the CLI boundary converts to exit
//! codes. Errors carry a human-readable context string plus a specific kind,
//! and their display text is what gets surfaced to the user verbatim.

use thiserror::Error;

/// Main error type for cvescope operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CvescopeError {
    /// Errors while fetching or decoding data from a vulnerability database
    #[error("Lookup failed: {context}")]
    Lookup {
        context: String,
        #[source]
        source: LookupErrorKind,
    },

    /// Errors while producing report output
    #[error("Report generation failed: {context}")]
    Render {
        context: String,
        #[source]
        source: RenderErrorKind,
    },

    /// Input validation errors (surfaced before any network call)
    #[error("{0}")]
    Validation(String),

    /// IO errors with context
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific lookup error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LookupErrorKind {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Specific render error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RenderErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),
}

/// Convenient Result type for cvescope operations
pub type Result<T> = std::result::Result<T, CvescopeError>;

impl CvescopeError {
    /// Create a lookup error with context
    pub fn lookup(context: impl Into<String>, source: LookupErrorKind) -> Self {
        Self::Lookup {
            context: context.into(),
            source,
        }
    }

    /// Create a render error with context
    pub fn render(context: impl Into<String>, source: RenderErrorKind) -> Self {
        Self::Render {
            context: context.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<std::io::Error> for CvescopeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CvescopeError {
    fn from(err: serde_json::Error) -> Self {
        Self::lookup(
            "JSON deserialization",
            LookupErrorKind::InvalidResponse(err.to_string()),
        )
    }
}
