//! Error types for document keys and paths
//!
//! Every malformed input this crate can detect is described by [`PathError`].
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! ## Fail-fast vs. fallible construction
//!
//! The plain constructors (`DocumentKey::new`, `FieldPath::parse_server_format`,
//! ...) treat invalid input as a caller bug: the violation is logged and the
//! thread panics. Each of them has a `try_*` twin returning
//! [`Result`] for layers that deal with untrusted input.

use thiserror::Error;

/// Result type alias for path operations
pub type Result<T> = std::result::Result<T, PathError>;

/// Errors raised when validating keys and parsing paths
///
/// Each variant carries the offending input text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Document key path does not have an even number of segments
    #[error("invalid document key path: {0}")]
    InvalidDocumentKey(String),

    /// Field path contains an empty segment (leading, trailing or doubled `.`)
    #[error(
        "Invalid field path ({0}). Paths must not be empty, begin with '.', end with '.', or contain '..'"
    )]
    EmptySegment(String),

    /// Opening backtick was never closed
    #[error("Unterminated ` in path {0}")]
    UnterminatedBacktick(String),

    /// Input ends with a backslash that escapes nothing
    #[error("Trailing escape characters not allowed in {0}")]
    TrailingEscape(String),

    /// Resource path text contains `//`
    #[error("Invalid path ({0}). Paths must not contain // in them.")]
    DoubleSlash(String),
}

impl PathError {
    /// Stable reason code, suitable for logs and wire-level error details
    pub fn reason_code(&self) -> &'static str {
        match self {
            PathError::InvalidDocumentKey(_) => "invalid_document_key",
            PathError::EmptySegment(_) => "empty_segment",
            PathError::UnterminatedBacktick(_) => "unterminated_backtick",
            PathError::TrailingEscape(_) => "trailing_escape",
            PathError::DoubleSlash(_) => "double_slash",
        }
    }

    /// The input text that was rejected
    pub fn offending_text(&self) -> &str {
        match self {
            PathError::InvalidDocumentKey(s)
            | PathError::EmptySegment(s)
            | PathError::UnterminatedBacktick(s)
            | PathError::TrailingEscape(s)
            | PathError::DoubleSlash(s) => s,
        }
    }
}

/// Report a precondition violation and halt
///
/// Invalid keys and paths reaching a fail-fast constructor are programming
/// errors, so there is nothing to return to.
#[track_caller]
pub(crate) fn fail_precondition(err: PathError) -> ! {
    tracing::error!(
        reason = err.reason_code(),
        input = err.offending_text(),
        "precondition violated: {}",
        err
    );
    panic!("{}", err)
}

/// Unwrap a validation result, failing fast on error
#[track_caller]
pub(crate) fn expect_valid<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => fail_precondition(err),
    }
}
