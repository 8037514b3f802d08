//! Error types for context ingestion.
//!
//! Responsibilities:
//! - Define error variants for format lookup, parsing, and stream reading.
//!
//! Does NOT handle:
//! - Template rendering errors (those belong to the renderer, see `crates/cli`).
//!
//! Invariants:
//! - `UnsupportedFormat` always echoes the requested format tag so the user
//!   can see exactly what they typed.
//! - `Parse` carries the source format plus whatever position hint the
//!   underlying decoder supplied; it never swallows that detail.
//! - All variants propagate unchanged to the caller. There is no retry and
//!   no fallback to an empty context.

use thiserror::Error;

use crate::formats::Format;

/// Errors that can occur while reading context data.
#[derive(Error, Debug)]
pub enum ContextError {
    /// The requested format tag is not in the registry. This covers both
    /// genuinely unknown tags and formats whose backing decoder was not
    /// compiled in; the two are indistinguishable by design.
    #[error("unsupported format: '{format}'")]
    UnsupportedFormat { format: String },

    /// The chosen parser could not interpret the input text.
    #[error("{format} parse error: {message}")]
    Parse { format: Format, message: String },

    /// The input stream could not be fully read.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl ContextError {
    /// Shorthand used by the parsers to wrap a decoder message.
    pub(crate) fn parse(format: Format, message: impl Into<String>) -> Self {
        ContextError::Parse {
            format,
            message: message.into(),
        }
    }
}
