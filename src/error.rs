//! Error types and result alias for rtperrfmt.
//!
//! Fatal conditions are a tagged enum so callers can tell a malformed define
//! name apart from a structurally broken line or an I/O failure. A
//! code-sequence mismatch is deliberately not an error: it is reported on the
//! diagnostic stream and the scan continues.

use std::num::ParseIntError;

use thiserror::Error;

/// Fatal conditions that abort a reformatting run.
///
/// Emission is deferred until the scan finishes, so any of these guarantees
/// that zero defines were printed.
#[derive(Error, Debug)]
pub enum ReformatError {
    /// A qualifying line whose name token does not carry the expected prefix.
    #[error("unexpected line (define name does not start with {prefix}): {line}")]
    MalformedName { prefix: String, line: String },

    /// A qualifying line with fewer than the three required fields.
    #[error("line has fewer than 3 fields: {line}")]
    MissingFields { line: String },

    /// A qualifying line whose code field is not a base-10 integer.
    #[error("invalid error code {token:?} in line: {line}")]
    InvalidCode {
        token: String,
        line: String,
        #[source]
        source: ParseIntError,
    },

    /// Input file missing or unreadable, or an output stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for rtperrfmt operations.
pub type Result<T> = std::result::Result<T, ReformatError>;
