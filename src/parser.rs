//! Scanning of error-define declarations.
//!
//! This module extracts `#define ERR_RTP_xxx <code>` records from a header:
//! - [`ErrorDefine`]: one recorded name/code pair
//! - [`scan_defines`]: linear scan keeping qualifying lines in input order
//!   and checking the descending code sequence

use std::io::{BufRead, Write};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::error::{ReformatError, Result};

// First three whitespace-separated fields of a trimmed define line: the
// "#define" keyword, the name, and the code token. Anything after the third
// field (trailing comment text) is not captured.
static DEFINE_FIELDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s+(\S+)\s+(\S+)").unwrap());

/// One recorded error define
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDefine {
    /// Define name, e.g. `ERR_RTP_OUTOFMEM`
    pub name: String,
    /// Error code as parsed from the input, kept even on sequence mismatch
    pub code: i64,
}

/// Scan the input for qualifying lines and collect their defines.
///
/// A line qualifies when it contains the configured prefix as a substring.
/// Codes are expected to run -1, -2, ... in file order; a mismatch is
/// reported on `diag` and the parsed code is kept. The expected counter is
/// never resynchronized to the parsed value, so a single bad code also warns
/// on every later line.
pub fn scan_defines<R: BufRead, D: Write>(
    reader: R,
    diag: &mut D,
    config: &Config,
) -> Result<Vec<ErrorDefine>> {
    let mut defines = Vec::new();
    let mut expected: i64 = 0;

    for line in reader.lines() {
        let line = line?;
        if !line.contains(&config.prefix) {
            continue;
        }
        expected -= 1;

        let trimmed = line.trim();
        let caps =
            DEFINE_FIELDS_RE
                .captures(trimmed)
                .ok_or_else(|| ReformatError::MissingFields {
                    line: trimmed.to_string(),
                })?;
        let name = &caps[2];
        let token = &caps[3];
        let code: i64 = token.parse().map_err(|source| ReformatError::InvalidCode {
            token: token.to_string(),
            line: trimmed.to_string(),
            source,
        })?;

        if !name.starts_with(&config.prefix) {
            return Err(ReformatError::MalformedName {
                prefix: config.prefix.clone(),
                line: trimmed.to_string(),
            });
        }

        if code != expected {
            writeln!(
                diag,
                "WARNING: mismatch in error code for line (expected {expected}): {trimmed}"
            )?;
        }

        defines.push(ErrorDefine {
            name: name.to_string(),
            code,
        });
    }

    Ok(defines)
}
