//! Reformatting pipeline.
//!
//! A single linear pass: scan the reader for qualifying defines, compute the
//! shared alignment width, then emit. Emission starts only after the scan
//! has finished, so a fatal scan error produces no output at all.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::format::{aligned_width, emit_defines};
use crate::parser::scan_defines;

/// Reformat everything from `reader`, writing the aligned defines to `out`
/// and sequence-mismatch warnings to `diag`.
pub fn reformat<R: BufRead, W: Write, D: Write>(
    reader: R,
    out: &mut W,
    diag: &mut D,
    config: &Config,
) -> Result<()> {
    let defines = scan_defines(reader, diag, config)?;
    let width = aligned_width(&defines, config.boundary);
    emit_defines(out, &defines, width)
}

/// Reformat a header file on disk, writing to the given streams.
pub fn reformat_file<W: Write, D: Write>(
    path: &Path,
    out: &mut W,
    diag: &mut D,
    config: &Config,
) -> Result<()> {
    let file = File::open(path)?;
    reformat(BufReader::new(file), out, diag, config)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::ReformatError;

    fn run(input: &str) -> (Result<()>, String, String) {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let result = reformat(
            Cursor::new(input),
            &mut out,
            &mut diag,
            &Config::default(),
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
        )
    }

    #[test]
    fn test_reformat_realigns() {
        let input = "#define ERR_RTP_OUTOFMEM -1\n#define ERR_RTP_NOTHREADSUPPORT  -2\n";
        let (result, out, diag) = run(input);

        result.unwrap();
        assert_eq!(
            out,
            "#define ERR_RTP_OUTOFMEM        -1\n#define ERR_RTP_NOTHREADSUPPORT -2\n"
        );
        assert!(diag.is_empty());
    }

    #[test]
    fn test_fatal_scan_error_produces_no_output() {
        let input = "#define ERR_RTP_OUTOFMEM -1\n#define FOO_BAR_ERR_RTP -2\n";
        let (result, out, _) = run(input);

        assert!(matches!(result, Err(ReformatError::MalformedName { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_reformat_empty_input() {
        let (result, out, diag) = run("");
        result.unwrap();
        assert!(out.is_empty());
        assert!(diag.is_empty());
    }

    #[test]
    fn test_reformat_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let mut diag = Vec::new();

        let result = reformat_file(
            &dir.path().join("rtperrors.h"),
            &mut out,
            &mut diag,
            &Config::default(),
        );
        assert!(matches!(result, Err(ReformatError::Io(_))));
    }

    #[test]
    fn test_reformat_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rtperrors.h");
        std::fs::write(&path, "#define ERR_RTP_OUTOFMEM   -1\n").unwrap();

        let mut out = Vec::new();
        let mut diag = Vec::new();
        reformat_file(&path, &mut out, &mut diag, &Config::default()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#define ERR_RTP_OUTOFMEM        -1\n"
        );
    }
}
