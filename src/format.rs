//! Column alignment of the collected defines.
//!
//! The alignment width is the longest name plus its separating space,
//! rounded up to the next boundary multiple. Every define in a run shares
//! that width, so the codes line up in one column.

use std::io::Write;

use crate::error::Result;
use crate::parser::ErrorDefine;

/// Compute the shared alignment width for a set of defines.
///
/// Returns the maximum of `len(name) + 1` over all defines, rounded up to
/// the next multiple of `boundary` when not already one. Zero for an empty
/// set.
#[must_use]
pub fn aligned_width(defines: &[ErrorDefine], boundary: usize) -> usize {
    let maxlen = defines.iter().map(|d| d.name.len() + 1).max().unwrap_or(0);
    if maxlen % boundary == 0 {
        maxlen
    } else {
        (maxlen / boundary + 1) * boundary
    }
}

/// Render one define with `width - len(name)` spaces between name and code.
#[must_use]
pub fn render_define(define: &ErrorDefine, width: usize) -> String {
    let pad = width.saturating_sub(define.name.len());
    format!("#define {}{}{}", define.name, " ".repeat(pad), define.code)
}

/// Write all defines, one per line, in their recorded order.
pub fn emit_defines<W: Write>(out: &mut W, defines: &[ErrorDefine], width: usize) -> Result<()> {
    for define in defines {
        writeln!(out, "{}", render_define(define, width))?;
    }
    Ok(())
}
