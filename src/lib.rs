//! rtperrfmt - Realigns `#define ERR_RTP_xxx` error code declarations
//!
//! Reads a header containing `#define ERR_RTP_xxx <code>` lines, checks that
//! the codes form a contiguous descending sequence starting at -1, and
//! re-emits the defines with all codes aligned to a common column.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::{Config, DEFAULT_INPUT_FILE};
pub use error::{ReformatError, Result};
pub use parser::ErrorDefine;
pub use process::{reformat, reformat_file};
