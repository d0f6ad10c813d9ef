//! Command-line interface for rtperrfmt.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Header file to reformat; defaults to rtperrors.h, "-" reads stdin
    pub input: Option<PathBuf>,

    /// Alignment boundary override
    pub boundary: Option<usize>,

    /// Define-name prefix override
    pub prefix: Option<String>,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Suppress code-sequence mismatch warnings
    pub silent: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("rtperrfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Realigns #define ERR_RTP_xxx error code declarations")
        .arg(
            Arg::new("input")
                .help("Header file to reformat, \"-\" for stdin [default: rtperrors.h]")
                .value_name("FILE")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("boundary")
                .short('b')
                .long("boundary")
                .help("Column boundary for code alignment [default: 8]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("prefix")
                .short('p')
                .long("prefix")
                .help("Required define-name prefix [default: ERR_RTP]")
                .value_name("STR"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Config file path")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Suppress code-sequence mismatch warnings")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from the process environment
#[must_use]
pub fn parse_args() -> CliArgs {
    parse_args_from(std::env::args_os())
}

/// Parse CLI arguments from an explicit iterator (useful for tests)
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        input: matches.get_one::<PathBuf>("input").cloned(),
        boundary: matches.get_one::<usize>("boundary").copied(),
        prefix: matches.get_one::<String>("prefix").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        silent: matches.get_flag("silent"),
    }
}
