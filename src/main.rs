//! rtperrfmt - Realigns `#define ERR_RTP_xxx` error code declarations

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use rtperrfmt::{parse_args, reformat, reformat_file, CliArgs, Config, DEFAULT_INPUT_FILE};

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = parse_args();
    let config = build_config(&args)?;

    let use_stdin = args.input.as_deref().is_some_and(|p| p.as_os_str() == "-");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Mismatch warnings go to stderr; --silent drops them entirely.
    // Fatal errors still surface through the returned Result either way.
    let mut diag: Box<dyn Write> = if args.silent {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    };

    if use_stdin {
        let stdin = io::stdin();
        reformat(stdin.lock(), &mut out, &mut diag, &config).context("failed to reformat stdin")?;
        return Ok(());
    }

    let path = args
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE));
    reformat_file(&path, &mut out, &mut diag, &config)
        .with_context(|| format!("failed to reformat {}", path.display()))?;

    Ok(())
}

/// Build configuration from CLI args and optional config file
fn build_config(args: &CliArgs) -> anyhow::Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        Config::from_toml_file(config_path)
            .with_context(|| format!("failed to load config {}", config_path.display()))?
    } else {
        Config::default()
    };

    // Override with CLI arguments
    if let Some(boundary) = args.boundary {
        config.boundary = boundary;
    }
    if let Some(prefix) = &args.prefix {
        config.prefix = prefix.clone();
    }

    // Validate configuration
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}
