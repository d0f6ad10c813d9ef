//! Configuration management for rtperrfmt.
//!
//! This module provides the [`Config`] struct which controls scanning and
//! alignment. Values come from, in increasing priority:
//! - built-in defaults
//! - a TOML file named with `-c/--config`
//! - CLI arguments
//!
//! There is no config auto-discovery: the tool reads nothing it is not
//! explicitly pointed at.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Header read from the current directory when no input file is given.
pub const DEFAULT_INPUT_FILE: &str = "rtperrors.h";

// Serde default functions
fn default_prefix() -> String {
    "ERR_RTP".to_string()
}
fn default_boundary() -> usize {
    8
}

/// Main configuration struct for rtperrfmt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prefix every define name must carry (default: "ERR_RTP").
    /// Lines containing this substring qualify for reformatting.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Column boundary the name-plus-space width is rounded up to (default: 8)
    #[serde(default = "default_boundary")]
    pub boundary: usize,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub prefix: Option<String>,
    pub boundary: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix: default_prefix(),
            boundary: default_boundary(),
        }
    }
}

impl Config {
    /// Maximum reasonable alignment boundary
    const MAX_BOUNDARY: usize = 64;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.prefix.is_empty() {
            return Some("prefix must not be empty".to_string());
        }
        if self.boundary == 0 {
            return Some("boundary must be at least 1".to_string());
        }
        if self.boundary > Self::MAX_BOUNDARY {
            return Some(format!(
                "boundary {} exceeds maximum of {}",
                self.boundary,
                Self::MAX_BOUNDARY
            ));
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = &partial.prefix {
            self.prefix = v.clone();
        }
        if let Some(v) = partial.boundary {
            self.boundary = v;
        }
    }
}
