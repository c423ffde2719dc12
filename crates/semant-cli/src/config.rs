// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `coolsem.toml` configuration.
//!
//! The optional `[semant]` table enables the optional checks:
//!
//! ```toml
//! [semant]
//! require_main = true
//! check_signature_types = false
//! ```
//!
//! Command-line flags can only switch checks on, never off.

use camino::Utf8Path;
use cool_semant_core::SemantOptions;
use miette::{Context, IntoDiagnostic, Result};
use serde::Deserialize;
use std::fs;
use tracing::debug;

/// Configuration file looked for next to the program.
pub const CONFIG_FILE: &str = "coolsem.toml";

/// The top-level structure parsed from `coolsem.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The `[semant]` section.
    #[serde(default)]
    pub semant: SemantOptions,
}

/// Checks switched on from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagOverrides {
    pub require_main: bool,
    pub check_types: bool,
}

/// Parse a configuration file.
pub fn parse_config(path: &Utf8Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read config '{path}'"))?;

    toml::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse config '{path}'"))
}

/// Look for `coolsem.toml` in `dir` and parse it if found.
pub fn find_config(dir: &Utf8Path) -> Result<Option<Config>> {
    let config_path = dir.join(CONFIG_FILE);
    if config_path
        .try_exists()
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to stat config '{config_path}'"))?
    {
        parse_config(&config_path).map(Some)
    } else {
        Ok(None)
    }
}

/// Work out the options for checking `program`.
///
/// An explicit config path must exist. Otherwise `coolsem.toml` next to the
/// program is used if present. Flags are applied last.
pub fn resolve_options(
    program: &Utf8Path,
    explicit: Option<&Utf8Path>,
    flags: FlagOverrides,
) -> Result<SemantOptions> {
    let config = match explicit {
        Some(path) => parse_config(path)?,
        None => {
            let dir = program.parent().unwrap_or(Utf8Path::new("."));
            find_config(dir)?.unwrap_or_default()
        }
    };

    let mut options = config.semant;
    if flags.require_main {
        options = options.with_require_main(true);
    }
    if flags.check_types {
        options = options.with_check_signature_types(true);
    }
    debug!(?options, "resolved options");
    Ok(options)
}
