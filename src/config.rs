use std::env;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Env var that disables all styling for this crate only.
pub const NO_COLOR_VAR: &str = "CONSOLE_REPORTER_NO_COLOR";
/// Env var that disables Unicode symbol translation.
pub const NO_SYMBOLS_VAR: &str = "CONSOLE_REPORTER_NO_SYMBOLS";

/// Per-reporter configuration, fixed at construction.
///
/// Only `noColor` and `noSymbols` are recognized. Any other field in a JSON
/// config object is ignored, so a runner can hand over its whole options
/// blob without filtering it first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReporterConfig {
    /// Bypass all foreground/style/background rendering.
    pub no_color: bool,
    /// Keep status glyphs as plain ASCII.
    pub no_symbols: bool,
}

impl ReporterConfig {
    pub fn new(no_color: bool, no_symbols: bool) -> Self {
        Self {
            no_color,
            no_symbols,
        }
    }

    /// Parse a config object such as `{"noColor": true}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid reporter config JSON")
    }

    /// Load configuration from environment variables.
    ///
    /// `NO_COLOR` (any non-empty value, per no-color.org) also disables color.
    /// The .env file is loaded by the binary before this is called.
    pub fn load() -> Result<Self> {
        let no_color_env = env::var("NO_COLOR").is_ok_and(|v| !v.is_empty());

        Ok(Self {
            no_color: no_color_env || read_flag(NO_COLOR_VAR)?,
            no_symbols: read_flag(NO_SYMBOLS_VAR)?,
        })
    }

    /// Apply command-line switches on top. Flags can only disable features.
    pub fn with_overrides(self, no_color: bool, no_symbols: bool) -> Self {
        Self {
            no_color: self.no_color || no_color,
            no_symbols: self.no_symbols || no_symbols,
        }
    }
}

fn read_flag(name: &str) -> Result<bool> {
    match env::var(name) {
        Ok(value) => parse_flag(&value).with_context(|| format!("{name} has an invalid value")),
        Err(_) => Ok(false),
    }
}

/// Interpret a boolean-ish env value. Empty counts as unset.
pub fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => anyhow::bail!("expected a boolean (1/0, true/false, yes/no), got `{other}`"),
    }
}
