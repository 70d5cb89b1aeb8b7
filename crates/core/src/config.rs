//! Configuration for the trace analyzer.
//!
//! This module defines the settings that parameterize one analysis run. It provides:
//! 1. **Defaults:** Register-file layout, gated on the boot-exit address.
//! 2. **Start conditions:** Where the measurement window opens.
//! 3. **Loading:** JSON deserialization from a string or file; the CLI layers its flags on top.
//!
//! # Example
//!
//! ```json
//! {
//!   "format": "microcode",
//!   "start": { "boot_exit": { "pc": "0x80000000" } },
//!   "echo_records": false
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::common::constants::BOOT_EXIT_PC;
use crate::common::error::TraceError;
use crate::trace::format::TraceFormat;

/// Condition that opens the measurement window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartCondition {
    /// Open on the first retirement at `pc`; that line is counted.
    BootExit {
        /// Boot-exit address; accepts a JSON number or a hex string.
        #[serde(deserialize_with = "deserialize_address")]
        pc: u32,
    },
    /// Open before the first record, with a start cycle of zero.
    Immediate,
}

impl Default for StartCondition {
    fn default() -> Self {
        Self::BootExit { pc: BOOT_EXIT_PC }
    }
}

/// Settings for one analysis run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Trace line layout.
    pub format: TraceFormat,

    /// Start condition; `None` uses the format's default.
    pub start: Option<StartCondition>,

    /// Echo record lines to the pass-through stream; `None` uses the format's default.
    pub echo_records: Option<bool>,
}

impl AnalyzerConfig {
    /// Creates a configuration for `format` with every other setting defaulted.
    pub fn for_format(format: TraceFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Effective start condition.
    pub fn start_condition(&self) -> StartCondition {
        self.start.unwrap_or_else(|| self.format.default_start())
    }

    /// Effective echo policy for record lines.
    pub fn echoes_records(&self) -> bool {
        self.echo_records
            .unwrap_or_else(|| self.format.echoes_records())
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON, unknown keys or
    /// out-of-range addresses.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// [`TraceError::Io`] if the file cannot be read, [`TraceError::Config`]
    /// if its contents do not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|source| TraceError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Parses a 32-bit address written as hex, with or without a `0x` prefix.
///
/// Underscores are accepted as digit separators (`0x8000_0000`).
///
/// # Errors
///
/// [`TraceError::InvalidAddress`] when the text is not hex or exceeds 32 bits.
pub fn parse_address(text: &str) -> Result<u32, TraceError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .replace('_', "");
    u32::from_str_radix(&digits, 16).map_err(|_| TraceError::InvalidAddress(text.to_owned()))
}

fn deserialize_address<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Address {
        Number(u32),
        Text(String),
    }

    match Address::deserialize(deserializer)? {
        Address::Number(n) => Ok(n),
        Address::Text(s) => parse_address(&s).map_err(serde::de::Error::custom),
    }
}
