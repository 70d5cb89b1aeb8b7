//! Analyzer error definitions.
//!
//! Every failure the analyzer can report is a variant of [`TraceError`]:
//! 1. **Input errors:** A record that matched its pattern but carries an unparseable field.
//! 2. **Measurement errors:** The trace never reached the measured workload.
//! 3. **Environment errors:** I/O failures and unusable configuration.
//!
//! Lines that do not match a record pattern are not errors; the analyzer
//! passes them through untouched.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while decoding a trace or building its report.
#[derive(Debug, Error)]
pub enum TraceError {
    /// A line matched the record pattern but one field failed numeric conversion.
    ///
    /// Typical causes are a padding-only decimal field or a hex value wider
    /// than the field's integer type.
    #[error("malformed record at line {line}: field `{field}` has invalid value {text:?}")]
    MalformedRecord {
        /// 1-based input line number.
        line: usize,
        /// Name of the offending field.
        field: &'static str,
        /// Captured text that failed to convert.
        text: String,
    },

    /// End of input was reached without any measured retirement.
    #[error("no instructions observed; verify the trace reaches the measured workload")]
    NoInstructions,

    /// Instructions were retired but the measurement window spans zero cycles.
    #[error("measurement window spans zero cycles ({instructions} instruction(s) retired at the start cycle)")]
    EmptyWindow {
        /// Instructions counted inside the empty window.
        instructions: u64,
    },

    /// Reading the trace or writing the pass-through stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// A configuration file could not be parsed.
    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A trace format name was not recognized.
    #[error("unknown trace format `{0}` (expected regfile, microcode or dasm)")]
    UnknownFormat(String),

    /// A boot-exit address was not a valid 32-bit hexadecimal value.
    #[error("invalid address `{0}` (expected a 32-bit hex value such as 0x80000000)")]
    InvalidAddress(String),
}
