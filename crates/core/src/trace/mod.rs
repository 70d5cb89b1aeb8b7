//! Trace decoding and the single-pass analyzer loop.
//!
//! # Structure
//!
//! - `format`: Layout descriptors (token tables) for every supported trace format.
//! - `decoder`: Pattern matcher and typed field conversion.
//! - `line`: The decoded [`TraceLine`] record.
//!
//! [`analyze`] ties them to the accumulator: each input line is decoded,
//! records update [`TraceStats`], and everything else is written to the
//! pass-through stream byte for byte.

/// Pattern matching and field conversion.
pub mod decoder;

/// Trace layout descriptors.
pub mod format;

/// Decoded trace records.
pub mod line;

use std::io::{BufRead, Write};
use std::str;

use tracing::info;

pub use decoder::Decoder;
pub use format::TraceFormat;
pub use line::TraceLine;

use crate::common::error::TraceError;
use crate::config::AnalyzerConfig;
use crate::stats::TraceStats;

/// Runs one pass over `reader`.
///
/// Non-record lines (and record lines, when the configuration echoes them)
/// are copied to `passthrough` in input order with their original line
/// endings. The returned accumulator is final; build a
/// [`Report`](crate::report::Report) from it.
///
/// # Errors
///
/// [`TraceError::MalformedRecord`] aborts the pass at the offending line;
/// [`TraceError::Io`] covers read and write failures.
pub fn analyze<R, W>(
    config: &AnalyzerConfig,
    mut reader: R,
    passthrough: &mut W,
) -> Result<TraceStats, TraceError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut decoder = Decoder::new(config.format);
    let mut stats = TraceStats::new(config.start_condition());
    let echo_records = config.echoes_records();

    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        // Records are ASCII; anything else is console output and passes through.
        let record = match str::from_utf8(&buf) {
            Ok(text) => decoder.decode(text.trim_end_matches(['\n', '\r']), line_no)?,
            Err(_) => None,
        };
        let echo = match record {
            Some(record) => {
                stats.observe(&record);
                echo_records
            }
            None => true,
        };
        if echo {
            passthrough.write_all(&buf)?;
        }
    }
    passthrough.flush()?;

    info!(
        format = %config.format,
        lines = line_no,
        records = decoder.records(),
        collecting = stats.is_collecting(),
        cycles = stats.cycles,
        instructions = stats.instructions,
        bubbles = stats.bubbles,
        "trace pass complete"
    );
    Ok(stats)
}
