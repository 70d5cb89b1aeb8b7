//! Pipeline trace analyzer library.
//!
//! This crate turns the per-cycle log of a RISC-V pipeline simulator into
//! aggregate performance figures. It provides:
//! 1. **Trace:** Format descriptors and a single decoder for every supported line layout.
//! 2. **ISA:** Opcode constants and the priority-ordered instruction classifier.
//! 3. **Stats:** The gated accumulator that counts cycles, retirements and bubbles.
//! 4. **Report:** CPI, IPC and instruction-mix rendering (text or JSON).
//! 5. **Config:** Analyzer settings with defaults and JSON loading.

/// Common types and constants (well-known instruction words, errors).
pub mod common;
/// Analyzer configuration (format selection, start condition, echo policy).
pub mod config;
/// Instruction set helpers (opcode fields, opcode sets, classifier).
pub mod isa;
/// Final statistics report (rates, percentages, rendering).
pub mod report;
/// Statistics accumulation over decoded trace lines.
pub mod stats;
/// Trace formats, line decoding and the single-pass analyzer loop.
pub mod trace;

/// Root configuration type; use `AnalyzerConfig::default()` or load it from JSON.
pub use crate::config::AnalyzerConfig;
/// Error type shared by every fallible operation in the crate.
pub use crate::common::TraceError;
/// Rendered statistics; build one with `Report::from_stats`.
pub use crate::report::Report;
/// Gated statistics accumulator.
pub use crate::stats::TraceStats;
/// Runs one full pass over a trace.
pub use crate::trace::analyze;
