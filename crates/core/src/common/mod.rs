//! Common utilities and types used throughout the trace analyzer.
//!
//! This module provides the building blocks shared by the decoder, the
//! classifier and the accumulator. It includes:
//! 1. **Constants:** Well-known instruction words and the default boot-exit address.
//! 2. **Error Handling:** The crate-wide `TraceError` type.

/// Common constants used throughout the analyzer.
pub mod constants;

/// Error types for decoding, configuration and reporting.
pub mod error;

pub use constants::{BOOT_EXIT_PC, BUBBLE_INST, NOP_INST};
pub use error::TraceError;
