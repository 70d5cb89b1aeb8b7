//! Instruction Set Helpers.
//!
//! Only the parts of the RISC-V encoding needed to bucket retired
//! instructions: the major opcode field and its sub-fields, the named opcode
//! constants, and the classifier built on top of them.

/// Priority-ordered instruction classifier.
pub mod classify;

/// Instruction word field extraction.
pub mod instruction;

/// Base integer major opcodes and the opcode sets used for classification.
pub mod opcodes;

pub use classify::{Category, classify};
pub use instruction::InstructionBits;
