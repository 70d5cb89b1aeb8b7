//! Global Analyzer Constants.
//!
//! Full-word encodings that the classifier compares against before looking at
//! any opcode bits, and the address that marks the end of the boot ROM.

/// Canonical NOP: `addi x0, x0, 0`.
///
/// Shares its opcode with OP-IMM, so it must be matched as a whole word.
pub const NOP_INST: u32 = 0x0000_0013;

/// Machine-generated bubble: `xor x0, x0, x0`.
///
/// The pipeline injects this word into a slot that issued no real work.
pub const BUBBLE_INST: u32 = 0x0000_4033;

/// Default boot-exit address (start of RAM, where the workload is loaded).
pub const BOOT_EXIT_PC: u32 = 0x8000_0000;
