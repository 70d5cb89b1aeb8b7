//! Instruction word field extraction.
//!
//! The major opcode occupies bits 0-6 of every 32-bit RISC-V instruction.
//! Bits 2-4 (`opc_lo`) and 5-6 (`opc_hi`) index the row and column of the
//! major opcode map.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for the opcode map row (bits 2-4, after shifting).
pub const OPC_LO_MASK: u32 = 0x7;
/// Bit mask for the opcode map column (bits 5-6, after shifting).
pub const OPC_HI_MASK: u32 = 0x3;

/// Trait for extracting the opcode fields from an encoded instruction.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts bits 2-4 of the opcode (the opcode map row).
    ///
    /// `0b100` selects OP-IMM/OP, `0b110` selects OP-IMM-32/OP-32.
    fn opc_lo(&self) -> u32;

    /// Extracts bits 5-6 of the opcode (the opcode map column).
    fn opc_hi(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn opc_lo(&self) -> u32 {
        (self >> 2) & OPC_LO_MASK
    }

    #[inline(always)]
    fn opc_hi(&self) -> u32 {
        (self >> 5) & OPC_HI_MASK
    }
}
