//! Decoded trace records.

/// Register-file writeback and operand state for one cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFileFields {
    /// Writeback destination register.
    pub rd: u8,
    /// Data written to `rd`.
    pub wdata: u32,
    /// Writeback enable.
    pub wen: bool,
    /// Operand 1 register address.
    pub rs1: u8,
    /// Operand 1 data.
    pub rs1_data: u32,
    /// Operand 2 register address.
    pub rs2: u8,
    /// Operand 2 data.
    pub rs2_data: u32,
    /// Stall/kill flag (`S`, `K`, `F`, `H`), `None` when blank.
    pub stall: Option<char>,
    /// Next-PC select (`B`, `J`, `R`, `E`, `M`), `None` for PC+4.
    pub pc_sel: Option<char>,
    /// Instruction raised an exception.
    pub exception: bool,
}

/// Microcoded-machine state for one cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MicrocodeFields {
    /// Micro-program counter.
    pub upc: u32,
    /// Value driven on the bus.
    pub bus: u32,
    /// Selected register (e.g. `PC`, `RS1`, `RD`).
    pub reg_sel: String,
    /// Memory address register.
    pub mem_addr: u32,
}

/// Format-specific part of a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuxFields {
    /// Register-file layout.
    RegisterFile(RegisterFileFields),
    /// Microcode layout.
    Microcode(MicrocodeFields),
    /// Layout without auxiliary fields.
    None,
}

/// One pipeline-cycle record.
///
/// Built by the decoder from a single matching line and consumed once by the
/// accumulator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceLine {
    /// Cycle timestamp (tick ordinal for layouts without one).
    pub cycle: u64,
    /// An instruction completed this cycle.
    pub retire: bool,
    /// Program counter of the instruction in the retire slot.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Disassembly text, trailing whitespace removed.
    pub disasm: String,
    /// Format-specific fields.
    pub aux: AuxFields,
}
