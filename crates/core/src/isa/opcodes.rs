//! RISC-V Base Integer (I) Opcodes.
//!
//! Defines the major opcodes (bits 6-0) that the classifier distinguishes,
//! grouped into the sets it tests against. Several sets overlap on purpose
//! (LUI has `opc_lo == 0b101`, NOP is an OP-IMM word), so the classifier's
//! rule order decides the bucket.

/// Load instructions (LB, LH, LW, LBU, LHU).
pub const OP_LOAD: u32 = 0b0000011;

/// Memory ordering instructions (FENCE, FENCE.I).
pub const OP_MISC_MEM: u32 = 0b0001111;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b0010011;

/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u32 = 0b0010111;

/// 32-bit Immediate arithmetic (ADDIW, SLLIW, etc.) - RV64 only.
pub const OP_IMM_32: u32 = 0b0011011;

/// Store instructions (SB, SH, SW).
pub const OP_STORE: u32 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u32 = 0b0110011;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b0110111;

/// 32-bit Register-Register arithmetic (ADDW, SUBW, etc.) - RV64 only.
pub const OP_REG_32: u32 = 0b0111011;

/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b1100111;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b1101111;

/// System instructions (ECALL, EBREAK, CSR*, MRET).
pub const OP_SYSTEM: u32 = 0b1110011;

/// Opcodes bucketed as miscellaneous before any family check.
pub const MISC_PREFIX_OPCODES: &[u32] = &[OP_LUI];

/// Control-transfer opcodes.
pub const BRANCH_JUMP_OPCODES: &[u32] = &[OP_BRANCH, OP_JAL, OP_JALR];

/// Memory access opcodes; loads and stores share one bucket.
pub const LOAD_STORE_OPCODES: &[u32] = &[OP_LOAD, OP_STORE];

/// Opcode map rows (`opc_lo`) of the integer arithmetic families.
///
/// `0b100` covers OP-IMM and OP, `0b110` covers OP-IMM-32 and OP-32.
pub const ARITH_OPC_LO: &[u32] = &[0b100, 0b110];

/// Opcode map columns (`opc_hi`) of the integer arithmetic families.
///
/// Column `0b10` holds OP-FP and column `0b11` holds SYSTEM in the same rows.
pub const ARITH_OPC_HI: &[u32] = &[0b00, 0b01];
