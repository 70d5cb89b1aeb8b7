//! Instruction classification.
//!
//! Maps a raw instruction word to exactly one [`Category`]. Rules are tried in
//! a fixed order and the first match wins:
//! 1. **Full-word matches:** the bubble sentinel, then the canonical NOP.
//! 2. **Opcode sets:** the miscellaneous prefix (LUI), branch/jump, load/store.
//! 3. **Opcode map cell:** the integer arithmetic families (row and column).
//! 4. **Fallback:** everything else is miscellaneous.

use std::fmt;

use serde::Serialize;

use super::instruction::InstructionBits;
use super::opcodes::{
    ARITH_OPC_HI, ARITH_OPC_LO, BRANCH_JUMP_OPCODES, LOAD_STORE_OPCODES, MISC_PREFIX_OPCODES,
};
use crate::common::constants::{BUBBLE_INST, NOP_INST};

/// Coarse instruction category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Canonical `addi x0, x0, 0`.
    Nop,
    /// Machine-generated bubble word; no real work issued.
    Bubble,
    /// Integer register and immediate arithmetic/logic.
    Arithmetic,
    /// Loads and stores.
    LoadStore,
    /// Conditional branches and jumps.
    BranchJump,
    /// Everything else (LUI, AUIPC, FENCE, SYSTEM, floating point, unknown opcodes).
    Misc,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 6;

    /// Every category, in reporting order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Bubble,
        Self::Nop,
        Self::Arithmetic,
        Self::LoadStore,
        Self::BranchJump,
        Self::Misc,
    ];

    /// Dense index for per-category counter arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Bubble => 0,
            Self::Nop => 1,
            Self::Arithmetic => 2,
            Self::LoadStore => 3,
            Self::BranchJump => 4,
            Self::Misc => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nop => "nop",
            Self::Bubble => "bubble",
            Self::Arithmetic => "arithmetic",
            Self::LoadStore => "load/store",
            Self::BranchJump => "branch/jump",
            Self::Misc => "misc",
        };
        f.write_str(name)
    }
}

/// Classifies a raw instruction word.
///
/// Total and deterministic: every `u32` yields exactly one category.
pub fn classify(inst: u32) -> Category {
    if inst == BUBBLE_INST {
        return Category::Bubble;
    }
    if inst == NOP_INST {
        return Category::Nop;
    }

    let opcode = inst.opcode();
    if MISC_PREFIX_OPCODES.contains(&opcode) {
        Category::Misc
    } else if BRANCH_JUMP_OPCODES.contains(&opcode) {
        Category::BranchJump
    } else if LOAD_STORE_OPCODES.contains(&opcode) {
        Category::LoadStore
    } else if ARITH_OPC_LO.contains(&inst.opc_lo()) && ARITH_OPC_HI.contains(&inst.opc_hi()) {
        Category::Arithmetic
    } else {
        Category::Misc
    }
}
