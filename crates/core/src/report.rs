//! Statistics report.
//!
//! A [`Report`] is a frozen, derived view of [`TraceStats`]: rates and
//! percentages computed once, then rendered as text (`Display`) or JSON
//! (`Serialize`). Bubble and NOP shares are taken over cycles; the
//! instruction mix is taken over retired instructions.

use std::fmt;

use serde::Serialize;

use crate::common::error::TraceError;
use crate::isa::classify::Category;
use crate::stats::TraceStats;

/// Raw counters copied out of the accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Counts {
    /// Window length in cycles.
    pub cycles: u64,
    /// Retired instructions.
    pub instructions: u64,
    /// Non-retiring cycles.
    pub bubbles: u64,
    /// Retired NOPs.
    pub nop: u64,
    /// Arithmetic instructions.
    pub arithmetic: u64,
    /// Load/store instructions.
    pub load_store: u64,
    /// Branch/jump instructions.
    pub branch_jump: u64,
    /// Miscellaneous instructions.
    pub misc: u64,
}

/// Percentage breakdown.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Breakdown {
    /// Bubbles, % of cycles.
    pub bubbles: f64,
    /// NOPs, % of cycles.
    pub nop: f64,
    /// Arithmetic, % of instructions.
    pub arithmetic: f64,
    /// Load/store, % of instructions.
    pub load_store: f64,
    /// Branch/jump, % of instructions.
    pub branch_jump: f64,
    /// Miscellaneous, % of instructions.
    pub misc: f64,
}

/// Final statistics for one trace.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Report {
    /// Cycles per instruction.
    pub cpi: f64,
    /// Instructions per cycle.
    pub ipc: f64,
    /// Underlying counters.
    pub counts: Counts,
    /// Percentages.
    pub breakdown: Breakdown,
}

impl Report {
    /// Builds the report for a finished accumulator.
    ///
    /// # Errors
    ///
    /// [`TraceError::NoInstructions`] if nothing retired inside the window,
    /// [`TraceError::EmptyWindow`] if the window spans zero cycles. Either
    /// case would otherwise divide by zero.
    pub fn from_stats(stats: &TraceStats) -> Result<Self, TraceError> {
        if stats.instructions == 0 {
            return Err(TraceError::NoInstructions);
        }
        if stats.cycles == 0 {
            return Err(TraceError::EmptyWindow {
                instructions: stats.instructions,
            });
        }

        let counts = Counts {
            cycles: stats.cycles,
            instructions: stats.instructions,
            bubbles: stats.bubbles,
            nop: stats.count(Category::Nop),
            arithmetic: stats.count(Category::Arithmetic),
            load_store: stats.count(Category::LoadStore),
            branch_jump: stats.count(Category::BranchJump),
            misc: stats.count(Category::Misc),
        };
        let cyc = counts.cycles as f64;
        let instr = counts.instructions as f64;
        let pct = |n: u64, total: f64| 100.0 * n as f64 / total;

        Ok(Self {
            cpi: cyc / instr,
            ipc: instr / cyc,
            counts,
            breakdown: Breakdown {
                bubbles: pct(counts.bubbles, cyc),
                nop: pct(counts.nop, cyc),
                arithmetic: pct(counts.arithmetic, instr),
                load_store: pct(counts.load_store, instr),
                branch_jump: pct(counts.branch_jump, instr),
                misc: pct(counts.misc, instr),
            },
        })
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates the `serde_json` error; the report holds only numbers, so
    /// this does not fail in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.breakdown;
        writeln!(f)?;
        writeln!(f, "Stats:")?;
        writeln!(f)?;
        writeln!(f, "CPI          : {:.3}", self.cpi)?;
        writeln!(f, "IPC          : {:.3}", self.ipc)?;
        writeln!(f, "Cycles       : {}", self.counts.cycles)?;
        writeln!(f, "Instructions : {}", self.counts.instructions)?;
        writeln!(f, "Bubbles      : {}", self.counts.bubbles)?;
        writeln!(f)?;
        writeln!(f, "Instruction Breakdown:")?;
        writeln!(f, "% Bubbles     : {:.3} %", b.bubbles)?;
        writeln!(f, "% Nop         : {:.3} %", b.nop)?;
        writeln!(f, "% Arithmetic  : {:.3} %", b.arithmetic)?;
        writeln!(f, "% Ld/St       : {:.3} %", b.load_store)?;
        writeln!(f, "% Branch/Jump : {:.3} %", b.branch_jump)?;
        writeln!(f, "% Misc.       : {:.3} %", b.misc)
    }
}
