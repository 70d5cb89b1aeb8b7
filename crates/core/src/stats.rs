//! Trace statistics collection.
//!
//! This module accumulates performance counters over decoded trace lines. It tracks:
//! 1. **Gating:** Nothing is counted until the configured start condition is met.
//! 2. **Cycles:** The window length, measured from the start cycle.
//! 3. **Retirement:** Retired instructions, split by [`Category`].
//! 4. **Bubbles:** Cycles in which nothing retired.

use tracing::debug;

use crate::config::StartCondition;
use crate::isa::classify::{Category, classify};
use crate::trace::line::TraceLine;

/// Collection phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Start condition not met yet; lines are ignored.
    Waiting,
    /// Counting; never reverts to `Waiting`.
    Collecting {
        /// Cycle of the line that opened the window.
        start_cycle: u64,
    },
}

/// Statistics accumulated over one trace.
///
/// Owned by the analyzer loop, updated once per record and read once at end
/// of input.
#[derive(Clone, Debug)]
pub struct TraceStats {
    start: StartCondition,
    phase: Phase,
    /// Window length: last collected cycle minus the start cycle.
    pub cycles: u64,
    /// Instructions retired inside the window (NOPs included).
    pub instructions: u64,
    /// Cycles inside the window in which nothing retired.
    pub bubbles: u64,
    /// Per-category counts, indexed by [`Category::index`].
    counts: [u64; Category::COUNT],
}

impl TraceStats {
    /// Creates an empty accumulator gated by `start`.
    ///
    /// With [`StartCondition::Immediate`] the window is open from the outset
    /// with a start cycle of zero.
    pub const fn new(start: StartCondition) -> Self {
        let phase = match start {
            StartCondition::Immediate => Phase::Collecting { start_cycle: 0 },
            StartCondition::BootExit { .. } => Phase::Waiting,
        };
        Self {
            start,
            phase,
            cycles: 0,
            instructions: 0,
            bubbles: 0,
            counts: [0; Category::COUNT],
        }
    }

    /// Current collection phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the start condition has been met.
    pub const fn is_collecting(&self) -> bool {
        matches!(self.phase, Phase::Collecting { .. })
    }

    /// Count for one category.
    ///
    /// Bubble-sentinel words that retire are counted under
    /// [`Category::Bubble`]; `retire == false` cycles only reach `bubbles`.
    pub const fn count(&self, category: Category) -> u64 {
        self.counts[category.index()]
    }

    /// Applies one decoded record.
    pub fn observe(&mut self, line: &TraceLine) {
        if let (Phase::Waiting, StartCondition::BootExit { pc }) = (self.phase, self.start) {
            if !(line.retire && line.pc == pc) {
                return;
            }
            debug!(cycle = line.cycle, pc = line.pc, "boot exit reached, collecting");
            self.phase = Phase::Collecting {
                start_cycle: line.cycle,
            };
        }
        let Phase::Collecting { start_cycle } = self.phase else {
            return;
        };

        if line.retire {
            let category = classify(line.inst);
            self.counts[category.index()] += 1;
            if category == Category::Bubble {
                self.bubbles += 1;
            } else {
                self.instructions += 1;
            }
        } else {
            self.bubbles += 1;
        }

        self.cycles = line.cycle.saturating_sub(start_cycle);
    }
}

impl Default for TraceStats {
    fn default() -> Self {
        Self::new(StartCondition::default())
    }
}
