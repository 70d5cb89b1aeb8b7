//! Report tests.
//!
//! Rates, percentage denominators, text rendering and the fatal cases that
//! would otherwise divide by zero.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use pipetrace_core::common::{BOOT_EXIT_PC, NOP_INST};
use pipetrace_core::config::StartCondition;
use pipetrace_core::stats::TraceStats;
use pipetrace_core::trace::TraceLine;
use pipetrace_core::trace::line::AuxFields;
use pipetrace_core::{Report, TraceError};

fn record(cycle: u64, retire: bool, pc: u32, inst: u32) -> TraceLine {
    TraceLine {
        cycle,
        retire,
        pc,
        inst,
        disasm: String::new(),
        aux: AuxFields::None,
    }
}

/// NOP at the boundary (cycle 100), a load at 102, a bubble at 103.
fn scenario_stats() -> TraceStats {
    let mut stats = TraceStats::new(StartCondition::BootExit { pc: BOOT_EXIT_PC });
    stats.observe(&record(100, true, BOOT_EXIT_PC, NOP_INST));
    stats.observe(&record(102, true, 0x8000_0004, 0x0000_0003));
    stats.observe(&record(103, false, 0x8000_0008, 0x0000_4033));
    stats
}

#[test]
fn scenario_counts_and_rates() {
    let report = Report::from_stats(&scenario_stats()).unwrap();

    assert_eq!(report.counts.instructions, 2);
    assert_eq!(report.counts.bubbles, 1);
    assert_eq!(report.counts.cycles, 3);
    assert_eq!(report.counts.nop, 1);
    assert_eq!(report.counts.load_store, 1);
    assert!((report.cpi - 1.5).abs() < 1e-12);
    assert_eq!(format!("{:.3}", report.ipc), "0.667");
}

#[test]
fn percentage_denominators() {
    let report = Report::from_stats(&scenario_stats()).unwrap();
    let b = report.breakdown;

    // Over cycles.
    assert!((b.bubbles - 100.0 / 3.0).abs() < 1e-9);
    assert!((b.nop - 100.0 / 3.0).abs() < 1e-9);
    // Over instructions.
    assert!((b.load_store - 50.0).abs() < 1e-9);
    assert!(b.arithmetic.abs() < 1e-12);
    assert!(b.branch_jump.abs() < 1e-12);
    assert!(b.misc.abs() < 1e-12);
}

#[test]
fn text_rendering() {
    let report = Report::from_stats(&scenario_stats()).unwrap();
    let expected = "
Stats:

CPI          : 1.500
IPC          : 0.667
Cycles       : 3
Instructions : 2
Bubbles      : 1

Instruction Breakdown:
% Bubbles     : 33.333 %
% Nop         : 33.333 %
% Arithmetic  : 0.000 %
% Ld/St       : 50.000 %
% Branch/Jump : 0.000 %
% Misc.       : 0.000 %
";
    assert_eq!(report.to_string(), expected);
}

#[test]
fn rendering_is_idempotent() {
    let stats = scenario_stats();
    let report = Report::from_stats(&stats).unwrap();
    assert_eq!(report.to_string(), report.to_string());
    assert_eq!(Report::from_stats(&stats).unwrap(), report);
}

#[test]
fn json_rendering() {
    let report = Report::from_stats(&scenario_stats()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(value["counts"]["instructions"], 2);
    assert_eq!(value["counts"]["load_store"], 1);
    assert_eq!(value["cpi"], 1.5);
    assert_eq!(value["breakdown"]["load_store"], 50.0);
}

#[test]
fn never_collected_is_fatal() {
    let mut stats = TraceStats::new(StartCondition::BootExit { pc: BOOT_EXIT_PC });
    stats.observe(&record(1, true, 0x1000, NOP_INST));
    assert!(matches!(
        Report::from_stats(&stats),
        Err(TraceError::NoInstructions)
    ));
}

#[test]
fn only_bubbles_after_boundary_is_fatal() {
    let mut stats = TraceStats::new(StartCondition::Immediate);
    stats.observe(&record(1, false, 0, NOP_INST));
    stats.observe(&record(2, false, 0, NOP_INST));
    assert!(matches!(
        Report::from_stats(&stats),
        Err(TraceError::NoInstructions)
    ));
}

#[test]
fn zero_cycle_window_is_fatal() {
    let mut stats = TraceStats::new(StartCondition::BootExit { pc: BOOT_EXIT_PC });
    stats.observe(&record(7, true, BOOT_EXIT_PC, NOP_INST));
    assert!(matches!(
        Report::from_stats(&stats),
        Err(TraceError::EmptyWindow { instructions: 1 })
    ));
}

proptest! {
    #[test]
    fn cpi_and_ipc_are_reciprocal(
        retire_pattern in prop::collection::vec(any::<bool>(), 1..300),
    ) {
        let mut stats = TraceStats::new(StartCondition::BootExit { pc: BOOT_EXIT_PC });
        stats.observe(&record(0, true, BOOT_EXIT_PC, 0x0000_0033));
        for (i, retire) in retire_pattern.iter().enumerate() {
            stats.observe(&record(i as u64 + 1, *retire, 0x8000_0100, 0x0000_0063));
        }
        let report = Report::from_stats(&stats).unwrap();
        prop_assert!((report.cpi * report.ipc - 1.0).abs() < 1e-9);

        let mix = report.breakdown.nop
            * report.counts.cycles as f64 / report.counts.instructions as f64
            + report.breakdown.arithmetic
            + report.breakdown.load_store
            + report.breakdown.branch_jump
            + report.breakdown.misc;
        prop_assert!((mix - 100.0).abs() < 1e-6);
    }
}
