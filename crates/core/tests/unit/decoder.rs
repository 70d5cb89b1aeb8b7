//! Line decoder tests.
//!
//! Verifies field extraction for each layout, the no-match path for
//! non-record lines, and the fatal path for malformed values inside an
//! otherwise well-shaped record.

use pretty_assertions::assert_eq;
use rstest::rstest;

use pipetrace_core::TraceError;
use pipetrace_core::trace::line::{AuxFields, MicrocodeFields, RegisterFileFields};
use pipetrace_core::trace::{Decoder, TraceFormat, TraceLine};

use crate::common::builder::{MicrocodeLine, RegfileLine};

fn decode_one(format: TraceFormat, line: &str) -> Result<Option<TraceLine>, TraceError> {
    Decoder::new(format).decode(line, 1)
}

#[test]
fn regfile_record_fields() {
    let line = RegfileLine::new(1234)
        .retire(0x8000_0010, 0x0001_2503)
        .writeback(10, 0xdead_beef)
        .flags('S', 'B', 'X')
        .disasm("lw a0, 0(sp)")
        .render();

    let record = decode_one(TraceFormat::RegisterFile, &line)
        .unwrap()
        .unwrap();

    assert_eq!(
        record,
        TraceLine {
            cycle: 1234,
            retire: true,
            pc: 0x8000_0010,
            inst: 0x0001_2503,
            disasm: "lw a0, 0(sp)".to_owned(),
            aux: AuxFields::RegisterFile(RegisterFileFields {
                rd: 10,
                wdata: 0xdead_beef,
                wen: true,
                rs1: 2,
                rs1_data: 0x8000_0000,
                rs2: 0,
                rs2_data: 0,
                stall: Some('S'),
                pc_sel: Some('B'),
                exception: true,
            }),
        }
    );
}

#[test]
fn regfile_literal_line_from_simulator() {
    let line = "Cyc=        17 [0] pc=[00002010] W[r 0=00000000][0] Op1=[r 0][00000000] Op2=[r 0][00000000] inst=[00004033] K   bubble";
    let record = decode_one(TraceFormat::RegisterFile, line)
        .unwrap()
        .unwrap();
    assert_eq!(record.cycle, 17);
    assert!(!record.retire);
    assert_eq!(record.pc, 0x2010);
    assert_eq!(record.inst, 0x4033);
    assert_eq!(record.disasm, "bubble");
    let AuxFields::RegisterFile(aux) = record.aux else {
        panic!("expected register-file fields");
    };
    assert_eq!(aux.stall, Some('K'));
    assert_eq!(aux.pc_sel, None);
    assert!(!aux.exception);
}

#[test]
fn blank_flag_columns_read_as_none() {
    let line = RegfileLine::new(5).retire(0x100, 0x13).render();
    let record = decode_one(TraceFormat::RegisterFile, &line)
        .unwrap()
        .unwrap();
    let AuxFields::RegisterFile(aux) = record.aux else {
        panic!("expected register-file fields");
    };
    assert_eq!((aux.stall, aux.pc_sel, aux.exception), (None, None, false));
}

#[test]
fn trailing_carriage_return_is_not_part_of_disasm() {
    let line = format!("{}\r", RegfileLine::new(3).disasm("addi a0, a0, 1").render());
    let record = decode_one(TraceFormat::RegisterFile, &line)
        .unwrap()
        .unwrap();
    assert_eq!(record.disasm, "addi a0, a0, 1");
}

#[test]
fn microcode_record_fields() {
    let line = MicrocodeLine::new(99)
        .retire(0x8000_0000, 0x0000_0013)
        .micro(0x1f, 0x4, "RS1")
        .mem_addr(0x8000_0004)
        .render();

    let record = decode_one(TraceFormat::Microcode, &line)
        .unwrap()
        .unwrap();

    assert_eq!(record.cycle, 99);
    assert!(record.retire);
    assert_eq!(record.pc, 0x8000_0000);
    assert_eq!(record.inst, 0x13);
    assert_eq!(record.disasm, "DASM(00000013)");
    assert_eq!(
        record.aux,
        AuxFields::Microcode(MicrocodeFields {
            upc: 0x1f,
            bus: 0x4,
            reg_sel: "RS1".to_owned(),
            mem_addr: 0x8000_0004,
        })
    );
}

#[test]
fn formats_do_not_cross_match() {
    let regfile = RegfileLine::new(1).render();
    let microcode = MicrocodeLine::new(1).render();
    assert!(decode_one(TraceFormat::Microcode, &regfile).unwrap().is_none());
    assert!(decode_one(TraceFormat::RegisterFile, &microcode).unwrap().is_none());
}

#[test]
fn dasm_ticks_are_numbered_and_bubbles_do_not_retire() {
    let mut decoder = Decoder::new(TraceFormat::Dasm);
    let first = decoder
        .decode("C0:          4 [1] pc=[80000000] DASM(00000013)", 1)
        .unwrap()
        .unwrap();
    assert!(decoder.decode("core halted", 2).unwrap().is_none());
    let second = decoder
        .decode("C0:          5 [0] pc=[80000004] DASM(00004033)", 3)
        .unwrap()
        .unwrap();

    assert_eq!((first.cycle, first.retire, first.inst), (1, true, 0x13));
    assert_eq!((second.cycle, second.retire, second.inst), (2, false, 0x4033));
    assert_eq!(second.aux, AuxFields::None);
    assert_eq!(decoder.records(), 2);
}

#[rstest]
#[case::blank("")]
#[case::banner("*** PASSED ***")]
#[case::htif("Instantiated HTIF.")]
#[case::ipc("# IPC: 0.812345")]
#[case::truncated("Cyc=   12 [1] pc=[80000000] W[r 1=00000000][1]")]
#[case::uppercase_hex(
    "Cyc=1 [1] pc=[8000000A] W[r 1=0][1] Op1=[r 0][0] Op2=[r 0][0] inst=[13]     nop"
)]
#[case::bad_retire_bit(
    "Cyc=1 [2] pc=[0] W[r 1=0][1] Op1=[r 0][0] Op2=[r 0][0] inst=[13]     nop"
)]
#[case::missing_disasm(
    "Cyc=1 [1] pc=[0] W[r 1=0][1] Op1=[r 0][0] Op2=[r 0][0] inst=[13]    "
)]
fn non_records_do_not_match(#[case] line: &str) {
    assert!(decode_one(TraceFormat::RegisterFile, line).unwrap().is_none());
}

#[rstest]
#[case::padding_only_cycle(
    "Cyc=    [1] pc=[0] W[r 1=0][1] Op1=[r 0][0] Op2=[r 0][0] inst=[13]     nop",
    "cycle"
)]
#[case::pc_too_wide(
    "Cyc=1 [1] pc=[180000000] W[r 1=0][1] Op1=[r 0][0] Op2=[r 0][0] inst=[13]     nop",
    "pc"
)]
#[case::inst_too_wide(
    "Cyc=1 [1] pc=[0] W[r 1=0][1] Op1=[r 0][0] Op2=[r 0][0] inst=[123456789]     nop",
    "inst"
)]
#[case::register_too_wide(
    "Cyc=1 [1] pc=[0] W[r999=0][1] Op1=[r 0][0] Op2=[r 0][0] inst=[13]     nop",
    "rd"
)]
#[case::register_inner_space(
    "Cyc=1 [1] pc=[0] W[r 1=0][1] Op1=[r1 2][0] Op2=[r 0][0] inst=[13]     nop",
    "rs1"
)]
fn malformed_fields_are_fatal(#[case] line: &str, #[case] expected_field: &str) {
    match Decoder::new(TraceFormat::RegisterFile).decode(line, 42) {
        Err(TraceError::MalformedRecord { line, field, .. }) => {
            assert_eq!(line, 42);
            assert_eq!(field, expected_field);
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn malformed_record_carries_offending_text() {
    let line = "Cyc=1 [1] pc=[0] upc=[0] Bus=[0] RegSel=[PC] MemAddr=[fffffffff] inst=[13] nop";
    let err = decode_one(TraceFormat::Microcode, line).unwrap_err();
    assert!(matches!(
        err,
        TraceError::MalformedRecord { field: "mem_addr", ref text, .. } if text == "fffffffff"
    ));
}
