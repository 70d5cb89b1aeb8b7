//! Trace line formats.
//!
//! Each supported simulator log layout is described as data: a static list of
//! [`Token`]s that the decoder interprets. Adding a layout means adding a
//! token table, not another parser.
//!
//! # Layouts
//!
//! * `regfile`: `Cyc= 12 [1] pc=[80000000] W[r 1=00000000][1] Op1=[r 0][00000000] Op2=[r 0][00000000] inst=[00000013]  S  addi zero, zero, 0`
//! * `microcode`: `Cyc= 12 [1] pc=[80000000] upc=[1f] Bus=[00000004] RegSel=[RS1] MemAddr=[80000000] inst=[00000013] addi zero, zero, 0`
//! * `dasm`: any line containing `DASM(00000013)`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::constants::BOOT_EXIT_PC;
use crate::common::error::TraceError;
use crate::config::StartCondition;

/// Set of characters a capture may consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Decimal digits plus the space used for column padding.
    Dec,
    /// Lowercase hexadecimal digits.
    Hex,
    /// `0` or `1`.
    Bit,
    /// ASCII letters, digits and underscore.
    Word,
    /// Any character; runs to end of line.
    Text,
    /// Exactly the listed characters.
    OneOf(&'static str),
}

impl CharClass {
    /// Returns whether `c` belongs to the class.
    #[inline]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Dec => c == ' ' || c.is_ascii_digit(),
            Self::Hex => c.is_ascii_digit() || ('a'..='f').contains(&c),
            Self::Bit => c == '0' || c == '1',
            Self::Word => c.is_ascii_alphanumeric() || c == '_',
            Self::Text => true,
            Self::OneOf(set) => set.contains(c),
        }
    }
}

/// A named field captured from a record line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Cycle timestamp.
    Cycle,
    /// Retire flag.
    Retire,
    /// Program counter.
    Pc,
    /// Writeback destination register.
    Rd,
    /// Writeback data.
    Wdata,
    /// Writeback enable.
    Wen,
    /// Operand 1 register address.
    Rs1,
    /// Operand 1 data.
    Rs1Data,
    /// Operand 2 register address.
    Rs2,
    /// Operand 2 data.
    Rs2Data,
    /// Raw instruction word.
    Inst,
    /// Stall/kill flag character.
    Stall,
    /// Next-PC select character.
    PcSel,
    /// Exception flag character.
    Exception,
    /// Micro-program counter.
    Upc,
    /// Bus value.
    Bus,
    /// Register-select name.
    RegSel,
    /// Memory address register.
    MemAddr,
    /// Disassembly text.
    Disasm,
}

impl Field {
    /// Number of distinct fields.
    pub const COUNT: usize = 19;

    /// Dense slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cycle => "cycle",
            Self::Retire => "retire",
            Self::Pc => "pc",
            Self::Rd => "rd",
            Self::Wdata => "wdata",
            Self::Wen => "wen",
            Self::Rs1 => "rs1",
            Self::Rs1Data => "rs1_data",
            Self::Rs2 => "rs2",
            Self::Rs2Data => "rs2_data",
            Self::Inst => "inst",
            Self::Stall => "stall",
            Self::PcSel => "pc_sel",
            Self::Exception => "exception",
            Self::Upc => "upc",
            Self::Bus => "bus",
            Self::RegSel => "reg_sel",
            Self::MemAddr => "mem_addr",
            Self::Disasm => "disasm",
        }
    }
}

/// One element of a record pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// Literal text that must appear verbatim.
    Lit(&'static str),
    /// One or more characters of the class, captured into the field.
    Run(Field, CharClass),
    /// Exactly one character of the class, captured into the field.
    Char(Field, CharClass),
}

/// Static description of a trace layout.
#[derive(Debug)]
pub struct FormatDescriptor {
    /// Layout this descriptor belongs to.
    pub kind: TraceFormat,
    /// Record pattern.
    pub tokens: &'static [Token],
    /// Pattern must match at the start of the line; otherwise it may match anywhere.
    pub anchored: bool,
}

use CharClass::{Bit, Dec, Hex, OneOf, Text, Word};
use Token::{Char, Lit, Run};

static REGFILE: FormatDescriptor = FormatDescriptor {
    kind: TraceFormat::RegisterFile,
    tokens: &[
        Lit("Cyc="),
        Run(Field::Cycle, Dec),
        Lit(" ["),
        Char(Field::Retire, Bit),
        Lit("] pc=["),
        Run(Field::Pc, Hex),
        Lit("] W[r"),
        Run(Field::Rd, Dec),
        Lit("="),
        Run(Field::Wdata, Hex),
        Lit("]["),
        Char(Field::Wen, Bit),
        Lit("] Op1=[r"),
        Run(Field::Rs1, Dec),
        Lit("]["),
        Run(Field::Rs1Data, Hex),
        Lit("] Op2=[r"),
        Run(Field::Rs2, Dec),
        Lit("]["),
        Run(Field::Rs2Data, Hex),
        Lit("] inst=["),
        Run(Field::Inst, Hex),
        Lit("] "),
        Char(Field::Stall, OneOf("SKFH ")),
        Char(Field::PcSel, OneOf("BJREM ")),
        Char(Field::Exception, OneOf("X ")),
        Lit(" "),
        Run(Field::Disasm, Text),
    ],
    anchored: true,
};

static MICROCODE: FormatDescriptor = FormatDescriptor {
    kind: TraceFormat::Microcode,
    tokens: &[
        Lit("Cyc="),
        Run(Field::Cycle, Dec),
        Lit(" ["),
        Char(Field::Retire, Bit),
        Lit("] pc=["),
        Run(Field::Pc, Hex),
        Lit("] upc=["),
        Run(Field::Upc, Hex),
        Lit("] Bus=["),
        Run(Field::Bus, Hex),
        Lit("] RegSel=["),
        Run(Field::RegSel, Word),
        Lit("] MemAddr=["),
        Run(Field::MemAddr, Hex),
        Lit("] inst=["),
        Run(Field::Inst, Hex),
        Lit("] "),
        Run(Field::Disasm, Text),
    ],
    anchored: true,
};

static DASM: FormatDescriptor = FormatDescriptor {
    kind: TraceFormat::Dasm,
    tokens: &[Lit("DASM("), Run(Field::Inst, Hex), Lit(")")],
    anchored: false,
};

/// Supported trace layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum TraceFormat {
    /// Scalar pipeline with register-file writeback and operand fields.
    #[default]
    #[serde(rename = "regfile", alias = "register_file")]
    RegisterFile,
    /// Microcoded machine with micro-PC, bus and register-select fields.
    #[serde(rename = "microcode", alias = "ucode")]
    Microcode,
    /// One `DASM(<hex>)` tick per line, every line echoed.
    #[serde(rename = "dasm")]
    Dasm,
}

impl TraceFormat {
    /// Returns the static pattern for this layout.
    pub fn descriptor(self) -> &'static FormatDescriptor {
        match self {
            Self::RegisterFile => &REGFILE,
            Self::Microcode => &MICROCODE,
            Self::Dasm => &DASM,
        }
    }

    /// Start condition used when the configuration does not name one.
    ///
    /// Dasm lines carry no program counter, so collection starts at once.
    pub const fn default_start(self) -> StartCondition {
        match self {
            Self::RegisterFile | Self::Microcode => StartCondition::BootExit { pc: BOOT_EXIT_PC },
            Self::Dasm => StartCondition::Immediate,
        }
    }

    /// Whether record lines are echoed along with non-record lines by default.
    pub const fn echoes_records(self) -> bool {
        matches!(self, Self::Dasm)
    }

    /// Configuration/CLI name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RegisterFile => "regfile",
            Self::Microcode => "microcode",
            Self::Dasm => "dasm",
        }
    }
}

impl fmt::Display for TraceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TraceFormat {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "regfile" | "register_file" | "register-file" => Ok(Self::RegisterFile),
            "microcode" | "ucode" => Ok(Self::Microcode),
            "dasm" => Ok(Self::Dasm),
            _ => Err(TraceError::UnknownFormat(s.to_owned())),
        }
    }
}
