//! Line decoding.
//!
//! Decoding runs in two steps:
//! 1. **Match:** the format's token list is matched against the line with a
//!    small backtracking matcher, producing raw text captures or no match.
//! 2. **Convert:** captures are parsed into typed fields. Once a line has
//!    matched, a conversion failure is a [`TraceError::MalformedRecord`].

use tracing::trace;

use super::format::{Field, FormatDescriptor, Token, TraceFormat};
use super::line::{AuxFields, MicrocodeFields, RegisterFileFields, TraceLine};
use crate::common::constants::BUBBLE_INST;
use crate::common::error::TraceError;

/// Raw text captured for each field of one matched line.
#[derive(Clone, Debug)]
pub struct Captures<'a> {
    slots: [Option<&'a str>; Field::COUNT],
}

impl<'a> Captures<'a> {
    fn new() -> Self {
        Self {
            slots: [None; Field::COUNT],
        }
    }

    fn set(&mut self, field: Field, text: &'a str) {
        self.slots[field.index()] = Some(text);
    }

    /// Returns the captured text for `field`, if the pattern has one.
    pub fn get(&self, field: Field) -> Option<&'a str> {
        self.slots[field.index()]
    }
}

fn match_tokens<'a>(tokens: &[Token], input: &'a str, caps: &mut Captures<'a>) -> bool {
    let Some((token, rest)) = tokens.split_first() else {
        return true;
    };
    match *token {
        Token::Lit(lit) => input
            .strip_prefix(lit)
            .is_some_and(|tail| match_tokens(rest, tail, caps)),
        Token::Char(field, class) => match input.chars().next() {
            Some(c) if class.accepts(c) => {
                let len = c.len_utf8();
                caps.set(field, &input[..len]);
                match_tokens(rest, &input[len..], caps)
            }
            _ => false,
        },
        Token::Run(field, class) => {
            let run = input
                .char_indices()
                .find(|&(_, c)| !class.accepts(c))
                .map_or(input.len(), |(i, _)| i);
            // Greedy, then give characters back until the rest matches.
            let mut end = run;
            while end > 0 {
                if input.is_char_boundary(end) {
                    caps.set(field, &input[..end]);
                    if match_tokens(rest, &input[end..], caps) {
                        return true;
                    }
                }
                end -= 1;
            }
            false
        }
    }
}

/// Matches `line` against a format's pattern.
///
/// Anchored formats must match at the start of the line; others are tried at
/// every position. Text after the pattern is ignored.
pub fn match_line<'a>(format: &FormatDescriptor, line: &'a str) -> Option<Captures<'a>> {
    let mut caps = Captures::new();
    if format.anchored {
        return match_tokens(format.tokens, line, &mut caps).then_some(caps);
    }
    line.char_indices()
        .map(|(i, _)| i)
        .any(|start| match_tokens(format.tokens, &line[start..], &mut caps))
        .then_some(caps)
}

/// Stateful decoder for one input stream.
///
/// Holds the record count so layouts without a cycle field can number their
/// ticks.
#[derive(Debug)]
pub struct Decoder {
    format: &'static FormatDescriptor,
    records: u64,
}

impl Decoder {
    /// Creates a decoder for `format`.
    pub fn new(format: TraceFormat) -> Self {
        Self {
            format: format.descriptor(),
            records: 0,
        }
    }

    /// Number of record lines decoded so far.
    pub const fn records(&self) -> u64 {
        self.records
    }

    /// Decodes one line.
    ///
    /// Returns `Ok(None)` for lines that are not records (banners, blank lines,
    /// interleaved diagnostics).
    ///
    /// # Errors
    ///
    /// [`TraceError::MalformedRecord`] when the line matched but a field does
    /// not fit its type. `line_no` is only used for the diagnostic.
    pub fn decode(&mut self, line: &str, line_no: usize) -> Result<Option<TraceLine>, TraceError> {
        let Some(caps) = match_line(self.format, line) else {
            return Ok(None);
        };
        self.records += 1;
        let fields = FieldReader { caps, line_no };

        let record = match self.format.kind {
            TraceFormat::RegisterFile => TraceLine {
                cycle: fields.dec(Field::Cycle)?,
                retire: fields.bit(Field::Retire)?,
                pc: fields.hex(Field::Pc)?,
                inst: fields.hex(Field::Inst)?,
                disasm: fields.text(Field::Disasm),
                aux: AuxFields::RegisterFile(RegisterFileFields {
                    rd: fields.dec(Field::Rd)?,
                    wdata: fields.hex(Field::Wdata)?,
                    wen: fields.bit(Field::Wen)?,
                    rs1: fields.dec(Field::Rs1)?,
                    rs1_data: fields.hex(Field::Rs1Data)?,
                    rs2: fields.dec(Field::Rs2)?,
                    rs2_data: fields.hex(Field::Rs2Data)?,
                    stall: fields.flag(Field::Stall),
                    pc_sel: fields.flag(Field::PcSel),
                    exception: fields.flag(Field::Exception).is_some(),
                }),
            },
            TraceFormat::Microcode => TraceLine {
                cycle: fields.dec(Field::Cycle)?,
                retire: fields.bit(Field::Retire)?,
                pc: fields.hex(Field::Pc)?,
                inst: fields.hex(Field::Inst)?,
                disasm: fields.text(Field::Disasm),
                aux: AuxFields::Microcode(MicrocodeFields {
                    upc: fields.hex(Field::Upc)?,
                    bus: fields.hex(Field::Bus)?,
                    reg_sel: fields.text(Field::RegSel),
                    mem_addr: fields.hex(Field::MemAddr)?,
                }),
            },
            TraceFormat::Dasm => {
                let inst = fields.hex(Field::Inst)?;
                TraceLine {
                    cycle: self.records,
                    retire: inst != BUBBLE_INST,
                    pc: 0,
                    inst,
                    disasm: line.trim().to_owned(),
                    aux: AuxFields::None,
                }
            }
        };
        trace!(
            line = line_no,
            cycle = record.cycle,
            retire = record.retire,
            pc = record.pc,
            inst = record.inst,
            "decoded record"
        );
        Ok(Some(record))
    }
}

/// Typed access to the captures of one matched line.
struct FieldReader<'a> {
    caps: Captures<'a>,
    line_no: usize,
}

impl FieldReader<'_> {
    fn raw(&self, field: Field) -> &str {
        self.caps.get(field).unwrap_or_default()
    }

    fn malformed(&self, field: Field) -> TraceError {
        TraceError::MalformedRecord {
            line: self.line_no,
            field: field.name(),
            text: self.raw(field).to_owned(),
        }
    }

    /// Decimal field; column padding spaces are stripped first.
    fn dec<T: std::str::FromStr>(&self, field: Field) -> Result<T, TraceError> {
        self.raw(field)
            .trim()
            .parse()
            .map_err(|_| self.malformed(field))
    }

    fn hex(&self, field: Field) -> Result<u32, TraceError> {
        u32::from_str_radix(self.raw(field), 16).map_err(|_| self.malformed(field))
    }

    fn bit(&self, field: Field) -> Result<bool, TraceError> {
        match self.raw(field) {
            "1" => Ok(true),
            "0" => Ok(false),
            _ => Err(self.malformed(field)),
        }
    }

    /// Single-character flag; a blank column reads as `None`.
    fn flag(&self, field: Field) -> Option<char> {
        self.raw(field).chars().next().filter(|c| *c != ' ')
    }

    fn text(&self, field: Field) -> String {
        self.raw(field).trim_end().to_owned()
    }
}
