//! Shared data model: argument types, decoded lines, and label formatting.
//!
//! Decoded argument *values* are represented as [`serde_json::Value`] rather
//! than a bespoke enum — the on-disk textual grammar already is a
//! JSON array per instruction, so using `Value` end to end avoids a second,
//! parallel representation that would need its own serializer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire-level shape of a single decoded argument slot. Used to drive the
/// generic opcode walker in the disassembler, assembler, and auto-detector;
/// it does not itself hold a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    U8,
    U16,
    U32,
    F32,
    Str16,
    /// Marker consuming no bytes of its own; signals "no argument here".
    Empty,
    /// One U8 count followed by `count` values of the inner type.
    CountedArray(&'static ArgType),
}

/// Format a non-zero code pointer as `loc_XXXXXXXX`; zero renders as the
/// bare number, matching the original tool's "0 means no pointer" idiom.
pub fn render_pointer(offset: u32) -> Value {
    if offset == 0 {
        Value::from(0)
    } else {
        Value::from(format_label(offset))
    }
}

/// Render an instruction offset as its canonical label name.
pub fn format_label(offset: u32) -> String {
    format!("loc_{offset:08X}")
}

/// Parse a `loc_XXXXXXXX` label back into its offset, if the string matches.
pub fn parse_label(s: &str) -> Option<u32> {
    let hex = s.strip_prefix("loc_")?;
    u32::from_str_radix(hex, 16).ok()
}

/// A single logical line of disassembly output.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// `; ...` — detection mode, source-encryption banner, or EOF note.
    Comment(String),
    /// `解密后大小: N` — plaintext size banner, emitted once near the top.
    Info(String),
    /// `loc_HHHHHHHH: OO (NAME) <json-args>`
    Instr(Instr),
    /// `loc_HHHHHHHH: RAW <hex>` — unknown opcode or EOF tail.
    Raw { offset: u32, bytes: Vec<u8> },
    /// `loc_HHHHHHHH: 在Opcode OO 处遇到EOF` — terminal EOF-mid-instruction
    /// marker, always preceded by a [`Line::Raw`] for the partial tail.
    EofNote { offset: u32, opcode: u8 },
    /// A bare `NAME:` line carrying no instruction of its own — an alias for
    /// whatever offset pass 1 of the assembler has reached when it sees it.
    /// Never produced by the disassembler; only appears in hand-edited or
    /// label-renamed assembly source.
    Label(String),
}

/// A fully decoded instruction: an opcode plus its JSON-rendered arguments.
///
/// `label` is the verbatim line prefix — normally `loc_XXXXXXXX` computed
/// from `offset`, but assembly source may rename it to an arbitrary symbol
/// (scripts may rename a label to an arbitrary symbol). Pass 1 of the assembler always keys the
/// label map on `label`, never on the numeric `offset`, which is only a
/// disassembly-time hint preserved for readability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instr {
    pub offset: u32,
    pub label: String,
    pub opcode: u8,
    pub args: Vec<Value>,
}

impl Instr {
    /// Construct an instruction with the disassembler's canonical
    /// `loc_XXXXXXXX` label derived from its offset.
    pub fn at(offset: u32, opcode: u8, args: Vec<Value>) -> Self {
        Instr {
            offset,
            label: format_label(offset),
            opcode,
            args,
        }
    }

    /// True when this instruction's label is the default `loc_XXXXXXXX`
    /// form derived from its own offset, i.e. it has not been renamed.
    pub fn has_default_label(&self) -> bool {
        self.label == format_label(self.offset)
    }
}

/// One entry of the extracted/importable dialogue JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub message: String,
}

/// Obfuscation state of a buffer, as determined by [`crate::detect`] or
/// forced by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encryption {
    Encrypted,
    Decrypted,
}

impl Encryption {
    pub fn as_str(self) -> &'static str {
        match self {
            Encryption::Encrypted => "encrypted",
            Encryption::Decrypted => "decrypted",
        }
    }
}
