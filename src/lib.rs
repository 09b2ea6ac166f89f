//! # WS2 Toolkit
//!
//! A round-trip toolkit for the AdvHD `.ws2` visual-novel bytecode format:
//! auto-detecting encryption, disassembling to a readable text form,
//! assembling that text back into bytecode, and extracting/reimporting
//! dialogue text as JSON for translation.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use ws2_toolkit::{disassembler, text};
//!
//! let data = std::fs::read("script.ws2")?;
//! let lines = disassembler::disassemble(&data, None); // auto-detect
//! let rendered = text::render_lines(&lines);
//! println!("{rendered}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assembler;
pub mod binary;
pub mod cli;
pub mod codec;
pub mod config;
pub mod detect;
pub mod disassembler;
pub mod error;
pub mod json_layer;
pub mod opcodes;
pub mod text;
pub mod types;

pub use error::{Error, Result};
pub use types::{DialogueEntry, Encryption, Instr, Line};
