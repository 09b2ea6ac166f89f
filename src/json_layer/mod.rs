//! Dialogue text extraction and reimport, layered directly on top of the
//! disassembler and assembler rather than on their rendered text form.
//!
//! The original tool shells its import step through disassembled `.asm.txt`
//! text and a throwaway `<output>.temp.asm` file because it glues together
//! two separate command-line programs. Here `disassembler::disassemble` and
//! `assembler::assemble` are ordinary in-process functions operating on
//! `Vec<Line>`, so the same two-pass logic (scan for names/messages, then
//! retroactively patch and reassemble) needs no disk round trip.

mod extract;
mod import;

pub use extract::extract;
pub use import::import;
