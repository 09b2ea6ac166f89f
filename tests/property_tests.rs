//! Property-based tests for the codec and disassembler/assembler pipeline.
//!
//! Uses proptest to generate random inputs and verify invariants hold across
//! a wide range of possible inputs, helping discover edge cases the
//! hand-written unit tests would not think to cover.

use proptest::prelude::*;

use ws2_toolkit::types::Encryption;
use ws2_toolkit::{assembler, codec, disassembler, text};

proptest! {
    /// `encode`/`decode` are exact mutual inverses over any buffer, since the
    /// codec is a byte-wise rotate with no cross-byte state.
    #[test]
    fn codec_round_trips_arbitrary_buffers(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        prop_assert_eq!(codec::decode(&codec::encode(&data)), data.clone());
        prop_assert_eq!(codec::encode(&codec::decode(&data)), data);
    }

    /// Disassembly never panics on arbitrary bytes, regardless of
    /// obfuscation mode, and always terminates with a line.
    #[test]
    fn disassemble_never_panics_on_arbitrary_bytes(
        data in prop::collection::vec(any::<u8>(), 0..1024),
        encrypted in any::<bool>(),
    ) {
        let mode = if encrypted { Encryption::Encrypted } else { Encryption::Decrypted };
        let lines = disassembler::disassemble(&data, Some(mode));
        prop_assert!(!lines.is_empty());
    }

    /// Rendering a disassembly to text and parsing it back produces the
    /// exact same lines, for any buffer the disassembler can walk.
    #[test]
    fn render_then_parse_is_identity(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let lines = disassembler::disassemble(&data, Some(Encryption::Decrypted));
        let rendered = text::render_lines(&lines);
        let parsed = text::parse_lines(&rendered).expect("disassembler output always parses");
        prop_assert_eq!(parsed, lines);
    }

    /// Assembling a disassembler's own output (when it decoded the whole
    /// buffer cleanly, i.e. no RAW/EofNote tail) reproduces the original
    /// bytes exactly.
    #[test]
    fn clean_disassembly_round_trips_through_assembler(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let lines = disassembler::disassemble(&data, Some(Encryption::Decrypted));
        let has_partial_tail = lines.iter().any(|l| {
            matches!(l, ws2_toolkit::Line::Raw { .. } | ws2_toolkit::Line::EofNote { .. })
        });
        prop_assume!(!has_partial_tail);

        let assembled = assembler::assemble(&lines).expect("no unknown opcodes in a clean walk");
        prop_assert_eq!(assembled, data);
    }
}
