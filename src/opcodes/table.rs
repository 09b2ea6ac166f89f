//! Static opcode tables transcribed verbatim from the original tool's
//! `OPCODE_NAMES` and `OPCODES` dictionaries. Append-only: never remove or
//! renumber an entry, only add new ones (see the invariant in the data model).

use crate::types::ArgType;

/// Descriptive name for an opcode, used only for disassembly commentary.
/// Returns `None` for opcodes the table does not recognise by name; the
/// disassembler renders those as `UnkXX`.
pub(crate) fn opcode_name(opcode: u8) -> Option<&'static str> {
    match opcode {
        0x01 => Some("Condition"),
        0x02 => Some("Jump2"),
        0x04 => Some("RunFile"),
        0x05 => Some("Unk05"),
        0x06 => Some("Jump"),
        0x07 => Some("NextFile"),
        0x08 => Some("Unk08"),
        0x09 => Some("LayerConfig"),
        0x0A => Some("Unk0A"),
        0x0B => Some("SetFlag"),
        0x0D => Some("Unk0D"),
        0x0E => Some("Unk0E"),
        0x0F => Some("ShowChoice"),
        0x11 => Some("SetTimer"),
        0x12 => Some("StartTimer"),
        0x13 => Some("Unk13"),
        0x14 => Some("DisplayMessage"),
        0x15 => Some("SetDisplayName"),
        0x16 => Some("Unk16"),
        0x17 => Some("Unk17"),
        0x18 => Some("AddMessageToLog"),
        0x19 => Some("Unk19"),
        0x1A => Some("OpenTitle"),
        0x1B => Some("Unk1B"),
        0x1C => Some("ExecuteFunction"),
        0x1D => Some("Unk1D"),
        0x1E => Some("PlayMusic"),
        0x1F => Some("StopMusic"),
        0x20 => Some("MusicUnk1"),
        0x28 => Some("SoundEffect"),
        0x29 => Some("SoundUnk1"),
        0x2A => Some("SoundUnk2"),
        0x2E => Some("CharMessageStart"),
        0x32 => Some("VariableUnk32"),
        0x33 => Some("SetBackground"),
        0x34 => Some("UsePnaPackage"),
        0x35 => Some("PlayMovie"),
        0x36 => Some("PrepareBackgroundArea"),
        0x37 => Some("ClearLayer"),
        0x38 => Some("VariableUnk3"),
        0x39 => Some("DisplayCharacterImage"),
        0x3A => Some("UnkBackground2"),
        0x3B => Some("BackgroundMessage"),
        0x3D => Some("Unk3D"),
        0x3E => Some("Unk3E"),
        0x3F => Some("LayersList"),
        0x40 => Some("SetMask"),
        0x41 => Some("UnkBackground3"),
        0x42 => Some("Unk42"),
        0x43 => Some("Unk43"),
        0x44 => Some("Effect44"),
        0x45 => Some("DragBackground"),
        0x46 => Some("MoveBackground"),
        0x47 => Some("Effect1"),
        0x48 => Some("Effect2"),
        0x4A => Some("Unk4A"),
        0x51 => Some("VariableUnk51"),
        0x52 => Some("VariableUnk2"),
        0x53 => Some("VariableUnk4"),
        0x56 => Some("RainStart"),
        0x57 => Some("UnkBackground1"),
        0x58 => Some("Effect3"),
        0x5B => Some("InitKeyName"),
        0x5C => Some("RainEnd"),
        0x64 => Some("Unk64"),
        0x65 => Some("C65"),
        0x67 => Some("Unk67"),
        0x68 => Some("Unk68"),
        0x6E => Some("SetVariable"),
        0x6F => Some("VariableUnk"),
        0x73 => Some("SetPnaFile"),
        0x75 => Some("Unk75"),
        0x78 => Some("Unk78"),
        0x7A => Some("Unk7A"),
        0x7B => Some("Unk7B"),
        0x84 => Some("Unk84"),
        0x97 => Some("Unk97"),
        0xFB => Some("UnkFB"),
        0xFC => Some("UnkFC"),
        0xFD => Some("UnkFD"),
        0xFF => Some("FileEnd"),
        _ => None,
    }
}

/// Argument-type signature for an opcode. `None` means the opcode is
/// unknown to the disassembler (hard failure -> `RAW` sentinel).
pub(crate) fn opcode_signature(opcode: u8) -> Option<&'static [ArgType]> {
    match opcode {
        0x00 => Some(&[]),
        0x01 => Some(&[ArgType::U8, ArgType::U16, ArgType::F32, ArgType::U32, ArgType::U32]),
        0x02 => Some(&[ArgType::U32]),
        0x04 => Some(&[ArgType::Str16, ArgType::Empty]),
        0x05 => Some(&[]),
        0x06 => Some(&[ArgType::U32]),
        0x07 => Some(&[ArgType::Str16, ArgType::Empty]),
        0x08 => Some(&[ArgType::U8]),
        0x09 => Some(&[ArgType::U8, ArgType::U16, ArgType::F32]),
        0x0A => Some(&[ArgType::U16, ArgType::F32]),
        0x0B => Some(&[ArgType::U16, ArgType::U8]),
        0x0C => Some(&[ArgType::U16, ArgType::U8, ArgType::CountedArray(&ArgType::U16)]),
        0x0D => Some(&[ArgType::U16, ArgType::U16, ArgType::F32]),
        0x0E => Some(&[ArgType::U16, ArgType::U16, ArgType::U8]),
        0x0F => Some(&[ArgType::U8]),
        0x11 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::F32]),
        0x12 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0x13 => Some(&[]),
        0x14 => Some(&[ArgType::U32, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8]),
        0x15 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8]),
        0x16 => Some(&[ArgType::U8, ArgType::U8]),
        0x17 => Some(&[]),
        0x18 => Some(&[ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0x19 => Some(&[]),
        0x1A => Some(&[ArgType::Str16, ArgType::Empty]),
        0x1B => Some(&[ArgType::U8]),
        0x1C => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U8]),
        0x1D => Some(&[ArgType::U16]),
        0x1E => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::F32, ArgType::U16, ArgType::U16, ArgType::U8, ArgType::F32]),
        0x1F => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32]),
        0x20 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::U16]),
        0x21 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::U16]),
        0x22 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8]),
        0x28 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::F32, ArgType::U16, ArgType::U16, ArgType::U8, ArgType::U16, ArgType::U16, ArgType::U8, ArgType::F32]),
        0x29 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32]),
        0x2A => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::U16]),
        0x2B => Some(&[ArgType::Str16, ArgType::Empty]),
        0x2C => Some(&[ArgType::Str16, ArgType::Empty]),
        0x2D => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8]),
        0x2E => Some(&[]),
        0x2F => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::F32]),
        0x30 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32]),
        0x32 => Some(&[ArgType::Str16, ArgType::Empty]),
        0x33 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8]),
        0x34 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8]),
        0x35 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8, ArgType::U8]),
        0x36 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U8, ArgType::U8]),
        0x37 => Some(&[ArgType::Str16, ArgType::Empty]),
        0x38 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8]),
        0x39 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8, ArgType::CountedArray(&ArgType::U16)]),
        0x3A => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8]),
        0x3B => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::U16, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32]),
        0x3C => Some(&[ArgType::Str16, ArgType::Empty]),
        0x3D => Some(&[ArgType::U16]),
        0x3E => Some(&[]),
        0x3F => Some(&[ArgType::CountedArray(&ArgType::Str16)]),
        0x40 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8]),
        0x41 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8]),
        0x42 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16]),
        0x43 => Some(&[ArgType::Str16, ArgType::Empty]),
        0x44 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8]),
        0x45 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32]),
        0x46 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32]),
        0x47 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U8, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U16, ArgType::F32]),
        0x48 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U8, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0x49 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x4A => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x4B => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32]),
        0x4C => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32]),
        0x4D => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::U8, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U16, ArgType::F32]),
        0x4E => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::U8, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0x4F => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::Str16, ArgType::Empty]),
        0x50 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16]),
        0x51 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::F32, ArgType::U8]),
        0x52 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::U16, ArgType::F32, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0x53 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x54 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x55 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x56 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U16, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U8, ArgType::U16, ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32]),
        0x57 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16]),
        0x58 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x59 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16]),
        0x5A => Some(&[ArgType::Str16, ArgType::Empty, ArgType::CountedArray(&ArgType::U16)]),
        0x5B => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U8]),
        0x5C => Some(&[ArgType::Str16, ArgType::Empty]),
        0x5D => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8]),
        0x5E => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::F32]),
        0x5F => Some(&[ArgType::Str16, ArgType::Empty]),
        0x60 => Some(&[ArgType::U16, ArgType::U16, ArgType::U16, ArgType::U16]),
        0x61 => Some(&[ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32]),
        0x62 => Some(&[ArgType::Str16, ArgType::Empty]),
        0x63 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8]),
        0x64 => Some(&[ArgType::U8]),
        0x65 => Some(&[ArgType::U16, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0x66 => Some(&[ArgType::Str16, ArgType::Empty]),
        0x67 => Some(&[ArgType::U8, ArgType::U8, ArgType::U16, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U8]),
        0x68 => Some(&[ArgType::U8]),
        0x69 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U16, ArgType::F32]),
        0x6A => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U8, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0x6B => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x6C => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::F32]),
        0x6D => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::F32, ArgType::U8, ArgType::U8, ArgType::U8]),
        0x6E => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x6F => Some(&[ArgType::Str16, ArgType::Empty]),
        0x70 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16]),
        0x71 => Some(&[]),
        0x72 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::Str16, ArgType::Empty]),
        0x73 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16]),
        0x74 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x75 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x78 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8, ArgType::U8]),
        0x79 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32]),
        0x7A => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::U8, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0x7B => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x7C => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32]),
        0x7D => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32]),
        0x7E => Some(&[ArgType::Str16, ArgType::Empty]),
        0x7F => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32]),
        0x80 => Some(&[ArgType::Str16, ArgType::Empty]),
        0x81 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::F32, ArgType::U8]),
        0x82 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32]),
        0x83 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::F32]),
        0x84 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::U16, ArgType::F32]),
        0x85 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::F32]),
        0x86 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::F32, ArgType::F32]),
        0x87 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32]),
        0x88 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::U16, ArgType::F32]),
        0x89 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::F32]),
        0x8A => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8, ArgType::U8]),
        0x8C => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x8D => Some(&[ArgType::U32, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8, ArgType::U16, ArgType::Str16, ArgType::Empty]),
        0x8E => Some(&[ArgType::U32, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8, ArgType::U16, ArgType::Str16, ArgType::Empty]),
        0x8F => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x90 => Some(&[ArgType::Str16, ArgType::Empty]),
        0x91 => Some(&[]),
        0x96 => Some(&[ArgType::U16, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32]),
        0x97 => Some(&[ArgType::U16, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32]),
        0x98 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U8, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U16, ArgType::F32]),
        0x99 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U8, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0x9A => Some(&[]),
        0x9B => Some(&[ArgType::Str16, ArgType::Empty]),
        0x9C => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0x9D => Some(&[ArgType::Str16, ArgType::Empty]),
        0x9E => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8]),
        0x9F => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8]),
        0xA0 => Some(&[ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32]),
        0xA1 => Some(&[]),
        0xA5 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::F32, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::U8, ArgType::U8]),
        0xA6 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::U8, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U16, ArgType::F32]),
        0xA7 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::U8, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0xA8 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::U8, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U16, ArgType::F32]),
        0xA9 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::U8, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0xAA => Some(&[ArgType::U16, ArgType::U8, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U16, ArgType::F32]),
        0xAB => Some(&[ArgType::U16, ArgType::U8, ArgType::U8]),
        0xAC => Some(&[]),
        0xAD => Some(&[ArgType::U16]),
        0xAE => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16]),
        0xAF => Some(&[ArgType::U16, ArgType::U16, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32]),
        0xB0 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::F32]),
        0xB4 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8]),
        0xB5 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U8, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0xB6 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32]),
        0xB7 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32]),
        0xB8 => Some(&[ArgType::Str16, ArgType::Empty]),
        0xB9 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0xBA => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0xBB => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8]),
        0xBE => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8]),
        0xBF => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0xC0 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8, ArgType::U8, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0xC1 => Some(&[ArgType::Str16, ArgType::Empty]),
        0xC2 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::U8, ArgType::U8, ArgType::U8]),
        0xC3 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::Str16, ArgType::Empty]),
        0xC8 => Some(&[]),
        0xC9 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16, ArgType::U16, ArgType::U16]),
        0xCA => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0xCB => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8]),
        0xCC => Some(&[]),
        0xCD => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::U8]),
        0xCE => Some(&[ArgType::U8]),
        0xCF => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::F32]),
        0xD0 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16]),
        0xD1 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16]),
        0xD2 => Some(&[ArgType::Str16, ArgType::Empty]),
        0xD3 => Some(&[ArgType::Str16, ArgType::Empty]),
        0xD4 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::U16]),
        0xD5 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32]),
        0xD6 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty]),
        0xDC => Some(&[ArgType::Str16, ArgType::Empty, ArgType::Str16, ArgType::Empty, ArgType::U8, ArgType::U8, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U8]),
        0xDD => Some(&[ArgType::Str16, ArgType::Empty, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U8, ArgType::F32, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0xDE => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16, ArgType::F32, ArgType::F32, ArgType::F32, ArgType::U8, ArgType::F32, ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0xDF => Some(&[ArgType::Str16, ArgType::Empty]),
        0xE0 => Some(&[ArgType::Str16, ArgType::Empty, ArgType::U16]),
        0xE6 => Some(&[ArgType::U32, ArgType::U32]),
        0xE7 => Some(&[]),
        0xE8 => Some(&[]),
        0xE9 => Some(&[ArgType::U8]),
        0xF0 => Some(&[ArgType::U8]),
        0xF8 => Some(&[]),
        0xF9 => Some(&[ArgType::U8, ArgType::Str16, ArgType::Empty]),
        0xFA => Some(&[]),
        0xFB => Some(&[ArgType::U8]),
        0xFC => Some(&[ArgType::U16]),
        0xFD => Some(&[]),
        0xFE => Some(&[ArgType::Str16, ArgType::Empty]),
        _ => None,
    }
}
