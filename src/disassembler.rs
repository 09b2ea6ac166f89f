//! Disassembler: decoded byte buffer to an ordered sequence of text
//! lines. Best-effort and infallible — corrupt input always yields a
//! partial dump ending in a `RAW` sentinel, never an `Err`.

use serde_json::{json, Value};

use crate::binary::Reader;
use crate::codec;
use crate::detect;
use crate::opcodes::{self, ArgType};
use crate::types::{render_pointer, Encryption, Instr, Line};

/// Disassemble `raw`, optionally forcing the obfuscation mode. `None` means
/// auto-detect, emitting the `; 检测模式: <mode>` banner; `Some(mode)` skips
/// detection and that banner.
pub fn disassemble(raw: &[u8], mode: Option<Encryption>) -> Vec<Line> {
    let mut lines = Vec::new();

    let effective = match mode {
        Some(m) => m,
        None => {
            let detected = detect::detect(raw);
            lines.push(Line::Comment(format!("; 检测模式: {}", detected.as_str())));
            detected
        }
    };

    let data = match effective {
        Encryption::Encrypted => {
            lines.push(Line::Comment("; 来源: 已加密 (Encrypted)".to_string()));
            codec::decode(raw)
        }
        Encryption::Decrypted => {
            lines.push(Line::Comment("; 来源: 未加密 (Decrypted)".to_string()));
            raw.to_vec()
        }
    };

    lines.push(Line::Info(format!("解密后大小: {}", data.len())));

    let mut reader = Reader::new(&data);
    while !reader.is_at_end() {
        let start_offset = reader.offset() as u32;
        let opcode = match reader.read_u8() {
            Ok(b) => b,
            Err(_) => break,
        };

        match decode_one(&mut reader, start_offset, opcode) {
            DecodeOutcome::Instr(instr) => lines.push(Line::Instr(instr)),
            DecodeOutcome::Unknown => {
                lines.push(Line::Raw {
                    offset: start_offset,
                    bytes: data[start_offset as usize..].to_vec(),
                });
                break;
            }
            DecodeOutcome::Eof => {
                lines.push(Line::Raw {
                    offset: start_offset,
                    bytes: data[start_offset as usize..].to_vec(),
                });
                lines.push(Line::EofNote {
                    offset: start_offset,
                    opcode,
                });
                break;
            }
        }
    }

    lines
}

enum DecodeOutcome {
    Instr(Instr),
    Unknown,
    Eof,
}

fn decode_one(reader: &mut Reader<'_>, start_offset: u32, opcode: u8) -> DecodeOutcome {
    match opcode {
        0x01 => decode_condition(reader, start_offset, opcode),
        0x02 | 0x06 => decode_single_jump(reader, start_offset, opcode),
        0x0F => decode_show_choice(reader, start_offset, opcode),
        0xE6 => decode_dual_jump(reader, start_offset, opcode),
        0xFF => decode_file_end(reader, start_offset, opcode),
        _ => match opcodes::signature(opcode) {
            Some(sig) => match decode_generic(reader, sig) {
                Some(args) => DecodeOutcome::Instr(Instr::at(start_offset, opcode, args)),
                None => DecodeOutcome::Eof,
            },
            None => DecodeOutcome::Unknown,
        },
    }
}

/// Decode an argument slot for generic (table-driven) opcodes.
fn decode_arg(reader: &mut Reader<'_>, arg: ArgType) -> Option<Value> {
    match arg {
        ArgType::U8 => reader.read_u8().ok().map(Value::from),
        ArgType::U16 => reader.read_u16().ok().map(Value::from),
        ArgType::U32 => reader.read_u32().ok().map(Value::from),
        ArgType::F32 => reader.read_f32().ok().map(|v| json!(v)),
        ArgType::Str16 => {
            let (raw, terminated) = reader.read_string_bytes();
            Some(decode_str16(raw, terminated))
        }
        ArgType::Empty => Some(Value::Null),
        ArgType::CountedArray(_) => None,
    }
}

fn decode_generic(reader: &mut Reader<'_>, sig: &'static [ArgType]) -> Option<Vec<Value>> {
    let mut args = Vec::with_capacity(sig.len());
    for arg in sig {
        match *arg {
            ArgType::CountedArray(inner) => {
                let count = reader.read_u8().ok()?;
                let mut items = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    items.push(decode_arg(reader, *inner)?);
                }
                args.push(json!({"count": count, "items": items}));
            }
            other => args.push(decode_arg(reader, other)?),
        }
    }
    Some(args)
}

fn decode_str16(raw: &[u8], terminated: bool) -> Value {
    if !terminated || raw.len() % 2 != 0 {
        return json!({"raw": hex::encode_upper(raw), "terminated": terminated});
    }
    let units: Vec<u16> = raw
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();
    match String::from_utf16(&units) {
        Ok(text) => Value::String(text),
        Err(_) => json!({"raw": hex::encode_upper(raw), "terminated": true}),
    }
}

fn decode_condition(reader: &mut Reader<'_>, start: u32, opcode: u8) -> DecodeOutcome {
    let val = match reader.read_u8() {
        Ok(v) => v,
        Err(_) => return DecodeOutcome::Eof,
    };
    let mut args = vec![Value::from(val)];

    let peek = reader.peek_u8();
    let extended = matches!(val, 2 | 128 | 129 | 130 | 192) || (val == 3 && matches!(peek, Some(50 | 51 | 127 | 128)));

    if extended {
        let word = match reader.read_u16() {
            Ok(v) => v,
            Err(_) => return DecodeOutcome::Eof,
        };
        let float = match reader.read_f32() {
            Ok(v) => v,
            Err(_) => return DecodeOutcome::Eof,
        };
        let ptr1 = match reader.read_u32() {
            Ok(v) => v,
            Err(_) => return DecodeOutcome::Eof,
        };
        let ptr2 = match reader.read_u32() {
            Ok(v) => v,
            Err(_) => return DecodeOutcome::Eof,
        };
        args.push(Value::from(word));
        args.push(json!(float));
        args.push(render_pointer(ptr1));
        args.push(render_pointer(ptr2));
    }

    let _ = opcode;
    DecodeOutcome::Instr(Instr::at(start, opcode, args))
}

fn decode_single_jump(reader: &mut Reader<'_>, start: u32, opcode: u8) -> DecodeOutcome {
    match reader.read_u32() {
        Ok(ptr) => DecodeOutcome::Instr(Instr::at(start, opcode, vec![render_pointer(ptr)])),
        Err(_) => DecodeOutcome::Eof,
    }
}

fn decode_dual_jump(reader: &mut Reader<'_>, start: u32, opcode: u8) -> DecodeOutcome {
    let ptr1 = match reader.read_u32() {
        Ok(v) => v,
        Err(_) => return DecodeOutcome::Eof,
    };
    let ptr2 = match reader.read_u32() {
        Ok(v) => v,
        Err(_) => return DecodeOutcome::Eof,
    };
    DecodeOutcome::Instr(Instr::at(start, opcode, vec![render_pointer(ptr1), render_pointer(ptr2)]))
}

fn decode_file_end(reader: &mut Reader<'_>, start: u32, opcode: u8) -> DecodeOutcome {
    let value = match reader.read_u32() {
        Ok(v) => v,
        Err(_) => return DecodeOutcome::Eof,
    };
    let mut tail = Vec::with_capacity(4);
    for _ in 0..4 {
        match reader.read_u8() {
            Ok(b) => tail.push(b),
            Err(_) => return DecodeOutcome::Eof,
        }
    }
    let mut args = vec![Value::from(value)];
    args.extend(tail.into_iter().map(Value::from));
    DecodeOutcome::Instr(Instr::at(start, opcode, args))
}

fn decode_show_choice(reader: &mut Reader<'_>, start: u32, opcode: u8) -> DecodeOutcome {
    let count = match reader.read_u8() {
        Ok(v) => v,
        Err(_) => return DecodeOutcome::Eof,
    };
    let mut choices = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let id = match reader.read_u16() {
            Ok(v) => v,
            Err(_) => return DecodeOutcome::Eof,
        };
        let (raw, terminated) = reader.read_string_bytes();
        let text = decode_str16(raw, terminated);
        let op1 = match reader.read_u8() {
            Ok(v) => v,
            Err(_) => return DecodeOutcome::Eof,
        };
        let op2 = match reader.read_u8() {
            Ok(v) => v,
            Err(_) => return DecodeOutcome::Eof,
        };
        let op3 = match reader.read_u8() {
            Ok(v) => v,
            Err(_) => return DecodeOutcome::Eof,
        };
        let op_jump = match reader.read_u8() {
            Ok(v) => v,
            Err(_) => return DecodeOutcome::Eof,
        };

        let mut choice = serde_json::Map::new();
        choice.insert("id".into(), Value::from(id));
        choice.insert("text".into(), text);
        choice.insert("op1".into(), Value::from(op1));
        choice.insert("op2".into(), Value::from(op2));
        choice.insert("op3".into(), Value::from(op3));
        choice.insert("opJump".into(), Value::from(op_jump));

        match op_jump {
            6 => {
                let ptr = match reader.read_u32() {
                    Ok(v) => v,
                    Err(_) => return DecodeOutcome::Eof,
                };
                choice.insert("pointer".into(), render_pointer(ptr));
            }
            7 => {
                let (file_raw, file_terminated) = reader.read_string_bytes();
                choice.insert("file".into(), decode_str16(file_raw, file_terminated));
            }
            other => {
                choice.insert("error".into(), Value::from(format!("Unknown opJump {other}")));
            }
        }
        choices.push(Value::Object(choice));
    }

    DecodeOutcome::Instr(Instr::at(start, opcode, vec![Value::from(count), Value::Array(choices)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_yields_header_only() {
        let lines = disassemble(&[], Some(Encryption::Decrypted));
        assert_eq!(
            lines,
            vec![
                Line::Comment("; 来源: 未加密 (Decrypted)".to_string()),
                Line::Info("解密后大小: 0".to_string()),
            ]
        );
    }

    #[test]
    fn simple_jump_then_terminator() {
        let bytes = [
            0x06, 0x10, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        let lines = disassemble(&bytes, Some(Encryption::Decrypted));
        let instrs: Vec<&Instr> = lines
            .iter()
            .filter_map(|l| match l {
                Line::Instr(i) => Some(i),
                _ => None,
            })
            .collect();
        assert_eq!(instrs.len(), 2);
        assert_eq!(instrs[0].opcode, 0x06);
        assert_eq!(instrs[0].args, vec![Value::from("loc_00000010")]);
        assert_eq!(instrs[1].opcode, 0xFF);
    }

    #[test]
    fn unknown_opcode_emits_raw_and_stops() {
        let bytes = [0x03, 0x01, 0x02, 0x03];
        let lines = disassemble(&bytes, Some(Encryption::Decrypted));
        let last = lines.last().unwrap();
        match last {
            Line::Raw { offset, bytes: b } => {
                assert_eq!(*offset, 0);
                assert_eq!(b, &bytes.to_vec());
            }
            other => panic!("expected Raw, got {other:?}"),
        }
    }

    #[test]
    fn eof_mid_instruction_emits_raw_then_note() {
        // opcode 0x06 (Jump) wants a u32 pointer but only 2 bytes remain.
        let bytes = [0x06, 0x01, 0x02];
        let lines = disassemble(&bytes, Some(Encryption::Decrypted));
        assert!(matches!(lines[lines.len() - 2], Line::Raw { offset: 0, .. }));
        assert!(matches!(
            lines[lines.len() - 1],
            Line::EofNote { offset: 0, opcode: 0x06 }
        ));
    }
}
