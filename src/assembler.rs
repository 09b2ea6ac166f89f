//! Assembler: two-pass, label-resolving compiler from [`Line`] values
//! back to a byte buffer.
//!
//! Pass 1 lays out every instruction in order, registering each label at
//! the output cursor it will occupy; pass 2 re-encodes every instruction
//! from scratch, resolving code-pointer arguments against the label map
//! built in pass 1. Textual/source offsets are never authoritative — only
//! the label map is.

use std::collections::HashMap;

use serde_json::Value;

use crate::binary::Writer;
use crate::error::AssembleError;
use crate::opcodes::{self, ArgType};
use crate::types::{format_label, Line};

/// Assemble a sequence of lines into a byte buffer. Unresolved labels are
/// logged via [`tracing::warn`] and written as a zero pointer; every
/// other structural problem aborts with a descriptive [`AssembleError`].
pub fn assemble(lines: &[Line]) -> Result<Vec<u8>, AssembleError> {
    let (labels, pending) = layout(lines)?;

    let mut out = Writer::new();
    for item in &pending {
        match item {
            Pending::Raw(bytes) => out.write_bytes(bytes),
            Pending::Instr { label, opcode, args } => {
                encode_instr(&mut out, label, *opcode, args, Some(&labels))?
            }
        }
    }
    Ok(out.into_bytes())
}

enum Pending {
    Raw(Vec<u8>),
    Instr {
        label: String,
        opcode: u8,
        args: Vec<Value>,
    },
}

fn layout(lines: &[Line]) -> Result<(HashMap<String, u32>, Vec<Pending>), AssembleError> {
    let mut labels = HashMap::new();
    let mut pending = Vec::new();
    let mut cursor: u32 = 0;

    for line in lines {
        match line {
            Line::Comment(_) | Line::Info(_) | Line::EofNote { .. } => {}
            Line::Label(name) => {
                labels.insert(name.clone(), cursor);
            }
            Line::Raw { offset, bytes } => {
                labels.insert(format_label(*offset), cursor);
                cursor += bytes.len() as u32;
                pending.push(Pending::Raw(bytes.clone()));
            }
            Line::Instr(instr) => {
                labels.insert(instr.label.clone(), cursor);
                let len = encoded_length(&instr.label, instr.opcode, &instr.args)?;
                cursor += len as u32;
                pending.push(Pending::Instr {
                    label: instr.label.clone(),
                    opcode: instr.opcode,
                    args: instr.args.clone(),
                });
            }
        }
    }

    Ok((labels, pending))
}

fn encoded_length(label: &str, opcode: u8, args: &[Value]) -> Result<usize, AssembleError> {
    let mut scratch = Writer::new();
    encode_instr(&mut scratch, label, opcode, args, None)?;
    Ok(scratch.len())
}

/// Encode one instruction. `labels` is `None` during the pass-1 sizing pass
/// (pointers are written as placeholder zero, silently) and `Some` during
/// pass 2 (pointers are resolved, with a [`tracing::warn`] on miss).
fn encode_instr(
    writer: &mut Writer,
    label: &str,
    opcode: u8,
    args: &[Value],
    labels: Option<&HashMap<String, u32>>,
) -> Result<(), AssembleError> {
    writer.write_u8(opcode);
    match opcode {
        0xFF => encode_file_end(writer, label, opcode, args),
        0x01 => encode_condition(writer, label, opcode, args, labels),
        0x02 | 0x06 => encode_single_jump(writer, label, opcode, args, labels),
        0xE6 => encode_dual_jump(writer, label, opcode, args, labels),
        0x0F => encode_show_choice(writer, label, opcode, args, labels),
        _ => {
            let sig = opcodes::signature(opcode).ok_or_else(|| AssembleError::UnknownOpcode {
                context: label.to_string(),
                opcode,
            })?;
            encode_generic(writer, label, opcode, sig, args)
        }
    }
}

fn mismatch(label: &str, opcode: u8, reason: impl Into<String>) -> AssembleError {
    AssembleError::ArgumentMismatch {
        context: label.to_string(),
        opcode,
        reason: reason.into(),
    }
}

fn arg<'a>(args: &'a [Value], idx: usize, label: &str, opcode: u8) -> Result<&'a Value, AssembleError> {
    args.get(idx)
        .ok_or_else(|| mismatch(label, opcode, format!("expected argument {idx}")))
}

fn as_u64(value: &Value, label: &str, opcode: u8) -> Result<u64, AssembleError> {
    value
        .as_u64()
        .or_else(|| value.as_i64().map(|v| v as u64))
        .ok_or_else(|| mismatch(label, opcode, format!("expected integer, got {value}")))
}

fn as_f32(value: &Value, label: &str, opcode: u8) -> Result<f32, AssembleError> {
    value
        .as_f64()
        .map(|v| v as f32)
        .ok_or_else(|| mismatch(label, opcode, format!("expected number, got {value}")))
}

fn write_str16(writer: &mut Writer, value: &Value, label: &str, opcode: u8) -> Result<(), AssembleError> {
    match value {
        Value::String(text) => {
            let units: Vec<u8> = text.encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
            writer.write_string_bytes(&units, true);
            Ok(())
        }
        Value::Object(map) => {
            let raw_hex = map
                .get("raw")
                .and_then(Value::as_str)
                .ok_or_else(|| mismatch(label, opcode, "string object missing `raw`"))?;
            let raw = hex::decode(raw_hex)
                .map_err(|e| mismatch(label, opcode, format!("invalid raw hex: {e}")))?;
            let terminated = map.get("terminated").and_then(Value::as_bool).unwrap_or(true);
            writer.write_string_bytes(&raw, terminated);
            Ok(())
        }
        other => Err(mismatch(label, opcode, format!("expected string, got {other}"))),
    }
}

fn resolve_pointer(value: &Value, labels: Option<&HashMap<String, u32>>) -> u32 {
    if let Some(s) = value.as_str() {
        match labels {
            None => return 0,
            Some(map) => {
                if let Some(&off) = map.get(s) {
                    return off;
                }
                tracing::warn!(label = %s, "unresolved label, writing zero pointer");
                return 0;
            }
        }
    }
    value.as_u64().map(|v| v as u32).unwrap_or(0)
}

fn encode_arg(
    writer: &mut Writer,
    arg_type: ArgType,
    value: &Value,
    label: &str,
    opcode: u8,
) -> Result<(), AssembleError> {
    match arg_type {
        ArgType::U8 => writer.write_u8(as_u64(value, label, opcode)? as u8),
        ArgType::U16 => writer.write_u16(as_u64(value, label, opcode)? as u16),
        ArgType::U32 => writer.write_u32(as_u64(value, label, opcode)? as u32),
        ArgType::F32 => writer.write_f32(as_f32(value, label, opcode)?),
        ArgType::Str16 => write_str16(writer, value, label, opcode)?,
        ArgType::Empty => {}
        ArgType::CountedArray(_) => unreachable!("handled by caller"),
    }
    Ok(())
}

fn encode_generic(
    writer: &mut Writer,
    label: &str,
    opcode: u8,
    sig: &'static [ArgType],
    args: &[Value],
) -> Result<(), AssembleError> {
    let mut idx = 0;
    for slot in sig {
        match *slot {
            ArgType::CountedArray(inner) => {
                let value = arg(args, idx, label, opcode)?;
                let obj = value
                    .as_object()
                    .ok_or_else(|| mismatch(label, opcode, "expected {count, items} object"))?;
                let count = obj.get("count").and_then(Value::as_u64).unwrap_or(0);
                let items = obj
                    .get("items")
                    .and_then(Value::as_array)
                    .ok_or_else(|| mismatch(label, opcode, "counted array missing `items`"))?;
                writer.write_u8(count as u8);
                for i in 0..count as usize {
                    let item = items
                        .get(i)
                        .ok_or_else(|| mismatch(label, opcode, format!("items[{i}] missing")))?;
                    encode_arg(writer, *inner, item, label, opcode)?;
                }
                idx += 1;
            }
            other => {
                let value = arg(args, idx, label, opcode)?;
                encode_arg(writer, other, value, label, opcode)?;
                idx += 1;
            }
        }
    }
    Ok(())
}

fn encode_file_end(writer: &mut Writer, label: &str, opcode: u8, args: &[Value]) -> Result<(), AssembleError> {
    writer.write_u32(as_u64(arg(args, 0, label, opcode)?, label, opcode)? as u32);
    for i in 1..5 {
        writer.write_u8(as_u64(arg(args, i, label, opcode)?, label, opcode)? as u8);
    }
    Ok(())
}

fn encode_condition(
    writer: &mut Writer,
    label: &str,
    opcode: u8,
    args: &[Value],
    labels: Option<&HashMap<String, u32>>,
) -> Result<(), AssembleError> {
    let val = as_u64(arg(args, 0, label, opcode)?, label, opcode)?;
    writer.write_u8(val as u8);
    let extended = matches!(val, 2 | 128 | 129 | 130 | 192) || (val == 3 && args.len() > 1);
    if extended {
        writer.write_u16(as_u64(arg(args, 1, label, opcode)?, label, opcode)? as u16);
        writer.write_f32(as_f32(arg(args, 2, label, opcode)?, label, opcode)?);
        writer.write_u32(resolve_pointer(arg(args, 3, label, opcode)?, labels));
        writer.write_u32(resolve_pointer(arg(args, 4, label, opcode)?, labels));
    }
    Ok(())
}

fn encode_single_jump(
    writer: &mut Writer,
    label: &str,
    opcode: u8,
    args: &[Value],
    labels: Option<&HashMap<String, u32>>,
) -> Result<(), AssembleError> {
    writer.write_u32(resolve_pointer(arg(args, 0, label, opcode)?, labels));
    Ok(())
}

fn encode_dual_jump(
    writer: &mut Writer,
    label: &str,
    opcode: u8,
    args: &[Value],
    labels: Option<&HashMap<String, u32>>,
) -> Result<(), AssembleError> {
    writer.write_u32(resolve_pointer(arg(args, 0, label, opcode)?, labels));
    writer.write_u32(resolve_pointer(arg(args, 1, label, opcode)?, labels));
    Ok(())
}

fn encode_show_choice(
    writer: &mut Writer,
    label: &str,
    opcode: u8,
    args: &[Value],
    labels: Option<&HashMap<String, u32>>,
) -> Result<(), AssembleError> {
    let count = as_u64(arg(args, 0, label, opcode)?, label, opcode)?;
    writer.write_u8(count as u8);
    let choices = arg(args, 1, label, opcode)?
        .as_array()
        .ok_or_else(|| mismatch(label, opcode, "expected choice array"))?;

    for (i, choice) in choices.iter().enumerate() {
        let obj = choice
            .as_object()
            .ok_or_else(|| mismatch(label, opcode, format!("choice {i} is not an object")))?;
        let field = |name: &str| {
            obj.get(name)
                .ok_or_else(|| mismatch(label, opcode, format!("choice {i} missing `{name}`")))
        };
        writer.write_u16(as_u64(field("id")?, label, opcode)? as u16);
        write_str16(writer, field("text")?, label, opcode)?;
        writer.write_u8(as_u64(field("op1")?, label, opcode)? as u8);
        writer.write_u8(as_u64(field("op2")?, label, opcode)? as u8);
        writer.write_u8(as_u64(field("op3")?, label, opcode)? as u8);
        let op_jump = as_u64(field("opJump")?, label, opcode)?;
        writer.write_u8(op_jump as u8);
        match op_jump {
            6 => writer.write_u32(resolve_pointer(field("pointer")?, labels)),
            7 => write_str16(writer, field("file")?, label, opcode)?,
            _ => {}
        }
    }
    Ok(())
}
