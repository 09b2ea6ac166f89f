//! Patches translated dialogue back into a disassembled script and
//! reassembles it, retroactively rewriting `SetDisplayName` lines whose
//! name changed since the last time they were set.

use serde_json::Value;

use crate::assembler;
use crate::error::{AssembleError, JsonLayerError, Result};
use crate::types::{DialogueEntry, Line};

/// Re-apply `entries` onto `lines` (the disassembly of the original file,
/// with control-code suffixes and every other line byte-for-byte intact)
/// and assemble the result back into bytecode.
///
/// `lines` are consumed by value because display-name lines may need to be
/// rewritten in place as earlier entries are patched.
pub fn import(mut lines: Vec<Line>, entries: &[DialogueEntry]) -> Result<Vec<u8>> {
    let mut entry_idx = 0usize;
    let mut last_set_name_idx: Option<usize> = None;
    let mut current_name_raw: Option<String> = None;

    for i in 0..lines.len() {
        let opcode = match &lines[i] {
            Line::Instr(instr) => instr.opcode,
            _ => continue,
        };

        match opcode {
            0x15 => {
                if let Line::Instr(instr) = &lines[i] {
                    if let Some(Value::String(raw)) = instr.args.first() {
                        current_name_raw = Some(raw.clone());
                        last_set_name_idx = Some(i);
                    }
                }
            }
            0x14 => {
                let orig_text_empty = match &lines[i] {
                    Line::Instr(instr) => match instr.args.get(3) {
                        Some(Value::String(raw)) => strip_suffix(raw).0.is_empty(),
                        _ => true,
                    },
                    _ => true,
                };
                if orig_text_empty {
                    continue;
                }

                let entry = entries.get(entry_idx).ok_or_else(|| JsonLayerError::EntryExhausted {
                    context: format!("DisplayMessage at index {i}"),
                })?;

                if let Some(name) = &entry.name {
                    patch_display_name(&mut lines, &mut last_set_name_idx, &mut current_name_raw, name)?;
                }

                if let Line::Instr(instr) = &mut lines[i] {
                    let raw = match instr.args.get(3) {
                        Some(Value::String(raw)) => raw.clone(),
                        _ => {
                            return Err(JsonLayerError::MalformedEntry {
                                index: i,
                                reason: "DisplayMessage argument 3 is not a string".to_string(),
                            }
                            .into())
                        }
                    };
                    let (_, suffix) = strip_suffix(&raw);
                    instr.args[3] = Value::String(format!("{}{}", entry.message, suffix));
                }
                entry_idx += 1;
            }
            0x0F => {
                if let Line::Instr(instr) = &mut lines[i] {
                    if let Some(Value::Array(choices)) = instr.args.get_mut(1) {
                        for choice in choices {
                            if matches!(choice.get("text"), Some(Value::String(_))) {
                                let entry = entries.get(entry_idx).ok_or_else(|| {
                                    JsonLayerError::EntryExhausted {
                                        context: format!("ShowChoice at index {i}"),
                                    }
                                })?;
                                if let Some(obj) = choice.as_object_mut() {
                                    obj.insert("text".to_string(), Value::String(entry.message.clone()));
                                }
                                entry_idx += 1;
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    assembler::assemble(&lines).map_err(Into::into)
}

fn patch_display_name(
    lines: &mut [Line],
    last_set_name_idx: &mut Option<usize>,
    current_name_raw: &mut Option<String>,
    target_name: &str,
) -> std::result::Result<(), AssembleError> {
    let Some(idx) = *last_set_name_idx else {
        return Ok(());
    };
    let raw = current_name_raw.clone().unwrap_or_default();
    let (prefix, clean) = match raw.strip_prefix("%LC") {
        Some(rest) => ("%LC", rest.to_string()),
        None => ("", raw.clone()),
    };

    if target_name == clean {
        return Ok(());
    }

    let new_raw = format!("{prefix}{target_name}");
    if let Line::Instr(instr) = &mut lines[idx] {
        instr.args[0] = Value::String(new_raw.clone());
    }
    *current_name_raw = Some(new_raw);
    Ok(())
}

/// Split off the trailing run of `%K`/`%P` control codes, if any.
fn strip_suffix(raw: &str) -> (&str, &str) {
    let bytes = raw.as_bytes();
    let mut cut = bytes.len();
    while cut >= 2 {
        let tail = &raw[cut - 2..cut];
        if tail == "%K" || tail == "%P" {
            cut -= 2;
        } else {
            break;
        }
    }
    (&raw[..cut], &raw[cut..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disassembler::disassemble;
    use crate::types::Encryption;
    use serde_json::json;

    #[test]
    fn strip_suffix_splits_trailing_codes() {
        assert_eq!(strip_suffix("Hello%K"), ("Hello", "%K"));
        assert_eq!(strip_suffix("Hello%K%P"), ("Hello", "%K%P"));
        assert_eq!(strip_suffix("Hello"), ("Hello", ""));
        assert_eq!(strip_suffix("%K"), ("", "%K"));
    }

    #[test]
    fn import_round_trips_through_assembler() {
        // 0xFF (FileEnd) with no text at all — exercises the "no entries
        // needed" path end to end.
        let bytes = [0xFFu8, 0, 0, 0, 0, 0, 0, 0, 0];
        let lines = disassemble(&bytes, Some(Encryption::Decrypted));
        let out = import(lines, &[]).unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn show_choice_skips_non_string_text_like_extract_does() {
        // One choice whose text is an undecodable raw object (as extract.rs
        // produces for a Str16 that failed UTF-16 decode) and one with a
        // normal string. Only the string one should consume a JSON entry,
        // matching extract's predicate so the cursors stay aligned.
        let instr = crate::types::Instr::at(
            0,
            0x0F,
            vec![
                json!(2),
                json!([
                    {"id": 0, "text": {"raw": "00D8", "terminated": true}, "op1": 0, "op2": 0, "op3": 0, "opJump": 6, "pointer": "loc_00000010"},
                    {"id": 1, "text": "Go south", "op1": 0, "op2": 0, "op3": 0, "opJump": 6, "pointer": "loc_00000020"},
                ]),
            ],
        );
        let lines = vec![Line::Instr(instr)];
        let entries = vec![DialogueEntry {
            name: None,
            message: "Go south (translated)".to_string(),
        }];
        let out = import(lines, &entries).unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn missing_entry_is_reported() {
        // A single DisplayMessage instruction with non-empty text, but the
        // caller supplies zero entries - the import must fail rather than
        // silently leave the text untranslated.
        let instr = crate::types::Instr::at(
            0,
            0x14,
            vec![json!(0), json!(0), json!(0), json!("Hi there")],
        );
        let lines = vec![Line::Instr(instr)];
        let err = import(lines, &[]).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::JsonLayer(JsonLayerError::EntryExhausted { .. })
        ));
    }
}
