//! Walks disassembled lines and pulls out display names and dialogue text.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::types::{DialogueEntry, Line};

/// Trailing run of `%K`/`%P` control codes a message line ends with. These
/// are presentation-timing codes, not part of the displayed text, so they
/// are stripped before the message is handed to a translator and reattached
/// verbatim on import.
fn trailing_control_codes() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:%K|%P)+$").unwrap())
}

/// Extract every display name and dialogue message from a disassembled
/// script, in the order they appear.
pub fn extract(lines: &[Line]) -> Vec<DialogueEntry> {
    let mut entries = Vec::new();
    let mut current_name: Option<String> = None;

    for line in lines {
        let instr = match line {
            Line::Instr(instr) => instr,
            _ => continue,
        };

        match instr.opcode {
            0x15 => {
                if let Some(Value::String(raw_name)) = instr.args.first() {
                    current_name = if raw_name.is_empty() {
                        None
                    } else {
                        Some(clean_name(raw_name))
                    };
                }
            }
            0x14 => {
                if let Some(Value::String(raw_msg)) = instr.args.get(3) {
                    if let Some((text, _suffix)) = split_suffix(raw_msg) {
                        if !text.is_empty() {
                            entries.push(DialogueEntry {
                                name: current_name.clone(),
                                message: text,
                            });
                        }
                    }
                }
            }
            0x0F => {
                if let Some(Value::Array(choices)) = instr.args.get(1) {
                    for choice in choices {
                        if let Some(Value::String(text)) = choice.get("text") {
                            entries.push(DialogueEntry {
                                name: None,
                                message: text.clone(),
                            });
                        }
                    }
                }
            }
            _ => {}
        }
    }

    entries
}

/// Strip the `%LC` display-name prefix, if present.
fn clean_name(raw: &str) -> String {
    raw.strip_prefix("%LC").unwrap_or(raw).to_string()
}

/// Split a raw message into `(text, suffix)`, where `suffix` is the trailing
/// run of control codes (possibly empty). Returns `None` only if `raw` is
/// not valid UTF-8, which cannot happen since it is already a `String`.
fn split_suffix(raw: &str) -> Option<(String, String)> {
    match trailing_control_codes().find(raw) {
        Some(m) => Some((raw[..m.start()].to_string(), raw[m.start()..].to_string())),
        None => Some((raw.to_string(), String::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Instr;
    use serde_json::json;

    fn instr_line(opcode: u8, args: Vec<Value>) -> Line {
        Line::Instr(Instr::at(0, opcode, args))
    }

    #[test]
    fn extracts_message_without_name() {
        let lines = vec![instr_line(
            0x14,
            vec![json!(0), json!(0), json!(0), json!("Hello there%K")],
        )];
        let entries = extract(&lines);
        assert_eq!(
            entries,
            vec![DialogueEntry {
                name: None,
                message: "Hello there".to_string(),
            }]
        );
    }

    #[test]
    fn attaches_current_display_name() {
        let lines = vec![
            instr_line(0x15, vec![json!("%LCAlice")]),
            instr_line(0x14, vec![json!(0), json!(0), json!(0), json!("Hi!%P")]),
        ];
        let entries = extract(&lines);
        assert_eq!(
            entries,
            vec![DialogueEntry {
                name: Some("Alice".to_string()),
                message: "Hi!".to_string(),
            }]
        );
    }

    #[test]
    fn clearing_name_stops_attaching_it() {
        let lines = vec![
            instr_line(0x15, vec![json!("%LCAlice")]),
            instr_line(0x15, vec![json!("")]),
            instr_line(0x14, vec![json!(0), json!(0), json!(0), json!("Anon line")]),
        ];
        let entries = extract(&lines);
        assert_eq!(entries[0].name, None);
    }

    #[test]
    fn skips_message_that_is_control_codes_only() {
        let lines = vec![instr_line(
            0x14,
            vec![json!(0), json!(0), json!(0), json!("%K%P")],
        )];
        assert!(extract(&lines).is_empty());
    }

    #[test]
    fn extracts_choice_text() {
        let lines = vec![instr_line(
            0x0F,
            vec![
                json!(2),
                json!([
                    {"id": 0, "text": "Go north", "op1": 0, "op2": 0, "op3": 0, "opJump": 6, "pointer": "loc_00000010"},
                    {"id": 1, "text": "Go south", "op1": 0, "op2": 0, "op3": 0, "opJump": 6, "pointer": "loc_00000020"},
                ]),
            ],
        )];
        let entries = extract(&lines);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "Go north");
        assert_eq!(entries[1].message, "Go south");
    }
}
