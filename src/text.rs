//! Textual rendering and parsing of [`Line`] values — the `.asm.txt`
//! grammar shared by the disassembler's output and the assembler's input.

use crate::error::AssembleError;
use crate::opcodes;
use crate::types::{format_label, parse_label, Instr, Line};

/// Render a sequence of lines into the `.asm.txt` textual form, one line
/// per entry, LF-terminated.
pub fn render_lines(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        render_line(line, &mut out);
        out.push('\n');
    }
    out
}

fn render_line(line: &Line, out: &mut String) {
    match line {
        Line::Comment(text) => out.push_str(text),
        Line::Info(text) => out.push_str(text),
        Line::Label(name) => out.push_str(name),
        Line::Raw { offset, bytes } => {
            out.push_str(&format!("{}: RAW {}", format_label(*offset), hex::encode_upper(bytes)));
        }
        Line::EofNote { offset, opcode } => {
            out.push_str(&format!(
                "{}: 在Opcode {:02X} 处遇到EOF",
                format_label(*offset),
                opcode
            ));
        }
        Line::Instr(instr) => {
            let args_json = serde_json::to_string(&instr.args).unwrap_or_else(|_| "[]".into());
            out.push_str(&format!(
                "{}: {:02X} ({}) {}",
                instr.label,
                instr.opcode,
                opcodes::name(instr.opcode),
                args_json
            ));
        }
    }
}

/// Parse a previously-rendered `.asm.txt` source back into [`Line`] values.
pub fn parse_lines(source: &str) -> Result<Vec<Line>, AssembleError> {
    let mut lines = Vec::new();
    for (idx, raw_line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let text = raw_line.trim_end();
        if text.is_empty() {
            continue;
        }
        lines.push(parse_line(text, line_no)?);
    }
    Ok(lines)
}

fn parse_line(text: &str, line_no: usize) -> Result<Line, AssembleError> {
    if text.starts_with(';') || text.contains("检测模式") || text.contains("来源:") {
        return Ok(Line::Comment(text.to_string()));
    }
    if text.starts_with("解密后大小") {
        return Ok(Line::Info(text.to_string()));
    }

    // A bare "NAME:" line with no space carries no instruction of its own.
    if !text.contains(' ') && text.ends_with(':') {
        return Ok(Line::Label(text[..text.len() - 1].to_string()));
    }

    let (prefix, rest) = text.split_once(':').ok_or_else(|| AssembleError::MalformedLine {
        line: line_no,
        text: text.to_string(),
    })?;
    let label = prefix.trim().to_string();
    let rest = rest.trim();

    if rest.is_empty() {
        return Ok(Line::Label(label));
    }

    // Offset is only meaningful when the label follows the canonical
    // loc_XXXXXXXX form; a renamed label carries no numeric offset hint
    // and the assembler recomputes everything from pass-1 cursor position.
    let offset = parse_label(&label).unwrap_or(0);

    if let Some(hex_part) = rest.strip_prefix("RAW ") {
        let bytes = hex::decode(hex_part.trim()).map_err(|source| AssembleError::InvalidHex {
            line: line_no,
            source,
        })?;
        return Ok(Line::Raw { offset, bytes });
    }

    if rest.contains("在Opcode") && rest.contains("处遇到EOF") {
        let opcode_hex = rest
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| AssembleError::MalformedLine {
                line: line_no,
                text: text.to_string(),
            })?;
        let opcode =
            u8::from_str_radix(opcode_hex, 16).map_err(|_| AssembleError::MalformedLine {
                line: line_no,
                text: text.to_string(),
            })?;
        return Ok(Line::EofNote { offset, opcode });
    }

    // "OO (NAME) <json-args>"
    let mut parts = rest.splitn(2, ' ');
    let opcode_hex = parts.next().ok_or_else(|| AssembleError::MalformedLine {
        line: line_no,
        text: text.to_string(),
    })?;
    let opcode = u8::from_str_radix(opcode_hex, 16).map_err(|_| AssembleError::MalformedLine {
        line: line_no,
        text: text.to_string(),
    })?;

    let remainder = parts.next().unwrap_or("").trim();
    let args_str = match remainder.strip_prefix('(') {
        Some(after_paren) => match after_paren.find(')') {
            Some(close) => after_paren[close + 1..].trim(),
            None => remainder,
        },
        None => remainder,
    };

    let args = if args_str.is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(args_str).map_err(|source| AssembleError::InvalidArgsJson {
            line: line_no,
            source,
        })?
    };

    Ok(Line::Instr(Instr {
        offset,
        label,
        opcode,
        args,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_and_reparses_instruction_line() {
        let lines = vec![Line::Instr(Instr::at(0x10, 0x06, vec![json!("loc_00000020")]))];
        let text = render_lines(&lines);
        assert_eq!(text, "loc_00000010: 06 (Jump) [\"loc_00000020\"]\n");
        let parsed = parse_lines(&text).unwrap();
        assert_eq!(parsed, lines);
    }

    #[test]
    fn renders_and_reparses_raw_line() {
        let lines = vec![Line::Raw {
            offset: 0x40,
            bytes: vec![0xAB, 0xCD],
        }];
        let text = render_lines(&lines);
        assert_eq!(text, "loc_00000040: RAW ABCD\n");
        assert_eq!(parse_lines(&text).unwrap(), lines);
    }

    #[test]
    fn renamed_label_round_trips() {
        let mut instr = Instr::at(0x10, 0xFF, vec![json!(0), json!(0), json!(0), json!(0), json!(0)]);
        instr.label = "myLabel".to_string();
        let lines = vec![Line::Instr(instr)];
        let text = render_lines(&lines);
        assert_eq!(text, "myLabel: FF (FileEnd) [0,0,0,0,0]\n");
        assert_eq!(parse_lines(&text).unwrap(), lines);
    }

    #[test]
    fn bare_label_line_round_trips() {
        let lines = vec![Line::Label("myLabel".to_string())];
        assert_eq!(render_lines(&lines), "myLabel:\n");
        assert_eq!(parse_lines("myLabel:\n").unwrap(), lines);
    }

    #[test]
    fn malformed_line_is_rejected() {
        let err = parse_lines("not a valid line").unwrap_err();
        assert!(matches!(err, AssembleError::MalformedLine { .. }));
    }
}
