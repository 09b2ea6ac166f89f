//! Extract/import round trip through the `ws2-json` binary.

use assert_cmd::Command;
use tempfile::tempdir;

fn ws2_json_cmd() -> Command {
    Command::cargo_bin("ws2-json").expect("binary builds")
}

/// A script with a display name, one dialogue line, and a terminator.
fn build_script() -> Vec<u8> {
    let mut out = Vec::new();

    // 0x15 SetDisplayName <Str16, Empty, U8>
    out.push(0x15);
    push_str16(&mut out, "%LCAlice");
    out.push(0);

    // 0x14 DisplayMessage <U32, Str16, Empty, Str16, Empty, U8>
    out.push(0x14);
    out.extend_from_slice(&0u32.to_le_bytes());
    push_str16(&mut out, "");
    push_str16(&mut out, "Hello there%K");
    out.push(0);

    // 0xFF FileEnd <U32, U8, U8, U8, U8>
    out.push(0xFF);
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&[0, 0, 0, 0]);

    out
}

fn push_str16(out: &mut Vec<u8>, text: &str) {
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out.extend_from_slice(&[0, 0]);
}

#[test]
fn extract_pulls_out_name_and_message() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("script.ws2");
    std::fs::write(&input, build_script()).unwrap();
    let output = dir.path().join("script.json");

    ws2_json_cmd()
        .arg("extract")
        .arg(&input)
        .arg(&output)
        .arg("--encryption")
        .arg("decrypted")
        .assert()
        .success();

    let json = std::fs::read_to_string(&output).unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Alice");
    assert_eq!(entries[0]["message"], "Hello there");
}

#[test]
fn import_patches_message_and_preserves_control_codes() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("script.ws2");
    std::fs::write(&input, build_script()).unwrap();
    let json_path = dir.path().join("translated.json");
    std::fs::write(
        &json_path,
        r#"[{"name": "Alice", "message": "Hi!"}]"#,
    )
    .unwrap();
    let output = dir.path().join("out.ws2");

    ws2_json_cmd()
        .arg("import")
        .arg(&input)
        .arg(&json_path)
        .arg(&output)
        .arg("--encryption")
        .arg("decrypted")
        .assert()
        .success();

    let imported = std::fs::read(&output).unwrap();
    assert_ne!(imported, build_script());

    // Re-extract to confirm the control code suffix survived the round trip.
    let reextracted = dir.path().join("reextracted.json");
    ws2_json_cmd()
        .arg("extract")
        .arg(&output)
        .arg(&reextracted)
        .arg("--encryption")
        .arg("decrypted")
        .assert()
        .success();
    let json = std::fs::read_to_string(&reextracted).unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(entries[0]["message"], "Hi!");
}

#[test]
fn import_batches_a_directory_of_matching_files() {
    let dir = tempdir().expect("tempdir");
    let ws2_dir = dir.path().join("ws2");
    let json_dir = dir.path().join("json");
    std::fs::create_dir(&ws2_dir).unwrap();
    std::fs::create_dir(&json_dir).unwrap();

    std::fs::write(ws2_dir.join("script.ws2"), build_script()).unwrap();
    std::fs::write(
        json_dir.join("script.json"),
        r#"[{"name": "Alice", "message": "Howdy"}]"#,
    )
    .unwrap();

    let out_dir = dir.path().join("out");
    ws2_json_cmd()
        .arg("import")
        .arg(&ws2_dir)
        .arg(&json_dir)
        .arg(&out_dir)
        .arg("--encryption")
        .arg("decrypted")
        .assert()
        .success();

    assert!(out_dir.join("script.ws2").exists());
}

#[test]
fn import_rejects_directory_paired_with_file() {
    let dir = tempdir().expect("tempdir");
    let ws2_dir = dir.path().join("ws2");
    std::fs::create_dir(&ws2_dir).unwrap();
    std::fs::write(ws2_dir.join("script.ws2"), build_script()).unwrap();

    let json_file = dir.path().join("single.json");
    std::fs::write(&json_file, r#"[{"name": "Alice", "message": "Hi"}]"#).unwrap();

    ws2_json_cmd()
        .arg("import")
        .arg(&ws2_dir)
        .arg(&json_file)
        .arg(dir.path().join("out.ws2"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("mode mismatch"));
}
