//! End-to-end smoke tests driving the built `ws2-asm` binary as a
//! subprocess.

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn ws2_asm_cmd() -> Command {
    Command::cargo_bin("ws2-asm").expect("binary builds")
}

fn sample_script() -> Vec<u8> {
    // Jump(loc_00000005) ; FileEnd
    vec![
        0x06, 0x05, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]
}

#[test]
fn disasm_writes_one_asm_file_per_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("script.ws2");
    std::fs::write(&input, sample_script()).unwrap();
    let out_dir = dir.path().join("out");

    ws2_asm_cmd()
        .arg("disasm")
        .arg(&input)
        .arg(&out_dir)
        .assert()
        .success();

    let rendered = std::fs::read_to_string(out_dir.join("script.ws2.asm.txt")).unwrap();
    assert!(rendered.contains("06 (Jump)"));
    assert!(rendered.contains("FF (FileEnd)"));
}

#[test]
fn disasm_then_assemble_round_trips_bytes() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("script.ws2");
    std::fs::write(&input, sample_script()).unwrap();
    let out_dir = dir.path().join("out");

    ws2_asm_cmd()
        .arg("disasm")
        .arg(&input)
        .arg(&out_dir)
        .arg("--encryption")
        .arg("decrypted")
        .assert()
        .success();

    let asm_path = out_dir.join("script.ws2.asm.txt");
    let reassembled = dir.path().join("reassembled.ws2");

    ws2_asm_cmd()
        .arg("assemble")
        .arg(&asm_path)
        .arg(&reassembled)
        .arg("--no-encrypt")
        .assert()
        .success();

    assert_eq!(std::fs::read(&reassembled).unwrap(), sample_script());
}

#[test]
fn tool_encrypt_then_decrypt_round_trips() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("script.ws2");
    std::fs::write(&input, sample_script()).unwrap();
    let encrypted_dir = dir.path().join("encrypted");
    let decrypted_dir = dir.path().join("decrypted");

    ws2_asm_cmd()
        .arg("tool")
        .arg("encrypt")
        .arg(&input)
        .arg(&encrypted_dir)
        .assert()
        .success();

    let encrypted = std::fs::read(encrypted_dir.join("script.ws2")).unwrap();
    assert_ne!(encrypted, sample_script());

    ws2_asm_cmd()
        .arg("tool")
        .arg("decrypt")
        .arg(encrypted_dir.join("script.ws2"))
        .arg(&decrypted_dir)
        .assert()
        .success();

    assert_eq!(
        std::fs::read(decrypted_dir.join("script.ws2")).unwrap(),
        sample_script()
    );
}

#[test]
fn disasm_reports_missing_input_path() {
    ws2_asm_cmd()
        .arg("disasm")
        .arg("/no/such/path.ws2")
        .assert()
        .failure()
        .stderr(contains("path not found"));
}
