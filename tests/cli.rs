use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_generate_then_convert() {
    let temp = tempdir().unwrap();
    let payload = temp.path().join("payload.bin");
    let bitmap = temp.path().join("payload.bmp");
    let text = temp.path().join("payload.txt");
    fs::write(&payload, [0x01, 0x02, 0x03, 0x04, 0x05]).unwrap();

    Command::cargo_bin("bmpstego")
        .unwrap()
        .arg("-g")
        .arg("-f")
        .arg(&payload)
        .arg("-o")
        .arg(&bitmap)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bitmap successfully generated and saved.",
        ));

    assert!(bitmap.exists());

    Command::cargo_bin("bmpstego")
        .unwrap()
        .arg("-c")
        .arg("-f")
        .arg(&bitmap)
        .arg("-o")
        .arg(&text)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bitmap successfully converted to text format at location:",
        ));

    assert_eq!(fs::read_to_string(&text).unwrap(), "01 02 03 04");
}

#[test]
fn test_convert_missing_bitmap() {
    let temp = tempdir().unwrap();

    Command::cargo_bin("bmpstego")
        .unwrap()
        .args(["--convert", "--file"])
        .arg(temp.path().join("missing.bmp"))
        .arg("--output")
        .arg(temp.path().join("out.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));

    assert!(!temp.path().join("out.txt").exists());
}

#[test]
fn test_generate_empty_file() {
    let temp = tempdir().unwrap();
    let payload = temp.path().join("empty.bin");
    fs::write(&payload, b"").unwrap();

    Command::cargo_bin("bmpstego")
        .unwrap()
        .arg("-g")
        .arg("-f")
        .arg(&payload)
        .arg("-o")
        .arg(temp.path().join("empty.bmp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "File dimensions must be greater than zero.",
        ));
}

#[test]
fn test_generate_requires_output() {
    let temp = tempdir().unwrap();
    let payload = temp.path().join("payload.bin");
    fs::write(&payload, [0u8; 16]).unwrap();

    Command::cargo_bin("bmpstego")
        .unwrap()
        .arg("-g")
        .arg("-f")
        .arg(&payload)
        .assert()
        .failure()
        .stderr(predicate::str::contains("-o"));
}

#[test]
fn test_no_action_prints_help() {
    Command::cargo_bin("bmpstego")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("--psychedelic"));
}

#[test]
fn test_version() {
    Command::cargo_bin("bmpstego")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
