use png_hash_spoof::{batch, TargetPrefix, DEFAULT_MAX_ATTEMPTS};
use std::fs;

const FILE: &[u8] = include_bytes!("../spoofing/test.png");

fn input_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.png"), FILE).unwrap();
    fs::write(dir.path().join("b.png"), b"not a png at all").unwrap();
    fs::write(dir.path().join("notes.txt"), b"skipped").unwrap();
    dir
}

#[test]
fn test_batch_keeps_going_after_a_failure() {
    let input = input_dir();
    let output = tempfile::tempdir().unwrap();
    let target = TargetPrefix::parse("0x0").unwrap();

    let report = batch::run(&target, input.path(), output.path(), DEFAULT_MAX_ATTEMPTS).unwrap();

    assert!(report.has_failures());
    assert_eq!(report.completed.len(), 1);
    assert_eq!(report.failed.len(), 1);

    let done = &report.completed[0];
    assert_eq!(done.input, input.path().join("a.png"));
    assert_eq!(done.output, output.path().join("a-spoofed.png"));
    assert_eq!(done.attempts, 4);
    assert!(done.digest.starts_with('0'));
    assert_eq!(
        fs::read(&done.output).unwrap(),
        png_hash_spoof::spoof(&target, FILE).unwrap()
    );

    assert_eq!(report.failed[0].input, input.path().join("b.png"));
    assert_eq!(
        report.failed[0].error,
        "input doesn't start with the PNG signature"
    );
    assert!(!output.path().join("b-spoofed.png").exists());
    assert!(!output.path().join("notes-spoofed.png").exists());
}

#[test]
fn test_batch_writes_report() {
    let input = input_dir();
    let output = tempfile::tempdir().unwrap();
    let target = TargetPrefix::parse("0x0").unwrap();
    batch::run(&target, input.path(), output.path(), DEFAULT_MAX_ATTEMPTS).unwrap();

    let report: serde_json::Value =
        serde_json::from_slice(&fs::read(output.path().join(batch::REPORT_FILE)).unwrap())
            .unwrap();
    assert_eq!(report["target"], "0x0");
    assert!(report["date"].is_string());

    let completed = report["completed"].as_array().unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0]["attempts"], 4);
    insta::assert_snapshot!(
        completed[0]["digest"].as_str().unwrap(),
        @"0a26435374efac222414d09791932d8e0c7b88924848eec54c352e989082962a"
    );
    assert!(completed[0]["output"]
        .as_str()
        .unwrap()
        .ends_with("a-spoofed.png"));
    assert!(completed[0]["elapsed_ms"].is_u64());

    let failed = report["failed"].as_array().unwrap();
    assert_eq!(failed.len(), 1);
    assert!(failed[0]["input"].as_str().unwrap().ends_with("b.png"));
    assert!(failed[0]["error"].is_string());
}

#[test]
fn test_batch_creates_output_dir() {
    let input = tempfile::tempdir().unwrap();
    fs::write(input.path().join("a.png"), FILE).unwrap();
    let output = tempfile::tempdir().unwrap();
    let nested = output.path().join("nested").join("out");
    let target = TargetPrefix::parse("0x").unwrap();

    let report = batch::run(&target, input.path(), &nested, 1).unwrap();
    assert!(!report.has_failures());
    assert!(nested.join("a-spoofed.png").is_file());
    assert!(nested.join(batch::REPORT_FILE).is_file());
}

#[test]
fn test_batch_missing_input_dir() {
    let output = tempfile::tempdir().unwrap();
    let target = TargetPrefix::parse("0x0").unwrap();
    let missing = output.path().join("nope");
    assert!(batch::run(&target, &missing, output.path(), 1).is_err());
}
