use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn tabletidy() -> Command {
    Command::cargo_bin("tabletidy").unwrap()
}

#[test]
fn test_stdout_carries_only_rewritten_text() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"a\n<div>\nb\n</div>\n<table border=\"1\" class=\"dataframe\">\nc\n")
        .unwrap();
    file.flush().unwrap();

    tabletidy()
        .arg(file.path())
        .env("RUST_LOG", "tabletidy=info")
        .assert()
        .success()
        .stdout("a\n - 出力\n<table>\nc\n");
}

#[test]
fn test_missing_file_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();

    tabletidy()
        .arg(dir.path().join("missing.md"))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Failed to open input file"));
}

#[test]
fn test_path_argument_is_required() {
    tabletidy().assert().failure();
}
