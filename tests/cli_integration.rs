//! End-to-end CLI tests against a temporary XML corpus.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

/// Write a small two-surah Arabic corpus file into `dir`.
fn write_arabic_corpus(dir: &Path) {
    let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<quran>
  <surah no="1">
    <ayat no="1" text="bismi allahi alrrahmani alrraheemi" />
    <ayat no="2" text="alhamdu lillahi rabbi alAAalameena" />
  </surah>
  <surah no="2">
    <ayat no="1" text="alif-lam-meem" />
    <ayat no="2" text="thalika alkitabu la rayba feehi" />
    <ayat no="3" text="allatheena yuminoona bialghaybi" />
  </surah>
</quran>
"#;
    std::fs::write(dir.join("QuranText.Arabic.Medina.xml"), content).unwrap();
}

/// Command with config isolated to the test's temp dir, so a developer's
/// real config never leaks into assertions.
fn qurantext(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("qurantext").unwrap();
    cmd.env("QURANTEXT_CONFIG_DIR", config_dir);
    cmd
}

#[test]
fn insert_block_prints_invocation_and_numbered_ayat() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_arabic_corpus(temp_dir.path());

    qurantext(temp_dir.path())
        .arg("insert")
        .arg("--corpus-dir")
        .arg(temp_dir.path())
        .args(["--surah", "2", "--from", "1", "--to", "3"])
        .args(["--arabic", "Medina"])
        .arg("--block")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "bismi allahi alrrahmani alrraheemi\nalif-lam-meem \u{FD3F}\u{0661}\u{FD3E}",
        ))
        .stdout(predicate::str::contains(
            "allatheena yuminoona bialghaybi \u{FD3F}\u{0663}\u{FD3E}",
        ));
}

#[test]
fn insert_line_by_line_prints_one_paragraph_per_ayah() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_arabic_corpus(temp_dir.path());

    let assert = qurantext(temp_dir.path())
        .arg("insert")
        .arg("--corpus-dir")
        .arg(temp_dir.path())
        .args(["--surah", "2", "--from", "1", "--to", "3"])
        .args(["--arabic", "Medina"])
        .arg("--no-numbers")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    // Invocation line plus one line per ayah.
    assert_eq!(
        lines,
        vec![
            "bismi allahi alrrahmani alrraheemi",
            "alif-lam-meem",
            "thalika alkitabu la rayba feehi",
            "allatheena yuminoona bialghaybi",
        ]
    );
}

#[test]
fn insert_fatihah_omits_invocation() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_arabic_corpus(temp_dir.path());

    let assert = qurantext(temp_dir.path())
        .arg("insert")
        .arg("--corpus-dir")
        .arg(temp_dir.path())
        .args(["--surah", "1", "--from", "1", "--to", "2"])
        .args(["--arabic", "Medina"])
        .arg("--no-numbers")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    // Surah 1 is exempt: its first ayah appears exactly once, not doubled by
    // an invocation line.
    assert_eq!(
        stdout.matches("bismi allahi alrrahmani alrraheemi").count(),
        1
    );
}

#[test]
fn insert_json_carries_direction_and_alignment() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_arabic_corpus(temp_dir.path());

    qurantext(temp_dir.path())
        .arg("insert")
        .arg("--corpus-dir")
        .arg(temp_dir.path())
        .args(["--surah", "2", "--from", "1", "--to", "1"])
        .args(["--arabic", "Medina"])
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"direction\": \"Rtl\""))
        .stdout(predicate::str::contains("\"alignment\": \"Right\""));
}

#[test]
fn invalid_range_fails_with_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_arabic_corpus(temp_dir.path());

    qurantext(temp_dir.path())
        .arg("insert")
        .arg("--corpus-dir")
        .arg(temp_dir.path())
        .args(["--surah", "2", "--from", "5", "--to", "3"])
        .args(["--arabic", "Medina"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ayat range"));
}

#[test]
fn missing_corpus_fails_with_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    qurantext(temp_dir.path())
        .arg("insert")
        .arg("--corpus-dir")
        .arg(temp_dir.path())
        .args(["--surah", "2", "--from", "1", "--to", "3"])
        .args(["--arabic", "Medina"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corpus unavailable"));
}

#[test]
fn surahs_lists_all_chapters() {
    let temp_dir = tempfile::tempdir().unwrap();

    qurantext(temp_dir.path())
        .arg("surahs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Al-Fatihah"))
        .stdout(predicate::str::contains("114. An-Nas"));
}

#[test]
fn config_set_and_show_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    qurantext(temp_dir.path())
        .args(["config", "arabic-font", "Al Qalam Quran Majeed"])
        .assert()
        .success();

    qurantext(temp_dir.path())
        .args(["config", "arabic-font"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "arabic-font = Al Qalam Quran Majeed",
        ));
}

#[test]
fn streams_reports_corpus_contents() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_arabic_corpus(temp_dir.path());

    qurantext(temp_dir.path())
        .arg("streams")
        .arg("--corpus-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Arabic (Medina)"));
}
