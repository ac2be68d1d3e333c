// cleanspeak/tests/cli_integration_tests.rs
//! End-to-end tests for the cleanspeak binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn cleanspeak() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("cleanspeak"));
    cmd.env_remove("CLEANSPEAK_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const MASK_CONFIG: &str = r#"
actions:
  mild: mask
  moderate: placeholder
  severe: remove
"#;

#[test]
fn masks_words_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = write_config(&dir, "mask.yaml", MASK_CONFIG);

    cleanspeak()
        .arg("--config")
        .arg(&config)
        .write_stdin("This is DAMN annoying, you f@ck1ng... no, f4ck.\n")
        .assert()
        .success()
        .stdout("This is D**N annoying, you [FILTERED]... no, [FILTERED].\n");
    Ok(())
}

#[test]
fn highlight_only_changes_console_rendering() -> Result<(), Box<dyn std::error::Error>> {
    let input = "well damn it\n";

    cleanspeak()
        .arg("--plain")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(input);

    let output = cleanspeak().arg("--console").write_stdin(input).output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout.clone())?;
    assert!(stdout.contains("\x1b[91mdamn\x1b[0m"), "got {:?}", stdout);
    assert_eq!(strip_ansi_escapes::strip(&output.stdout), input.as_bytes());
    Ok(())
}

#[test]
fn output_file_receives_plain_rendering() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_path = write_config(&dir, "input.txt", "oh hell no\n");
    let output_path = dir.path().join("filtered.txt");

    cleanspeak()
        .args(["--console", "-i"])
        .arg(&input_path)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[91mhell\x1b[0m"))
        .stderr(predicate::str::contains("Writing plain rendering to file"));

    assert_eq!(fs::read_to_string(&output_path)?, "oh hell no\n");
    Ok(())
}

#[test]
fn stats_json_reports_the_run() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = write_config(
        &dir,
        "words.json",
        r#"{ "words": [ { "word": "heck", "severity": "mild" } ], "actions": { "mild": "flag" } }"#,
    );

    let output = cleanspeak()
        .args(["--no-defaults", "--stats-json", "--config"])
        .arg(&config)
        .write_stdin("heck heck\nfine words here\n")
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let (text, json) = stdout.split_at(stdout.find('{').unwrap());
    assert_eq!(text, "heck[!] heck[!]\nfine words here\n");

    let stats: serde_json::Value = serde_json::from_str(json)?;
    assert_eq!(stats["words_processed"], 5);
    assert_eq!(stats["words_filtered"], 2);
    assert_eq!(stats["filter_rate_percent"], 40.0);
    assert_eq!(stats["by_severity"]["mild"], 2);
    assert_eq!(stats["trie_word_count"], 1);
    Ok(())
}

#[test]
fn stats_json_starts_on_its_own_line() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = write_config(
        &dir,
        "words.yaml",
        "words:\n  - word: heck\n    severity: mild\nactions:\n  mild: flag\n",
    );

    let output = cleanspeak()
        .args(["--no-defaults", "--stats-json", "--config"])
        .arg(&config)
        .write_stdin("oh heck")
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("oh heck[!]\n{"), "unexpected stdout: {:?}", stdout);
    let stats: serde_json::Value = serde_json::from_str(&stdout["oh heck[!]\n".len()..])?;
    assert_eq!(stats["words_filtered"], 1);
    Ok(())
}

#[test]
fn stats_table_goes_to_stderr() {
    cleanspeak()
        .arg("--stats")
        .write_stdin("damn\n")
        .assert()
        .success()
        .stdout("damn\n")
        .stderr(predicate::str::contains("Filter Summary:"))
        .stderr(predicate::str::contains("Words filtered"))
        .stderr(predicate::str::contains("Words in lexicon"));
}

#[test]
fn line_buffered_mode_filters_every_line() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = write_config(&dir, "mask.yaml", MASK_CONFIG);

    cleanspeak()
        .args(["--line-buffered", "--config"])
        .arg(&config)
        .write_stdin("first damn line\nclean line\nlast sh1t line")
        .assert()
        .success()
        .stdout("first d**n line\nclean line\nlast [FILTERED] line");
    Ok(())
}

#[test]
fn sample_config_is_written_and_usable() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let sample = dir.path().join("sample.yaml");

    cleanspeak()
        .arg("--sample-config")
        .arg(&sample)
        .assert()
        .success()
        .stderr(predicate::str::contains("Sample configuration written"));
    assert!(fs::read_to_string(&sample)?.contains("custom_replacements"));

    cleanspeak()
        .arg("--config")
        .arg(&sample)
        .write_stdin("what the fuuuck, freaking dammit")
        .assert()
        .success()
        .stdout("what the fudge, freaking dammit");
    Ok(())
}

#[test]
fn no_defaults_without_config_warns_and_passes_through() {
    cleanspeak()
        .arg("--no-defaults")
        .write_stdin("damn")
        .assert()
        .success()
        .stdout("damn")
        .stderr(predicate::str::contains("No words are configured"));
}

#[test]
fn invalid_utf8_input_fails() {
    cleanspeak()
        .write_stdin(vec![b'o', b'k', 0xff, b'\n'])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn malformed_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = write_config(&dir, "bad.yaml", "actions:\n  mild: explode\n");

    cleanspeak()
        .arg("--config")
        .arg(&config)
        .write_stdin("damn")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn missing_theme_file_is_reported_as_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    cleanspeak()
        .arg("--theme")
        .arg(dir.path().join("absent.yaml"))
        .write_stdin("damn")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::starts_with("Error: Theme error"));
    Ok(())
}

#[test]
fn plain_and_console_are_mutually_exclusive() {
    cleanspeak()
        .args(["--plain", "--console"])
        .write_stdin("")
        .assert()
        .failure();
}
