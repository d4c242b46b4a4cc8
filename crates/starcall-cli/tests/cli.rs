use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DIALOG: &str = "You see a shooting star!\n\
    The star looks like itwill land in The Lost Grove in the next 10 12 minutes.\n\
    The star looks to be size 4,";

/// A config file with no settings, so the user's own config is never read.
fn empty_config(dir: &TempDir) -> String {
    let path = dir.path().join("config.json");
    fs::write(&path, "{}").unwrap();
    path.to_string_lossy().into_owned()
}

fn starcall() -> Command {
    Command::cargo_bin("starcall").unwrap()
}

#[test]
fn parse_from_stdin_prints_call_command() {
    let dir = TempDir::new().unwrap();

    starcall()
        .args(["--config", &empty_config(&dir), "parse", "--world", "84"])
        .write_stdin(DIALOG)
        .assert()
        .success()
        .stdout("/call world: 84 region: Lost Grove size: 4 relative-time: 10\n");
}

#[test]
fn parse_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("dialog.txt");
    fs::write(&input, DIALOG).unwrap();

    starcall()
        .args(["--config", &empty_config(&dir), "parse", "--world", "2"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("region: Lost Grove"));
}

#[test]
fn parse_uses_default_world_from_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"command": {"default_world": 117}}"#).unwrap();

    starcall()
        .args(["--config", config.to_str().unwrap(), "parse"])
        .write_stdin(DIALOG)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/call world: 117 "));
}

#[test]
fn parse_without_world_fails_for_command_format() {
    let dir = TempDir::new().unwrap();

    starcall()
        .args(["--config", &empty_config(&dir), "parse"])
        .write_stdin(DIALOG)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No world given"));
}

#[test]
fn parse_json_without_world() {
    let dir = TempDir::new().unwrap();

    starcall()
        .args(["--config", &empty_config(&dir), "parse", "--format", "json"])
        .write_stdin(DIALOG)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""region": "Lost Grove""#))
        .stdout(predicate::str::contains(r#""relative_time": "10""#));
}

#[test]
fn parse_unknown_fields_render_sentinels() {
    let dir = TempDir::new().unwrap();

    starcall()
        .args(["--config", &empty_config(&dir), "parse", "--world", "1"])
        .write_stdin("Nothing to see here.")
        .assert()
        .success()
        .stdout("/call world: 1 region: ERR size: ERR relative-time: 0\n")
        .stderr(predicate::str::contains("Could not extract landing region"));
}

#[test]
fn parse_strict_fails_on_missing_field() {
    let dir = TempDir::new().unwrap();

    starcall()
        .args(["--config", &empty_config(&dir), "parse", "--world", "1", "--strict"])
        .write_stdin("The star looks like it will land in Tuska. The star looks to be big.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing landing time"));
}

#[test]
fn parse_applies_configured_replacements() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        r#"{"normalizer": {"extra_replacements": [{"from": "Tusk@", "to": "Tuska"}]}}"#,
    )
    .unwrap();

    starcall()
        .args(["--config", config.to_str().unwrap(), "parse", "--world", "9"])
        .write_stdin("land in Tusk@ in the next 5 to 7 minutes. to be small.")
        .assert()
        .success()
        .stdout("/call world: 9 region: Tuska size: Small relative-time: 5\n");
}

#[test]
fn parse_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("call.txt");

    starcall()
        .args(["--config", &empty_config(&dir), "parse", "--world", "3", "--output"])
        .arg(&output)
        .write_stdin(DIALOG)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "/call world: 3 region: Lost Grove size: 4 relative-time: 10");
}

#[test]
fn parse_missing_input_file() {
    let dir = TempDir::new().unwrap();

    starcall()
        .args(["--config", &empty_config(&dir), "parse", "--world", "3", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn normalize_prints_cleaned_text() {
    let dir = TempDir::new().unwrap();

    starcall()
        .args(["--config", &empty_config(&dir), "normalize"])
        .write_stdin("in the next 120\n30 mines")
        .assert()
        .success()
        .stdout("in the next 12 to 30 minutes\n");
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"normalizer": {"extra_replacements": [{"from": "", "to": "x"}]}}"#)
        .unwrap();

    starcall()
        .args(["--config", config.to_str().unwrap(), "normalize"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn config_get_reads_given_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"command": {"default_world": 77}}"#).unwrap();

    starcall()
        .args(["--config", config.to_str().unwrap(), "config", "get", "command.default_world"])
        .assert()
        .success()
        .stdout("77\n");
}

#[test]
fn config_set_writes_file_read_by_parse() {
    let dir = TempDir::new().unwrap();
    let config = empty_config(&dir);

    starcall()
        .args(["--config", &config, "config", "set", "command.default_world", "5"])
        .assert()
        .success();

    starcall()
        .args(["--config", &config, "parse"])
        .write_stdin(DIALOG)
        .assert()
        .success()
        .stdout("/call world: 5 region: Lost Grove size: 4 relative-time: 10\n");
}

#[test]
fn config_path_shows_given_config_file() {
    let dir = TempDir::new().unwrap();
    let config = empty_config(&dir);

    starcall()
        .args(["--config", &config, "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(config.as_str()))
        .stdout(predicate::str::contains("exists"));
}
