//! Integration tests for the limbah CLI

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn limbah() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("limbah"))
}

const SAMPLE_LABEL: &str = r#"{
    "approvalNumber": "PMH-2024-0042",
    "containerIndex": 1,
    "containerCount": 2,
    "wasteName": "Oli bekas",
    "wasteCategory": "B3",
    "quantity": 12.5,
    "unit": "kg",
    "department": "Produksi",
    "destructionDate": "2024-06-01"
}"#;

#[test]
fn test_version() {
    limbah()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("limbah"));
}

#[test]
fn test_help() {
    limbah()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hazardous-waste destruction workflow"));
}

#[test]
fn test_no_args_shows_info() {
    limbah().assert().success().stdout(predicate::str::contains("limbah"));
}

#[test]
fn test_version_command() {
    limbah()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("limbah v"));
}

#[test]
fn test_json_output_version() {
    limbah()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_json_output_no_args() {
    limbah()
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""))
        .stdout(predicate::str::contains("\"hint\""));
}

#[test]
fn test_label_sizes_lists_default() {
    limbah()
        .args(["label", "sizes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("800x480 (default)"))
        .stdout(predicate::str::contains("1200x720"))
        .stdout(predicate::str::contains("1600x960"));
}

#[test]
fn test_label_generate_from_input_file() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("labels.json");
    std::fs::write(&input, SAMPLE_LABEL).unwrap();

    limbah()
        .args([
            "label",
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--output",
            temp.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("label-limbah-PMH-2024-0042-wadah-1-800x480.png"));

    assert!(temp.path().join("label-limbah-PMH-2024-0042-wadah-1-800x480.png").exists());
}

#[test]
fn test_label_generate_with_size() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("labels.json");
    std::fs::write(&input, SAMPLE_LABEL).unwrap();

    limbah()
        .args([
            "label",
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--size",
            "1600x960",
            "--output",
            temp.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1600x960"));

    assert!(temp.path().join("label-limbah-PMH-2024-0042-wadah-1-1600x960.png").exists());
}

#[test]
fn test_label_generate_rejects_both_sources() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("labels.json");
    std::fs::write(&input, SAMPLE_LABEL).unwrap();

    limbah()
        .args([
            "label",
            "generate",
            "--request",
            "PMH-2024-0042",
            "--input",
            input.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_label_generate_requires_source() {
    limbah()
        .args(["label", "generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("either --request or --input"));
}

#[test]
fn test_label_generate_rejects_bad_size() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("labels.json");
    std::fs::write(&input, SAMPLE_LABEL).unwrap();

    limbah()
        .args([
            "label",
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--size",
            "640x480",
            "--output",
            temp.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid label size"));
}

#[test]
fn test_label_generate_wadah_filter_no_match() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("labels.json");
    std::fs::write(&input, SAMPLE_LABEL).unwrap();

    limbah()
        .args([
            "label",
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--wadah",
            "9",
            "--output",
            temp.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no label data matched"));
}

#[test]
fn test_config_set_and_show() {
    let temp = TempDir::new().unwrap();

    limbah()
        .env("HOME", temp.path())
        .args(["config", "set", "label.default-size", "1200x720"])
        .assert()
        .success()
        .stdout(predicate::str::contains("label.default-size"));

    limbah()
        .env("HOME", temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1200x720"));
}

#[test]
fn test_config_set_unknown_key() {
    let temp = TempDir::new().unwrap();

    limbah()
        .env("HOME", temp.path())
        .args(["config", "set", "bogus.key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}
