//! End-to-end CLI tests over a temporary message store.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const MISNESTED: &str =
    "{\n  \"calculators\": {\n    \"x\": {\"a\":1},\n  }\n  \"y\": {\"b\":2}\n}\n";
const WELL_FORMED: &str = "{\n  \"calculators\": {\n    \"x\": {\"a\":1}\n  }\n}\n";

fn localefix() -> Command {
    Command::cargo_bin("localefix").expect("localefix binary")
}

fn create_store() -> TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    let messages = td.path().join("messages");
    fs::create_dir_all(&messages).unwrap();
    fs::write(messages.join("de.json"), MISNESTED).unwrap();
    fs::write(messages.join("en.json"), WELL_FORMED).unwrap();
    td
}

#[test]
fn fix_structure_defaults_to_dry_run() {
    let temp = create_store();

    localefix()
        .current_dir(temp.path())
        .arg("fix-structure")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 skipped"));

    // Nothing written in a dry run.
    let contents = fs::read_to_string(temp.path().join("messages/de.json")).unwrap();
    assert_eq!(contents, MISNESTED);
    assert!(temp.path().join("messages/.localefix/report.json").exists());
    assert!(temp.path().join("messages/.localefix/patch.diff").exists());
}

#[test]
fn fix_structure_apply_rewrites_files() {
    let temp = create_store();

    localefix()
        .current_dir(temp.path())
        .arg("fix-structure")
        .arg("--apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 repaired"));

    let contents = fs::read_to_string(temp.path().join("messages/de.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).expect("repaired file parses");
    assert!(value["calculators"]["y"].is_object());

    // Backup kept the original contents.
    let backup =
        fs::read_to_string(temp.path().join("messages/de.json.localefix.bak")).unwrap();
    assert_eq!(backup, MISNESTED);
}

#[test]
fn missing_locale_file_does_not_fail_the_process() {
    let temp = create_store();
    fs::remove_file(temp.path().join("messages/en.json")).unwrap();

    localefix()
        .current_dir(temp.path())
        .arg("fix-structure")
        .arg("--locale")
        .arg("en")
        .arg("--locale")
        .arg("de")
        .arg("--apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 failed").and(predicate::str::contains("1 repaired")));
}

#[test]
fn update_sections_apply_populates_shared_sections() {
    let temp = create_store();

    localefix()
        .current_dir(temp.path())
        .arg("update-sections")
        .arg("--locale")
        .arg("en")
        .arg("--apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 repaired"));

    let contents = fs::read_to_string(temp.path().join("messages/en.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["common"]["search"], "Search");
    assert_eq!(value["navigation"]["finance"], "Finance");
    assert_eq!(value["footer"]["rights"], "All rights reserved.");
    // The calculators payload is untouched.
    assert_eq!(value["calculators"]["x"]["a"], 1);
}

#[test]
fn config_file_changes_defaults() {
    let temp = create_store();
    fs::write(
        temp.path().join("localefix.toml"),
        "[backups]\nenabled = false\n",
    )
    .unwrap();

    localefix()
        .current_dir(temp.path())
        .arg("fix-structure")
        .arg("--apply")
        .assert()
        .success();

    assert!(!temp.path().join("messages/de.json.localefix.bak").exists());
}

#[test]
fn rejects_unknown_locale_argument() {
    let temp = create_store();

    localefix()
        .current_dir(temp.path())
        .arg("fix-structure")
        .arg("--locale")
        .arg("fr")
        .assert()
        .failure()
        .stderr(predicate::str::contains("fr"));
}

#[test]
fn list_locales_reports_presence() {
    let temp = create_store();

    localefix()
        .current_dir(temp.path())
        .arg("list-locales")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("de\tmessages/de.json\tpresent")
                .and(predicate::str::contains("es\tmessages/es.json\tmissing")),
        );
}

#[test]
fn list_locales_json_format() {
    let temp = create_store();

    let output = localefix()
        .current_dir(temp.path())
        .arg("list-locales")
        .arg("--format")
        .arg("json")
        .output()
        .expect("run list-locales");
    assert!(output.status.success());

    let rows: Vec<serde_json::Value> =
        serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().any(|r| r["locale"] == "en" && r["exists"] == true));
}
