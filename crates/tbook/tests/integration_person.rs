//! Integration tests for the person commands (add, list, find, edit, delete)

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tbook(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tbook").unwrap();
    cmd.env("TBOOK_HOME", temp_dir.path());
    cmd
}

fn add_alice(temp_dir: &TempDir) {
    tbook(temp_dir)
        .args([
            "add",
            "Alice Pauline",
            "--phone",
            "94351253",
            "--email",
            "alice@example.com",
            "--github",
            "alicep",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("New person added"));
}

#[test]
fn add_creates_the_data_file() {
    let temp_dir = TempDir::new().unwrap();
    add_alice(&temp_dir);

    let data_path = temp_dir.path().join(".teambook/addressbook.json");
    assert!(data_path.exists());

    let book: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&data_path).unwrap()).unwrap();
    assert_eq!(book["persons"][0]["name"], "Alice Pauline");
    assert_eq!(book["persons"][0]["teamName"], "NONE");
}

#[test]
fn add_duplicate_person_fails() {
    let temp_dir = TempDir::new().unwrap();
    add_alice(&temp_dir);

    tbook(&temp_dir)
        .args([
            "add",
            "Alice Pauline",
            "--phone",
            "94351253",
            "--email",
            "alice@example.com",
            "--github",
            "alicep",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn add_rejects_invalid_fields() {
    let temp_dir = TempDir::new().unwrap();

    tbook(&temp_dir)
        .args([
            "add",
            "Alice",
            "--phone",
            "not-a-phone",
            "--email",
            "alice@example.com",
            "--github",
            "alicep",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Phone"));
}

#[test]
fn add_to_missing_team_fails() {
    let temp_dir = TempDir::new().unwrap();

    tbook(&temp_dir)
        .args([
            "add",
            "Alice",
            "--phone",
            "94351253",
            "--email",
            "alice@example.com",
            "--github",
            "alicep",
            "--team",
            "ghosts",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Team 'ghosts' not found"));
}

#[test]
fn list_shows_persons_in_order() {
    let temp_dir = TempDir::new().unwrap();
    add_alice(&temp_dir);

    tbook(&temp_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Alice Pauline"));

    let output = tbook(&temp_dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["persons"][0]["email"], "alice@example.com");
}

#[test]
fn find_filters_by_name_keyword() {
    let temp_dir = TempDir::new().unwrap();
    add_alice(&temp_dir);
    tbook(&temp_dir)
        .args([
            "add",
            "Bob Choo",
            "--phone",
            "98765432",
            "--email",
            "bob@example.com",
            "--github",
            "bobc",
        ])
        .assert()
        .success();

    tbook(&temp_dir)
        .args(["find", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob Choo"))
        .stdout(predicate::str::contains("1 persons listed!"))
        .stdout(predicate::str::contains("Alice").not());
}

#[test]
fn edit_replaces_the_person_record() {
    let temp_dir = TempDir::new().unwrap();
    add_alice(&temp_dir);

    tbook(&temp_dir)
        .args(["edit", "1", "--phone", "91234567"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edited person"))
        .stdout(predicate::str::contains("91234567"));

    let data_path = temp_dir.path().join(".teambook/addressbook.json");
    let book: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&data_path).unwrap()).unwrap();
    assert_eq!(book["persons"][0]["phone"], "91234567");
}

#[test]
fn edit_without_fields_fails() {
    let temp_dir = TempDir::new().unwrap();
    add_alice(&temp_dir);

    tbook(&temp_dir)
        .args(["edit", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("At least one field"));
}

#[test]
fn delete_removes_person_and_team_membership() {
    let temp_dir = TempDir::new().unwrap();
    add_alice(&temp_dir);

    tbook(&temp_dir)
        .args(["team", "create", "alpha"])
        .assert()
        .success();
    tbook(&temp_dir)
        .args(["team", "add", "alpha", "1"])
        .assert()
        .success();

    tbook(&temp_dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted person"));

    let data_path = temp_dir.path().join(".teambook/addressbook.json");
    let book: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&data_path).unwrap()).unwrap();
    assert_eq!(book["persons"].as_array().unwrap().len(), 0);
    assert_eq!(book["teams"][0]["members"].as_array().unwrap().len(), 0);
}

#[test]
fn clear_requires_confirmation() {
    let temp_dir = TempDir::new().unwrap();
    add_alice(&temp_dir);

    tbook(&temp_dir).args(["clear"]).assert().failure();

    tbook(&temp_dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared"));

    let data_path = temp_dir.path().join(".teambook/addressbook.json");
    let book: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&data_path).unwrap()).unwrap();
    assert_eq!(book["persons"].as_array().unwrap().len(), 0);
}
