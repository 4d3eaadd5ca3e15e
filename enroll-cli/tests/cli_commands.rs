use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const SEED: &str = "\
courses:
  - code: CS1
    title: Programming
    capacity: 1
    schedule: MW 14-15
  - code: CS2
    title: Data Structures
    capacity: 3
students:
  - id: S10
    name: Dana
  - id: S11
    name: Eli
enrollments:
  - student: S10
    course: CS1
";

fn enroll_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("enroll"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("ENROLL_SEED")
        .env_remove("RUST_LOG");
    cmd
}

fn write_seed(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("seed.yaml");
    fs::write(&path, SEED).expect("write seed");
    path
}

#[test]
fn courses_lists_reference_catalog_by_default() {
    let home = TempDir::new().expect("home");
    enroll_cmd(home.path())
        .arg("courses")
        .assert()
        .success()
        .stdout(contains("Available Courses: 3"))
        .stdout(contains("C101"))
        .stdout(contains("TTh 9-10:30"))
        .stdout(contains("History"));
}

#[test]
fn courses_json_reports_available_slots() {
    let home = TempDir::new().expect("home");
    let assert = enroll_cmd(home.path())
        .args(["courses", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    let courses = value.as_array().expect("array");
    assert_eq!(courses.len(), 3);
    assert_eq!(courses[0]["code"], "C101");
    assert_eq!(courses[0]["available_slots"], 30);
    assert_eq!(courses[2]["capacity"], 20);
}

#[test]
fn seed_flag_replaces_catalog_and_applies_enrollments() {
    let home = TempDir::new().expect("home");
    let seed = write_seed(&home);
    let assert = enroll_cmd(home.path())
        .arg("--seed")
        .arg(&seed)
        .args(["students", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value[0]["id"], "S10");
    assert_eq!(value[0]["enrolled"][0], "CS1");
    assert_eq!(value[1]["enrolled"].as_array().map(Vec::len), Some(0));
}

#[test]
fn home_seed_file_is_picked_up() {
    let home = TempDir::new().expect("home");
    fs::create_dir_all(home.path().join(".enroll")).expect("mkdir");
    fs::write(home.path().join(".enroll").join("seed.yaml"), SEED).expect("write");

    enroll_cmd(home.path())
        .args(["roster", "CS1"])
        .assert()
        .success()
        .stdout(contains("CS1 Programming (1/1 seats taken)"))
        .stdout(contains("S10  Dana"));
}

#[test]
fn register_into_full_course_fails() {
    let home = TempDir::new().expect("home");
    let seed = write_seed(&home);
    enroll_cmd(home.path())
        .arg("--seed")
        .arg(&seed)
        .args(["register", "S11", "CS1"])
        .assert()
        .failure()
        .stderr(contains("failed to register 'S11' for 'CS1'"))
        .stderr(contains("course 'CS1' is full"));
}

#[test]
fn register_reports_success_and_remaining_slots() {
    let home = TempDir::new().expect("home");
    enroll_cmd(home.path())
        .args(["register", "S001", "C103"])
        .assert()
        .success()
        .stdout(contains("Student registered successfully."))
        .stdout(contains("Available Slots: 19"));
}

#[test]
fn unknown_ids_fail_with_not_found() {
    let home = TempDir::new().expect("home");
    enroll_cmd(home.path())
        .args(["register", "SX", "C101"])
        .assert()
        .failure()
        .stderr(contains("student 'SX' not found"));
    enroll_cmd(home.path())
        .args(["drop", "S001", "CX"])
        .assert()
        .failure()
        .stderr(contains("course 'CX' not found"));
}

#[test]
fn dropping_unregistered_course_succeeds() {
    let home = TempDir::new().expect("home");
    enroll_cmd(home.path())
        .args(["drop", "S002", "C102"])
        .assert()
        .success()
        .stdout(contains("Student dropped the course successfully."));
}

#[test]
fn missing_seed_file_is_reported() {
    let home = TempDir::new().expect("home");
    enroll_cmd(home.path())
        .args(["--seed", "does-not-exist.yaml", "courses"])
        .assert()
        .failure()
        .stderr(contains("seed not found"));
}

#[test]
fn shell_is_default_and_runs_menu_script() {
    let home = TempDir::new().expect("home");
    assert_cmd::Command::from_std(enroll_cmd(home.path()))
        .write_stdin("2\nS001\nC101\nregister S002 C101\n1\nstudents\n4\n")
        .assert()
        .success()
        .stdout(contains("1. Display Available Courses"))
        .stdout(contains("Student registered successfully."))
        .stdout(contains("Available Slots: 28"))
        .stdout(contains("Student ID: S001, Name: Alice, Courses: [C101]"))
        .stdout(contains("Course is full.").not());
}

#[test]
fn verbose_logs_to_stderr_only() {
    let home = TempDir::new().expect("home");
    enroll_cmd(home.path())
        .args(["-v", "register", "S001", "C101"])
        .assert()
        .success()
        .stdout(contains("registered").and(contains("DEBUG").not()))
        .stderr(contains("registered"));
}
