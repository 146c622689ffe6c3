#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn generate_then_check() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("teachers.csv");
    fs::write(
        &input,
        "subject,teacher,rooms\nMaths,Asha,\"R1, R2\"\nSports,Coach,Field\n",
    )
    .unwrap();
    let json = dir.path().join("timetable.json");

    Command::cargo_bin("timetable-cli")
        .unwrap()
        .args(["generate", "--seed", "7", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(dir.path())
        .arg("--json")
        .arg(&json)
        .assert()
        .success()
        .stdout(predicate::str::contains("90 records for 2 teacher(s)"));

    assert!(dir.path().join("teacher_timetable.xlsx").exists());

    Command::cargo_bin("timetable-cli")
        .unwrap()
        .arg("check")
        .arg("--timetable")
        .arg(&json)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn check_flags_broken_timetable() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("broken.json");
    fs::write(
        &json,
        r#"{"generated_at":"2025-10-01T08:00:00Z","records":[
            {"day":"Monday","period":1,"teacher":"Asha","subject":"Maths","room":"R1","kind":"ClassTeacher"}
        ]}"#,
    )
    .unwrap();

    Command::cargo_bin("timetable-cli")
        .unwrap()
        .arg("check")
        .arg("--timetable")
        .arg(&json)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Found 8 issue(s)"));
}

#[test]
fn subjects_lists_catalogue() {
    Command::cargo_bin("timetable-cli")
        .unwrap()
        .arg("subjects")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sports | quota 2 | class teacher: no"))
        .stdout(predicate::str::contains("Maths | quota 6 | class teacher: yes"));
}

#[test]
fn check_names_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    Command::cargo_bin("timetable-cli")
        .unwrap()
        .arg("check")
        .arg("--timetable")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading timetable"))
        .stderr(predicate::str::contains("missing.json"));
}
