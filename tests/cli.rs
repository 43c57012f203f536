//! End-to-end tests driving the real binary with scripted stdin.
//!
//! These cover the user-visible protocol: the prompts on stdout, the data a
//! read prints, the bytes a write leaves in the file, and the exit status.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const OPTION_PROMPT: &str = "Option (r for read, w for write, s for seek): ";

fn filepoke() -> Command {
    Command::cargo_bin("filepoke").unwrap()
}

fn temp_file_with(content: &[u8]) -> tempfile::NamedTempFile {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), content).unwrap();
    tmp
}

#[test]
fn missing_argument_is_a_usage_error() {
    filepoke()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn invalid_filename_is_reported_on_stdout() {
    filepoke()
        .arg("no/such/file")
        .assert()
        .failure()
        .stdout(predicate::str::contains("error: invalid filename"));
}

#[test]
fn immediate_end_of_input_exits_successfully() {
    let tmp = temp_file_with(b"");
    filepoke()
        .arg(tmp.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(format!("{OPTION_PROMPT}\n"));
}

#[test]
fn consecutive_reads_walk_through_the_file() {
    let tmp = temp_file_with(b"Hello, world! This is a test file.");
    filepoke()
        .arg(tmp.path())
        .write_stdin("r\n5\nr\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello\n").and(predicate::str::contains(", world\n")));
}

#[test]
fn written_data_lands_in_the_file() {
    let tmp = temp_file_with(b"");
    filepoke()
        .arg(tmp.path())
        .write_stdin("w\nTesting write operation\n")
        .assert()
        .success();

    assert_eq!(fs::read(tmp.path()).unwrap(), b"Testing write operation");
}

#[test]
fn write_then_seek_back_then_read_prints_the_data() {
    let tmp = temp_file_with(b"");
    filepoke()
        .arg(tmp.path())
        .write_stdin("w\nhello\ns\n0\n0\nr\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello\n"));
}

#[test]
fn seek_whence_modes_position_the_cursor() {
    let tmp = temp_file_with(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");

    // From start to 5, read FGHIJ; stay put via whence 1, read KLMNO;
    // then 3 back from the end, read XYZ.
    filepoke()
        .arg(tmp.path())
        .write_stdin("s\n5\n0\nr\n5\ns\n0\n1\nr\n5\ns\n-3\n2\nr\n3\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("FGHIJ\n")
                .and(predicate::str::contains("KLMNO\n"))
                .and(predicate::str::contains("XYZ\n")),
        );
}

#[test]
fn zero_byte_read_produces_no_data() {
    let tmp = temp_file_with(b"abc");
    filepoke()
        .arg(tmp.path())
        .write_stdin("r\n0\n")
        .assert()
        .success()
        .stdout(format!(
            "{OPTION_PROMPT}Enter the number of bytes you want to read: {OPTION_PROMPT}\n"
        ));
}

#[test]
fn unknown_command_is_a_no_op() {
    let tmp = temp_file_with(b"abc");
    filepoke()
        .arg(tmp.path())
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(format!("{OPTION_PROMPT}{OPTION_PROMPT}\n"));

    assert_eq!(fs::read(tmp.path()).unwrap(), b"abc");
}

#[test]
fn end_of_input_mid_command_still_exits_successfully() {
    let tmp = temp_file_with(b"abc");
    filepoke()
        .arg(tmp.path())
        .write_stdin("r\n")
        .assert()
        .success();
}
