//! CLI integration tests for the `6pack` binary, run as a black box via
//! `std::process::Command`.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn sixpack_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_6pack") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("6pack");
    p
}

fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    let content = "Hello, 6pack!\n".repeat(500);
    fs::write(&input_path, content).unwrap();
    (dir, input_path)
}

#[test]
fn pack_then_unpack_round_trips_via_the_binary() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();

    let archive = dir.path().join("output.6pk");
    let status = Command::new(sixpack_bin())
        .args([input.to_str().unwrap(), archive.to_str().unwrap()])
        .status()
        .expect("failed to run 6pack");
    assert!(status.success(), "pack should exit 0");
    assert!(archive.exists());

    let restored = dir.path().join("restored.txt");
    let status = Command::new(sixpack_bin())
        .args(["-d", archive.to_str().unwrap(), restored.to_str().unwrap()])
        .status()
        .expect("failed to run 6pack -d");
    assert!(status.success(), "unpack should exit 0");

    assert_eq!(fs::read(&restored).unwrap(), original);
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let output = Command::new(sixpack_bin())
        .output()
        .expect("failed to run 6pack");
    assert!(!output.status.success());
}

#[test]
fn help_flag_exits_zero() {
    let status = Command::new(sixpack_bin())
        .arg("-h")
        .status()
        .expect("failed to run 6pack -h");
    assert!(status.success());
}

#[test]
fn version_flag_exits_zero() {
    let status = Command::new(sixpack_bin())
        .arg("--version")
        .status()
        .expect("failed to run 6pack --version");
    assert!(status.success());
}

#[test]
fn unpacking_a_non_archive_fails_with_nonzero_exit() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("bogus.6pk");
    fs::write(&bogus, b"not an archive").unwrap();
    let out = dir.path().join("out.bin");

    let status = Command::new(sixpack_bin())
        .args(["-d", bogus.to_str().unwrap(), out.to_str().unwrap()])
        .status()
        .expect("failed to run 6pack -d");
    assert!(!status.success());
}
