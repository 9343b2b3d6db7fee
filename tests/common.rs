#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtb() -> Command {
    cargo_bin_cmd!("rtimebalance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimebalance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    rtb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // a finished Monday and a finished Tuesday
    rtb()
        .args([
            "--db",
            db_path,
            "add",
            "2026-03-02",
            "09:00",
            "12:30",
            "13:00",
            "17:30",
        ])
        .assert()
        .success();

    rtb()
        .args(["--db", db_path, "add", "2026-03-03", "09:00", "17:00"])
        .assert()
        .success();
}
