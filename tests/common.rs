#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command bound to an isolated config home so the user's real
/// configuration is never read.
pub fn rtt(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rtimetrack");
    cmd.env("RTIMETRACK_HOME", test_home(name));
    cmd
}

pub fn test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimetrack_home", name));
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimetrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize DB and create user #1 (`alice` / `pw`).
pub fn init_db_with_user(name: &str, db_path: &str) {
    rtt(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rtt(name)
        .args(["--db", db_path, "user", "add", "alice", "pw"])
        .assert()
        .success();
}

/// Log the reference day: 09:00 work, 10:00 break, 11:00 work, 18:00 day end.
pub fn add_reference_day(name: &str, db_path: &str, date: &str) {
    for (at, label) in [
        ("09:00", "work"),
        ("10:00", "BREAK"),
        ("11:00", "work"),
        ("18:00", "DAY_END"),
    ] {
        rtt(name)
            .args(["--db", db_path, "add", "1", label, "--date", date, "--at", at])
            .assert()
            .success();
    }
}
