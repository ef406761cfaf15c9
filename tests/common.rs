#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn stz() -> Command {
    cargo_bin_cmd!("stundenzettel")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stundenzettel.sqlite", name));
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

pub fn init_db(db_path: &str) {
    stz()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_regular(db_path: &str, date: &str, location: &str, start: &str, end: &str) {
    stz()
        .args([
            "--db", db_path, "add", date, location, "--in", start, "--out", end,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    add_regular(db_path, "2025-09-01", "Hauptsitz", "09:00", "17:30");
    add_regular(db_path, "2025-09-15", "Hauptsitz", "09:00", "17:00");

    stz()
        .args(["--db", db_path, "add", "2025-09-10", "Urlaub"])
        .assert()
        .success();

    stz()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-05",
            "Bereitschaft",
            "--deployment",
            "Leitstelle,22:00,23:00",
        ])
        .assert()
        .success();
}
