#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimesheet::core::Timesheet;
use rtimesheet::db::MemoryStore;
use rtimesheet::models::HourField;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
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

/// Initialize a DB through the CLI (test mode: config file untouched)
pub fn init_db(db_path: &str) {
    rts()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize a DB with rate 10, tax 20% and two days in January 2025.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    rts()
        .args(["--db", db_path, "rate", "10"])
        .assert()
        .success();
    rts()
        .args(["--db", db_path, "tax", "20"])
        .assert()
        .success();
    rts()
        .args(["--db", db_path, "set", "2025-01-06", "--normal", "8"])
        .assert()
        .success();
    rts()
        .args([
            "--db",
            db_path,
            "set",
            "2025-01-15",
            "--normal",
            "8",
            "--ot50",
            "2",
        ])
        .assert()
        .success();
}

/// In-memory timesheet with the given rate and tax.
pub fn memory_timesheet(rate: &str, tax: &str) -> Timesheet<MemoryStore> {
    let mut ts = Timesheet::load(MemoryStore::new());
    ts.set_rate(rate).expect("valid rate");
    ts.set_tax_rate(tax).expect("valid tax");
    ts
}

/// Set the three fields of a day at once.
pub fn set_day(ts: &mut Timesheet<MemoryStore>, key: &str, normal: &str, ot50: &str, ot100: &str) {
    ts.set_hours(key, HourField::Normal, normal).expect("normal");
    ts.set_hours(key, HourField::Ot50, ot50).expect("ot50");
    ts.set_hours(key, HourField::Ot100, ot100).expect("ot100");
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
