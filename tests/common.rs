#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use taskdiary::models::record::TaskRecord;

pub fn tdy() -> Command {
    cargo_bin_cmd!("taskdiary")
}

/// Create a unique state-store path inside the system temp dir and
/// remove any leftover from a previous run.
pub fn temp_state(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_taskdiary_state.json", name));
    let state_path = path.to_string_lossy().to_string();
    fs::remove_file(&state_path).ok();
    state_path
}

/// Create a temporary output file path and ensure it does not exist.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_taskdiary_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a small task spreadsheet as CSV and return its path.
pub fn write_sample_csv(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_taskdiary_sample.csv", name));
    let csv_path = path.to_string_lossy().to_string();
    fs::write(
        &csv_path,
        "Date,Task\n\
         \"Monday, January 6, 2025\",\"Set up the **development** environment\"\n\
         \"Tuesday, January 7, 2025\",HOLIDAY\n\
         \"Wednesday, January 8, 2025\",\"Wrote the *first* report\"\n\
         \"Thursday, January 9, 2025\",On Leave\n",
    )
    .expect("write sample csv");
    csv_path
}

/// Record constructor shorthand for library-level tests.
pub fn rec(id: usize, day: Option<&str>, date: Option<&str>, task: &str) -> TaskRecord {
    TaskRecord::new(
        id,
        day.map(str::to_string),
        date.map(str::to_string),
        task.to_string(),
    )
}
