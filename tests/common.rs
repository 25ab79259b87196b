#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tsg() -> Command {
    cargo_bin_cmd!("tsgrid")
}

/// Create a unique temp file path and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tsgrid.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so every run starts from defaults
pub fn fresh_config(name: &str) -> String {
    temp_path(&format!("{name}_conf"), "yaml")
}

pub const SAMPLE_JSON: &str = r#"[
  { "id": 1, "eventTimestamp": "2021-03-01T10:00:00Z" },
  { "id": 2, "eventTimestamp": "2021-03-01T09:00:00" },
  { "id": 3, "eventTimestamp": "2021-03-02T12:30:00Z" },
  { "id": 4, "eventTimestamp": "2021-02-28T23:59:59" },
  { "id": 5, "eventTimestamp": "2021-03-01T09:30:00.500Z" }
]"#;

/// Write the sample dataset as JSON and return its path
pub fn write_sample_json(name: &str) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, SAMPLE_JSON).expect("write sample dataset");
    path
}

/// Same dataset as CSV
pub fn write_sample_csv(name: &str) -> String {
    let path = temp_path(name, "csv");
    let content = "id,eventTimestamp\n\
                   1,2021-03-01T10:00:00Z\n\
                   2,2021-03-01T09:00:00\n\
                   3,2021-03-02T12:30:00Z\n\
                   4,2021-02-28T23:59:59\n\
                   5,2021-03-01T09:30:00.500Z\n";
    fs::write(&path, content).expect("write sample csv");
    path
}
