mod common;
use common::{fresh_config, temp_path, tsg, write_sample_json};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_json_filtered_view() {
    let cfg = fresh_config("export_json_filtered");
    let data = write_sample_json("export_json_filtered");
    let out = temp_path("export_json_filtered_out", "json");

    tsg()
        .args([
            "--config",
            &cfg,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--data",
            &data,
            "--tz",
            "utc",
            "--from",
            "2021-03-01T00:00:00",
            "--to",
            "2021-03-02T00:00:00",
            "--sort",
            "asc",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let exported: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = exported.as_array().expect("array of rows");

    let ids: Vec<u64> = rows.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![2, 5, 1]);

    assert_eq!(rows[2]["eventTimestamp"], "2021-03-01T10:00:00Z");
    assert_eq!(rows[2]["localTime"], "2021-03-01 10:00:00");
    assert_eq!(rows[2]["epochMillis"], 1_614_592_800_000i64);
}

#[test]
fn test_export_csv_all_rows() {
    let cfg = fresh_config("export_csv_all");
    let data = write_sample_json("export_csv_all");
    let out = temp_path("export_csv_all_out", "csv");

    tsg()
        .args([
            "--config", &cfg, "export", "--format", "csv", "--file", &out, "--data", &data,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,eventTimestamp,localTime,epochMillis")
    );
    assert_eq!(lines.count(), 5);
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let cfg = fresh_config("export_overwrite");
    let data = write_sample_json("export_overwrite");
    let out = temp_path("export_overwrite_out", "csv");
    fs::write(&out, "keep me").unwrap();

    tsg()
        .args([
            "--config", &cfg, "export", "--file", &out, "--data", &data,
        ])
        .write_stdin("n\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    tsg()
        .args([
            "--config", &cfg, "export", "--file", &out, "--data", &data, "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("id,"));
}

#[test]
fn test_export_overwrite_confirmed_or_unanswered() {
    let cfg = fresh_config("export_overwrite_answer");
    let data = write_sample_json("export_overwrite_answer");
    let out = temp_path("export_overwrite_answer_out", "csv");
    fs::write(&out, "keep me").unwrap();

    // Closed stdin is not a yes
    tsg()
        .args(["--config", &cfg, "export", "--file", &out, "--data", &data])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("use --force to overwrite"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    tsg()
        .args(["--config", &cfg, "export", "--file", &out, "--data", &data])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stderr(contains("Existing file will be replaced"));
    assert!(fs::read_to_string(&out).unwrap().starts_with("id,"));
}

#[test]
fn test_export_into_missing_directory_fails() {
    let cfg = fresh_config("export_missing_dir");
    let data = write_sample_json("export_missing_dir");
    let out = std::env::temp_dir()
        .join("tsgrid_no_such_dir")
        .join("out.csv")
        .to_string_lossy()
        .to_string();

    tsg()
        .args(["--config", &cfg, "export", "--file", &out, "--data", &data, "--force"])
        .assert()
        .failure()
        .stderr(contains("does not exist"));
}
