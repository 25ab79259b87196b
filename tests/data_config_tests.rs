use std::fs;
use std::path::Path;
use tsgrid::config::Config;
use tsgrid::core::date_value::DateValue;
use tsgrid::core::timezone::TimezonePolicy;
use tsgrid::data::{DataFormat, load_rows};
use tsgrid::errors::AppError;

mod common;
use common::{temp_path, write_sample_csv, write_sample_json};

#[test]
fn test_load_json_dataset() {
    let path = write_sample_json("load_json_dataset");
    let rows = load_rows(Path::new(&path)).expect("load json");

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].id, 1);
    assert_eq!(
        rows[0].event_timestamp,
        DateValue::Text("2021-03-01T10:00:00Z".to_string())
    );
}

#[test]
fn test_load_csv_dataset_matches_json() {
    let json = write_sample_json("load_csv_dataset_json");
    let csv = write_sample_csv("load_csv_dataset_csv");

    let from_json = load_rows(Path::new(&json)).expect("load json");
    let from_csv = load_rows(Path::new(&csv)).expect("load csv");

    assert_eq!(from_json, from_csv);
}

#[test]
fn test_duplicate_ids_rejected() {
    let path = temp_path("duplicate_ids", "json");
    fs::write(
        &path,
        r#"[{"id": 7, "eventTimestamp": "2021-03-01"}, {"id": 7, "eventTimestamp": "2021-03-02"}]"#,
    )
    .unwrap();

    let err = load_rows(Path::new(&path)).unwrap_err();
    assert!(matches!(err, AppError::Data(ref m) if m.contains("7")));
}

#[test]
fn test_unsupported_extension_rejected() {
    assert!(matches!(
        DataFormat::from_path(Path::new("rows.xml")),
        Err(AppError::Data(_))
    ));
    assert_eq!(
        DataFormat::from_path(Path::new("ROWS.JSON")).unwrap(),
        DataFormat::Json
    );
}

#[test]
fn test_malformed_json_is_error() {
    let path = temp_path("malformed_json", "json");
    fs::write(&path, "[{\"id\": 1}").unwrap();
    assert!(matches!(
        load_rows(Path::new(&path)),
        Err(AppError::Json(_))
    ));
}

#[test]
fn test_missing_config_gives_defaults() {
    let path = temp_path("missing_config", "yaml");
    let cfg = Config::load(Path::new(&path)).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.timezone, TimezonePolicy::Local);
    assert_eq!(cfg.display_format, "%Y-%m-%d %H:%M:%S");
    assert!(!cfg.inclusive_range);
}

#[test]
fn test_config_save_load_round_trip() {
    let path = temp_path("config_round_trip", "yaml");
    let cfg = Config {
        timezone: "+02:00".parse().unwrap(),
        data_file: Some("/tmp/rows.json".to_string()),
        inclusive_range: true,
        ..Config::default()
    };

    cfg.save(Path::new(&path)).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("timezone: +02:00"));

    assert_eq!(Config::load(Path::new(&path)).unwrap(), cfg);
}

#[test]
fn test_partial_config_uses_field_defaults() {
    let path = temp_path("partial_config", "yaml");
    fs::write(&path, "timezone: utc\n").unwrap();

    let cfg = Config::load(Path::new(&path)).unwrap();
    assert_eq!(cfg.timezone, TimezonePolicy::Utc);
    assert_eq!(cfg.log_filter, "warn");
    assert_eq!(cfg.data_file, None);
}

#[test]
fn test_invalid_timezone_in_config() {
    let path = temp_path("bad_tz_config", "yaml");
    fs::write(&path, "timezone: Mars/Olympus\n").unwrap();

    assert!(matches!(
        Config::load(Path::new(&path)),
        Err(AppError::Yaml(_))
    ));
}
