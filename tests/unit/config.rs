use super::*;
use std::io::Write as _;

fn write_settings(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_match_the_built_in_grid() {
    let settings = Settings::default();
    assert_eq!(settings.grid().unwrap(), Grid::DEFAULT);
    assert_eq!(settings.poll_interval(), Duration::from_millis(10));
    assert_eq!(settings.grab_delay(), Duration::from_secs(1));
    assert_eq!(settings.reveal.chars_per_tick, 1);
    assert_eq!(settings.input.device, None);
}

#[test]
fn partial_file_fills_in_defaults() {
    let file = write_settings(r#"{ "grid": { "width": 211 }, "input": { "device": "/dev/input/event15" } }"#);
    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.grid.width, 211);
    assert_eq!(settings.grid.height, 32);
    assert_eq!(
        settings.input.device,
        Some(PathBuf::from("/dev/input/event15"))
    );
    assert_eq!(settings.input.poll_interval_ms, 10);
}

#[test]
fn empty_object_is_all_defaults() {
    let file = write_settings("{}");
    assert_eq!(Settings::load(file.path()).unwrap(), Settings::default());
}

#[test]
fn invalid_json_is_a_parse_error() {
    let file = write_settings("{ grid: ");
    let err = Settings::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("parse "));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    assert!(matches!(
        Settings::load_or_default(Some(path.as_path())),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn zero_sized_grid_is_rejected() {
    let file = write_settings(r#"{ "grid": { "width": 0, "height": 10 } }"#);
    let settings = Settings::load(file.path()).unwrap();
    assert!(matches!(settings.grid(), Err(LayoutError::ZeroGrid { .. })));
}

#[test]
fn device_is_omitted_from_serialized_defaults() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(!json.contains("device"));
    let back: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Settings::default());
}
