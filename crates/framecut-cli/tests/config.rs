//! Configuration loading.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use framecut_cli::config::{Config, ConfigError, resolve_path};
use framecut_core::Session;
use framecut_model::{FieldName, UnitSystem};

fn parse(text: &str) -> Result<Config, ConfigError> {
    Config::parse(text, Path::new("framecut.toml"))
}

#[test]
fn empty_file_means_defaults() {
    let config = parse("").unwrap();
    assert_eq!(config, Config::default());
    let options = config.engine_options();
    assert_eq!(options.unit, UnitSystem::Imperial);
    assert_eq!(options.default_clearance_in, 0.125);
    assert_eq!(options.layout_gap_in, 0.25);
    assert_eq!(options.status_duration, Duration::from_millis(2200));
    assert_eq!(config.padding(), 1.0);
}

#[test]
fn every_section_is_read() {
    let config = parse(
        r#"
[units]
default = "metric"

[defaults]
clearance = 0.25

[layout]
gap = 0.5
padding = 2.0

[export]
status_seconds = 3.0
"#,
    )
    .unwrap();
    let options = config.engine_options();
    assert_eq!(options.unit, UnitSystem::Metric);
    assert_eq!(options.default_clearance_in, 0.25);
    assert_eq!(options.layout_gap_in, 0.5);
    assert_eq!(options.status_duration, Duration::from_secs(3));
    assert_eq!(config.padding(), 2.0);

    let session = Session::new(options);
    assert_eq!(session.store().raw(FieldName::Clearance), "6.35");
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = parse("[layout]\ngap = 0.125\n").unwrap();
    assert_eq!(config.layout.gap, 0.125);
    assert_eq!(config.layout.padding, 1.0);
    assert_eq!(config.defaults.clearance, 0.125);
}

#[test]
fn unknown_keys_are_rejected() {
    let error = parse("[layout]\nmargin = 3.0\n").unwrap_err();
    assert!(matches!(error, ConfigError::Toml { .. }));
    assert!(error.to_string().contains("framecut.toml"));
}

#[test]
fn unknown_units_are_rejected() {
    assert!(matches!(
        parse("[units]\ndefault = \"cubits\"\n"),
        Err(ConfigError::Toml { .. })
    ));
}

#[test]
fn negative_values_are_rejected() {
    match parse("[layout]\ngap = -0.25\n") {
        Err(ConfigError::Invalid { key, .. }) => assert_eq!(key, "layout.gap"),
        other => panic!("unexpected {other:?}"),
    }
    match parse("[export]\nstatus_seconds = -1.0\n") {
        Err(ConfigError::Invalid { key, .. }) => assert_eq!(key, "export.status_seconds"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn explicit_path_beats_environment() {
    let explicit = Path::new("a.toml");
    assert_eq!(
        resolve_path(Some(explicit), Some(OsString::from("b.toml"))),
        Some(PathBuf::from("a.toml"))
    );
    assert_eq!(
        resolve_path(None, Some(OsString::from("b.toml"))),
        Some(PathBuf::from("b.toml"))
    );
    assert_eq!(resolve_path(None, Some(OsString::new())), None);
    assert_eq!(resolve_path(None, None), None);
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("framecut-missing-config-does-not-exist.toml");
    assert!(matches!(
        Config::from_file(&path),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn loads_from_disk() {
    let path = std::env::temp_dir().join(format!("framecut-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[units]\ndefault = \"metric\"\n").unwrap();
    let config = Config::load(Some(&path));
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.unwrap().units.default, UnitSystem::Metric);
}
