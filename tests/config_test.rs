//! Tests for loading game config from disk.

use std::io::Write;
use strictly_boxes::{GameConfig, Player};

#[test]
fn test_loads_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "box_rows = 4\nbox_columns = 6\nfirst_player = \"computer\"\nseed = 17\npace_ms = 0"
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(*config.box_rows(), 4);
    assert_eq!(*config.box_columns(), 6);
    assert_eq!(*config.first_player(), Player::Computer);
    assert_eq!(*config.seed(), Some(17));
    assert_eq!(*config.pace_ms(), 0);
    assert_eq!(*config.line_length(), 50);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_malformed_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "box_rows = \"three\"").unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_oversized_board_still_valid() {
    let config = GameConfig::default().with_box_rows(20).with_box_columns(40);
    assert!(config.validate().is_ok());
}

#[test]
fn test_unbuildable_board_rejected() {
    let config = GameConfig::default().with_box_rows(usize::MAX / 2 + 1);
    let err = config.validate().unwrap_err();
    assert!(err.message.contains("too large"));
    assert!(config.dimensions().is_err());

    let wide = GameConfig::default().with_box_columns(usize::MAX / 4);
    assert!(wide.validate().is_err());
}
