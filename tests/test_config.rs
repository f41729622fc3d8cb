use std::io::Write;
use std::time::Duration;

use canvas_shooter::config::GameConfig;
use canvas_shooter::error::GameError;

#[test]
fn defaults_match_classic_layout() {
    let c = GameConfig::default();
    assert_eq!(c.canvas_width, 800.0);
    assert_eq!(c.canvas_height, 600.0);
    assert_eq!(c.spawn_interval(), Duration::from_millis(1000));
    assert_eq!(c.frame(), Duration::from_millis(16));
    assert_eq!(c.seed, None);
    assert!(c.validate().is_ok());
}

#[test]
fn partial_json_fills_defaults() {
    let c: GameConfig = serde_json::from_str(r#"{ "canvas_width": 400, "seed": 7 }"#).unwrap();
    assert_eq!(c.canvas_width, 400.0);
    assert_eq!(c.canvas_height, 600.0);
    assert_eq!(c.seed, Some(7));
}

#[test]
fn too_narrow_canvas_is_rejected() {
    let c = GameConfig {
        canvas_width: 20.0,
        ..GameConfig::default()
    };
    assert!(matches!(c.validate(), Err(GameError::InvalidConfig(_))));
}

#[test]
fn zero_spawn_interval_is_rejected() {
    let c = GameConfig {
        spawn_interval_ms: 0,
        ..GameConfig::default()
    };
    assert!(matches!(c.validate(), Err(GameError::InvalidConfig(_))));
}

#[test]
fn from_file_reads_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "canvas_height": 480, "frame_ms": 20 }}"#).unwrap();
    let c = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(c.canvas_height, 480.0);
    assert_eq!(c.frame(), Duration::from_millis(20));
    assert_eq!(c.bounds().width, 800.0);
}

#[test]
fn from_file_reports_parse_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, GameError::ConfigParse { .. }));
    assert!(err.to_string().contains("could not parse config"));
}

#[test]
fn from_file_validates_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "canvas_width": 10 }}"#).unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = GameConfig::from_file(std::path::Path::new("/nonexistent/shooter.json")).unwrap_err();
    assert!(matches!(err, GameError::Io(_)));
}
