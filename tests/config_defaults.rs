//! Config loading behavior: defaults, RON overlays, and the shipped asset file.

use std::io::Write;

use ball_fusion::GameConfig;

#[test]
fn defaults_produce_no_validation_warnings() {
    let cfg = GameConfig::default();
    let warnings = cfg.validate();
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
}

#[test]
fn shipped_config_matches_defaults_and_validates() {
    // Integration tests run from the crate root, same as the binary.
    let cfg = GameConfig::load_from_file("assets/config/game.ron")
        .expect("shipped config must parse");
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty());
}

#[test]
fn partial_file_overlays_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "(spawn: (interval: 0.25), window: (autoClose: 5.0))"
    )
    .expect("write config");

    let cfg = GameConfig::load_from_file(file.path()).expect("parse");
    assert_eq!(cfg.spawn.interval, 0.25);
    assert_eq!(cfg.window.auto_close, 5.0);
    // Untouched sections keep their defaults.
    assert_eq!(cfg.merge.duration, GameConfig::default().merge.duration);
    assert_eq!(cfg.gravity.y, GameConfig::default().gravity.y);
}

#[test]
fn missing_file_falls_back_to_defaults_with_error() {
    let (cfg, err) = GameConfig::load_or_default("assets/config/does_not_exist.ron");
    assert_eq!(cfg, GameConfig::default());
    assert!(err.expect("load error reported").contains("read config"));
}

#[test]
fn malformed_file_falls_back_to_defaults_with_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "(spawn: (interval: \"fast\"))").expect("write config");

    let (cfg, err) = GameConfig::load_or_default(file.path());
    assert_eq!(cfg, GameConfig::default());
    assert!(err.expect("parse error reported").contains("parse RON"));
}
