//! 설정 파일 로드/저장 테스트.
use ev_cost_calculator::config::{self, Config, ConfigError};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.currency = "$".into();
    cfg.default_prices.gasoline = 1.95;
    cfg.window_alpha = 0.8;
    cfg.save(&path).unwrap();
    let loaded = config::load_or_default(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_prices = 3").unwrap();
    let err = config::load_or_default(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "{err}");
}
