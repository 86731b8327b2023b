//! 設定ファイルとベースURL解決のテスト

use ars_common::constants::DEFAULT_BASE_URL;
use ars_console::config::Config;
use ars_console::error::ArsError;
use tempfile::tempdir;

/// ファイルがなければデフォルト
#[test]
fn test_load_missing_file_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.timeout_seconds, 30);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_base_url("http://10.0.0.5:8080/hktv_ars/").unwrap();
    config.save_to(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"baseUrl\": \"http://10.0.0.5:8080/hktv_ars\""));
    assert!(content.contains("\"timeoutSeconds\": 30"));

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

/// 一部のキーだけのファイルも読める
#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeoutSeconds": 5}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.base_url, None);
    assert_eq!(config.timeout_seconds, 5);
}

#[test]
fn test_broken_file_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid").unwrap();

    assert!(matches!(Config::load_from(&path), Err(ArsError::JsonParse(_))));
}

#[test]
fn test_set_base_url_rejects_non_http() {
    let mut config = Config::default();
    let err = config.set_base_url("ftp://example.com").unwrap_err();
    assert!(matches!(err, ArsError::InvalidBaseUrl(_)));
    assert_eq!(config.base_url, None);
}

/// フラグ > 環境変数 > 設定ファイル > デフォルト
#[test]
fn test_base_url_precedence() {
    let config = Config {
        base_url: Some("http://file.test".to_string()),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_base_url_with(Some("http://flag.test"), Some("http://env.test")),
        "http://flag.test"
    );
    assert_eq!(
        config.resolve_base_url_with(None, Some("http://env.test")),
        "http://env.test"
    );
    assert_eq!(config.resolve_base_url_with(None, None), "http://file.test");
    assert_eq!(
        Config::default().resolve_base_url_with(None, None),
        DEFAULT_BASE_URL
    );
}

/// 空文字は未指定扱い
#[test]
fn test_blank_values_are_skipped() {
    let config = Config::default();
    assert_eq!(
        config.resolve_base_url_with(Some("  "), Some("")),
        DEFAULT_BASE_URL
    );
}
