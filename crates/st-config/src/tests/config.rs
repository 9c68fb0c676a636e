use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults() {
    // Given
    let (_temp, _dir) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.server.url, "http://127.0.0.1:8080");
    assert!(!config.github.live_import);
    assert!(config.logging.file.is_none());
}

#[test]
#[serial]
fn given_toml_file_when_load_then_values_applied() {
    // Given
    let (temp, _dir) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
[server]
url = "http://tracker.local:9000"

[github]
live_import = true

[logging]
level = "debug"
"#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.server.url, "http://tracker.local:9000");
    assert!(config.github.live_import);
    assert_eq!(config.logging.level.filter(), log::LevelFilter::Debug);
}

#[test]
#[serial]
fn given_env_override_when_load_then_env_wins() {
    // Given
    let (temp, _dir) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[server]\nurl = \"http://from-file:8080\"\n",
    )
    .unwrap();
    let _url = EnvGuard::set("ST_SERVER_URL", "http://from-env:8081");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.server.url, "http://from-env:8081");
}

#[test]
#[serial]
fn given_live_import_env_flag_when_load_then_enabled() {
    // Given
    let (_temp, _dir) = setup_config_dir();
    let _flag = EnvGuard::set("ST_GITHUB_LIVE_IMPORT", "1");

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(config.github.live_import);
}

#[test]
#[serial]
fn given_empty_url_when_validate_then_error() {
    // Given
    let (_temp, _dir) = setup_config_dir();
    let _url = EnvGuard::set("ST_SERVER_URL", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_url_without_scheme_when_validate_then_error() {
    // Given
    let (_temp, _dir) = setup_config_dir();
    let _url = EnvGuard::set("ST_SERVER_URL", "tracker.local:9000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_default_config_when_validate_then_ok() {
    // Given
    let (_temp, _dir) = setup_config_dir();

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _dir) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nurl=").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unknown_log_level_when_load_then_falls_back_to_info() {
    // Given
    let (_temp, _dir) = setup_config_dir();
    let _level = EnvGuard::set("ST_LOG_LEVEL", "chatty");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.logging.level.filter(), log::LevelFilter::Info);
}
