use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, setup_valid_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok, some};
use serial_test::serial;

// =========================================================================
// Loading
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::remove("PLANETARY_AUTH_JWT_SECRET");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.host.as_str(), eq("127.0.0.1"));
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.database.path.as_str(), eq("planets.db"));
    assert_that!(config.auth.jwt_secret, none());
    assert_that!(config.auth.token_ttl_secs, eq(900));
    assert_that!(config.logging.colored, eq(true));
    assert_that!(config.logging.file, none());
    assert_that!(config.mail.enabled, eq(false));
    assert_that!(config.mail.server.as_str(), eq("smtp.mailtrap.io"));
    assert_that!(config.mail.port, eq(2525));
    assert_that!(config.mail.sender.as_str(), eq("admin@api.com"));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_is_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested").join("planetary");
    let _dir = EnvGuard::set(crate::CONFIG_DIR_ENV, nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
              [server]
              port = 9000

              [database]
              path = "custom.db"

              [mail]
              sender = "noreply@planets.test"
          "#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.database.path.as_str(), eq("custom.db"));
    assert_that!(config.mail.sender.as_str(), eq("noreply@planets.test"));
    assert_that!(config.mail.port, eq(2525));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[server]\nport = 9000");
    let _port = EnvGuard::set("PLANETARY_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("PLANETARY_SERVER_PORT", "7777");
    let _host = EnvGuard::set("PLANETARY_SERVER_HOST", "0.0.0.0");
    let _colored = EnvGuard::set("PLANETARY_LOG_COLORED", "false");
    let _file = EnvGuard::set("PLANETARY_LOG_FILE", "planetary.log");
    let _mail = EnvGuard::set("PLANETARY_MAIL_ENABLED", "1");
    let _user = EnvGuard::set("PLANETARY_MAIL_USERNAME", "mailer");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(7777));
    assert_that!(config.server.host.as_str(), eq("0.0.0.0"));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file, some(eq("planetary.log")));
    assert_that!(config.mail.enabled, eq(true));
    assert_that!(config.mail.username, some(eq("mailer")));
}

#[test]
#[serial]
fn given_unparsable_env_number_when_load_then_keeps_previous_value() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("PLANETARY_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[server\nport = ");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

// =========================================================================
// Validation
// =========================================================================

#[test]
#[serial]
fn given_defaults_with_secret_when_validate_then_ok() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_config_dir();

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_database_path_with_traversal_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_config_dir();
    let _path = EnvGuard::set("PLANETARY_DATABASE_PATH", "../../../etc/passwd");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring(".."));
}

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_config_dir();
    let _path = EnvGuard::set("PLANETARY_DATABASE_PATH", "/tmp/planets.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

// =========================================================================
// Derived paths
// =========================================================================

#[test]
#[serial]
fn given_config_dir_when_database_path_then_joined_under_it() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let path = Config::load().unwrap().database_path().unwrap();

    // Then
    assert_eq!(path, temp.path().join("planets.db"));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_joined_under_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("PLANETARY_LOG_FILE", "server.log");

    // When
    let path = Config::load().unwrap().log_file_path().unwrap();

    // Then
    assert_eq!(path, Some(temp.path().join("log").join("server.log")));
}

#[test]
#[serial]
fn given_host_and_port_when_bind_addr_then_formatted() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("PLANETARY_SERVER_PORT", "5050");

    // When
    let addr = Config::load().unwrap().bind_addr();

    // Then
    assert_that!(addr.as_str(), eq("127.0.0.1:5050"));
}
