use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, LoggingConfig, MailConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub mail: MailConfig,
}

impl Config {
    /// Build the effective configuration: defaults, then `config.toml` from
    /// the config directory (created on demand), then `PLANETARY_*` variables.
    ///
    /// The result is unchecked; pair with [`Config::validate`].
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)
                .map_err(|e| ConfigError::io(&config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        toml::from_str(&contents).map_err(|e| ConfigError::toml(path, e))
    }

    /// `$PLANETARY_CONFIG_DIR`, or `.planetary` under the working directory
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.mail.validate()?;

        Ok(())
    }

    /// Database file, resolved against the config directory
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Log file path, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(file)))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Secrets are reported only as set/unset
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256 (secret {}), token ttl {}s",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.token_ttl_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );

        if self.mail.enabled {
            let security = if self.mail.use_ssl {
                "ssl"
            } else if self.mail.use_tls {
                "starttls"
            } else {
                "plain"
            };
            info!(
                "  mail: {}:{} ({}), sender {}",
                self.mail.server, self.mail.port, security, self.mail.sender
            );
        } else {
            info!("  mail: disabled (messages are logged, not sent)");
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PLANETARY_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PLANETARY_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("PLANETARY_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("PLANETARY_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse(
            "PLANETARY_AUTH_TOKEN_TTL_SECS",
            &mut self.auth.token_ttl_secs,
        );

        // Logging
        Self::apply_env_parse("PLANETARY_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PLANETARY_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PLANETARY_LOG_FILE", &mut self.logging.file);

        // Mail
        Self::apply_env_bool("PLANETARY_MAIL_ENABLED", &mut self.mail.enabled);
        Self::apply_env_string("PLANETARY_MAIL_SERVER", &mut self.mail.server);
        Self::apply_env_parse("PLANETARY_MAIL_PORT", &mut self.mail.port);
        Self::apply_env_option_string("PLANETARY_MAIL_USERNAME", &mut self.mail.username);
        Self::apply_env_option_string("PLANETARY_MAIL_PASSWORD", &mut self.mail.password);
        Self::apply_env_bool("PLANETARY_MAIL_USE_TLS", &mut self.mail.use_tls);
        Self::apply_env_bool("PLANETARY_MAIL_USE_SSL", &mut self.mail.use_ssl);
        Self::apply_env_string("PLANETARY_MAIL_SENDER", &mut self.mail.sender);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// `true`/`1` enable, anything else disables
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparsable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
