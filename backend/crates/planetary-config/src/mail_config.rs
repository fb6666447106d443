use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAIL_PORT, DEFAULT_MAIL_SENDER, DEFAULT_MAIL_SERVER,
};

use serde::Deserialize;

/// Outgoing SMTP settings for password recovery mail
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// When false, mail is logged and dropped instead of sent
    pub enabled: bool,
    pub server: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// STARTTLS upgrade
    pub use_tls: bool,
    /// Implicit TLS from the first byte
    pub use_ssl: bool,
    pub sender: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            server: String::from(DEFAULT_MAIL_SERVER),
            port: DEFAULT_MAIL_PORT,
            username: None,
            password: None,
            use_tls: true,
            use_ssl: false,
            sender: String::from(DEFAULT_MAIL_SENDER),
        }
    }
}

impl MailConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.sender.contains('@') {
            return Err(ConfigError::mail(format!(
                "mail.sender must be an email address, got '{}'",
                self.sender
            )));
        }

        if !self.enabled {
            return Ok(());
        }

        if self.server.trim().is_empty() {
            return Err(ConfigError::mail("mail.server cannot be empty"));
        }

        if self.port == 0 {
            return Err(ConfigError::mail("mail.port cannot be 0"));
        }

        if self.username.is_none() || self.password.is_none() {
            return Err(ConfigError::mail(
                "mail.username and mail.password are required when mail is enabled",
            ));
        }

        if self.use_tls && self.use_ssl {
            return Err(ConfigError::mail(
                "mail.use_tls and mail.use_ssl cannot both be enabled",
            ));
        }

        Ok(())
    }
}
