use crate::{LogMailer, Result as MailErrorResult, SmtpMailer};

use planetary_config::MailConfig;

use std::sync::Arc;

use async_trait::async_trait;

/// A single plain-text message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingMail {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Delivers outgoing mail; the sender address is owned by the implementation
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> MailErrorResult<()>;
}

/// SMTP when mail is enabled, otherwise a mailer that only logs
pub fn build_mailer(config: &MailConfig) -> MailErrorResult<Arc<dyn Mailer>> {
    if config.enabled {
        Ok(Arc::new(SmtpMailer::from_config(config)?))
    } else {
        Ok(Arc::new(LogMailer::new(config.sender.clone())))
    }
}
