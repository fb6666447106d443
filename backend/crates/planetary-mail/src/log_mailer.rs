use crate::{Mailer, OutgoingMail, Result as MailErrorResult};

use async_trait::async_trait;
use log::info;

/// Drops mail after logging the envelope. Subject and body may carry
/// credentials, so neither is logged.
pub struct LogMailer {
    sender: String,
}

impl LogMailer {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: &OutgoingMail) -> MailErrorResult<()> {
        info!(
            "Mail disabled: suppressed message from {} to {}",
            self.sender, mail.to
        );
        Ok(())
    }
}
