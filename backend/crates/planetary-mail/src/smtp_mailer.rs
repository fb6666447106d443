use crate::{MailError, Mailer, OutgoingMail, Result as MailErrorResult, parse_address};

use planetary_config::MailConfig;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::{debug, error};

/// Sends mail through an SMTP relay
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    /// Build the transport. No connection is opened until the first send.
    #[track_caller]
    pub fn from_config(config: &MailConfig) -> MailErrorResult<Self> {
        let sender = parse_mailbox(&config.sender)?;

        let (Some(username), Some(password)) = (&config.username, &config.password) else {
            return Err(MailError::Config {
                message: "SMTP username and password are required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let builder = if config.use_ssl {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.server)
        } else if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)
        } else {
            Ok(AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(
                &config.server,
            ))
        }
        .map_err(|e| MailError::Transport {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(username.clone(), password.clone()))
            .build();

        Ok(Self { transport, sender })
    }

    pub(crate) fn build_message(&self, mail: &OutgoingMail) -> MailErrorResult<Message> {
        let recipient = Mailbox::new(None, parse_address(&mail.to)?);

        Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(mail.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.clone())
            .map_err(|e| MailError::Build {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: &OutgoingMail) -> MailErrorResult<()> {
        let message = self.build_message(mail)?;

        match self.transport.send(message).await {
            Ok(response) => {
                debug!("Mail to {} accepted ({:?})", mail.to, response.code());
                Ok(())
            }
            Err(e) => {
                error!("Mail to {} failed: {}", mail.to, e);
                Err(MailError::Transport {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}

#[track_caller]
pub(crate) fn parse_mailbox(address: &str) -> MailErrorResult<Mailbox> {
    address.parse::<Mailbox>().map_err(|e| MailError::Address {
        address: address.to_string(),
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}
