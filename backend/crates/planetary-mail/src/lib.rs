//! Outgoing mail for password recovery.
//!
//! Handlers depend on the [`Mailer`] trait only. [`SmtpMailer`] delivers
//! through an SMTP relay; [`LogMailer`] stands in when mail is disabled.

mod address;
mod error;
mod log_mailer;
mod mailer;
mod smtp_mailer;

pub use address::parse_address;
pub use error::{MailError, Result};
pub use log_mailer::LogMailer;
pub use mailer::{Mailer, OutgoingMail, build_mailer};
pub use smtp_mailer::SmtpMailer;
