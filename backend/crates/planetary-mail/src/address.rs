use crate::{MailError, Result as MailErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use lettre::Address;

/// Parse a bare recipient address (`user@domain`, no display name).
///
/// Anything accepted here can be handed to [`crate::SmtpMailer`] as a recipient.
#[track_caller]
pub fn parse_address(address: &str) -> MailErrorResult<Address> {
    address.parse::<Address>().map_err(|e| MailError::Address {
        address: address.to_string(),
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}
