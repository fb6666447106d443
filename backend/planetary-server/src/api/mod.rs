pub mod error;
pub mod extractors;
pub mod fields;
pub mod greetings;
pub mod message_response;
pub mod planets;
pub mod users;
