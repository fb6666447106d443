pub mod login_request;
pub mod login_response;
pub mod register_request;
#[allow(clippy::module_inception)]
pub mod users;
