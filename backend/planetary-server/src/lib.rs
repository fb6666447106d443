pub mod api;
pub mod app_state;
pub mod credentials;
pub mod error;
pub mod logger;
pub mod request_log;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
    fields::RequestFields,
    greetings::{hello, not_found, params, url_variables},
    message_response::MessageResponse,
    planets::{
        create_planet_request::CreatePlanetRequest,
        planet_dto::PlanetDto,
        planets::{add_planet, list_planets, planet_details, remove_planet, update_planet},
        update_planet_request::UpdatePlanetRequest,
    },
    users::{
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        users::{login, register, retrieve_password},
    },
};
pub use app_state::AppState;
pub use credentials::CredentialService;

pub use crate::routes::build_router;
