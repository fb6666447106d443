pub mod create_planet_request;
pub mod planet_dto;
#[allow(clippy::module_inception)]
pub mod planets;
pub mod update_planet_request;
