pub mod age_gate;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use age_gate::{AgeCheck, MINIMUM_AGE};
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::new_planet::NewPlanet;
pub use models::new_user::NewUser;
pub use models::planet::Planet;
pub use models::user::User;
