pub mod connection;
pub mod error;
pub mod repositories;
pub mod seed;

pub use connection::{MIGRATOR, connect, connect_in_memory, create_schema, drop_schema};
pub use error::{DbError, Result};
pub use repositories::planet_repository::PlanetRepository;
pub use repositories::user_repository::UserRepository;
pub use seed::{SeedReport, seed, seed_planets, seed_users};
