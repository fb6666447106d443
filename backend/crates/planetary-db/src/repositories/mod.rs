pub mod planet_repository;
pub mod user_repository;
