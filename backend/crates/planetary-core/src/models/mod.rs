pub mod new_planet;
pub mod new_user;
pub mod planet;
pub mod user;
