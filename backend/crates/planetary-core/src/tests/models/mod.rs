mod new_planet;
mod new_user;
mod planet;
