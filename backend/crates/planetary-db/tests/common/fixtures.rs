use planetary_core::{NewPlanet, NewUser};

/// Creates a test planet draft with the given name
pub fn create_test_planet(name: &str) -> NewPlanet {
    NewPlanet {
        planet_name: name.to_string(),
        planet_type: "Class M".to_string(),
        home_star: "Sol".to_string(),
        mass: 5.972e24,
        radius: 3959.0,
        distance: 92.96e6,
    }
}

/// Creates a test user draft with the given email
pub fn create_test_user(email: &str) -> NewUser {
    NewUser {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
    }
}
