//! Planet entity - the resource behind the public catalogue.

use crate::NewPlanet;

/// A catalogued planet.
///
/// `planet_name` is unique; the store refuses a second planet of the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Store-assigned identifier
    pub planet_id: i64,
    pub planet_name: String,
    /// Classification, e.g. "Class M"
    pub planet_type: String,
    pub home_star: String,
    /// Mass in kilograms
    pub mass: f64,
    /// Radius in miles
    pub radius: f64,
    /// Mean distance from the home star in miles
    pub distance: f64,
}

impl Planet {
    /// Combine a store-assigned id with a planet draft
    pub fn from_new(planet_id: i64, new_planet: NewPlanet) -> Self {
        Self {
            planet_id,
            planet_name: new_planet.planet_name,
            planet_type: new_planet.planet_type,
            home_star: new_planet.home_star,
            mass: new_planet.mass,
            radius: new_planet.radius,
            distance: new_planet.distance,
        }
    }

    /// Overwrite every mutable field, keeping the id
    pub fn apply(&mut self, changes: NewPlanet) {
        self.planet_name = changes.planet_name;
        self.planet_type = changes.planet_type;
        self.home_star = changes.home_star;
        self.mass = changes.mass;
        self.radius = changes.radius;
        self.distance = changes.distance;
    }
}
