use planetary_core::Planet;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PlanetDto {
    pub planet_id: i64,
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

impl From<Planet> for PlanetDto {
    fn from(p: Planet) -> Self {
        Self {
            planet_id: p.planet_id,
            planet_name: p.planet_name,
            planet_type: p.planet_type,
            home_star: p.home_star,
            mass: p.mass,
            radius: p.radius,
            distance: p.distance,
        }
    }
}
