use crate::{ApiError, RequestFields};

use planetary_core::NewPlanet;

/// Form fields of `POST /add_planet`
#[derive(Debug)]
pub struct CreatePlanetRequest {
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

impl TryFrom<&RequestFields> for CreatePlanetRequest {
    type Error = ApiError;

    fn try_from(fields: &RequestFields) -> Result<Self, Self::Error> {
        Ok(Self {
            planet_name: fields.text("planet_name")?.to_string(),
            planet_type: fields.text("planet_type")?.to_string(),
            home_star: fields.text("home_star")?.to_string(),
            mass: fields.float("mass")?,
            radius: fields.float("radius")?,
            distance: fields.float("distance")?,
        })
    }
}

impl TryFrom<CreatePlanetRequest> for NewPlanet {
    type Error = ApiError;

    fn try_from(req: CreatePlanetRequest) -> Result<Self, Self::Error> {
        Ok(NewPlanet::new(
            &req.planet_name,
            &req.planet_type,
            &req.home_star,
            req.mass,
            req.radius,
            req.distance,
        )?)
    }
}
