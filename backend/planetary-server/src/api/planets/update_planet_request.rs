use crate::{ApiError, CreatePlanetRequest, RequestFields};

use planetary_core::NewPlanet;

/// Form fields of `PUT /update_planet`: the id plus every mutable field
#[derive(Debug)]
pub struct UpdatePlanetRequest {
    pub planet_id: i64,
    pub changes: CreatePlanetRequest,
}

impl UpdatePlanetRequest {
    /// Validated replacement values for the stored planet
    pub fn into_changes(self) -> Result<(i64, NewPlanet), ApiError> {
        Ok((self.planet_id, NewPlanet::try_from(self.changes)?))
    }
}

impl TryFrom<&RequestFields> for UpdatePlanetRequest {
    type Error = ApiError;

    fn try_from(fields: &RequestFields) -> Result<Self, Self::Error> {
        Ok(Self {
            planet_id: fields.integer("planet_id")?,
            changes: CreatePlanetRequest::try_from(fields)?,
        })
    }
}
