use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Planet draft - the mutable fields of a planet without an id.
///
/// Used both for creation and for full overwrites on update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlanet {
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

impl NewPlanet {
    #[track_caller]
    pub fn new(
        planet_name: &str,
        planet_type: &str,
        home_star: &str,
        mass: f64,
        radius: f64,
        distance: f64,
    ) -> CoreErrorResult<Self> {
        let planet_name = planet_name.trim();
        if planet_name.is_empty() {
            return Err(CoreError::Validation {
                field: "planet_name",
                message: "planet_name cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        for (field, value) in [("mass", mass), ("radius", radius), ("distance", distance)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Validation {
                    field,
                    message: format!("{} must be a finite, non-negative number", field),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(Self {
            planet_name: planet_name.to_string(),
            planet_type: planet_type.trim().to_string(),
            home_star: home_star.trim().to_string(),
            mass,
            radius,
            distance,
        })
    }
}
