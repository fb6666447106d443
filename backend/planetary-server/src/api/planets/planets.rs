//! Planet REST API handlers
//!
//! Listing and detail are public; add, update and remove need a bearer token.

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, CreatePlanetRequest, MessageResponse,
    PlanetDto, RequestFields, UpdatePlanetRequest, api::fields::parse_integer,
};

use planetary_core::NewPlanet;
use planetary_db::{DbError, PlanetRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::{debug, info};

const PLANET_NOT_FOUND: &str = "That planet does not exist";
const PLANET_MISSING: &str = "That planet does not exist.";
const PLANET_NAME_TAKEN: &str = "There is already a planet by that name. Try again.";

// =============================================================================
// Handlers
// =============================================================================

/// GET /planets
///
/// List all planets
pub async fn list_planets(State(state): State<AppState>) -> ApiResult<Json<Vec<PlanetDto>>> {
    let repo = PlanetRepository::new(state.pool.clone());
    let planets = repo.find_all().await?;

    Ok(Json(planets.into_iter().map(PlanetDto::from).collect()))
}

/// GET /planet_details/{planet_id}
pub async fn planet_details(
    State(state): State<AppState>,
    Path(planet_id): Path<String>,
) -> ApiResult<Json<PlanetDto>> {
    let planet_id = parse_integer("planet_id", &planet_id)?;

    let repo = PlanetRepository::new(state.pool.clone());
    let planet = repo
        .find_by_id(planet_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: PLANET_NOT_FOUND.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(planet.into()))
}

/// POST /add_planet
pub async fn add_planet(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    fields: RequestFields,
) -> ApiResult<Json<MessageResponse>> {
    let new_planet = NewPlanet::try_from(CreatePlanetRequest::try_from(&fields)?)?;

    let repo = PlanetRepository::new(state.pool.clone());
    if repo.find_by_name(&new_planet.planet_name).await?.is_some() {
        return Err(name_taken());
    }

    // The unique index still decides when two adds race past the lookup
    let planet = repo.create(&new_planet).await.map_err(name_conflict)?;
    info!(
        "{} added planet {} ({})",
        user.email, planet.planet_name, planet.planet_id
    );

    Ok(Json(MessageResponse::new(format!(
        "You have added a planet: {}, the first of its name.",
        planet.planet_name
    ))))
}

/// PUT /update_planet
///
/// Overwrites every mutable field. A missing planet is reported in the
/// message with status 200.
pub async fn update_planet(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    fields: RequestFields,
) -> ApiResult<Json<MessageResponse>> {
    let (planet_id, changes) = UpdatePlanetRequest::try_from(&fields)?.into_changes()?;

    let repo = PlanetRepository::new(state.pool.clone());
    let Some(mut planet) = repo.find_by_id(planet_id).await? else {
        debug!("Update of missing planet {} by {}", planet_id, user.email);
        return Ok(Json(MessageResponse::new(PLANET_MISSING)));
    };

    if let Some(existing) = repo.find_by_name(&changes.planet_name).await?
        && existing.planet_id != planet_id
    {
        return Err(name_taken());
    }

    planet.apply(changes);
    if !repo.update(&planet).await.map_err(name_conflict)? {
        debug!("Planet {} vanished before update by {}", planet_id, user.email);
        return Ok(Json(MessageResponse::new(PLANET_MISSING)));
    }
    info!("{} updated planet {}", user.email, planet_id);

    Ok(Json(MessageResponse::new(format!(
        "You updated planet number {}!",
        planet_id
    ))))
}

/// DELETE /remove_planet/{planet_id}
pub async fn remove_planet(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(planet_id): Path<String>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let planet_id = parse_integer("planet_id", &planet_id)?;

    let repo = PlanetRepository::new(state.pool.clone());
    let planet = repo
        .find_by_id(planet_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: PLANET_MISSING.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    repo.delete(planet_id).await?;
    info!(
        "{} removed planet {} ({})",
        user.email, planet.planet_name, planet_id
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "You deleted {}",
            planet.planet_name
        ))),
    ))
}

#[track_caller]
fn name_taken() -> ApiError {
    ApiError::Conflict {
        message: PLANET_NAME_TAKEN.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

fn name_conflict(e: DbError) -> ApiError {
    match e {
        DbError::UniqueViolation { .. } => name_taken(),
        other => other.into(),
    }
}
