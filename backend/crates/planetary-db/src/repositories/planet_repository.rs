//! Planet repository for CRUD operations on the catalogue.
//!
//! Lookups that match nothing return `None` (or an empty list); callers
//! branch on that instead of on an error. Planet names are unique: a create
//! or rename onto a taken name fails with `DbError::UniqueViolation`.

use crate::{DbError, Result as DbErrorResult};

use planetary_core::{NewPlanet, Planet};

use sqlx::{FromRow, SqlitePool};

const PLANET_NAME_CONSTRAINT: &str = "planets.planet_name";

#[derive(Debug, FromRow)]
struct PlanetRow {
    planet_id: i64,
    planet_name: String,
    planet_type: String,
    home_star: String,
    mass: f64,
    radius: f64,
    distance: f64,
}

impl From<PlanetRow> for Planet {
    fn from(r: PlanetRow) -> Self {
        Self {
            planet_id: r.planet_id,
            planet_name: r.planet_name,
            planet_type: r.planet_type,
            home_star: r.home_star,
            mass: r.mass,
            radius: r.radius,
            distance: r.distance,
        }
    }
}

pub struct PlanetRepository {
    pool: SqlitePool,
}

impl PlanetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a planet and return it with its newly assigned id
    pub async fn create(&self, new_planet: &NewPlanet) -> DbErrorResult<Planet> {
        let result = sqlx::query(
            r#"
                INSERT INTO planets (
                    planet_name, planet_type, home_star, mass, radius, distance
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_planet.planet_name)
        .bind(&new_planet.planet_type)
        .bind(&new_planet.home_star)
        .bind(new_planet.mass)
        .bind(new_planet.radius)
        .bind(new_planet.distance)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from_insert(e, PLANET_NAME_CONSTRAINT))?;

        Ok(Planet::from_new(
            result.last_insert_rowid(),
            new_planet.clone(),
        ))
    }

    pub async fn find_by_id(&self, planet_id: i64) -> DbErrorResult<Option<Planet>> {
        let row = sqlx::query_as::<_, PlanetRow>(
            r#"
                SELECT planet_id, planet_name, planet_type, home_star, mass, radius, distance
                FROM planets
                WHERE planet_id = ?
            "#,
        )
        .bind(planet_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Planet::from))
    }

    pub async fn find_by_name(&self, planet_name: &str) -> DbErrorResult<Option<Planet>> {
        let row = sqlx::query_as::<_, PlanetRow>(
            r#"
                SELECT planet_id, planet_name, planet_type, home_star, mass, radius, distance
                FROM planets
                WHERE planet_name = ?
                ORDER BY planet_id
                LIMIT 1
            "#,
        )
        .bind(planet_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Planet::from))
    }

    /// All planets in id order
    pub async fn find_all(&self) -> DbErrorResult<Vec<Planet>> {
        let rows = sqlx::query_as::<_, PlanetRow>(
            r#"
                SELECT planet_id, planet_name, planet_type, home_star, mass, radius, distance
                FROM planets
                ORDER BY planet_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Planet::from).collect())
    }

    /// Overwrite every mutable column of an existing planet.
    ///
    /// Returns `false` when no planet has that id.
    pub async fn update(&self, planet: &Planet) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE planets
                SET planet_name = ?, planet_type = ?, home_star = ?,
                    mass = ?, radius = ?, distance = ?
                WHERE planet_id = ?
            "#,
        )
        .bind(&planet.planet_name)
        .bind(&planet.planet_type)
        .bind(&planet.home_star)
        .bind(planet.mass)
        .bind(planet.radius)
        .bind(planet.distance)
        .bind(planet.planet_id)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from_insert(e, PLANET_NAME_CONSTRAINT))?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove a planet. Returns `false` when no planet has that id.
    pub async fn delete(&self, planet_id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM planets WHERE planet_id = ?")
            .bind(planet_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM planets")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
