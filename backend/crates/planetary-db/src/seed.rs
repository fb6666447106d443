//! Sample records for development databases.

use crate::{PlanetRepository, Result as DbErrorResult, UserRepository};

use planetary_core::{NewPlanet, NewUser};

use log::{debug, info};
use sqlx::SqlitePool;

/// What a `seed` run inserted and what it found already present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub planets_inserted: usize,
    pub planets_skipped: usize,
    pub users_inserted: usize,
    pub users_skipped: usize,
}

/// The inner planets of the Sol system
pub fn seed_planets() -> Vec<NewPlanet> {
    vec![
        NewPlanet {
            planet_name: "Mercury".to_string(),
            planet_type: "Class D".to_string(),
            home_star: "Sol".to_string(),
            mass: 3.258e23,
            radius: 1516.0,
            distance: 35.98e6,
        },
        NewPlanet {
            planet_name: "Venus".to_string(),
            planet_type: "Class K".to_string(),
            home_star: "Sol".to_string(),
            mass: 4.867e24,
            radius: 3760.0,
            distance: 67.24e6,
        },
        NewPlanet {
            planet_name: "Earth".to_string(),
            planet_type: "Class M".to_string(),
            home_star: "Sol".to_string(),
            mass: 5.972e24,
            radius: 3959.0,
            distance: 92.96e6,
        },
    ]
}

pub fn seed_users() -> Vec<NewUser> {
    vec![NewUser {
        first_name: "Mallory".to_string(),
        last_name: "Culbert".to_string(),
        email: "foo@bar.com".to_string(),
        password: "pass".to_string(),
    }]
}

/// Insert the seed records, skipping any whose name or email already exists
pub async fn seed(pool: &SqlitePool) -> DbErrorResult<SeedReport> {
    let planets = PlanetRepository::new(pool.clone());
    let users = UserRepository::new(pool.clone());
    let mut report = SeedReport::default();

    for new_planet in seed_planets() {
        if planets.find_by_name(&new_planet.planet_name).await?.is_some() {
            debug!("Seed planet {} already present", new_planet.planet_name);
            report.planets_skipped += 1;
            continue;
        }
        let planet = planets.create(&new_planet).await?;
        debug!("Seeded planet {} ({})", planet.planet_name, planet.planet_id);
        report.planets_inserted += 1;
    }

    for new_user in seed_users() {
        if users.find_by_email(&new_user.email).await?.is_some() {
            debug!("Seed user {} already present", new_user.email);
            report.users_skipped += 1;
            continue;
        }
        users.create(&new_user).await?;
        report.users_inserted += 1;
    }

    info!(
        "Seed complete: {} planets, {} users inserted",
        report.planets_inserted, report.users_inserted
    );

    Ok(report)
}
