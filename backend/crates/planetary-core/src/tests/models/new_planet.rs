use crate::{CoreError, NewPlanet};

#[test]
fn test_new_planet_trims_text_fields() {
    let planet = NewPlanet::new("  Mars ", " Class K", "Sol ", 6.39e23, 2106.0, 141.6e6).unwrap();

    assert_eq!(planet.planet_name, "Mars");
    assert_eq!(planet.planet_type, "Class K");
    assert_eq!(planet.home_star, "Sol");
}

#[test]
fn test_new_planet_rejects_blank_name() {
    let result = NewPlanet::new("   ", "Class K", "Sol", 1.0, 1.0, 1.0);

    match result {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field, "planet_name"),
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_new_planet_rejects_non_finite_measurements() {
    let result = NewPlanet::new("Mars", "Class K", "Sol", 1.0, f64::NAN, 1.0);

    let err = result.unwrap_err();
    assert_eq!(err.field(), "radius");
    assert!(err.message().contains("radius"));
}

#[test]
fn test_new_planet_rejects_negative_distance() {
    let result = NewPlanet::new("Mars", "Class K", "Sol", 1.0, 1.0, -5.0);

    assert_eq!(result.unwrap_err().field(), "distance");
}
