use crate::{NewPlanet, Planet};

fn earth() -> NewPlanet {
    NewPlanet::new("Earth", "Class M", "Sol", 5.972e24, 3959.0, 92.96e6).unwrap()
}

#[test]
fn test_planet_from_new() {
    let planet = Planet::from_new(3, earth());

    assert_eq!(planet.planet_id, 3);
    assert_eq!(planet.planet_name, "Earth");
    assert_eq!(planet.planet_type, "Class M");
    assert_eq!(planet.home_star, "Sol");
    assert_eq!(planet.mass, 5.972e24);
    assert_eq!(planet.radius, 3959.0);
    assert_eq!(planet.distance, 92.96e6);
}

#[test]
fn test_planet_apply_overwrites_fields_but_keeps_id() {
    let mut planet = Planet::from_new(3, earth());
    let changes = NewPlanet::new("Terra", "Class M", "Sun", 6.0e24, 4000.0, 93.0e6).unwrap();

    planet.apply(changes);

    assert_eq!(planet.planet_id, 3);
    assert_eq!(planet.planet_name, "Terra");
    assert_eq!(planet.home_star, "Sun");
    assert_eq!(planet.mass, 6.0e24);
    assert_eq!(planet.radius, 4000.0);
    assert_eq!(planet.distance, 93.0e6);
}
