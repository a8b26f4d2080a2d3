//! Catalog file round trips feeding position and trajectory queries

use approx::assert_relative_eq;
use ephemeris::catalog::{Catalog, CatalogConstants};
use ephemeris::constants::J2000;
use ephemeris::julian::julian_date;
use ephemeris::query::{position_of, trajectory, DisplayUnits, PositionQuery, QueryError};
use ephemeris::BodyType;
use tempfile::tempdir;
use time::macros::datetime;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_queries_survive_a_file_round_trip() {
    init_logging();
    let dir = tempdir().unwrap();
    let path = dir.path().join("solar_system.json");

    let built_in = Catalog::solar_system(CatalogConstants::default()).unwrap();
    built_in.save_to_file(&path).unwrap();
    let loaded = Catalog::load_from_file(&path).unwrap();

    let jd = julian_date(datetime!(2024-06-01 0:00 UTC));
    for id in ["mercury", "neptune", "eris", "encke", "borisov"] {
        let query = PositionQuery::new(id, jd);
        let a = position_of(&built_in, &query).unwrap();
        let b = position_of(&loaded, &query).unwrap();
        assert_eq!(a.name, b.name);
        assert_eq!(a.kind, b.kind);
        assert_relative_eq!(a.distance, b.distance, max_relative = 1e-9);
    }
}

#[test]
fn test_outer_planets_in_astronomical_units() {
    let catalog = Catalog::solar_system(CatalogConstants::default()).unwrap();
    let expected = [
        ("jupiter", 5.203, 0.0484),
        ("saturn", 9.537, 0.0542),
        ("uranus", 19.191, 0.0472),
        ("neptune", 30.069, 0.00859),
    ];

    for (id, a, e) in expected {
        let state = position_of(&catalog, &PositionQuery::new(id, J2000 + 1000.0))
            .unwrap()
            .in_units(DisplayUnits::AstronomicalUnits);
        assert_eq!(state.kind, BodyType::Planet);
        assert!(
            state.distance >= a * (1.0 - e) - 1e-9 && state.distance <= a * (1.0 + e) + 1e-9,
            "{id} at {} AU",
            state.distance
        );
    }
}

#[test]
fn test_interstellar_trajectory_recedes_after_epoch() {
    init_logging();
    let catalog = Catalog::solar_system(CatalogConstants::default()).unwrap();
    let epoch = catalog.interstellar("oumuamua").unwrap().orbit().epoch();

    let points = trajectory(&catalog, "oumuamua", epoch, epoch + 365.0, 13).unwrap();
    assert_eq!(points.len(), 13);

    let distances: Vec<f64> = points
        .into_iter()
        .map(|p| p.in_units(DisplayUnits::AstronomicalUnits).position.magnitude())
        .collect();
    assert!(distances.windows(2).all(|w| w[1] > w[0]), "{distances:?}");
    // Elements put perihelion at epoch: q = |a|(e - 1)
    assert_relative_eq!(distances[0], 1.279 * 0.201, max_relative = 1e-6);
}

#[test]
fn test_query_errors_surface_to_caller() {
    let catalog = Catalog::solar_system(CatalogConstants::default()).unwrap();

    assert_eq!(
        position_of(&catalog, &PositionQuery::new("", J2000)),
        Err(QueryError::EmptyBodyId)
    );
    assert!(matches!(
        position_of(&catalog, &PositionQuery::new("earth", 2_500_000.5)),
        Err(QueryError::JulianDateOutOfRange(_))
    ));
    assert!(matches!(
        trajectory(&catalog, "ghost", J2000, J2000 + 10.0, 3),
        Err(QueryError::NotFound(id)) if id == "ghost"
    ));
}
