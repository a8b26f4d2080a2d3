//! Ephemeris calculations for solar system and interstellar objects
//!
//! This crate evaluates two-body Keplerian orbits (elliptical and
//! hyperbolic) to produce heliocentric ecliptic positions and velocities at
//! arbitrary Julian Dates, and wraps them in a small catalog of named bodies
//! with position and trajectory queries on top.

pub mod catalog;
pub mod celestial;
pub mod constants;
pub mod julian;
pub mod orbit;
pub mod query;
pub mod vector;

pub use catalog::{Catalog, CatalogConstants, CatalogEntry, CatalogError};
pub use celestial::{
    BodyError, BodyType, CelestialBody, ConstructionError, InterstellarObject, RgbColor,
    VisualProperties,
};
pub use julian::{datetime_from_julian, julian_date, TimeError};
pub use orbit::{
    EclipticRotation, KeplerSolution, OrbitClass, OrbitError, OrbitalElements, StateVector,
};
pub use query::{BodyState, DisplayUnits, PositionQuery, QueryError, TrajectoryPoint};
pub use vector::Vector3;
