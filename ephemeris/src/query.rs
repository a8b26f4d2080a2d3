//! Position and trajectory queries against a [`Catalog`].
//!
//! Queries resolve an id through [`Catalog::lookup`] (bodies first, then
//! interstellar objects) and evaluate the orbit at validated Julian Dates.

use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;

use crate::catalog::{Catalog, CatalogEntry};
use crate::celestial::BodyType;
use crate::constants::{meters_to_au, mps_to_au_per_day};
use crate::julian::{datetime_from_julian, TimeError};
use crate::vector::Vector3;

/// Earliest accepted query date, exclusive (1900-01-01 00:00 UTC)
pub const MIN_QUERY_JULIAN_DATE: f64 = 2_415_020.5;
/// Latest accepted query date, exclusive (2100-01-01 00:00 UTC)
pub const MAX_QUERY_JULIAN_DATE: f64 = 2_488_069.5;
/// Longest accepted body id, in characters
pub const MAX_BODY_ID_LENGTH: usize = 100;
/// Upper bound on trajectory samples per request
pub const MAX_TRAJECTORY_SAMPLES: usize = 100_000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("Body ID is required")]
    EmptyBodyId,

    #[error("Body ID must not exceed 100 characters, got {0}")]
    BodyIdTooLong(usize),

    #[error("Julian Date {0} must be after 2415020.5 (year 1900) and before 2488069.5 (year 2100)")]
    JulianDateOutOfRange(f64),

    #[error("Celestial body with ID '{0}' not found")]
    NotFound(String),

    #[error("Invalid trajectory sampling: {0}")]
    InvalidSampling(String),

    #[error(transparent)]
    Time(#[from] TimeError),
}

/// Request for the state of one body at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct PositionQuery {
    pub body_id: String,
    pub julian_date: f64,
}

impl PositionQuery {
    pub fn new(body_id: impl Into<String>, julian_date: f64) -> Self {
        Self {
            body_id: body_id.into(),
            julian_date,
        }
    }

    /// # Errors
    /// * `QueryError::EmptyBodyId` - blank id
    /// * `QueryError::BodyIdTooLong` - more than [`MAX_BODY_ID_LENGTH`] characters
    /// * `QueryError::JulianDateOutOfRange` - outside the 1900-2100 window, or NaN
    pub fn validate(&self) -> Result<(), QueryError> {
        validate_body_id(&self.body_id)?;
        validate_julian_date(self.julian_date)
    }
}

fn validate_body_id(body_id: &str) -> Result<(), QueryError> {
    if body_id.trim().is_empty() {
        return Err(QueryError::EmptyBodyId);
    }
    let length = body_id.chars().count();
    if length > MAX_BODY_ID_LENGTH {
        return Err(QueryError::BodyIdTooLong(length));
    }
    Ok(())
}

fn validate_julian_date(julian_date: f64) -> Result<(), QueryError> {
    if julian_date > MIN_QUERY_JULIAN_DATE && julian_date < MAX_QUERY_JULIAN_DATE {
        Ok(())
    } else {
        Err(QueryError::JulianDateOutOfRange(julian_date))
    }
}

/// Units used when presenting results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DisplayUnits {
    /// Meters and meters per second
    #[default]
    Meters,
    /// Astronomical units and AU per day
    AstronomicalUnits,
}

/// Conversions take the AU length of the catalog the result came from
impl DisplayUnits {
    pub fn distance(&self, meters: f64, au_meters: f64) -> f64 {
        match self {
            DisplayUnits::Meters => meters,
            DisplayUnits::AstronomicalUnits => meters_to_au(meters, au_meters),
        }
    }

    pub fn position(&self, meters: Vector3, au_meters: f64) -> Vector3 {
        match self {
            DisplayUnits::Meters => meters,
            DisplayUnits::AstronomicalUnits => meters / au_meters,
        }
    }

    pub fn velocity(&self, meters_per_second: Vector3, au_meters: f64) -> Vector3 {
        match self {
            DisplayUnits::Meters => meters_per_second,
            DisplayUnits::AstronomicalUnits => {
                meters_per_second * mps_to_au_per_day(1.0, au_meters)
            }
        }
    }

    pub fn distance_label(&self) -> &'static str {
        match self {
            DisplayUnits::Meters => "m",
            DisplayUnits::AstronomicalUnits => "AU",
        }
    }

    pub fn velocity_label(&self) -> &'static str {
        match self {
            DisplayUnits::Meters => "m/s",
            DisplayUnits::AstronomicalUnits => "AU/day",
        }
    }
}

/// State of a body at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyState {
    pub body_id: String,
    pub name: String,
    pub kind: BodyType,
    pub julian_date: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub position: Vector3,
    pub velocity: Vector3,
    /// Distance from the primary (the Sun for every built-in entry)
    pub distance: f64,
    pub units: DisplayUnits,
    /// Length of the catalog's astronomical unit in meters
    pub au_meters: f64,
}

impl BodyState {
    /// Re-express a state computed in meters
    pub fn in_units(self, units: DisplayUnits) -> Self {
        if self.units != DisplayUnits::Meters {
            return self;
        }
        Self {
            position: units.position(self.position, self.au_meters),
            velocity: units.velocity(self.velocity, self.au_meters),
            distance: units.distance(self.distance, self.au_meters),
            units,
            ..self
        }
    }
}

/// One sample of a trajectory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub julian_date: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub position: Vector3,
    pub velocity: Vector3,
    pub units: DisplayUnits,
    /// Length of the catalog's astronomical unit in meters
    pub au_meters: f64,
}

impl TrajectoryPoint {
    /// Re-express a point computed in meters
    pub fn in_units(self, units: DisplayUnits) -> Self {
        if self.units != DisplayUnits::Meters {
            return self;
        }
        Self {
            position: units.position(self.position, self.au_meters),
            velocity: units.velocity(self.velocity, self.au_meters),
            units,
            ..self
        }
    }
}

fn resolve<'a>(catalog: &'a Catalog, body_id: &str) -> Result<CatalogEntry<'a>, QueryError> {
    catalog.lookup(body_id).ok_or_else(|| {
        log::warn!("Celestial body '{}' not found in catalog", body_id);
        QueryError::NotFound(body_id.to_string())
    })
}

/// Evaluate a body's heliocentric state, in meters and m/s.
///
/// # Errors
/// Validation errors from [`PositionQuery::validate`], or
/// `QueryError::NotFound` when the id is in neither part of the catalog.
pub fn position_of(catalog: &Catalog, query: &PositionQuery) -> Result<BodyState, QueryError> {
    query.validate()?;
    log::info!(
        "Calculating position for {} at JD {}",
        query.body_id,
        query.julian_date
    );

    let entry = resolve(catalog, &query.body_id)?;
    let state = entry.state(query.julian_date);

    Ok(BodyState {
        body_id: entry.id().to_string(),
        name: entry.name().to_string(),
        kind: entry.kind(),
        julian_date: query.julian_date,
        timestamp: datetime_from_julian(query.julian_date)?,
        position: state.position,
        velocity: state.velocity,
        distance: state.position.magnitude(),
        units: DisplayUnits::Meters,
        au_meters: catalog.constants().au_meters,
    })
}

/// Sample `samples` evenly spaced states from `start_jd` to `end_jd`
/// inclusive, in meters and m/s.
///
/// # Errors
/// * `QueryError::InvalidSampling` - fewer than 2 or more than
///   [`MAX_TRAJECTORY_SAMPLES`] samples, or `end_jd <= start_jd`
/// * id and date validation as for [`position_of`], applied to both ends
pub fn trajectory(
    catalog: &Catalog,
    body_id: &str,
    start_jd: f64,
    end_jd: f64,
    samples: usize,
) -> Result<Vec<TrajectoryPoint>, QueryError> {
    validate_body_id(body_id)?;
    validate_julian_date(start_jd)?;
    validate_julian_date(end_jd)?;
    if !(2..=MAX_TRAJECTORY_SAMPLES).contains(&samples) {
        return Err(QueryError::InvalidSampling(format!(
            "sample count must be within [2, {MAX_TRAJECTORY_SAMPLES}], got {samples}"
        )));
    }
    if end_jd <= start_jd {
        return Err(QueryError::InvalidSampling(format!(
            "end JD {end_jd} must be after start JD {start_jd}"
        )));
    }

    log::info!(
        "Calculating trajectory for {} from JD {} to JD {}",
        body_id,
        start_jd,
        end_jd
    );
    let entry = resolve(catalog, body_id)?;

    let au_meters = catalog.constants().au_meters;
    let step = (end_jd - start_jd) / (samples - 1) as f64;
    let points = (0..samples)
        .map(|k| {
            let julian_date = if k == samples - 1 {
                end_jd
            } else {
                start_jd + step * k as f64
            };
            let state = entry.state(julian_date);
            Ok(TrajectoryPoint {
                julian_date,
                timestamp: datetime_from_julian(julian_date)?,
                position: state.position,
                velocity: state.velocity,
                units: DisplayUnits::Meters,
                au_meters,
            })
        })
        .collect::<Result<Vec<_>, QueryError>>()?;

    log::debug!("Sampled {} trajectory points for {}", points.len(), body_id);
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogConstants;
    use crate::constants::{AU_METERS, J2000, SECONDS_PER_DAY, SUN_GM};
    use approx::assert_relative_eq;
    use time::macros::datetime;

    fn catalog() -> Catalog {
        Catalog::solar_system(CatalogConstants::default()).unwrap()
    }

    #[test]
    fn test_validation() {
        assert!(PositionQuery::new("earth", J2000).validate().is_ok());
        assert_eq!(
            PositionQuery::new("", J2000).validate(),
            Err(QueryError::EmptyBodyId)
        );
        assert_eq!(
            PositionQuery::new("   ", J2000).validate(),
            Err(QueryError::EmptyBodyId)
        );
        assert_eq!(
            PositionQuery::new("x".repeat(101), J2000).validate(),
            Err(QueryError::BodyIdTooLong(101))
        );
        assert!(PositionQuery::new("x".repeat(100), J2000).validate().is_ok());
    }

    #[test]
    fn test_julian_date_window_is_exclusive() {
        for jd in [MIN_QUERY_JULIAN_DATE, MAX_QUERY_JULIAN_DATE, f64::NAN, 0.0] {
            assert!(matches!(
                PositionQuery::new("earth", jd).validate(),
                Err(QueryError::JulianDateOutOfRange(_))
            ));
        }
        assert!(PositionQuery::new("earth", MIN_QUERY_JULIAN_DATE + 0.001)
            .validate()
            .is_ok());
        assert!(PositionQuery::new("earth", MAX_QUERY_JULIAN_DATE - 0.001)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_position_of_body() {
        let catalog = catalog();
        let state = position_of(&catalog, &PositionQuery::new("earth", J2000)).unwrap();
        assert_eq!(state.body_id, "earth");
        assert_eq!(state.name, "Earth");
        assert_eq!(state.kind, BodyType::Planet);
        assert_eq!(state.timestamp, datetime!(2000-01-01 12:00 UTC));
        assert_relative_eq!(state.distance, state.position.magnitude());
        assert!(state.distance > 0.98 * AU_METERS && state.distance < 1.02 * AU_METERS);

        let expected = catalog.body("earth").unwrap().position(J2000);
        assert_eq!(state.position, expected);
    }

    #[test]
    fn test_position_of_falls_back_to_interstellar() {
        let catalog = catalog();
        let state = position_of(&catalog, &PositionQuery::new("oumuamua", 2_458_080.5)).unwrap();
        assert_eq!(state.kind, BodyType::InterstellarObject);
        assert_eq!(state.name, "1I/'Oumuamua");
        assert!(state.position.is_finite());
    }

    #[test]
    fn test_position_of_unknown_body() {
        let catalog = catalog();
        assert_eq!(
            position_of(&catalog, &PositionQuery::new("vulcan", J2000)),
            Err(QueryError::NotFound("vulcan".to_string()))
        );
    }

    #[test]
    fn test_sun_state_is_zero() {
        let state = position_of(&catalog(), &PositionQuery::new("sun", J2000)).unwrap();
        assert_eq!(state.position, Vector3::ZERO);
        assert_eq!(state.velocity, Vector3::ZERO);
        assert_eq!(state.distance, 0.0);
    }

    #[test]
    fn test_trajectory_sampling() {
        let catalog = catalog();
        let points = trajectory(&catalog, "mars", J2000, J2000 + 100.0, 5).unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].julian_date, J2000);
        assert_eq!(points[4].julian_date, J2000 + 100.0);
        assert_relative_eq!(points[2].julian_date, J2000 + 50.0);
        assert_eq!(points[1].timestamp, datetime!(2000-01-26 12:00 UTC));

        let mars = catalog.body("mars").unwrap();
        for p in &points {
            assert_eq!(p.position, mars.position(p.julian_date));
        }
    }

    #[test]
    fn test_trajectory_rejects_bad_sampling() {
        let catalog = catalog();
        assert!(matches!(
            trajectory(&catalog, "mars", J2000, J2000 + 1.0, 1),
            Err(QueryError::InvalidSampling(_))
        ));
        assert!(matches!(
            trajectory(&catalog, "mars", J2000, J2000, 10),
            Err(QueryError::InvalidSampling(_))
        ));
        assert!(matches!(
            trajectory(&catalog, "mars", J2000 + 1.0, J2000, 10),
            Err(QueryError::InvalidSampling(_))
        ));
        assert!(matches!(
            trajectory(&catalog, "mars", 2_400_000.5, J2000, 10),
            Err(QueryError::JulianDateOutOfRange(_))
        ));
        assert!(matches!(
            trajectory(&catalog, "pluto-x", J2000, J2000 + 1.0, 2),
            Err(QueryError::NotFound(_))
        ));
    }

    #[test]
    fn test_display_units() {
        let units = DisplayUnits::AstronomicalUnits;
        assert_relative_eq!(units.distance(AU_METERS, AU_METERS), 1.0);
        assert_relative_eq!(
            units.position(Vector3::new(AU_METERS, 0.0, 0.0), AU_METERS).x,
            1.0
        );
        let v = units.velocity(Vector3::new(AU_METERS / SECONDS_PER_DAY, 0.0, 0.0), AU_METERS);
        assert_relative_eq!(v.x, 1.0, max_relative = 1e-12);
        assert_eq!(DisplayUnits::Meters.distance(5.0, AU_METERS), 5.0);
    }

    #[test]
    fn test_state_in_units_converts_once() {
        let state = position_of(&catalog(), &PositionQuery::new("jupiter", J2000)).unwrap();
        let meters = state.distance;
        let au = state.clone().in_units(DisplayUnits::AstronomicalUnits);
        assert_relative_eq!(au.distance, meters / AU_METERS);
        assert_eq!(au.units, DisplayUnits::AstronomicalUnits);
        assert!(au.distance > 4.9 && au.distance < 5.5);

        let again = au.clone().in_units(DisplayUnits::AstronomicalUnits);
        assert_eq!(again.distance, au.distance);
    }

    #[test]
    fn test_astronomical_units_follow_catalog_constants() {
        let au_meters = 1.5e11;
        let custom = Catalog::solar_system(CatalogConstants {
            au_meters,
            sun_gm: SUN_GM,
        })
        .unwrap();

        let state = position_of(&custom, &PositionQuery::new("earth", J2000 + 40.0)).unwrap();
        assert_eq!(state.au_meters, au_meters);
        let meters = state.distance;
        let au = state.in_units(DisplayUnits::AstronomicalUnits);
        assert_relative_eq!(au.distance, meters / au_meters, max_relative = 1e-15);
        // Earth's record is a = 1 AU, e = 0.0167 in the catalog's own AU
        assert!(au.distance >= 1.0 - 0.0167 - 1e-12 && au.distance <= 1.0 + 0.0167 + 1e-12);

        let points = trajectory(&custom, "mars", J2000, J2000 + 10.0, 3).unwrap();
        for point in points {
            let meters = point.position;
            let au = point.in_units(DisplayUnits::AstronomicalUnits);
            assert_relative_eq!(au.position.x, meters.x / au_meters, max_relative = 1e-15);
            assert_eq!(au.au_meters, au_meters);
        }
    }
}
