use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{require_positive, require_text, BodyError, VisualProperties};
use crate::orbit::{OrbitalElements, StateVector};
use crate::vector::Vector3;

/// Kind of solar system body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    Star,
    Planet,
    DwarfPlanet,
    Moon,
    Asteroid,
    Comet,
    InterstellarObject,
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyType::Star => "Star",
            BodyType::Planet => "Planet",
            BodyType::DwarfPlanet => "DwarfPlanet",
            BodyType::Moon => "Moon",
            BodyType::Asteroid => "Asteroid",
            BodyType::Comet => "Comet",
            BodyType::InterstellarObject => "InterstellarObject",
        };
        write!(f, "{name}")
    }
}

/// A star, planet, moon, asteroid or comet.
///
/// Bodies without orbital elements are the central body of the system and
/// sit at the origin. Equality and hashing use the id only.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    id: String,
    name: String,
    kind: BodyType,
    mass_kg: f64,
    radius_meters: f64,
    orbit: Option<OrbitalElements>,
    visual: VisualProperties,
}

impl CelestialBody {
    /// # Errors
    /// * `BodyError::EmptyField` - blank `id` or `name`
    /// * `BodyError::NonPositive` - `mass_kg` or `radius_meters` not positive
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: BodyType,
        mass_kg: f64,
        radius_meters: f64,
        orbit: Option<OrbitalElements>,
        visual: VisualProperties,
    ) -> Result<Self, BodyError> {
        let id = id.into();
        let name = name.into();
        require_text("id", &id)?;
        require_text("name", &name)?;
        require_positive("mass_kg", mass_kg)?;
        require_positive("radius_meters", radius_meters)?;

        Ok(Self {
            id,
            name,
            kind,
            mass_kg,
            radius_meters,
            orbit,
            visual,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> BodyType {
        self.kind
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Orbital elements, `None` for the central body
    pub fn orbit(&self) -> Option<&OrbitalElements> {
        self.orbit.as_ref()
    }

    pub fn visual(&self) -> &VisualProperties {
        &self.visual
    }

    /// Position in meters from the primary; the origin for the central body
    pub fn position(&self, julian_date: f64) -> Vector3 {
        self.orbit
            .map_or(Vector3::ZERO, |orbit| orbit.position(julian_date))
    }

    /// Velocity in m/s relative to the primary; zero for the central body
    pub fn velocity(&self, julian_date: f64) -> Vector3 {
        self.orbit
            .map_or(Vector3::ZERO, |orbit| orbit.velocity(julian_date))
    }

    pub fn state(&self, julian_date: f64) -> StateVector {
        self.orbit.map_or(
            StateVector {
                position: Vector3::ZERO,
                velocity: Vector3::ZERO,
            },
            |orbit| orbit.state(julian_date),
        )
    }
}

impl PartialEq for CelestialBody {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CelestialBody {}

impl Hash for CelestialBody {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celestial::RgbColor;
    use crate::constants::{AU_METERS, J2000, SUN_GM};
    use std::collections::HashSet;

    fn planet_visual() -> VisualProperties {
        VisualProperties::planet(RgbColor::BLUE, 0.3, 1.0).unwrap()
    }

    fn earth() -> CelestialBody {
        let orbit =
            OrbitalElements::new(AU_METERS, 0.0167, 0.0, 0.0, 1.8, 1.75, J2000, SUN_GM).unwrap();
        CelestialBody::new(
            "earth",
            "Earth",
            BodyType::Planet,
            5.97237e24,
            6_371_000.0,
            Some(orbit),
            planet_visual(),
        )
        .unwrap()
    }

    #[test]
    fn test_central_body_sits_at_origin() {
        let sun = CelestialBody::new(
            "sun",
            "Sun",
            BodyType::Star,
            1.98892e30,
            696_000_000.0,
            None,
            VisualProperties::star(RgbColor::YELLOW, 1.0).unwrap(),
        )
        .unwrap();

        assert!(sun.orbit().is_none());
        assert_eq!(sun.position(J2000 + 1234.5), Vector3::ZERO);
        assert_eq!(sun.velocity(J2000 - 10.0), Vector3::ZERO);
        assert_eq!(sun.state(J2000).position, Vector3::ZERO);
    }

    #[test]
    fn test_orbiting_body_delegates_to_elements() {
        let body = earth();
        let orbit = body.orbit().copied().unwrap();
        let t = J2000 + 200.0;
        assert_eq!(body.position(t), orbit.position(t));
        assert_eq!(body.velocity(t), orbit.velocity(t));
    }

    #[test]
    fn test_rejects_invalid_fields() {
        let blank_id = CelestialBody::new(
            "  ",
            "Earth",
            BodyType::Planet,
            1.0,
            1.0,
            None,
            planet_visual(),
        );
        assert_eq!(blank_id.unwrap_err(), BodyError::EmptyField("id"));

        let blank_name =
            CelestialBody::new("x", "", BodyType::Planet, 1.0, 1.0, None, planet_visual());
        assert_eq!(blank_name.unwrap_err(), BodyError::EmptyField("name"));

        let massless =
            CelestialBody::new("x", "X", BodyType::Asteroid, 0.0, 1.0, None, planet_visual());
        assert!(matches!(
            massless,
            Err(BodyError::NonPositive {
                field: "mass_kg",
                ..
            })
        ));

        let pointlike =
            CelestialBody::new("x", "X", BodyType::Asteroid, 1.0, -5.0, None, planet_visual());
        assert!(matches!(
            pointlike,
            Err(BodyError::NonPositive {
                field: "radius_meters",
                ..
            })
        ));
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = earth();
        let b = CelestialBody::new(
            "earth",
            "Terra",
            BodyType::Planet,
            1.0,
            1.0,
            None,
            planet_visual(),
        )
        .unwrap();
        assert_eq!(a, b);

        let set: HashSet<CelestialBody> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_body_type_display() {
        assert_eq!(BodyType::DwarfPlanet.to_string(), "DwarfPlanet");
        assert_eq!(BodyType::InterstellarObject.to_string(), "InterstellarObject");
    }
}
