use time::macros::date;
use time::Date;

use super::{
    require_positive, require_text, BodyError, ConstructionError, RgbColor, VisualProperties,
};
use crate::constants::{AU_METERS, SUN_GM};
use crate::orbit::{OrbitalElements, StateVector};
use crate::vector::Vector3;

/// An object on an unbound trajectory through the solar system
/// (1I/'Oumuamua, 2I/Borisov, ...). Orbital elements are mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct InterstellarObject {
    id: String,
    designation: String,
    name: String,
    orbit: OrbitalElements,
    discovery_date: Date,
    discoverer: String,
    visual: VisualProperties,
    estimated_diameter_meters: f64,
}

impl InterstellarObject {
    /// A blank `name` falls back to the designation.
    ///
    /// # Errors
    /// * `BodyError::EmptyField` - blank `id` or `designation`
    /// * `BodyError::NonPositive` - `estimated_diameter_meters` not positive
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        designation: impl Into<String>,
        name: impl Into<String>,
        orbit: OrbitalElements,
        discovery_date: Date,
        discoverer: impl Into<String>,
        visual: VisualProperties,
        estimated_diameter_meters: f64,
    ) -> Result<Self, BodyError> {
        let id = id.into();
        let designation = designation.into();
        let name = name.into();
        require_text("id", &id)?;
        require_text("designation", &designation)?;
        require_positive("estimated_diameter_meters", estimated_diameter_meters)?;

        let name = if name.trim().is_empty() {
            designation.clone()
        } else {
            name
        };

        Ok(Self {
            id,
            designation,
            name,
            orbit,
            discovery_date,
            discoverer: discoverer.into(),
            visual,
            estimated_diameter_meters,
        })
    }

    /// 2I/Borisov with approximate JPL Small-Body Database elements,
    /// epoch 2019-Dec-09 (JD 2458826.5).
    pub fn borisov() -> Result<Self, ConstructionError> {
        let orbit = OrbitalElements::new(
            -0.8516 * 1.496e11,
            3.3569,
            44.053_f64.to_radians(),
            308.15_f64.to_radians(),
            209.13_f64.to_radians(),
            0.0,
            2_458_826.5,
            SUN_GM,
        )?;

        let visual = VisualProperties::comet(RgbColor::ICE_BLUE, 20.0)?;

        Ok(Self::new(
            "2i-borisov",
            "2I/Borisov",
            "Borisov",
            orbit,
            date!(2019 - 08 - 30),
            "Gennady Borisov",
            visual,
            800.0,
        )?)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orbit(&self) -> &OrbitalElements {
        &self.orbit
    }

    pub fn discovery_date(&self) -> Date {
        self.discovery_date
    }

    /// Person or survey credited with the discovery; may be empty
    pub fn discoverer(&self) -> &str {
        &self.discoverer
    }

    pub fn visual(&self) -> &VisualProperties {
        &self.visual
    }

    pub fn estimated_diameter_meters(&self) -> f64 {
        self.estimated_diameter_meters
    }

    /// Perihelion distance in AU
    pub fn perihelion_au(&self) -> f64 {
        self.orbit.periapsis_distance() / AU_METERS
    }

    /// Position in meters from the Sun
    pub fn position(&self, julian_date: f64) -> Vector3 {
        self.orbit.position(julian_date)
    }

    /// Velocity in m/s relative to the Sun
    pub fn velocity(&self, julian_date: f64) -> Vector3 {
        self.orbit.velocity(julian_date)
    }

    pub fn state(&self, julian_date: f64) -> StateVector {
        self.orbit.state(julian_date)
    }
}
