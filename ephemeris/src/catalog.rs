//! In-memory catalog of solar system bodies and interstellar objects.
//!
//! The catalog is built once and then only read, so it can be shared across
//! threads behind a plain reference or an `Arc`. Catalog files are pretty
//! JSON with orbital elements in AU and degrees, see [`OrbitRecord`].

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::macros::date;
use time::Date;

use crate::celestial::{
    BodyError, BodyType, CelestialBody, InterstellarObject, RgbColor, VisualProperties,
};
use crate::constants::{AU_METERS, J2000, SUN_GM};
use crate::orbit::{OrbitError, OrbitalElements, StateVector};
use crate::vector::Vector3;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid orbit for '{id}': {source}")]
    Orbit { id: String, source: OrbitError },

    #[error("Invalid body '{id}': {source}")]
    Body { id: String, source: BodyError },

    #[error("Duplicate id '{0}' in catalog")]
    DuplicateId(String),

    #[error("Invalid argument: catalog constants must be positive and finite")]
    InvalidConstants,
}

/// Physical constants used to turn AU/degree records into SI elements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogConstants {
    /// Length of one astronomical unit in meters
    pub au_meters: f64,
    /// Gravitational parameter of the central body (m³/s²)
    pub sun_gm: f64,
}

impl Default for CatalogConstants {
    fn default() -> Self {
        Self {
            au_meters: AU_METERS,
            sun_gm: SUN_GM,
        }
    }
}

impl CatalogConstants {
    fn validate(&self) -> Result<(), CatalogError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.au_meters) && ok(self.sun_gm) {
            Ok(())
        } else {
            Err(CatalogError::InvalidConstants)
        }
    }
}

/// Orbital elements as written in catalog files: AU, degrees, Julian Date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitRecord {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub longitude_of_ascending_node_deg: f64,
    pub argument_of_periapsis_deg: f64,
    pub mean_anomaly_deg: f64,
    pub epoch_jd: f64,
    /// Overrides the catalog's central-body GM when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravitational_parameter: Option<f64>,
}

impl OrbitRecord {
    pub const fn new(
        a_au: f64,
        e: f64,
        i_deg: f64,
        node_deg: f64,
        peri_deg: f64,
        m_deg: f64,
        epoch: f64,
    ) -> Self {
        Self {
            semi_major_axis_au: a_au,
            eccentricity: e,
            inclination_deg: i_deg,
            longitude_of_ascending_node_deg: node_deg,
            argument_of_periapsis_deg: peri_deg,
            mean_anomaly_deg: m_deg,
            epoch_jd: epoch,
            gravitational_parameter: None,
        }
    }

    /// Convert to SI elements
    pub fn to_elements(
        &self,
        constants: &CatalogConstants,
    ) -> Result<OrbitalElements, OrbitError> {
        OrbitalElements::new(
            self.semi_major_axis_au * constants.au_meters,
            self.eccentricity,
            self.inclination_deg.to_radians(),
            self.longitude_of_ascending_node_deg.to_radians(),
            self.argument_of_periapsis_deg.to_radians(),
            self.mean_anomaly_deg.to_radians(),
            self.epoch_jd,
            self.gravitational_parameter.unwrap_or(constants.sun_gm),
        )
    }

    pub fn from_elements(elements: &OrbitalElements, constants: &CatalogConstants) -> Self {
        let gm = elements.gravitational_parameter();
        Self {
            semi_major_axis_au: elements.semi_major_axis() / constants.au_meters,
            eccentricity: elements.eccentricity(),
            inclination_deg: elements.inclination().to_degrees(),
            longitude_of_ascending_node_deg: elements.longitude_of_ascending_node().to_degrees(),
            argument_of_periapsis_deg: elements.argument_of_periapsis().to_degrees(),
            mean_anomaly_deg: elements.mean_anomaly_at_epoch().to_degrees(),
            epoch_jd: elements.epoch(),
            gravitational_parameter: (gm != constants.sun_gm).then_some(gm),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BodyRecord {
    id: String,
    name: String,
    kind: BodyType,
    mass_kg: f64,
    radius_meters: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    orbit: Option<OrbitRecord>,
    visual: VisualProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct InterstellarRecord {
    id: String,
    designation: String,
    #[serde(default)]
    name: String,
    orbit: OrbitRecord,
    #[serde(with = "iso_date")]
    discovery_date: Date,
    #[serde(default)]
    discoverer: String,
    visual: VisualProperties,
    estimated_diameter_meters: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    constants: CatalogConstants,
    #[serde(default)]
    bodies: Vec<BodyRecord>,
    #[serde(default)]
    interstellar_objects: Vec<InterstellarRecord>,
}

/// Result of an id lookup across both kinds of catalog entry
#[derive(Debug, Clone, Copy)]
pub enum CatalogEntry<'a> {
    Body(&'a CelestialBody),
    Interstellar(&'a InterstellarObject),
}

impl<'a> CatalogEntry<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            CatalogEntry::Body(b) => b.id(),
            CatalogEntry::Interstellar(o) => o.id(),
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            CatalogEntry::Body(b) => b.name(),
            CatalogEntry::Interstellar(o) => o.name(),
        }
    }

    pub fn kind(&self) -> BodyType {
        match *self {
            CatalogEntry::Body(b) => b.kind(),
            CatalogEntry::Interstellar(_) => BodyType::InterstellarObject,
        }
    }

    pub fn orbit(&self) -> Option<&'a OrbitalElements> {
        match *self {
            CatalogEntry::Body(b) => b.orbit(),
            CatalogEntry::Interstellar(o) => Some(o.orbit()),
        }
    }

    pub fn visual(&self) -> &'a VisualProperties {
        match *self {
            CatalogEntry::Body(b) => b.visual(),
            CatalogEntry::Interstellar(o) => o.visual(),
        }
    }

    pub fn position(&self, julian_date: f64) -> Vector3 {
        match *self {
            CatalogEntry::Body(b) => b.position(julian_date),
            CatalogEntry::Interstellar(o) => o.position(julian_date),
        }
    }

    pub fn velocity(&self, julian_date: f64) -> Vector3 {
        match *self {
            CatalogEntry::Body(b) => b.velocity(julian_date),
            CatalogEntry::Interstellar(o) => o.velocity(julian_date),
        }
    }

    pub fn state(&self, julian_date: f64) -> StateVector {
        match *self {
            CatalogEntry::Body(b) => b.state(julian_date),
            CatalogEntry::Interstellar(o) => o.state(julian_date),
        }
    }
}

/// Bodies and interstellar objects keyed by id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    constants: CatalogConstants,
    bodies: HashMap<String, CelestialBody>,
    interstellar: HashMap<String, InterstellarObject>,
}

impl Catalog {
    /// Empty catalog using the given constants for file conversion
    pub fn new(constants: CatalogConstants) -> Self {
        Self {
            constants,
            ..Self::default()
        }
    }

    pub fn constants(&self) -> &CatalogConstants {
        &self.constants
    }

    /// Insert or replace a body, returning the previous entry with that id
    pub fn insert_body(&mut self, body: CelestialBody) -> Option<CelestialBody> {
        self.bodies.insert(body.id().to_string(), body)
    }

    /// Insert or replace an interstellar object, returning the previous entry with that id
    pub fn insert_interstellar(
        &mut self,
        object: InterstellarObject,
    ) -> Option<InterstellarObject> {
        self.interstellar.insert(object.id().to_string(), object)
    }

    pub fn body(&self, id: &str) -> Option<&CelestialBody> {
        self.bodies.get(id)
    }

    pub fn interstellar(&self, id: &str) -> Option<&InterstellarObject> {
        self.interstellar.get(id)
    }

    /// Find an id among the bodies first, then among interstellar objects
    pub fn lookup(&self, id: &str) -> Option<CatalogEntry<'_>> {
        self.body(id)
            .map(CatalogEntry::Body)
            .or_else(|| self.interstellar(id).map(CatalogEntry::Interstellar))
    }

    /// All bodies sorted by id
    pub fn bodies(&self) -> Vec<&CelestialBody> {
        let mut bodies: Vec<_> = self.bodies.values().collect();
        bodies.sort_by(|a, b| a.id().cmp(b.id()));
        bodies
    }

    /// All interstellar objects sorted by id
    pub fn interstellar_objects(&self) -> Vec<&InterstellarObject> {
        let mut objects: Vec<_> = self.interstellar.values().collect();
        objects.sort_by(|a, b| a.id().cmp(b.id()));
        objects
    }

    pub fn len(&self) -> usize {
        self.bodies.len() + self.interstellar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Built-in catalog: the Sun, the eight planets, five dwarf planets,
    /// five comets and the three known interstellar objects.
    ///
    /// # Errors
    /// * `CatalogError::InvalidConstants` - non-positive or non-finite constants
    pub fn solar_system(constants: CatalogConstants) -> Result<Self, CatalogError> {
        constants.validate()?;
        let mut catalog = Self::new(constants);

        let sun_visual = checked_visual(
            "sun",
            RgbColor::new(1.0, 0.9, 0.7).and_then(|c| VisualProperties::star(c, 1.0)),
        )?;
        catalog.add_body(
            "sun",
            "Sun",
            BodyType::Star,
            1.98892e30,
            696_000_000.0,
            None,
            sun_visual,
        )?;

        for row in PLANETS.iter().chain(DWARF_PLANETS) {
            let color = RgbColor::try_from(row.color);
            let visual = checked_visual(
                row.id,
                color.and_then(|c| VisualProperties::planet(c, row.albedo, 1.0)),
            )?;
            catalog.add_body(
                row.id,
                row.name,
                row.kind,
                row.mass_kg,
                row.radius_meters,
                Some(row.orbit),
                visual,
            )?;
        }

        for row in COMETS {
            let visual = checked_visual(row.id, comet_visual())?;
            catalog.add_body(
                row.id,
                row.name,
                BodyType::Comet,
                row.mass_kg,
                row.radius_meters,
                Some(row.orbit),
                visual,
            )?;
        }

        catalog.add_interstellar(InterstellarRecord {
            id: "oumuamua".into(),
            designation: "1I/2017 U1".into(),
            name: "1I/'Oumuamua".into(),
            orbit: OrbitRecord::new(-1.279, 1.201, 122.741, 24.597, 241.811, 0.0, 2_458_080.5),
            discovery_date: date!(2017 - 10 - 19),
            discoverer: "Pan-STARRS (Robert Weryk)".into(),
            visual: checked_visual(
                "oumuamua",
                RgbColor::new(0.6, 0.5, 0.5).and_then(|c| VisualProperties::planet(c, 0.10, 1.0)),
            )?,
            estimated_diameter_meters: 230.0,
        })?;
        catalog.add_interstellar(InterstellarRecord {
            id: "borisov".into(),
            designation: "2I/2019 Q4".into(),
            name: "2I/Borisov".into(),
            orbit: OrbitRecord::new(-0.851, 3.357, 44.053, 308.151, 209.124, 0.0, 2_458_826.5),
            discovery_date: date!(2019 - 08 - 30),
            discoverer: "Gennadiy Borisov".into(),
            visual: checked_visual("borisov", comet_visual())?,
            estimated_diameter_meters: 1000.0,
        })?;
        catalog.add_interstellar(InterstellarRecord {
            id: "atlas".into(),
            designation: "3I/2024 S1".into(),
            name: "3I/ATLAS".into(),
            orbit: OrbitRecord::new(-0.193, 6.14, 88.5, 125.4, 342.1, 0.0, 2_460_613.981_94),
            discovery_date: date!(2025 - 07 - 01),
            discoverer: "ATLAS Survey".into(),
            visual: checked_visual("atlas", comet_visual())?,
            estimated_diameter_meters: 1600.0,
        })?;

        log::debug!(
            "Built solar system catalog: {} bodies, {} interstellar objects",
            catalog.bodies.len(),
            catalog.interstellar.len()
        );
        Ok(catalog)
    }

    /// Save to JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), CatalogError> {
        let file = CatalogFile {
            constants: self.constants,
            bodies: self.bodies().into_iter().map(|b| self.body_record(b)).collect(),
            interstellar_objects: self
                .interstellar_objects()
                .into_iter()
                .map(|o| self.interstellar_record(o))
                .collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        std::fs::write(path, json)?;
        log::info!(
            "Saved catalog with {} entries to {}",
            self.len(),
            path.display()
        );
        Ok(())
    }

    /// Load from JSON file, validating every entry.
    ///
    /// # Errors
    /// * `CatalogError::Io` / `CatalogError::Json` - unreadable or malformed file
    /// * `CatalogError::Orbit` / `CatalogError::Body` - an entry fails validation
    /// * `CatalogError::DuplicateId` - the same id appears twice, in either section
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&json)?;
        file.constants.validate()?;

        let mut catalog = Self::new(file.constants);
        for record in file.bodies {
            catalog.ensure_unique(&record.id)?;
            catalog.add_body(
                &record.id,
                &record.name,
                record.kind,
                record.mass_kg,
                record.radius_meters,
                record.orbit,
                record.visual,
            )?;
        }
        for record in file.interstellar_objects {
            catalog.ensure_unique(&record.id)?;
            catalog.add_interstellar(record)?;
        }

        log::info!(
            "Loaded catalog with {} entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn ensure_unique(&self, id: &str) -> Result<(), CatalogError> {
        if self.bodies.contains_key(id) || self.interstellar.contains_key(id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn add_body(
        &mut self,
        id: &str,
        name: &str,
        kind: BodyType,
        mass_kg: f64,
        radius_meters: f64,
        orbit: Option<OrbitRecord>,
        visual: VisualProperties,
    ) -> Result<(), CatalogError> {
        let orbit = orbit
            .map(|o| o.to_elements(&self.constants))
            .transpose()
            .map_err(|source| CatalogError::Orbit {
                id: id.to_string(),
                source,
            })?;
        let body = CelestialBody::new(id, name, kind, mass_kg, radius_meters, orbit, visual)
            .map_err(|source| CatalogError::Body {
                id: id.to_string(),
                source,
            })?;
        self.insert_body(body);
        Ok(())
    }

    fn add_interstellar(&mut self, record: InterstellarRecord) -> Result<(), CatalogError> {
        let orbit = record
            .orbit
            .to_elements(&self.constants)
            .map_err(|source| CatalogError::Orbit {
                id: record.id.clone(),
                source,
            })?;
        let object = InterstellarObject::new(
            record.id.as_str(),
            record.designation,
            record.name,
            orbit,
            record.discovery_date,
            record.discoverer,
            record.visual,
            record.estimated_diameter_meters,
        )
        .map_err(|source| CatalogError::Body {
            id: record.id.clone(),
            source,
        })?;
        self.insert_interstellar(object);
        Ok(())
    }

    fn body_record(&self, body: &CelestialBody) -> BodyRecord {
        BodyRecord {
            id: body.id().to_string(),
            name: body.name().to_string(),
            kind: body.kind(),
            mass_kg: body.mass_kg(),
            radius_meters: body.radius_meters(),
            orbit: body
                .orbit()
                .map(|o| OrbitRecord::from_elements(o, &self.constants)),
            visual: body.visual().clone(),
        }
    }

    fn interstellar_record(&self, object: &InterstellarObject) -> InterstellarRecord {
        InterstellarRecord {
            id: object.id().to_string(),
            designation: object.designation().to_string(),
            name: object.name().to_string(),
            orbit: OrbitRecord::from_elements(object.orbit(), &self.constants),
            discovery_date: object.discovery_date(),
            discoverer: object.discoverer().to_string(),
            visual: object.visual().clone(),
            estimated_diameter_meters: object.estimated_diameter_meters(),
        }
    }
}

fn checked_visual(
    id: &str,
    result: Result<VisualProperties, BodyError>,
) -> Result<VisualProperties, CatalogError> {
    result.map_err(|source| CatalogError::Body {
        id: id.to_string(),
        source,
    })
}

fn comet_visual() -> Result<VisualProperties, BodyError> {
    VisualProperties::comet(RgbColor::new(0.7, 0.8, 0.9)?, 10.0)
}

struct BodyRow {
    id: &'static str,
    name: &'static str,
    kind: BodyType,
    orbit: OrbitRecord,
    mass_kg: f64,
    radius_meters: f64,
    color: [f64; 3],
    albedo: f64,
}

struct CometRow {
    id: &'static str,
    name: &'static str,
    orbit: OrbitRecord,
    mass_kg: f64,
    radius_meters: f64,
}

// Mean J2000 elements, rounded
const PLANETS: &[BodyRow] = &[
    BodyRow {
        id: "mercury",
        name: "Mercury",
        kind: BodyType::Planet,
        orbit: OrbitRecord::new(0.387, 0.2056, 7.005, 48.331, 29.124, 174.795, J2000),
        mass_kg: 3.3011e23,
        radius_meters: 2_439_700.0,
        color: [0.5, 0.5, 0.5],
        albedo: 0.142,
    },
    BodyRow {
        id: "venus",
        name: "Venus",
        kind: BodyType::Planet,
        orbit: OrbitRecord::new(0.723, 0.00677, 3.395, 76.681, 54.852, 50.115, J2000),
        mass_kg: 4.8675e24,
        radius_meters: 6_051_800.0,
        color: [0.9, 0.8, 0.6],
        albedo: 0.76,
    },
    BodyRow {
        id: "earth",
        name: "Earth",
        kind: BodyType::Planet,
        orbit: OrbitRecord::new(1.0, 0.0167, 0.00005, -11.261, 102.947, 100.464, J2000),
        mass_kg: 5.97237e24,
        radius_meters: 6_371_000.0,
        color: [0.2, 0.5, 0.9],
        albedo: 0.306,
    },
    BodyRow {
        id: "mars",
        name: "Mars",
        kind: BodyType::Planet,
        orbit: OrbitRecord::new(1.524, 0.0934, 1.851, 49.579, 286.462, 19.412, J2000),
        mass_kg: 6.4171e23,
        radius_meters: 3_389_500.0,
        color: [0.9, 0.4, 0.2],
        albedo: 0.170,
    },
    BodyRow {
        id: "jupiter",
        name: "Jupiter",
        kind: BodyType::Planet,
        orbit: OrbitRecord::new(5.203, 0.0484, 1.305, 100.556, 275.067, 34.404, J2000),
        mass_kg: 1.8982e27,
        radius_meters: 69_911_000.0,
        color: [0.8, 0.7, 0.6],
        albedo: 0.52,
    },
    BodyRow {
        id: "saturn",
        name: "Saturn",
        kind: BodyType::Planet,
        orbit: OrbitRecord::new(9.537, 0.0542, 2.484, 113.715, 336.041, 49.954, J2000),
        mass_kg: 5.6834e26,
        radius_meters: 58_232_000.0,
        color: [0.9, 0.8, 0.6],
        albedo: 0.47,
    },
    BodyRow {
        id: "uranus",
        name: "Uranus",
        kind: BodyType::Planet,
        orbit: OrbitRecord::new(19.191, 0.0472, 0.770, 74.230, 96.734, 142.955, J2000),
        mass_kg: 8.6810e25,
        radius_meters: 25_362_000.0,
        color: [0.6, 0.8, 0.9],
        albedo: 0.51,
    },
    BodyRow {
        id: "neptune",
        name: "Neptune",
        kind: BodyType::Planet,
        orbit: OrbitRecord::new(30.069, 0.00859, 1.769, 131.722, 273.250, 267.767, J2000),
        mass_kg: 1.02413e26,
        radius_meters: 24_622_000.0,
        color: [0.3, 0.4, 0.9],
        albedo: 0.41,
    },
];

const DWARF_PLANETS: &[BodyRow] = &[
    BodyRow {
        id: "pluto",
        name: "Pluto",
        kind: BodyType::DwarfPlanet,
        orbit: OrbitRecord::new(39.482, 0.2488, 17.142, 110.303, 224.067, 238.928, J2000),
        mass_kg: 1.303e22,
        radius_meters: 1_188_300.0,
        color: [0.8, 0.7, 0.6],
        albedo: 0.575,
    },
    BodyRow {
        id: "ceres",
        name: "Ceres",
        kind: BodyType::DwarfPlanet,
        orbit: OrbitRecord::new(2.767, 0.0758, 10.593, 80.329, 73.115, 95.989, J2000),
        mass_kg: 9.3835e20,
        radius_meters: 469_730.0,
        color: [0.6, 0.6, 0.6],
        albedo: 0.09,
    },
    BodyRow {
        id: "eris",
        name: "Eris",
        kind: BodyType::DwarfPlanet,
        orbit: OrbitRecord::new(67.668, 0.44177, 44.040, 35.951, 151.639, 205.989, J2000),
        mass_kg: 1.66e22,
        radius_meters: 1_163_000.0,
        color: [0.9, 0.9, 0.9],
        albedo: 0.96,
    },
    BodyRow {
        id: "makemake",
        name: "Makemake",
        kind: BodyType::DwarfPlanet,
        orbit: OrbitRecord::new(45.791, 0.159, 28.96, 79.382, 294.834, 165.514, J2000),
        mass_kg: 3.1e21,
        radius_meters: 715_000.0,
        color: [0.8, 0.7, 0.6],
        albedo: 0.81,
    },
    BodyRow {
        id: "haumea",
        name: "Haumea",
        kind: BodyType::DwarfPlanet,
        orbit: OrbitRecord::new(43.335, 0.195, 28.19, 122.167, 239.041, 218.205, J2000),
        mass_kg: 4.006e21,
        radius_meters: 816_000.0,
        color: [0.9, 0.9, 0.9],
        albedo: 0.804,
    },
];

const COMETS: &[CometRow] = &[
    CometRow {
        id: "halley",
        name: "1P/Halley",
        orbit: OrbitRecord::new(17.834, 0.96714, 162.263, 58.420, 111.333, 38.076, 2_446_470.5),
        mass_kg: 2.2e14,
        radius_meters: 5_500.0,
    },
    CometRow {
        id: "hale-bopp",
        name: "C/1995 O1 (Hale-Bopp)",
        orbit: OrbitRecord::new(250.46, 0.995068, 89.430, 282.471, 130.590, 0.0, 2_450_540.0),
        mass_kg: 1.3e16,
        radius_meters: 30_000.0,
    },
    CometRow {
        id: "encke",
        name: "2P/Encke",
        orbit: OrbitRecord::new(2.218, 0.8502, 11.782, 334.568, 186.543, 152.655, J2000),
        mass_kg: 7.2e13,
        radius_meters: 2_400.0,
    },
    CometRow {
        id: "churyumov-gerasimenko",
        name: "67P/Churyumov-Gerasimenko",
        orbit: OrbitRecord::new(3.463, 0.641, 7.041, 50.147, 12.780, 94.416, J2000),
        mass_kg: 9.982e12,
        radius_meters: 2_000.0,
    },
    CometRow {
        id: "hyakutake",
        name: "C/1996 B2 (Hyakutake)",
        orbit: OrbitRecord::new(1700.0, 0.999897, 124.920, 188.046, 130.173, 0.0, 2_450_182.5),
        mass_kg: 8.2e13,
        radius_meters: 2_500.0,
    },
];
