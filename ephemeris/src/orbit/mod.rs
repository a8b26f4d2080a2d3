//! Two-body Keplerian orbit evaluation.
//!
//! [`OrbitalElements`] holds the six classical elements plus epoch and the
//! primary's gravitational parameter, and evaluates position and velocity at
//! any Julian Date. Evaluation is a pure function of the elements and the
//! query time, so a single instance can be shared across threads freely.
//!
//! # Sign convention
//!
//! The semi-major axis is signed: positive for bound orbits (`e < 1`) and
//! negative for hyperbolic ones (`e > 1`), so that `a·(1 - e²)` keeps a
//! consistent sign. [`OrbitClass`] makes the branch explicit; the numeric
//! convention itself is preserved for compatibility with existing catalogs.
//!
//! # Precision
//!
//! - The mean anomaly is never wrapped, so elliptical orbits evaluated many
//!   periods away from epoch lose precision in the trig arguments.
//! - Near-parabolic eccentricities (|e - 1| ≲ 1e-6) leave the Newton solvers
//!   poorly conditioned. Results stay finite but can be inaccurate.
//! - An exactly parabolic orbit (`e == 1`) takes the hyperbolic branch. At
//!   zero mean anomaly that collapses the radius to zero, so the position is
//!   the origin and the velocity is NaN.

mod frame;
mod kepler;

pub use frame::EclipticRotation;
pub use kepler::{
    solve_elliptic_anomaly, solve_hyperbolic_anomaly, KeplerSolution, ANOMALY_TOLERANCE,
    ELLIPTIC_MAX_ITERATIONS, HYPERBOLIC_MAX_ITERATIONS,
};

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

use crate::constants::SECONDS_PER_DAY;
use crate::vector::Vector3;

/// Errors raised while constructing orbital elements
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error("Invalid argument: semi-major axis cannot be zero")]
    ZeroSemiMajorAxis,

    #[error("Invalid argument: eccentricity must be non-negative, got {0}")]
    NegativeEccentricity(f64),

    #[error("Invalid argument: gravitational parameter must be positive, got {0}")]
    NonPositiveGravitationalParameter(f64),

    #[error("Invalid argument: {0} must be finite")]
    NonFinite(&'static str),
}

/// Which Kepler equation governs the orbit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitClass {
    /// `0 <= e < 1`, semi-major axis positive
    Elliptical,
    /// `e >= 1`, semi-major axis negative
    Hyperbolic,
}

impl OrbitClass {
    /// Classify by eccentricity alone. `e == 1` is treated as hyperbolic.
    pub fn from_eccentricity(eccentricity: f64) -> Self {
        if eccentricity < 1.0 {
            OrbitClass::Elliptical
        } else {
            OrbitClass::Hyperbolic
        }
    }
}

/// Position and velocity evaluated at the same instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    /// Meters from the primary
    pub position: Vector3,
    /// Meters per second relative to the primary
    pub velocity: Vector3,
}

/// Solved anomaly for one evaluation, tagged by orbit class
#[derive(Debug, Clone, Copy)]
enum Anomaly {
    Eccentric(f64),
    Hyperbolic(f64),
}

/// Classical Keplerian orbital elements.
///
/// Angles are radians, distances meters, epoch a Julian Date and the
/// gravitational parameter m³/s².
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "ElementsRecord", into = "ElementsRecord")]
pub struct OrbitalElements {
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    longitude_of_ascending_node: f64,
    argument_of_periapsis: f64,
    mean_anomaly_at_epoch: f64,
    epoch: f64,
    gravitational_parameter: f64,
    class: OrbitClass,
    rotation: EclipticRotation,
}

impl OrbitalElements {
    /// Validate and build a set of orbital elements.
    ///
    /// # Errors
    /// * `OrbitError::NonFinite` - any input is NaN or infinite
    /// * `OrbitError::ZeroSemiMajorAxis` - `semi_major_axis == 0`
    /// * `OrbitError::NegativeEccentricity` - `eccentricity < 0`
    /// * `OrbitError::NonPositiveGravitationalParameter` - `gravitational_parameter <= 0`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        longitude_of_ascending_node: f64,
        argument_of_periapsis: f64,
        mean_anomaly_at_epoch: f64,
        epoch: f64,
        gravitational_parameter: f64,
    ) -> Result<Self, OrbitError> {
        let inputs = [
            ("semi_major_axis", semi_major_axis),
            ("eccentricity", eccentricity),
            ("inclination", inclination),
            ("longitude_of_ascending_node", longitude_of_ascending_node),
            ("argument_of_periapsis", argument_of_periapsis),
            ("mean_anomaly_at_epoch", mean_anomaly_at_epoch),
            ("epoch", epoch),
            ("gravitational_parameter", gravitational_parameter),
        ];
        if let Some((name, _)) = inputs.iter().find(|(_, value)| !value.is_finite()) {
            return Err(OrbitError::NonFinite(*name));
        }

        if semi_major_axis == 0.0 {
            return Err(OrbitError::ZeroSemiMajorAxis);
        }
        if eccentricity < 0.0 {
            return Err(OrbitError::NegativeEccentricity(eccentricity));
        }
        if gravitational_parameter <= 0.0 {
            return Err(OrbitError::NonPositiveGravitationalParameter(
                gravitational_parameter,
            ));
        }

        let elements = Self {
            semi_major_axis,
            eccentricity,
            inclination,
            longitude_of_ascending_node,
            argument_of_periapsis,
            mean_anomaly_at_epoch,
            epoch,
            gravitational_parameter,
            class: OrbitClass::from_eccentricity(eccentricity),
            rotation: EclipticRotation::new(
                argument_of_periapsis,
                inclination,
                longitude_of_ascending_node,
            ),
        };

        if !elements.has_conventional_axis_sign() {
            log::warn!(
                "{:?} orbit (e = {eccentricity}) has semi-major axis {semi_major_axis} m \
                 with unconventional sign; evaluation will not be physical",
                elements.class
            );
        }

        Ok(elements)
    }

    /// Signed semi-major axis in meters
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Inclination in radians
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    /// Longitude of the ascending node in radians
    pub fn longitude_of_ascending_node(&self) -> f64 {
        self.longitude_of_ascending_node
    }

    /// Argument of periapsis in radians
    pub fn argument_of_periapsis(&self) -> f64 {
        self.argument_of_periapsis
    }

    /// Mean anomaly at epoch in radians
    pub fn mean_anomaly_at_epoch(&self) -> f64 {
        self.mean_anomaly_at_epoch
    }

    /// Epoch as a Julian Date
    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    /// GM of the primary in m³/s²
    pub fn gravitational_parameter(&self) -> f64 {
        self.gravitational_parameter
    }

    pub fn orbit_class(&self) -> OrbitClass {
        self.class
    }

    /// Precomputed orbital-plane to ecliptic rotation
    pub fn ecliptic_rotation(&self) -> &EclipticRotation {
        &self.rotation
    }

    /// Whether the axis sign follows the positive-elliptical, negative-hyperbolic convention
    pub fn has_conventional_axis_sign(&self) -> bool {
        match self.class {
            OrbitClass::Elliptical => self.semi_major_axis > 0.0,
            OrbitClass::Hyperbolic => self.semi_major_axis < 0.0,
        }
    }

    /// Mean motion `n = sqrt(GM / |a|³)` in rad/s
    pub fn mean_motion(&self) -> f64 {
        (self.gravitational_parameter / self.semi_major_axis.abs().powi(3)).sqrt()
    }

    /// Orbital period in seconds, `None` for open orbits
    pub fn period_seconds(&self) -> Option<f64> {
        match self.class {
            OrbitClass::Elliptical => Some(2.0 * PI / self.mean_motion()),
            OrbitClass::Hyperbolic => None,
        }
    }

    /// Orbital period in days, `None` for open orbits
    pub fn period_days(&self) -> Option<f64> {
        self.period_seconds().map(|s| s / SECONDS_PER_DAY)
    }

    /// Closest approach distance `a·(1 - e)` in meters
    pub fn periapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance `a·(1 + e)` in meters, `None` for open orbits
    pub fn apoapsis_distance(&self) -> Option<f64> {
        match self.class {
            OrbitClass::Elliptical => Some(self.semi_major_axis * (1.0 + self.eccentricity)),
            OrbitClass::Hyperbolic => None,
        }
    }

    /// Unwrapped mean anomaly at `julian_date`, radians
    pub fn mean_anomaly_at(&self, julian_date: f64) -> f64 {
        let time_since_epoch = (julian_date - self.epoch) * SECONDS_PER_DAY;
        self.mean_anomaly_at_epoch + self.mean_motion() * time_since_epoch
    }

    /// Position relative to the primary in meters, in the frame of the elements
    pub fn position(&self, julian_date: f64) -> Vector3 {
        let anomaly = self.solve(julian_date);
        let (x, y) = self.perifocal_position(anomaly);
        self.rotation.rotate(x, y)
    }

    /// Velocity relative to the primary in m/s, in the frame of the elements
    pub fn velocity(&self, julian_date: f64) -> Vector3 {
        let anomaly = self.solve(julian_date);
        let (vx, vy) = self.perifocal_velocity(anomaly);
        self.rotation.rotate(vx, vy)
    }

    /// Position and velocity sharing one Kepler solve
    pub fn state(&self, julian_date: f64) -> StateVector {
        let anomaly = self.solve(julian_date);
        let (x, y) = self.perifocal_position(anomaly);
        let (vx, vy) = self.perifocal_velocity(anomaly);
        StateVector {
            position: self.rotation.rotate(x, y),
            velocity: self.rotation.rotate(vx, vy),
        }
    }

    fn solve(&self, julian_date: f64) -> Anomaly {
        let mean_anomaly = self.mean_anomaly_at(julian_date);
        match self.class {
            OrbitClass::Elliptical => Anomaly::Eccentric(
                solve_elliptic_anomaly(mean_anomaly, self.eccentricity).anomaly,
            ),
            OrbitClass::Hyperbolic => Anomaly::Hyperbolic(
                solve_hyperbolic_anomaly(mean_anomaly, self.eccentricity).anomaly,
            ),
        }
    }

    /// Returns `(x, y)` in the orbital plane with x toward periapsis
    fn perifocal_position(&self, anomaly: Anomaly) -> (f64, f64) {
        let e = self.eccentricity;
        let a = self.semi_major_axis;

        let (true_anomaly, radius) = match anomaly {
            Anomaly::Eccentric(ecc) => {
                let nu = 2.0
                    * ((1.0 + e).sqrt() * (ecc / 2.0).sin())
                        .atan2((1.0 - e).sqrt() * (ecc / 2.0).cos());
                (nu, a * (1.0 - e * ecc.cos()))
            }
            Anomaly::Hyperbolic(hyp) => {
                let nu = 2.0
                    * ((e + 1.0).sqrt() * (hyp / 2.0).sinh())
                        .atan2((e - 1.0).sqrt() * (hyp / 2.0).cosh());
                (nu, a * (1.0 - e * hyp.cosh()))
            }
        };

        (radius * true_anomaly.cos(), radius * true_anomaly.sin())
    }

    /// Returns `(vx, vy)` in the orbital plane
    fn perifocal_velocity(&self, anomaly: Anomaly) -> (f64, f64) {
        let e = self.eccentricity;
        let a = self.semi_major_axis;
        let gm = self.gravitational_parameter;

        match anomaly {
            Anomaly::Eccentric(ecc) => {
                let radius = a * (1.0 - e * ecc.cos());
                let speed = (gm * a.abs()).sqrt() / radius.abs();
                (
                    -speed * ecc.sin(),
                    speed * (1.0 - e * e).sqrt() * ecc.cos(),
                )
            }
            Anomaly::Hyperbolic(hyp) => {
                let radius = a * (1.0 - e * hyp.cosh());
                let speed = (gm * a.abs()).sqrt() / radius.abs();
                (
                    -speed * hyp.sinh(),
                    speed * (e * e - 1.0).sqrt() * hyp.cosh(),
                )
            }
        }
    }
}

impl PartialEq for OrbitalElements {
    /// Tolerant comparison on the shape, inclination and epoch of the orbit
    fn eq(&self, other: &Self) -> bool {
        (self.semi_major_axis - other.semi_major_axis).abs() < 1e-6
            && (self.eccentricity - other.eccentricity).abs() < 1e-10
            && (self.inclination - other.inclination).abs() < 1e-10
            && (self.epoch - other.epoch).abs() < 1e-6
    }
}

/// Serialized form of [`OrbitalElements`]; deserialization re-validates
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ElementsRecord {
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    longitude_of_ascending_node: f64,
    argument_of_periapsis: f64,
    mean_anomaly_at_epoch: f64,
    epoch: f64,
    gravitational_parameter: f64,
}

impl TryFrom<ElementsRecord> for OrbitalElements {
    type Error = OrbitError;

    fn try_from(r: ElementsRecord) -> Result<Self, Self::Error> {
        OrbitalElements::new(
            r.semi_major_axis,
            r.eccentricity,
            r.inclination,
            r.longitude_of_ascending_node,
            r.argument_of_periapsis,
            r.mean_anomaly_at_epoch,
            r.epoch,
            r.gravitational_parameter,
        )
    }
}

impl From<OrbitalElements> for ElementsRecord {
    fn from(e: OrbitalElements) -> Self {
        Self {
            semi_major_axis: e.semi_major_axis,
            eccentricity: e.eccentricity,
            inclination: e.inclination,
            longitude_of_ascending_node: e.longitude_of_ascending_node,
            argument_of_periapsis: e.argument_of_periapsis,
            mean_anomaly_at_epoch: e.mean_anomaly_at_epoch,
            epoch: e.epoch,
            gravitational_parameter: e.gravitational_parameter,
        }
    }
}
