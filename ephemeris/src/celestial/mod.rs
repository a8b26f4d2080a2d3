//! Celestial body definitions and calculations
//!
//! Bodies attach identity and physical metadata to optional
//! [`OrbitalElements`](crate::orbit::OrbitalElements) and delegate
//! position/velocity queries to them.

mod body;
mod interstellar;
mod visual;

pub use body::{BodyType, CelestialBody};
pub use interstellar::InterstellarObject;
pub use visual::{RgbColor, VisualProperties};

use thiserror::Error;

use crate::orbit::OrbitError;

/// Errors raised while constructing bodies and their metadata
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("Invalid argument: {0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Invalid argument: {field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Invalid argument: {field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },
}

/// Either half of building a body with an orbit can fail
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    #[error(transparent)]
    Orbit(#[from] OrbitError),

    #[error(transparent)]
    Body(#[from] BodyError),
}

/// Reject blank or whitespace-only identifiers
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), BodyError> {
    if value.trim().is_empty() {
        return Err(BodyError::EmptyField(field));
    }
    Ok(())
}

/// Reject zero, negative and NaN quantities
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), BodyError> {
    if value.is_nan() || value <= 0.0 {
        return Err(BodyError::NonPositive { field, value });
    }
    Ok(())
}

pub(crate) fn require_unit_range(field: &'static str, value: f64) -> Result<(), BodyError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(BodyError::OutOfUnitRange { field, value });
    }
    Ok(())
}
