//! Rendering hints carried alongside a body. Opaque to the orbit engine.

use serde::{Deserialize, Serialize};

use super::{require_positive, require_unit_range, BodyError};

/// RGB color with components in [0, 1], serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct RgbColor {
    r: f64,
    g: f64,
    b: f64,
}

impl RgbColor {
    pub const WHITE: RgbColor = RgbColor::from_const(1.0, 1.0, 1.0);
    pub const YELLOW: RgbColor = RgbColor::from_const(1.0, 1.0, 0.0);
    pub const BLUE: RgbColor = RgbColor::from_const(0.0, 0.5, 1.0);
    pub const RED: RgbColor = RgbColor::from_const(1.0, 0.3, 0.2);
    pub const ORANGE: RgbColor = RgbColor::from_const(1.0, 0.6, 0.2);
    pub const GRAY: RgbColor = RgbColor::from_const(0.5, 0.5, 0.5);
    pub const ICE_BLUE: RgbColor = RgbColor::from_const(0.8, 0.9, 1.0);

    /// Orbit trail tint used for comets and interstellar objects
    pub const COMET_TRAIL: RgbColor = RgbColor::from_const(0.8, 0.8, 1.0);

    pub fn new(r: f64, g: f64, b: f64) -> Result<Self, BodyError> {
        require_unit_range("red", r)?;
        require_unit_range("green", g)?;
        require_unit_range("blue", b)?;
        Ok(Self { r, g, b })
    }

    const fn from_const(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn to_f32_array(&self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

impl TryFrom<[f64; 3]> for RgbColor {
    type Error = BodyError;

    fn try_from([r, g, b]: [f64; 3]) -> Result<Self, Self::Error> {
        Self::new(r, g, b)
    }
}

impl From<RgbColor> for [f64; 3] {
    fn from(c: RgbColor) -> Self {
        [c.r, c.g, c.b]
    }
}

/// How a body should be drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VisualFields")]
pub struct VisualProperties {
    pub color: RgbColor,
    /// Reflectivity, 0 = black body, 1 = perfect reflector
    pub albedo: f64,
    /// Whether the body emits its own light
    pub is_luminous: bool,
    /// Exaggeration applied so small bodies stay visible
    pub render_scale_factor: f64,
    pub show_orbit: bool,
    pub orbit_color: RgbColor,
}

impl VisualProperties {
    /// Validate and build visual properties. `orbit_color` defaults to `color`.
    pub fn new(
        color: RgbColor,
        albedo: f64,
        is_luminous: bool,
        render_scale_factor: f64,
        show_orbit: bool,
        orbit_color: Option<RgbColor>,
    ) -> Result<Self, BodyError> {
        require_unit_range("albedo", albedo)?;
        require_positive("render_scale_factor", render_scale_factor)?;

        Ok(Self {
            color,
            albedo,
            is_luminous,
            render_scale_factor,
            show_orbit,
            orbit_color: orbit_color.unwrap_or(color),
        })
    }

    /// Self-luminous body without an orbit trail
    pub fn star(color: RgbColor, scale_factor: f64) -> Result<Self, BodyError> {
        Self::new(color, 0.0, true, scale_factor, false, None)
    }

    pub fn planet(color: RgbColor, albedo: f64, scale_factor: f64) -> Result<Self, BodyError> {
        Self::new(color, albedo, false, scale_factor, true, None)
    }

    /// Dark nucleus with a blue-ish orbit trail
    pub fn comet(color: RgbColor, scale_factor: f64) -> Result<Self, BodyError> {
        Self::new(
            color,
            0.04,
            false,
            scale_factor,
            true,
            Some(RgbColor::COMET_TRAIL),
        )
    }
}

#[derive(Deserialize)]
struct VisualFields {
    color: RgbColor,
    albedo: f64,
    is_luminous: bool,
    render_scale_factor: f64,
    show_orbit: bool,
    orbit_color: Option<RgbColor>,
}

impl TryFrom<VisualFields> for VisualProperties {
    type Error = BodyError;

    fn try_from(v: VisualFields) -> Result<Self, Self::Error> {
        Self::new(
            v.color,
            v.albedo,
            v.is_luminous,
            v.render_scale_factor,
            v.show_orbit,
            v.orbit_color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_rejects_out_of_range() {
        assert!(RgbColor::new(0.2, 0.4, 0.6).is_ok());
        assert!(matches!(
            RgbColor::new(1.2, 0.0, 0.0),
            Err(BodyError::OutOfUnitRange { field: "red", .. })
        ));
        assert!(RgbColor::new(0.0, -0.1, 0.0).is_err());
        assert!(RgbColor::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_orbit_color_defaults_to_body_color() {
        let visual = VisualProperties::planet(RgbColor::BLUE, 0.3, 1.0).unwrap();
        assert_eq!(visual.orbit_color, RgbColor::BLUE);
        assert!(visual.show_orbit);
        assert!(!visual.is_luminous);
    }

    #[test]
    fn test_presets() {
        let star = VisualProperties::star(RgbColor::YELLOW, 1.0).unwrap();
        assert!(star.is_luminous);
        assert!(!star.show_orbit);

        let comet = VisualProperties::comet(RgbColor::ICE_BLUE, 20.0).unwrap();
        assert_eq!(comet.albedo, 0.04);
        assert_eq!(comet.orbit_color, RgbColor::COMET_TRAIL);
    }

    #[test]
    fn test_serde_revalidates() {
        let visual = VisualProperties::comet(RgbColor::ICE_BLUE, 10.0).unwrap();
        let json = serde_json::to_string(&visual).unwrap();
        assert!(json.contains("\"color\":[0.8,0.9,1.0]"));
        let back: VisualProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(back, visual);

        let bad_albedo = json.replace("\"albedo\":0.04", "\"albedo\":4.0");
        assert!(serde_json::from_str::<VisualProperties>(&bad_albedo).is_err());
        assert!(serde_json::from_str::<RgbColor>("[0.1, 2.0, 0.3]").is_err());
    }

    #[test]
    fn test_rejects_invalid_albedo_and_scale() {
        assert!(VisualProperties::planet(RgbColor::GRAY, 1.5, 1.0).is_err());
        assert!(matches!(
            VisualProperties::planet(RgbColor::GRAY, 0.5, 0.0),
            Err(BodyError::NonPositive {
                field: "render_scale_factor",
                ..
            })
        ));
    }
}
