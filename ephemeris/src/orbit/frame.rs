//! Rotation from the orbital (perifocal) plane into the reference ecliptic frame.

use nalgebra::Matrix3;

use crate::vector::Vector3;

/// Precomputed `R_z(Ω)·R_x(i)·R_z(ω)` for one set of orbital angles.
///
/// The in-plane x axis points at periapsis and z is the orbit normal, so
/// only the first two columns of the matrix are ever needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticRotation {
    cos_w: f64,
    sin_w: f64,
    cos_o: f64,
    sin_o: f64,
    cos_i: f64,
    sin_i: f64,
}

impl EclipticRotation {
    /// Build the rotation for argument of periapsis `ω`, inclination `i` and
    /// longitude of ascending node `Ω`, all in radians.
    pub fn new(argument_of_periapsis: f64, inclination: f64, longitude_of_node: f64) -> Self {
        let (sin_w, cos_w) = argument_of_periapsis.sin_cos();
        let (sin_i, cos_i) = inclination.sin_cos();
        let (sin_o, cos_o) = longitude_of_node.sin_cos();
        Self {
            cos_w,
            sin_w,
            cos_o,
            sin_o,
            cos_i,
            sin_i,
        }
    }

    /// Rotate the in-plane vector `(x, y, 0)` into the ecliptic frame
    pub fn rotate(&self, x: f64, y: f64) -> Vector3 {
        let Self {
            cos_w,
            sin_w,
            cos_o,
            sin_o,
            cos_i,
            sin_i,
        } = *self;

        Vector3::new(
            x * (cos_w * cos_o - sin_w * sin_o * cos_i)
                - y * (sin_w * cos_o + cos_w * sin_o * cos_i),
            x * (cos_w * sin_o + sin_w * cos_o * cos_i)
                + y * (cos_w * cos_o * cos_i - sin_w * sin_o),
            x * (sin_w * sin_i) + y * (cos_w * sin_i),
        )
    }

    /// Full 3×3 rotation matrix, for consumers working in nalgebra types
    pub fn matrix(&self) -> Matrix3<f64> {
        let Self {
            cos_w,
            sin_w,
            cos_o,
            sin_o,
            cos_i,
            sin_i,
        } = *self;

        Matrix3::new(
            cos_w * cos_o - sin_w * sin_o * cos_i,
            -(sin_w * cos_o + cos_w * sin_o * cos_i),
            sin_o * sin_i,
            cos_w * sin_o + sin_w * cos_o * cos_i,
            cos_w * cos_o * cos_i - sin_w * sin_o,
            -cos_o * sin_i,
            sin_w * sin_i,
            cos_w * sin_i,
            cos_i,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Rotation3, Vector3 as NVector3};

    #[test]
    fn test_zero_angles_is_identity() {
        let rotation = EclipticRotation::new(0.0, 0.0, 0.0);
        assert_eq!(rotation.rotate(3.5, -7.25), Vector3::new(3.5, -7.25, 0.0));
        assert_relative_eq!(rotation.matrix(), Matrix3::identity());
    }

    #[test]
    fn test_matches_composed_axis_rotations() {
        let (w, i, o) = (0.9, 0.4, 2.1);
        let composed = Rotation3::from_axis_angle(&NVector3::z_axis(), o)
            * Rotation3::from_axis_angle(&NVector3::x_axis(), i)
            * Rotation3::from_axis_angle(&NVector3::z_axis(), w);

        let rotation = EclipticRotation::new(w, i, o);
        assert_relative_eq!(rotation.matrix(), *composed.matrix(), epsilon = 1e-14);

        let rotated: NVector3<f64> = rotation.rotate(1.5, -0.5).into();
        let expected = composed * NVector3::new(1.5, -0.5, 0.0);
        assert_relative_eq!(rotated, expected, epsilon = 1e-14);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let rotation = EclipticRotation::new(3.64, 0.77, 5.38);
        let v = rotation.rotate(4.0, 3.0);
        assert_relative_eq!(v.magnitude(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inclination_lifts_out_of_plane() {
        // 90° inclination with node on x: the in-plane y axis maps to +z
        let rotation = EclipticRotation::new(0.0, std::f64::consts::FRAC_PI_2, 0.0);
        let v = rotation.rotate(0.0, 1.0);
        assert_relative_eq!(v.z, 1.0, epsilon = 1e-15);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-15);
    }
}
