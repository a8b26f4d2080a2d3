//! Newton–Raphson solvers for the elliptic and hyperbolic Kepler equations.
//!
//! Both solvers run a bounded number of iterations. Hitting the cap without
//! meeting the tolerance is not an error: the last estimate is returned and
//! [`KeplerSolution::converged`] is false. Accuracy degrades for
//! eccentricities very close to 1, where the Newton derivative approaches zero.

/// Iteration cap for the elliptic solver
pub const ELLIPTIC_MAX_ITERATIONS: usize = 10;

/// Iteration cap for the hyperbolic solver
pub const HYPERBOLIC_MAX_ITERATIONS: usize = 20;

/// Step size below which the iteration is considered converged
pub const ANOMALY_TOLERANCE: f64 = 1e-10;

/// Result of a Kepler equation solve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E (elliptic) or hyperbolic anomaly H, radians
    pub anomaly: f64,
    /// Number of Newton steps taken
    pub iterations: usize,
    /// Whether the last step was below [`ANOMALY_TOLERANCE`]
    pub converged: bool,
}

/// Solve `M = E - e·sin(E)` for the eccentric anomaly E.
///
/// Starts from `E₀ = M`. The mean anomaly is not wrapped into [0, 2π).
pub fn solve_elliptic_anomaly(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    newton_raphson(
        mean_anomaly,
        ELLIPTIC_MAX_ITERATIONS,
        |e_anom| e_anom - eccentricity * e_anom.sin() - mean_anomaly,
        |e_anom| 1.0 - eccentricity * e_anom.cos(),
    )
}

/// Solve `M = e·sinh(H) - H` for the hyperbolic anomaly H.
///
/// Seeded with `H₀ = sign(M)·ln(2|M|/e + 1.8)`, where `sign(0) = 0`.
pub fn solve_hyperbolic_anomaly(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    let sign = if mean_anomaly > 0.0 {
        1.0
    } else if mean_anomaly < 0.0 {
        -1.0
    } else {
        0.0
    };
    let initial = sign * (2.0 * mean_anomaly.abs() / eccentricity + 1.8).ln();

    newton_raphson(
        initial,
        HYPERBOLIC_MAX_ITERATIONS,
        |h| eccentricity * h.sinh() - h - mean_anomaly,
        |h| eccentricity * h.cosh() - 1.0,
    )
}

fn newton_raphson(
    initial: f64,
    max_iterations: usize,
    f: impl Fn(f64) -> f64,
    f_prime: impl Fn(f64) -> f64,
) -> KeplerSolution {
    let mut anomaly = initial;
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..max_iterations {
        let slope = f_prime(anomaly);
        // Flat derivative only happens at the parabolic limit with zero anomaly
        if slope == 0.0 {
            converged = f(anomaly) == 0.0;
            break;
        }

        let delta = f(anomaly) / slope;
        anomaly -= delta;
        iterations += 1;

        if delta.abs() < ANOMALY_TOLERANCE {
            converged = true;
            break;
        }
    }

    if !converged {
        log::trace!(
            "Kepler solve stopped at iteration cap: anomaly={anomaly}, iterations={iterations}"
        );
    }

    KeplerSolution {
        anomaly,
        iterations,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_circular_orbit_anomaly_equals_mean() {
        let solution = solve_elliptic_anomaly(1.234, 0.0);
        assert!(solution.converged);
        assert_relative_eq!(solution.anomaly, 1.234, epsilon = 1e-12);
    }

    #[test]
    fn test_elliptic_solution_satisfies_kepler_equation() {
        for &e in &[0.0167, 0.2056, 0.5, 0.8502] {
            for &m in &[0.1, 1.0, PI / 2.0, 3.0, -2.0] {
                let solution = solve_elliptic_anomaly(m, e);
                let residual = solution.anomaly - e * solution.anomaly.sin() - m;
                assert!(
                    residual.abs() < 1e-9,
                    "e={e}, M={m}: residual {residual}"
                );
                assert!(solution.iterations <= ELLIPTIC_MAX_ITERATIONS);
            }
        }
    }

    #[test]
    fn test_elliptic_unwrapped_mean_anomaly() {
        // Many revolutions past epoch: E - M stays bounded by e
        let m = 2000.0 * PI + 0.7;
        let solution = solve_elliptic_anomaly(m, 0.1);
        assert!((solution.anomaly - m).abs() <= 0.1 + 1e-9);
    }

    #[test]
    fn test_hyperbolic_solution_satisfies_kepler_equation() {
        for &e in &[1.201, 3.3569, 6.14] {
            for &m in &[0.01, 0.5, 5.0, 100.0, -3.0] {
                let solution = solve_hyperbolic_anomaly(m, e);
                let residual = e * solution.anomaly.sinh() - solution.anomaly - m;
                assert!(
                    residual.abs() < 1e-8 * m.abs().max(1.0),
                    "e={e}, M={m}: residual {residual}"
                );
                assert!(solution.converged);
            }
        }
    }

    #[test]
    fn test_hyperbolic_zero_mean_anomaly_is_periapsis() {
        let solution = solve_hyperbolic_anomaly(0.0, 3.3569);
        assert!(solution.converged);
        assert_eq!(solution.anomaly, 0.0);
    }

    #[test]
    fn test_hyperbolic_odd_symmetry() {
        let forward = solve_hyperbolic_anomaly(2.5, 1.5);
        let backward = solve_hyperbolic_anomaly(-2.5, 1.5);
        assert_relative_eq!(forward.anomaly, -backward.anomaly, epsilon = 1e-10);
    }

    #[test]
    fn test_parabolic_limit_at_periapsis_stays_finite() {
        // e == 1 and M == 0 gives a zero derivative at the seed
        let solution = solve_hyperbolic_anomaly(0.0, 1.0);
        assert!(solution.anomaly.is_finite());
        assert_eq!(solution.anomaly, 0.0);
    }

    #[test]
    fn test_iteration_cap_is_respected() {
        // Near-parabolic ellipse with a tiny mean anomaly is the slow case
        let solution = solve_elliptic_anomaly(1e-3, 0.9999999);
        assert!(solution.iterations <= ELLIPTIC_MAX_ITERATIONS);
        assert!(solution.anomaly.is_finite());
    }
}
