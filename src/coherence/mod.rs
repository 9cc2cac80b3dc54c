//! Coherence constants and the two scalar kernels of the model.
//!
//! The informational gain factor is `alpha = 1 + k * (e / a)` and the
//! optional coherence-resistance term is `(1 + (rs / a)^2)^(-n)`.
//! Both kernels are plain arithmetic on `f64`; argument validation is the
//! caller's job (see [`crate::precession::compute`]).

pub mod presets;

use serde::{Deserialize, Serialize};

pub use presets::{Preset, PresetError, DEFAULT_PRESET, PRESETS};

/// Constants of one calculation run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoherenceConstants {
    /// Coupling constant (dimensionless).
    pub k: f64,
    /// Harmonic coherence exponent.
    pub n: f64,
    /// Informational coherence radius (AU).
    pub rs: f64,
}

impl CoherenceConstants {
    /// Create a constant set.
    pub const fn new(k: f64, n: f64, rs: f64) -> Self {
        Self { k, n, rs }
    }

    /// Constants with only the coupling term; the coherence factor is 1 even when refined.
    pub const fn coupling_only(k: f64) -> Self {
        Self { k, n: 0.0, rs: 0.0 }
    }
}

/// Informational gain factor `1 + k * (e / a)`.
#[inline]
pub fn alpha(k: f64, e: f64, a: f64) -> f64 {
    1.0 + k * (e / a)
}

/// Coherence-resistance factor `(1 + (rs / a)^2)^(-n)`.
#[inline]
pub fn coherence_factor(rs: f64, n: f64, a: f64) -> f64 {
    let epsilon = 1.0 + (rs / a).powi(2);
    epsilon.powf(-n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_alpha_identity_for_circular_orbit() {
        assert_eq!(alpha(0.0881, 0.0, 0.387), 1.0);
        assert_eq!(alpha(123.0, 0.0, 1e-9), 1.0);
    }

    #[test]
    fn test_alpha_mercury() {
        let value = alpha(0.0881, 0.206, 0.387);
        assert_relative_eq!(value, 1.046896, epsilon = 1e-6);
    }

    #[test]
    fn test_coherence_factor_without_radius_is_one() {
        assert_eq!(coherence_factor(0.0, 12.0, 0.723), 1.0);
    }

    #[test]
    fn test_coherence_factor_without_exponent_is_one() {
        assert_eq!(coherence_factor(0.02391625, 0.0, 0.723), 1.0);
    }

    #[test]
    fn test_coherence_factor_venus() {
        // epsilon = 1 + (0.02391625 / 0.723)^2 ≈ 1.00109424
        let value = coherence_factor(0.02391625, 12.0, 0.723);
        assert_relative_eq!(value, 0.98695, epsilon = 1e-4);
        assert!(value < 1.0);
    }

    #[test]
    fn test_coupling_only_constants() {
        let constants = CoherenceConstants::coupling_only(0.088);
        assert_eq!(constants.n, 0.0);
        assert_eq!(constants.rs, 0.0);
    }
}
