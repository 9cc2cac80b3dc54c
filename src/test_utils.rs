//! Test utilities for precession model tests.
//!
//! Provides fixtures for the bodies of the published calculations and
//! assertions that compare against their fixed-precision printouts.

use crate::coherence::CoherenceConstants;
use crate::precession::OrbitalParameters;

/// Fixtures for creating test bodies.
pub mod fixtures {
    use super::*;
    use crate::coherence::presets::MASTER;

    /// Mercury with its GR perihelion precession (arcsec/century).
    pub fn mercury() -> OrbitalParameters {
        OrbitalParameters::new(0.387, 0.206).with_reference(42.98)
    }

    /// Venus with its GR perihelion precession (arcsec/century).
    pub fn venus() -> OrbitalParameters {
        OrbitalParameters::new(0.723, 0.0068).with_reference(8.6247)
    }

    /// Earth with its GR perihelion precession (arcsec/century).
    pub fn earth() -> OrbitalParameters {
        OrbitalParameters::new(1.000, 0.0167).with_reference(3.84)
    }

    /// Mars with its GR perihelion precession (arcsec/century).
    pub fn mars() -> OrbitalParameters {
        OrbitalParameters::new(1.523679, 0.0934).with_reference(1.35)
    }

    /// Asteroid 1566 Icarus with its GR perihelion precession (arcsec/century).
    pub fn icarus() -> OrbitalParameters {
        OrbitalParameters::new(1.077, 0.827).with_reference(10.05)
    }

    /// Hot Jupiter WASP-12b, no reference value.
    pub fn wasp_12b() -> OrbitalParameters {
        OrbitalParameters::new(0.0229, 0.0486)
    }

    /// Constants of the refined preset.
    pub fn master_constants() -> CoherenceConstants {
        MASTER.constants
    }
}

/// Assertions for comparing against printed values.
pub mod assertions {
    /// Assert that `value` prints as `expected` with `decimals` fractional digits.
    ///
    /// # Panics
    /// Panics if the rounded representation differs.
    pub fn assert_rounds_to(value: f64, expected: &str, decimals: usize) {
        let printed = format!("{value:.decimals$}");
        assert_eq!(
            printed, expected,
            "{value} rounds to {printed} at {decimals} decimals, expected {expected}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixtures_carry_references() {
        for params in [
            fixtures::mercury(),
            fixtures::venus(),
            fixtures::earth(),
            fixtures::mars(),
            fixtures::icarus(),
        ] {
            assert!(params.reference.is_some());
            assert!(params.a > 0.0);
        }
        assert_eq!(fixtures::wasp_12b().reference, None);
    }

    #[test]
    fn test_mercury_eccentricity_ratio() {
        assert_relative_eq!(fixtures::mercury().eccentricity_ratio(), 0.5322997, epsilon = 1e-7);
    }

    #[test]
    fn test_assert_rounds_to_accepts_printout() {
        assertions::assert_rounds_to(8.631838340912864, "8.6318", 4);
    }

    #[test]
    #[should_panic]
    fn test_assert_rounds_to_rejects_mismatch() {
        assertions::assert_rounds_to(8.631838340912864, "8.6319", 4);
    }
}
