//! Schwarzschild perihelion advance used as a baseline for strong-field orbits.
//!
//! For a test body around a point mass the general-relativity advance per
//! orbit is
//!
//! ```text
//! Δφ = 6πGM / (c² a (1 − e²))
//! ```
//!
//! The coherence model then scales this baseline by `alpha` and the
//! coherence factor exactly as it does for the solar-system references.

use std::f64::consts::PI;

use crate::coherence::CoherenceConstants;
use crate::precession::{self, CalculationResult, OrbitalParameters, PrecessionError};
use crate::types::{au_to_meters, solar_masses_to_kg, C, G, RAD_TO_ARCMIN};

/// A star on a bound orbit around a central mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarOrbit {
    pub name: &'static str,
    /// Central mass in solar masses
    pub central_mass_msun: f64,
    /// Semi-major axis in AU
    pub a: f64,
    /// Eccentricity (0 ≤ e < 1)
    pub e: f64,
}

/// Star S2 around Sagittarius A*.
pub static S2_SGR_A: StarOrbit = StarOrbit {
    name: "S2 (Sgr A*)",
    central_mass_msun: 4.1e6,
    a: 1031.0,
    e: 0.8839,
};

/// GR baseline and corrected advance for one star, in arcminutes per orbit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarPrecession {
    pub gr_arcmin: f64,
    pub corrected_arcmin: f64,
    /// Model output with the GR advance (radians) as reference
    pub result: CalculationResult,
}

impl StarPrecession {
    /// Relative difference between corrected and GR advance, in percent.
    pub fn deviation_percent(&self) -> f64 {
        (self.result.alpha * self.result.coherence_factor - 1.0) * 100.0
    }
}

/// GR perihelion advance per orbit in radians.
///
/// # Errors
/// [`PrecessionError::InvalidParameter`] when `a ≤ 0` or the orbit is not
/// closed (`e` outside `[0, 1)`).
pub fn schwarzschild_precession(
    central_mass_msun: f64,
    a_au: f64,
    e: f64,
) -> Result<f64, PrecessionError> {
    if a_au.is_nan() || a_au <= 0.0 {
        return Err(PrecessionError::InvalidParameter {
            name: "a",
            value: a_au,
            reason: "semi-major axis must be positive",
        });
    }
    if !(0.0..1.0).contains(&e) {
        return Err(PrecessionError::InvalidParameter {
            name: "e",
            value: e,
            reason: "orbit must be closed (0 <= e < 1)",
        });
    }

    let mass = solar_masses_to_kg(central_mass_msun);
    let a = au_to_meters(a_au);
    Ok((6.0 * PI * G * mass) / (C.powi(2) * a * (1.0 - e.powi(2))))
}

/// Evaluate the GR baseline of `star` and its coherence-corrected counterpart.
pub fn evaluate_star(
    star: &StarOrbit,
    constants: &CoherenceConstants,
    refined: bool,
) -> Result<StarPrecession, PrecessionError> {
    let gr_rad = schwarzschild_precession(star.central_mass_msun, star.a, star.e)?;
    let params = OrbitalParameters::new(star.a, star.e).with_reference(gr_rad);
    let result = precession::compute(&params, constants, refined)?;

    Ok(StarPrecession {
        gr_arcmin: gr_rad * RAD_TO_ARCMIN,
        corrected_arcmin: result.corrected_value.unwrap_or(gr_rad) * RAD_TO_ARCMIN,
        result,
    })
}
