//! Galactic rotation curves: Newtonian disk vs coherence gradient.
//!
//! The visible mass is an exponential disk. The coherence model boosts the
//! Newtonian circular velocity by `sqrt(1 + k r / Rd)` (the alpha kernel
//! with the radius in place of the eccentricity and the disk scale radius
//! in place of the semi-major axis) and by the square root of the coherence
//! factor, which is negligible at galactic radii.

use crate::coherence::{self, CoherenceConstants};
use crate::types::{kpc_to_meters, solar_masses_to_kg, G, M_PER_S_TO_KM_PER_S};

/// Smallest radius used in the coherence factor, avoiding `rs / 0`.
const MIN_COHERENCE_RADIUS_KPC: f64 = 1e-6;

/// Asymptotic speed of the mock observed curve (km/s).
const MOCK_FLAT_VELOCITY: f64 = 220.0;

/// Turnover radius of the mock observed curve (kpc).
const MOCK_TURNOVER_KPC: f64 = 2.0;

/// Exponential stellar disk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialDisk {
    /// Total disk mass in solar masses
    pub mass_msun: f64,
    /// Scale radius Rd in kpc
    pub scale_radius_kpc: f64,
}

impl Default for ExponentialDisk {
    /// Milky-Way-like disk.
    fn default() -> Self {
        Self {
            mass_msun: 5.0e10,
            scale_radius_kpc: 3.0,
        }
    }
}

impl ExponentialDisk {
    /// Mass enclosed within `r_kpc`: `M (1 − (1 + r/Rd) e^(−r/Rd))`.
    pub fn enclosed_mass(&self, r_kpc: f64) -> f64 {
        let x = r_kpc / self.scale_radius_kpc;
        self.mass_msun * (1.0 - (1.0 + x) * (-x).exp())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GalaxyError {
    #[error("rotation curve needs at least 2 samples, got {0}")]
    TooFewSamples(usize),

    #[error("invalid radius range [{start}, {end}] kpc (need 0 < start < end)")]
    InvalidRange { start: f64, end: f64 },

    #[error("invalid disk scale radius {0} kpc (must be positive)")]
    InvalidScaleRadius(f64),
}

/// One point of a rotation curve. Velocities in km/s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationSample {
    pub r_kpc: f64,
    pub enclosed_mass_msun: f64,
    pub newtonian: f64,
    pub coherent: f64,
    pub observed_mock: f64,
}

/// Circular velocity (km/s) around an enclosed mass.
pub fn newtonian_velocity(r_kpc: f64, enclosed_mass_msun: f64) -> f64 {
    let r = kpc_to_meters(r_kpc);
    (G * solar_masses_to_kg(enclosed_mass_msun) / r).sqrt() / M_PER_S_TO_KM_PER_S
}

/// Informational gradient `1 + k (r / Rd)`.
pub fn coherence_gradient(r_kpc: f64, scale_radius_kpc: f64, k: f64) -> f64 {
    coherence::alpha(k, r_kpc, scale_radius_kpc)
}

/// Coherence factor at galactic radius `r_kpc`.
pub fn galactic_coherence_factor(r_kpc: f64, constants: &CoherenceConstants) -> f64 {
    coherence::coherence_factor(
        constants.rs,
        constants.n,
        r_kpc.max(MIN_COHERENCE_RADIUS_KPC),
    )
}

/// Circular velocity (km/s) with the coherence gradient applied.
pub fn coherent_velocity(
    r_kpc: f64,
    enclosed_mass_msun: f64,
    disk: &ExponentialDisk,
    constants: &CoherenceConstants,
) -> f64 {
    let v_newton = newtonian_velocity(r_kpc, enclosed_mass_msun);
    let boost = coherence_gradient(r_kpc, disk.scale_radius_kpc, constants.k).sqrt();
    let resistance = galactic_coherence_factor(r_kpc, constants).sqrt();
    v_newton * boost * resistance
}

/// Flat mock "observed" curve `220 (1 − e^(−r/2))` km/s.
pub fn mock_observed_velocity(r_kpc: f64) -> f64 {
    MOCK_FLAT_VELOCITY * (1.0 - (-r_kpc / MOCK_TURNOVER_KPC).exp())
}

/// `count` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sample the rotation curve of `disk` between `r_min` and `r_max` kpc.
pub fn rotation_curve(
    disk: &ExponentialDisk,
    constants: &CoherenceConstants,
    r_min_kpc: f64,
    r_max_kpc: f64,
    samples: usize,
) -> Result<Vec<RotationSample>, GalaxyError> {
    if samples < 2 {
        return Err(GalaxyError::TooFewSamples(samples));
    }
    if !(r_min_kpc > 0.0 && r_max_kpc > r_min_kpc) {
        return Err(GalaxyError::InvalidRange {
            start: r_min_kpc,
            end: r_max_kpc,
        });
    }
    if disk.scale_radius_kpc.is_nan() || disk.scale_radius_kpc <= 0.0 {
        return Err(GalaxyError::InvalidScaleRadius(disk.scale_radius_kpc));
    }

    Ok(linspace(r_min_kpc, r_max_kpc, samples)
        .into_iter()
        .map(|r_kpc| {
            let mass = disk.enclosed_mass(r_kpc);
            RotationSample {
                r_kpc,
                enclosed_mass_msun: mass,
                newtonian: newtonian_velocity(r_kpc, mass),
                coherent: coherent_velocity(r_kpc, mass, disk, constants),
                observed_mock: mock_observed_velocity(r_kpc),
            }
        })
        .collect())
}
