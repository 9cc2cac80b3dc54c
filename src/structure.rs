//! Large-scale structure toy model (Hercules–Corona Borealis Great Wall).
//!
//! A filamentary "coherence basin" is sampled on a square grid; the force
//! organising matter along the filament is taken to be the gradient of that
//! field. Structure growth is compared against the hierarchical ΛCDM scaling.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::galaxy::linspace;

/// Redshift of the Hercules–Corona Borealis Great Wall.
pub const HER_CRB_REDSHIFT: f64 = 2.0;

/// Amplitude of the filament's sinusoidal spine.
const SPINE_AMPLITUDE: f64 = 0.2;

/// Width parameter of the filament profile.
const FILAMENT_WIDTH: f64 = 0.05;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StructureError {
    #[error("field resolution must be at least 2, got {0}")]
    Resolution(usize),

    #[error("field extent must be positive, got {0}")]
    Extent(f64),

    #[error("invalid noise distribution: {0}")]
    Noise(String),
}

/// Seeded Gaussian background noise, `amplitude * N(0, sigma)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldNoise {
    pub amplitude: f64,
    pub sigma: f64,
    pub seed: u64,
}

impl Default for FieldNoise {
    fn default() -> Self {
        Self {
            amplitude: 0.1,
            sigma: 0.1,
            seed: 42,
        }
    }
}

/// Filament profile `exp(−(y − 0.2 sin 2x)² / 0.05)`.
pub fn filament(x: f64, y: f64) -> f64 {
    let spine = SPINE_AMPLITUDE * (2.0 * x).sin();
    (-(y - spine).powi(2) / FILAMENT_WIDTH).exp()
}

/// Coherence field on a square grid over `[-extent, extent]²`.
///
/// Values are row-major: row index follows `y`, column index follows `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct CoherenceField {
    pub resolution: usize,
    pub extent: f64,
    pub values: Vec<f64>,
}

impl CoherenceField {
    pub fn generate(
        resolution: usize,
        extent: f64,
        noise: Option<FieldNoise>,
    ) -> Result<Self, StructureError> {
        if resolution < 2 {
            return Err(StructureError::Resolution(resolution));
        }
        if extent.is_nan() || extent <= 0.0 {
            return Err(StructureError::Extent(extent));
        }

        let axis = linspace(-extent, extent, resolution);
        let mut values: Vec<f64> = axis
            .iter()
            .flat_map(|&y| axis.iter().map(move |&x| filament(x, y)))
            .collect();

        if let Some(noise) = noise {
            // Normal::new only rejects non-finite deviations
            if !noise.sigma.is_finite() || noise.sigma < 0.0 {
                return Err(StructureError::Noise(format!(
                    "standard deviation must be finite and non-negative, got {}",
                    noise.sigma
                )));
            }
            let normal = Normal::new(0.0, noise.sigma)
                .map_err(|err| StructureError::Noise(err.to_string()))?;
            let mut rng = StdRng::seed_from_u64(noise.seed);
            for value in &mut values {
                *value += noise.amplitude * normal.sample(&mut rng);
            }
        }

        Ok(Self {
            resolution,
            extent,
            values,
        })
    }

    /// Gradient magnitude per cell, in field units per grid step.
    pub fn gradient_magnitude(&self) -> Vec<f64> {
        let (dy, dx) = grid_gradient(&self.values, self.resolution);
        dy.iter()
            .zip(&dx)
            .map(|(gy, gx)| (gx * gx + gy * gy).sqrt())
            .collect()
    }

    pub fn mean_gradient_magnitude(&self) -> f64 {
        let magnitudes = self.gradient_magnitude();
        magnitudes.iter().sum::<f64>() / magnitudes.len() as f64
    }
}

/// Derivative along one line of `len` samples read through `get`.
///
/// Central differences inside, one-sided differences at both ends.
fn line_derivative(len: usize, get: impl Fn(usize) -> f64) -> impl Iterator<Item = f64> {
    (0..len).map(move |i| {
        if i == 0 {
            get(1) - get(0)
        } else if i == len - 1 {
            get(i) - get(i - 1)
        } else {
            (get(i + 1) - get(i - 1)) / 2.0
        }
    })
}

/// Row (`y`) and column (`x`) derivatives of a square row-major grid.
fn grid_gradient(values: &[f64], resolution: usize) -> (Vec<f64>, Vec<f64>) {
    let n = resolution;
    let mut dy = vec![0.0; values.len()];
    let mut dx = vec![0.0; values.len()];

    for row in 0..n {
        for (col, d) in line_derivative(n, |c| values[row * n + c]).enumerate() {
            dx[row * n + col] = d;
        }
    }
    for col in 0..n {
        for (row, d) in line_derivative(n, |r| values[r * n + col]).enumerate() {
            dy[row * n + col] = d;
        }
    }

    (dy, dx)
}

/// Normalised structure size under hierarchical growth, `1 / (1 + z)`.
pub fn lcdm_structure_size(z: f64) -> f64 {
    1.0 / (1.0 + z)
}

/// Normalised structure size with early coherence stabilisation.
pub fn coherent_structure_size(z: f64) -> f64 {
    0.8 * (-0.05 * z).exp() + 0.2
}

/// One redshift sample of the two growth models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthSample {
    pub z: f64,
    pub lcdm: f64,
    pub coherent: f64,
}

/// Both growth curves from `z = 0` to `z_max`.
pub fn growth_curves(z_max: f64, samples: usize) -> Vec<GrowthSample> {
    linspace(0.0, z_max, samples)
        .into_iter()
        .map(|z| GrowthSample {
            z,
            lcdm: lcdm_structure_size(z),
            coherent: coherent_structure_size(z),
        })
        .collect()
}
