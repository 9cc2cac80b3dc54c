//! Precession model: informational gain and coherence correction.
//!
//! Given the orbital parameters of one body and a set of coherence constants,
//! the model computes
//! - the informational gain factor `alpha = 1 + k * (e / a)`,
//! - the coherence-resistance factor `(1 + (rs / a)^2)^(-n)` when refined,
//! - the corrected value `reference * alpha * coherence_factor` when the body
//!   carries a baseline reference (e.g. a general-relativity precession).
//!
//! Every call is a pure evaluation. The only rejected input is a non-positive
//! semi-major axis; eccentricity and reference values are propagated as given.

mod simd;

#[cfg(test)]
mod proptest_precession;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{BodyCatalog, NamedBody};
use crate::coherence::{self, CoherenceConstants, Preset, DEFAULT_PRESET};

/// Orbital parameters of one body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitalParameters {
    /// Semi-major axis in AU
    pub a: f64,
    /// Eccentricity (dimensionless, conventionally 0 ≤ e < 1)
    pub e: f64,
    /// Baseline prediction corrected by the model (e.g. GR precession in arcsec/century)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<f64>,
}

impl OrbitalParameters {
    /// Parameters without a baseline reference.
    pub fn new(a: f64, e: f64) -> Self {
        Self {
            a,
            e,
            reference: None,
        }
    }

    /// Attach a baseline reference value.
    pub fn with_reference(mut self, reference: f64) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Eccentricity over semi-major axis.
    pub fn eccentricity_ratio(&self) -> f64 {
        self.e / self.a
    }
}

/// Output of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationResult {
    /// Informational gain factor
    pub alpha: f64,
    /// Coherence-resistance factor (exactly 1.0 when unrefined)
    pub coherence_factor: f64,
    /// `reference * alpha * coherence_factor`, absent without a reference
    pub corrected_value: Option<f64>,
    /// The reference the correction was applied to
    pub reference: Option<f64>,
}

impl CalculationResult {
    /// Reference scaled by alpha alone, ignoring the coherence factor.
    pub fn alpha_only_value(&self) -> Option<f64> {
        self.reference.map(|reference| reference * self.alpha)
    }

    /// Corrected value minus the reference.
    pub fn correction(&self) -> Option<f64> {
        Some(self.corrected_value? - self.reference?)
    }

    /// Corrected value as a percentage of the reference.
    pub fn convergence_percent(&self) -> Option<f64> {
        self.ratio().map(|ratio| ratio * 100.0)
    }

    /// Relative deviation from the reference in percent.
    pub fn deviation_percent(&self) -> Option<f64> {
        self.ratio().map(|ratio| (ratio - 1.0) * 100.0)
    }

    fn ratio(&self) -> Option<f64> {
        let reference = self.reference?;
        if reference == 0.0 {
            return None;
        }
        Some(self.corrected_value? / reference)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PrecessionError {
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// A failed entry of a batch, located by position and (when known) name.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("entry {index}{}: {source}", name_suffix(.name))]
pub struct BatchEntryError {
    pub index: usize,
    pub name: Option<String>,
    pub source: PrecessionError,
}

fn name_suffix(name: &Option<String>) -> String {
    name.as_ref()
        .map(|name| format!(" ({name})"))
        .unwrap_or_default()
}

/// A successfully evaluated named body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyEvaluation {
    pub name: String,
    pub params: OrbitalParameters,
    pub result: CalculationResult,
}

/// What to do with failed entries once a batch has been evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Fail the whole batch with the first error in input order.
    #[default]
    AbortOnFirstError,
    /// Drop failed entries, logging each one.
    SkipInvalid,
}

fn validate(params: &OrbitalParameters) -> Result<(), PrecessionError> {
    // Written as a positive check so NaN is rejected too
    if params.a > 0.0 {
        Ok(())
    } else {
        Err(PrecessionError::InvalidParameter {
            name: "a",
            value: params.a,
            reason: "semi-major axis must be positive",
        })
    }
}

fn finish(
    params: &OrbitalParameters,
    alpha: f64,
    constants: &CoherenceConstants,
    refined: bool,
) -> CalculationResult {
    let coherence_factor = if refined {
        coherence::coherence_factor(constants.rs, constants.n, params.a)
    } else {
        1.0
    };

    CalculationResult {
        alpha,
        coherence_factor,
        corrected_value: params
            .reference
            .map(|reference| reference * alpha * coherence_factor),
        reference: params.reference,
    }
}

/// Evaluate one body.
///
/// # Errors
/// [`PrecessionError::InvalidParameter`] when `a` is zero, negative or NaN.
pub fn compute(
    params: &OrbitalParameters,
    constants: &CoherenceConstants,
    refined: bool,
) -> Result<CalculationResult, PrecessionError> {
    validate(params)?;
    let alpha = coherence::alpha(constants.k, params.e, params.a);
    Ok(finish(params, alpha, constants, refined))
}

/// Evaluate a list of bodies, one outcome per input in input order.
///
/// Failed entries do not stop the batch; each carries its index.
pub fn compute_batch(
    params: &[OrbitalParameters],
    constants: &CoherenceConstants,
    refined: bool,
) -> Vec<Result<CalculationResult, BatchEntryError>> {
    let alphas = simd::alpha_lanes(params, constants.k);

    let outcomes: Vec<_> = params
        .iter()
        .zip(alphas)
        .enumerate()
        .map(|(index, (p, alpha))| {
            validate(p)
                .map(|()| finish(p, alpha, constants, refined))
                .map_err(|source| BatchEntryError {
                    index,
                    name: None,
                    source,
                })
        })
        .collect();

    debug!(
        entries = outcomes.len(),
        failed = outcomes.iter().filter(|o| o.is_err()).count(),
        refined,
        "evaluated precession batch"
    );
    outcomes
}

/// Evaluate named bodies; errors carry the body name as well as its index.
pub fn compute_named_batch(
    bodies: &[NamedBody],
    constants: &CoherenceConstants,
    refined: bool,
) -> Vec<Result<BodyEvaluation, BatchEntryError>> {
    let params: Vec<OrbitalParameters> = bodies.iter().map(|body| body.params).collect();

    compute_batch(&params, constants, refined)
        .into_iter()
        .zip(bodies)
        .map(|(outcome, body)| match outcome {
            Ok(result) => Ok(BodyEvaluation {
                name: body.name.clone(),
                params: body.params,
                result,
            }),
            Err(err) => Err(BatchEntryError {
                name: Some(body.name.clone()),
                ..err
            }),
        })
        .collect()
}

/// Multi-threaded variant of [`compute_named_batch`]. Output keeps input order.
#[cfg(feature = "parallel")]
pub fn compute_named_batch_par(
    bodies: &[NamedBody],
    constants: &CoherenceConstants,
    refined: bool,
) -> Vec<Result<BodyEvaluation, BatchEntryError>> {
    use rayon::prelude::*;

    bodies
        .par_iter()
        .enumerate()
        .map(|(index, body)| {
            compute(&body.params, constants, refined)
                .map(|result| BodyEvaluation {
                    name: body.name.clone(),
                    params: body.params,
                    result,
                })
                .map_err(|source| BatchEntryError {
                    index,
                    name: Some(body.name.clone()),
                    source,
                })
        })
        .collect()
}

/// Resolve batch outcomes according to `policy`.
///
/// Surviving entries keep their relative input order.
pub fn apply_policy<T>(
    outcomes: Vec<Result<T, BatchEntryError>>,
    policy: BatchPolicy,
) -> Result<Vec<T>, BatchEntryError> {
    match policy {
        BatchPolicy::AbortOnFirstError => outcomes.into_iter().collect(),
        BatchPolicy::SkipInvalid => Ok(outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!("Skipping {err}");
                    None
                }
            })
            .collect()),
    }
}

/// Coherence constants bound to a refinement choice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrecessionModel {
    pub constants: CoherenceConstants,
    pub refined: bool,
}

impl Default for PrecessionModel {
    fn default() -> Self {
        Self::from_preset(DEFAULT_PRESET)
    }
}

impl PrecessionModel {
    pub fn new(constants: CoherenceConstants, refined: bool) -> Self {
        Self { constants, refined }
    }

    /// Model using a preset's constants and default refinement.
    pub fn from_preset(preset: &Preset) -> Self {
        Self::new(preset.constants, preset.refined)
    }

    /// Override the refinement flag.
    pub fn with_refinement(mut self, refined: bool) -> Self {
        self.refined = refined;
        self
    }

    pub fn compute(
        &self,
        params: &OrbitalParameters,
    ) -> Result<CalculationResult, PrecessionError> {
        compute(params, &self.constants, self.refined)
    }

    pub fn compute_batch(
        &self,
        params: &[OrbitalParameters],
    ) -> Vec<Result<CalculationResult, BatchEntryError>> {
        compute_batch(params, &self.constants, self.refined)
    }

    /// Evaluate every body of a catalog in catalog order.
    pub fn evaluate_catalog(
        &self,
        catalog: &BodyCatalog,
    ) -> Vec<Result<BodyEvaluation, BatchEntryError>> {
        #[cfg(feature = "parallel")]
        let outcomes = compute_named_batch_par(&catalog.bodies, &self.constants, self.refined);
        #[cfg(not(feature = "parallel"))]
        let outcomes = compute_named_batch(&catalog.bodies, &self.constants, self.refined);

        outcomes
    }
}
