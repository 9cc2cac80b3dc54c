//! Property-based tests for the precession model using proptest.
//!
//! These tests verify the closed-form invariants of the model across a wide
//! range of orbital parameters and constants.

use proptest::prelude::*;

use super::{compute, compute_batch, OrbitalParameters};
use crate::coherence::CoherenceConstants;
use crate::test_utils::fixtures;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// alpha is exactly `1 + k * (e / a)` in double precision.
    #[test]
    fn prop_alpha_matches_formula(
        a in 1e-4f64..2000.0,
        e in -0.5f64..1.5,
        k in 0.0f64..1.0,
    ) {
        let constants = CoherenceConstants::coupling_only(k);
        let result = compute(&OrbitalParameters::new(a, e), &constants, false).unwrap();
        prop_assert_eq!(result.alpha, 1.0 + k * (e / a));
    }

    /// The refined factor is exactly `(1 + (rs / a)^2)^(-n)`.
    #[test]
    fn prop_coherence_factor_matches_formula(
        a in 1e-3f64..2000.0,
        rs in 0.0f64..1.0,
        n in 0.0f64..24.0,
    ) {
        let constants = CoherenceConstants::new(0.0881, n, rs);
        let result = compute(&OrbitalParameters::new(a, 0.1), &constants, true).unwrap();
        let expected = (1.0 + (rs / a).powi(2)).powf(-n);
        prop_assert_eq!(result.coherence_factor, expected);
    }

    /// For n > 0 the factor shrinks as rs/a grows and stays within (0, 1].
    #[test]
    fn prop_coherence_factor_decreases_with_ratio(
        a in 0.01f64..10.0,
        rs in 1e-4f64..1.0,
        n in 0.5f64..24.0,
        scale in 1.01f64..10.0,
    ) {
        let constants = CoherenceConstants::new(0.0881, n, rs);
        let near = compute(&OrbitalParameters::new(a / scale, 0.1), &constants, true).unwrap();
        let far = compute(&OrbitalParameters::new(a, 0.1), &constants, true).unwrap();

        prop_assert!(far.coherence_factor <= 1.0);
        prop_assert!(near.coherence_factor >= 0.0);
        prop_assert!(
            near.coherence_factor <= far.coherence_factor,
            "rs/a larger at a={} should not raise the factor ({} > {})",
            a / scale, near.coherence_factor, far.coherence_factor
        );
    }

    /// The factor tends to 1 when rs/a tends to 0.
    #[test]
    fn prop_coherence_factor_vanishes_far_away(
        rs in 0.0f64..0.05,
        n in 0.0f64..24.0,
    ) {
        let constants = CoherenceConstants::new(0.0881, n, rs);
        let result = compute(&OrbitalParameters::new(1e6, 0.1), &constants, true).unwrap();
        prop_assert!((result.coherence_factor - 1.0).abs() < 1e-12);
    }

    /// Circular orbits have no informational gain.
    #[test]
    fn prop_circular_orbit_alpha_is_one(
        a in 1e-4f64..2000.0,
        k in -10.0f64..10.0,
    ) {
        let constants = CoherenceConstants::coupling_only(k);
        let result = compute(&OrbitalParameters::new(a, 0.0), &constants, false).unwrap();
        prop_assert_eq!(result.alpha, 1.0);
    }

    /// Disabling the refinement is a true no-op on the coherence term.
    #[test]
    fn prop_unrefined_factor_is_one(
        a in 1e-4f64..2000.0,
        rs in 0.0f64..10.0,
        n in 0.0f64..24.0,
    ) {
        let constants = CoherenceConstants::new(0.0881, n, rs);
        let result = compute(&OrbitalParameters::new(a, 0.3), &constants, false).unwrap();
        prop_assert_eq!(result.coherence_factor, 1.0);
    }

    /// Corrected value is present exactly when a reference is.
    #[test]
    fn prop_corrected_value_follows_reference(
        a in 1e-3f64..100.0,
        e in 0.0f64..1.0,
        reference in proptest::option::of(-100.0f64..100.0),
    ) {
        let params = OrbitalParameters { a, e, reference };
        let result = compute(&params, &fixtures::master_constants(), true).unwrap();

        match reference {
            Some(r) => prop_assert_eq!(
                result.corrected_value,
                Some(r * result.alpha * result.coherence_factor)
            ),
            None => prop_assert_eq!(result.corrected_value, None),
        }
    }

    /// Non-positive semi-major axes are always rejected.
    #[test]
    fn prop_non_positive_axis_rejected(
        a in -1000.0f64..=0.0,
        e in 0.0f64..1.0,
    ) {
        let outcome = compute(&OrbitalParameters::new(a, e), &fixtures::master_constants(), true);
        prop_assert!(outcome.is_err());
    }

    /// Batch output corresponds entry by entry to single evaluations.
    #[test]
    fn prop_batch_matches_single_evaluations(
        entries in proptest::collection::vec((-1.0f64..50.0, 0.0f64..1.0), 0..24),
        refined in any::<bool>(),
    ) {
        let params: Vec<OrbitalParameters> = entries
            .iter()
            .map(|&(a, e)| OrbitalParameters::new(a, e).with_reference(10.0))
            .collect();
        let constants = fixtures::master_constants();
        let outcomes = compute_batch(&params, &constants, refined);

        prop_assert_eq!(outcomes.len(), params.len());
        for (index, (p, outcome)) in params.iter().zip(&outcomes).enumerate() {
            match (compute(p, &constants, refined), outcome) {
                (Ok(single), Ok(batched)) => prop_assert_eq!(&single, batched),
                (Err(single), Err(batched)) => {
                    prop_assert_eq!(batched.index, index);
                    prop_assert_eq!(&single, &batched.source);
                }
                (single, batched) => prop_assert!(
                    false,
                    "entry {} disagrees: single={:?}, batch={:?}",
                    index, single, batched
                ),
            }
        }
    }
}
