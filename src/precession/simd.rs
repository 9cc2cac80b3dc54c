//! Lane-parallel alpha kernel for batch evaluation.

use wide::f64x4;

use super::OrbitalParameters;
use crate::coherence;

/// Compute `1 + k * (e / a)` for every entry, four at a time.
///
/// Each lane performs the same divide, multiply, add sequence as
/// [`coherence::alpha`], so the output matches the scalar kernel bit for bit.
/// Entries with an invalid `a` still produce a lane value; callers discard it.
pub(super) fn alpha_lanes(params: &[OrbitalParameters], k: f64) -> Vec<f64> {
    let mut alphas = Vec::with_capacity(params.len());
    let one = f64x4::splat(1.0);
    let k4 = f64x4::splat(k);

    let mut chunks = params.chunks_exact(4);
    for chunk in &mut chunks {
        let e = f64x4::new([chunk[0].e, chunk[1].e, chunk[2].e, chunk[3].e]);
        let a = f64x4::new([chunk[0].a, chunk[1].a, chunk[2].a, chunk[3].a]);
        let alpha = one + k4 * (e / a);
        alphas.extend_from_slice(&alpha.to_array());
    }

    // Tail shorter than one vector
    alphas.extend(
        chunks
            .remainder()
            .iter()
            .map(|p| coherence::alpha(k, p.e, p.a)),
    );

    alphas
}
