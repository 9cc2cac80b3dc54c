//! Fixed-width text tables for evaluated bodies.

pub mod chart;

use crate::precession::{BatchEntryError, BodyEvaluation, CalculationResult};
use crate::relativity::{StarOrbit, StarPrecession};

const RULE: &str = "\u{2500}";

fn optional(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.decimals$}"))
}

fn optional_signed(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:+.decimals$}"))
}

/// Full precession table, one row per outcome in the given order.
///
/// Failed entries keep their slot and show the error instead of values.
pub fn precession_table(rows: &[Result<BodyEvaluation, BatchEntryError>]) -> String {
    let header = format!(
        "{:<14} {:>9} {:>8} {:>9} {:>10} {:>11} {:>10} {:>10} {:>11}",
        "Body", "a (AU)", "e", "e/a", "alpha", "coherence", "reference", "corrected", "correction"
    );
    let width = header.chars().count();

    let mut lines = vec![header, RULE.repeat(width)];
    for row in rows {
        lines.push(match row {
            Ok(eval) => {
                let r = &eval.result;
                format!(
                    "{:<14} {:>9.4} {:>8.4} {:>9.5} {:>10.6} {:>11.8} {:>10} {:>10} {:>11}",
                    eval.name,
                    eval.params.a,
                    eval.params.e,
                    eval.params.eccentricity_ratio(),
                    r.alpha,
                    r.coherence_factor,
                    optional(r.reference, 4),
                    optional(r.corrected_value, 4),
                    optional_signed(r.correction(), 4),
                )
            }
            Err(err) => format!(
                "{:<14} error: {}",
                err.name.as_deref().unwrap_or("?"),
                err.source
            ),
        });
    }
    lines.join("\n")
}

/// Alpha-only table for bodies without a reference.
pub fn alpha_table(rows: &[Result<BodyEvaluation, BatchEntryError>]) -> String {
    let header = format!(
        "{:<14} {:>9} {:>8} {:>10} {:>10}",
        "Body", "a (AU)", "e", "e/a", "alpha"
    );
    let width = header.chars().count();

    let mut lines = vec![header, RULE.repeat(width)];
    for row in rows {
        lines.push(match row {
            Ok(eval) => format!(
                "{:<14} {:>9.4} {:>8.4} {:>10.5} {:>10.6}",
                eval.name,
                eval.params.a,
                eval.params.e,
                eval.params.eccentricity_ratio(),
                eval.result.alpha
            ),
            Err(err) => format!(
                "{:<14} error: {}",
                err.name.as_deref().unwrap_or("?"),
                err.source
            ),
        });
    }
    lines.join("\n")
}

/// Step-by-step breakdown of one evaluation.
pub fn breakdown(name: &str, result: &CalculationResult) -> String {
    let mut lines = vec![
        name.to_string(),
        format!("  alpha              {:.8}", result.alpha),
        format!("  coherence factor   {:.10}", result.coherence_factor),
    ];

    if let Some(reference) = result.reference {
        lines.push(format!("  reference          {reference:.6}"));
        lines.push(format!(
            "  alpha only         {}",
            optional(result.alpha_only_value(), 6)
        ));
        lines.push(format!(
            "  corrected          {}",
            optional(result.corrected_value, 6)
        ));
        lines.push(format!(
            "  correction         {}",
            optional_signed(result.correction(), 6)
        ));
        lines.push(format!(
            "  convergence        {}%",
            optional(result.convergence_percent(), 3)
        ));
    }
    lines.join("\n")
}

/// GR baseline against the corrected advance for a star.
pub fn star_summary(star: &StarOrbit, precession: &StarPrecession) -> String {
    [
        format!(
            "{}: M = {:.2e} Msun, a = {} AU, e = {}",
            star.name, star.central_mass_msun, star.a, star.e
        ),
        format!("  GR advance         {:.6} arcmin/orbit", precession.gr_arcmin),
        format!("  alpha              {:.8}", precession.result.alpha),
        format!("  coherence factor   {:.10}", precession.result.coherence_factor),
        format!(
            "  corrected advance  {:.6} arcmin/orbit",
            precession.corrected_arcmin
        ),
        format!("  deviation          {:.5}%", precession.deviation_percent()),
    ]
    .join("\n")
}
