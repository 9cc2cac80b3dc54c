//! Named constant presets.
//!
//! The published calculations disagree on the coupling constant and on
//! whether the coherence-resistance refinement applies. Each variant is kept
//! as its own preset instead of picking one as canonical.

use super::CoherenceConstants;

/// Informational coherence radius of the Sun (AU).
pub const SOLAR_COHERENCE_RADIUS: f64 = 0.02391625;

/// Harmonic coherence exponent used by the refined presets.
pub const HARMONIC_EXPONENT: f64 = 12.0;

/// A named constant set with its default refinement flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    /// Unique identifier for the preset.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of where the constants come from.
    pub description: &'static str,
    /// Constants of the run.
    pub constants: CoherenceConstants,
    /// Whether the coherence factor is applied by default.
    pub refined: bool,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    #[error("unknown preset '{}' (available: {})", .0, preset_ids())]
    Unknown(String),
}

/// All available presets.
pub static PRESETS: &[Preset] = &[UNIFIED, UNIFIED_REGRESSION, MASTER, GALACTIC];

/// Preset used when the caller does not choose one.
pub static DEFAULT_PRESET: &Preset = &MASTER;

/// Early "Unified" formula: k ≈ 0.088, no refinement.
pub static UNIFIED: Preset = Preset {
    id: "unified",
    name: "Unified",
    description: "Alpha only with k = 0.088 (early unified tables).",
    constants: CoherenceConstants::coupling_only(0.088),
    refined: false,
};

/// Unified formula with the regression-fitted coupling constant.
pub static UNIFIED_REGRESSION: Preset = Preset {
    id: "unified-regression",
    name: "Unified (regression k)",
    description: "Alpha only with the regression-fitted k = 0.0881.",
    constants: CoherenceConstants::coupling_only(0.0881),
    refined: false,
};

/// MASTER formula: alpha times the coherence-resistance factor.
pub static MASTER: Preset = Preset {
    id: "master",
    name: "MASTER",
    description: "k = 0.0881, n = 12, rs = 0.02391625 AU with coherence resistance.",
    constants: CoherenceConstants::new(0.0881, HARMONIC_EXPONENT, SOLAR_COHERENCE_RADIUS),
    refined: true,
};

/// Galactic scale, where the coherence radius is negligible.
pub static GALACTIC: Preset = Preset {
    id: "galactic",
    name: "Galactic",
    description: "k = 0.0881, n = 12 with rs ≈ 0 for galactic radii.",
    constants: CoherenceConstants::new(0.0881, HARMONIC_EXPONENT, 0.0),
    refined: true,
};

/// Look up a preset by id.
pub fn find(id: &str) -> Result<&'static Preset, PresetError> {
    PRESETS
        .iter()
        .find(|preset| preset.id == id)
        .ok_or_else(|| PresetError::Unknown(id.to_string()))
}

fn preset_ids() -> String {
    PRESETS.iter().map(|p| p.id).collect::<Vec<_>>().join(", ")
}
