//! Perihelion - Coherence-Corrected Orbital Precession
//!
//! A library crate computing the informational gain factor `alpha` and the
//! coherence-resistance correction for orbiting bodies, with the catalogs,
//! baselines and reports built around it.

pub mod catalog;
pub mod coherence;
pub mod galaxy;
pub mod precession;
pub mod relativity;
pub mod report;
pub mod structure;
pub mod types;

#[cfg(test)]
pub mod test_utils;
