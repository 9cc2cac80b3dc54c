//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use perihelion::catalog::{BodyCatalog, NamedBody};
use perihelion::precession::OrbitalParameters;

/// Round to a fixed number of decimals, as the published tables print.
pub fn rounded(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// A small catalog mixing referenced and bare bodies.
pub fn mixed_catalog() -> BodyCatalog {
    BodyCatalog::new(
        "mixed",
        vec![
            NamedBody::new(
                "Mercury",
                OrbitalParameters::new(0.387, 0.206).with_reference(42.98),
            ),
            NamedBody::new("WASP-12b", OrbitalParameters::new(0.0229, 0.0486)),
            NamedBody::new(
                "Venus",
                OrbitalParameters::new(0.723, 0.0068).with_reference(8.6247),
            ),
        ],
    )
}

/// A catalog with one body that cannot be evaluated.
pub fn catalog_with_invalid_body() -> BodyCatalog {
    BodyCatalog::new(
        "broken",
        vec![
            NamedBody::new(
                "Earth",
                OrbitalParameters::new(1.0, 0.0167).with_reference(3.84),
            ),
            NamedBody::new("Singularity", OrbitalParameters::new(0.0, 0.5)),
            NamedBody::new(
                "Mars",
                OrbitalParameters::new(1.523679, 0.0934).with_reference(1.35),
            ),
        ],
    )
}

/// Write `catalog` as JSON into `dir` and return the file path.
pub fn write_catalog(dir: &tempfile::TempDir, catalog: &BodyCatalog) -> PathBuf {
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, catalog.to_json_pretty().unwrap()).unwrap();
    path
}
