//! Body catalogs: named sets of orbital parameters fed to the model.
//!
//! Catalogs are either compiled in (see [`data`]) or read from a JSON file:
//!
//! ```json
//! {
//!   "name": "Inner planets",
//!   "default_preset": "master",
//!   "bodies": [
//!     { "name": "Mercury", "a": 0.387, "e": 0.206, "reference": 42.98 }
//!   ]
//! }
//! ```

pub mod data;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coherence::{presets, Preset, PresetError, DEFAULT_PRESET};
use crate::precession::OrbitalParameters;

pub use data::{BodyRecord, BuiltinCatalog, BUILTIN_CATALOGS};

/// One body with its display name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedBody {
    pub name: String,
    #[serde(flatten)]
    pub params: OrbitalParameters,
}

impl NamedBody {
    pub fn new(name: impl Into<String>, params: OrbitalParameters) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

impl From<&BodyRecord> for NamedBody {
    fn from(record: &BodyRecord) -> Self {
        Self {
            name: record.name.to_string(),
            params: OrbitalParameters {
                a: record.a,
                e: record.e,
                reference: record.reference,
            },
        }
    }
}

/// An ordered collection of bodies. Order is the presentation order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyCatalog {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Preset id the catalog should be evaluated with by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_preset: Option<String>,
    pub bodies: Vec<NamedBody>,
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog '{0}' has no bodies")]
    Empty(String),

    #[error("catalog '{catalog}' lists body '{body}' more than once")]
    DuplicateBody { catalog: String, body: String },

    #[error("unknown built-in catalog '{0}'")]
    UnknownBuiltin(String),
}

impl BodyCatalog {
    pub fn new(name: impl Into<String>, bodies: Vec<NamedBody>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            default_preset: None,
            bodies,
        }
    }

    /// Read and validate a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&text)?;
        debug!(
            path = %path.display(),
            bodies = catalog.bodies.len(),
            "loaded body catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate a JSON catalog.
    ///
    /// Only structure is checked (non-empty, unique names). Physical values
    /// are left to the model, which rejects a non-positive `a` per entry.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serialize as pretty-printed JSON in the format accepted by [`BodyCatalog::load`].
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.bodies.is_empty() {
            return Err(CatalogError::Empty(self.name.clone()));
        }

        let mut seen = HashSet::new();
        for body in &self.bodies {
            if !seen.insert(body.name.as_str()) {
                return Err(CatalogError::DuplicateBody {
                    catalog: self.name.clone(),
                    body: body.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// The catalog's default preset, or the crate default when none is set.
    pub fn preset(&self) -> Result<&'static Preset, PresetError> {
        match &self.default_preset {
            Some(id) => presets::find(id),
            None => Ok(DEFAULT_PRESET),
        }
    }

    /// Body names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.iter().map(|body| body.name.as_str())
    }
}

impl From<&BuiltinCatalog> for BodyCatalog {
    fn from(builtin: &BuiltinCatalog) -> Self {
        Self {
            name: builtin.name.to_string(),
            description: builtin.description.to_string(),
            default_preset: Some(builtin.default_preset.to_string()),
            bodies: builtin.bodies.iter().map(NamedBody::from).collect(),
        }
    }
}

/// Look up a built-in catalog by id.
pub fn builtin(id: &str) -> Result<BodyCatalog, CatalogError> {
    BUILTIN_CATALOGS
        .iter()
        .find(|catalog| catalog.id == id)
        .map(BodyCatalog::from)
        .ok_or_else(|| CatalogError::UnknownBuiltin(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INNER_PLANETS: &str = r#"{
        "name": "Inner planets",
        "default_preset": "unified",
        "bodies": [
            { "name": "Mercury", "a": 0.387, "e": 0.206, "reference": 42.98 },
            { "name": "Venus", "a": 0.723, "e": 0.0068 }
        ]
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = BodyCatalog::from_json_str(INNER_PLANETS).unwrap();
        assert_eq!(catalog.name, "Inner planets");
        assert_eq!(catalog.bodies.len(), 2);
        assert_eq!(catalog.bodies[0].params.reference, Some(42.98));
        assert_eq!(catalog.bodies[1].params.reference, None);
        assert_eq!(catalog.description, "");
        assert_eq!(catalog.preset().unwrap().id, "unified");
    }

    #[test]
    fn test_missing_preset_falls_back_to_default() {
        let body = NamedBody::new("X", OrbitalParameters::new(1.0, 0.1));
        let catalog = BodyCatalog::new("adhoc", vec![body]);
        assert_eq!(catalog.preset().unwrap().id, DEFAULT_PRESET.id);
    }

    #[test]
    fn test_unknown_preset_is_reported() {
        let mut catalog = builtin("solar-system").unwrap();
        catalog.default_preset = Some("nope".to_string());
        assert!(catalog.preset().is_err());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = BodyCatalog::from_json_str(r#"{ "name": "void", "bodies": [] }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Empty(name) if name == "void"));
    }

    #[test]
    fn test_duplicate_body_rejected() {
        let text = r#"{
            "name": "dup",
            "bodies": [
                { "name": "Mars", "a": 1.52, "e": 0.09 },
                { "name": "Mars", "a": 1.52, "e": 0.09 }
            ]
        }"#;
        let err = BodyCatalog::from_json_str(text).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateBody { body, .. } if body == "Mars"));
    }

    #[test]
    fn test_zero_axis_loads() {
        // Physical plausibility is a compute-time concern
        let text = r#"{ "name": "odd", "bodies": [ { "name": "Point", "a": 0.0, "e": 0.1 } ] }"#;
        let catalog = BodyCatalog::from_json_str(text).unwrap();
        assert_eq!(catalog.bodies[0].params.a, 0.0);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = BodyCatalog::from_json_str(r#"{ "name": "broken", "bodies": [ { "a": 1.0 } ] }"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_builtin_lookup() {
        let catalog = builtin("exoplanets").unwrap();
        assert_eq!(catalog.bodies.len(), 10);
        assert_eq!(catalog.names().last(), Some("WASP-33b"));

        assert!(matches!(
            builtin("kuiper-belt"),
            Err(CatalogError::UnknownBuiltin(_))
        ));
    }

    #[test]
    fn test_export_reloads() {
        let catalog = builtin("solar-system").unwrap();
        let text = catalog.to_json_pretty().unwrap();
        assert!(text.contains("\"reference\": 42.98"));
        assert_eq!(BodyCatalog::from_json_str(&text).unwrap(), catalog);
    }
}
