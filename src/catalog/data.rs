//! Orbital data for the built-in body catalogs.
//! Reference precessions are general-relativity predictions in arcsec/century.

/// Static record for one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyRecord {
    pub name: &'static str,
    /// Semi-major axis (AU)
    pub a: f64,
    /// Eccentricity
    pub e: f64,
    /// GR perihelion precession (arcsec/century), if published
    pub reference: Option<f64>,
}

/// A catalog compiled into the binary.
#[derive(Clone, Copy, Debug)]
pub struct BuiltinCatalog {
    /// Unique identifier used on the command line.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    pub description: &'static str,
    /// Preset the catalog was published with.
    pub default_preset: &'static str,
    pub bodies: &'static [BodyRecord],
}

/// All built-in catalogs.
pub static BUILTIN_CATALOGS: &[BuiltinCatalog] = &[SOLAR_SYSTEM, EXOPLANETS];

/// Inner planets plus asteroid Icarus, each with its GR precession.
pub static SOLAR_SYSTEM: BuiltinCatalog = BuiltinCatalog {
    id: "solar-system",
    name: "Solar System",
    description: "Inner planets and asteroid Icarus with GR perihelion precession.",
    default_preset: "master",
    bodies: &[
        BodyRecord {
            name: "Mercury",
            a: 0.387,
            e: 0.206,
            reference: Some(42.98),
        },
        BodyRecord {
            name: "Venus",
            a: 0.723,
            e: 0.0068,
            reference: Some(8.6247),
        },
        BodyRecord {
            name: "Earth",
            a: 1.000,
            e: 0.0167,
            reference: Some(3.84),
        },
        BodyRecord {
            name: "Mars",
            a: 1.523679,
            e: 0.0934,
            reference: Some(1.35),
        },
        BodyRecord {
            name: "Icarus",
            a: 1.077,
            e: 0.827,
            reference: Some(10.05),
        },
    ],
};

/// Short-period and highly eccentric exoplanets (alpha only).
pub static EXOPLANETS: BuiltinCatalog = BuiltinCatalog {
    id: "exoplanets",
    name: "Exoplanets",
    description: "Hot Jupiters, super-Earths and eccentric giants; alpha only.",
    default_preset: "unified",
    bodies: &[
        BodyRecord {
            name: "WASP-12b",
            a: 0.0229,
            e: 0.0486,
            reference: None,
        },
        BodyRecord {
            name: "HD 80606b",
            a: 0.449,
            e: 0.9336,
            reference: None,
        },
        BodyRecord {
            name: "Kepler-78b",
            a: 0.0089,
            e: 0.05,
            reference: None,
        },
        BodyRecord {
            name: "GJ 436b",
            a: 0.0287,
            e: 0.152,
            reference: None,
        },
        BodyRecord {
            name: "55 Cancri e",
            a: 0.0156,
            e: 0.05,
            reference: None,
        },
        BodyRecord {
            name: "HD 209458b",
            a: 0.047,
            e: 0.014,
            reference: None,
        },
        BodyRecord {
            name: "Tau Boo b",
            a: 0.049,
            e: 0.023,
            reference: None,
        },
        BodyRecord {
            name: "HAT-P-2b",
            a: 0.0677,
            e: 0.5171,
            reference: None,
        },
        BodyRecord {
            name: "Kepler-10b",
            a: 0.0168,
            e: 0.05,
            reference: None,
        },
        BodyRecord {
            name: "WASP-33b",
            a: 0.0256,
            e: 0.0,
            reference: None,
        },
    ],
};
