//! Physical constants and unit conversions shared by the precession models.

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Speed of light in vacuum (m/s)
pub const C: f64 = 299_792_458.0;

/// Solar mass in kg
pub const SOLAR_MASS: f64 = 1.98847e30;

/// Astronomical unit in meters
pub const AU_TO_METERS: f64 = 1.495978707e11;

/// Kiloparsec in meters
pub const KPC_TO_METERS: f64 = 3.085677581e19;

/// Meters per second in one km/s
pub const M_PER_S_TO_KM_PER_S: f64 = 1000.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Radians to arcminutes conversion factor
pub const RAD_TO_ARCMIN: f64 = RAD_TO_DEG * 60.0;

/// Convert a mass in solar masses to kilograms.
pub fn solar_masses_to_kg(mass_msun: f64) -> f64 {
    mass_msun * SOLAR_MASS
}

/// Convert a distance in AU to meters.
pub fn au_to_meters(au: f64) -> f64 {
    au * AU_TO_METERS
}

/// Convert a distance in kiloparsecs to meters.
pub fn kpc_to_meters(kpc: f64) -> f64 {
    kpc * KPC_TO_METERS
}
