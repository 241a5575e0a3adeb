//! Radiometric and photometric formulas
//!
//! All quantities are SI: watts, meters, seconds and steradians. Functions
//! whose formula divides by a distance, area or wavelength validate it and
//! return [`RadiometryError::NonPositive`](crate::RadiometryError) instead
//! of producing an infinity.

pub mod lambertian;
pub mod photometric;
pub mod photon;
pub mod point_source;
pub mod spherical;

pub use lambertian::{sky_irradiance, LambertianEmitter};
pub use photometric::{illuminance, inverse_square};
pub use photon::{photon_energy, photon_rate};
pub use point_source::{disc_area, irradiance_from_intensity, sphere_area, IsotropicPointSource};
pub use spherical::SphericalEmitter;

/// Electrical power drawn by a load, P = V·I
pub fn electrical_power(volts: f64, amps: f64) -> f64 {
    volts * amps
}

/// Share of a nominal power that leaves the source as radiation
pub fn radiant_power(nominal_watts: f64, efficiency: f64) -> f64 {
    nominal_watts * efficiency
}

/// Energy delivered by a constant flux over `seconds`
pub fn energy(flux: f64, seconds: f64) -> f64 {
    flux * seconds
}
