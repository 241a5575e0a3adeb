//! Radiometric to photometric conversion

use crate::constants::LUMINOUS_EFFICACY;
use crate::{ensure_positive, Result};

/// Illuminance in lux from monochromatic irradiance in W/m²
///
/// `luminosity` is the photopic luminosity function V(λ) at the source
/// wavelength, between 0 and 1.
pub fn illuminance(irradiance: f64, luminosity: f64) -> f64 {
    irradiance * LUMINOUS_EFFICACY * luminosity
}

/// Rescale a reading taken at `known_distance` to `new_distance` with the
/// inverse-square law: value · (d_known / d_new)²
pub fn inverse_square(known_value: f64, known_distance: f64, new_distance: f64) -> Result<f64> {
    let known_distance = ensure_positive("known distance", known_distance)?;
    let new_distance = ensure_positive("new distance", new_distance)?;
    Ok(known_value * (known_distance / new_distance).powi(2))
}
