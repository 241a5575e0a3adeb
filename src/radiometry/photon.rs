//! Photon energy and photon flux

use crate::constants::{PLANCK, SPEED_OF_LIGHT};
use crate::{ensure_positive, Result};

/// Energy of a single photon in joules, E = h·c/λ
pub fn photon_energy(wavelength: f64) -> Result<f64> {
    let wavelength = ensure_positive("wavelength", wavelength)?;
    Ok((PLANCK * SPEED_OF_LIGHT) / wavelength)
}

/// Photons per second carried by `power` watts of monochromatic light
pub fn photon_rate(power: f64, wavelength: f64) -> Result<f64> {
    let energy = photon_energy(wavelength)?;
    log::trace!("photon energy at {wavelength} m: {energy} J");
    Ok(power / energy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NM;
    use approx::assert_relative_eq;

    #[test]
    fn test_green_photon() {
        let e = photon_energy(500.0 * NM).unwrap();
        assert_relative_eq!(e, 3.972877038e-19, max_relative = 1e-12);
    }

    #[test]
    fn test_rate_times_energy_recovers_power() {
        let wavelength = 650.0 * NM;
        let rate = photon_rate(5.0, wavelength).unwrap();
        let energy = photon_energy(wavelength).unwrap();
        assert_relative_eq!(rate * energy, 5.0, max_relative = 1e-12);
    }

    #[test]
    fn test_shorter_wavelength_is_more_energetic() {
        let blue = photon_energy(450.0 * NM).unwrap();
        let red = photon_energy(700.0 * NM).unwrap();
        assert!(blue > red);
    }

    #[test]
    fn test_rejects_zero_wavelength() {
        assert!(photon_energy(0.0).is_err());
        assert!(photon_rate(1.0, -1.0).is_err());
    }
}
