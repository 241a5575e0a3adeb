//! Isotropic point sources and the inverse-square law

use std::f64::consts::PI;

use crate::geometry::SolidAngle;
use crate::{ensure_positive, Result};

/// A source radiating its flux uniformly into the full sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsotropicPointSource {
    /// Total radiant flux in W
    pub flux: f64,
}

impl IsotropicPointSource {
    /// Create a source emitting `flux` watts
    pub fn new(flux: f64) -> Self {
        Self { flux }
    }

    /// Radiant intensity in W/sr, I = Φ / 4π
    pub fn intensity(&self) -> f64 {
        self.flux / SolidAngle::full_sphere().steradians()
    }

    /// Irradiance in W/m² on a surface facing the source at `distance`,
    /// E = Φ / (4π·r²)
    pub fn irradiance_at(&self, distance: f64) -> Result<f64> {
        let distance = ensure_positive("distance", distance)?;
        let sphere = SolidAngle::full_sphere().steradians();
        Ok(self.flux / (sphere * distance.powi(2)))
    }

    /// Exitance in W/m² if the flux leaves through a small sphere of the
    /// given diameter, area = 4π·(d/2)²
    pub fn exitance_over_sphere(&self, diameter: f64) -> Result<f64> {
        Ok(self.flux / sphere_area(diameter)?)
    }

    /// Flux in W collected by a small aperture of `aperture_area` m² facing
    /// the source at `distance`
    pub fn power_through_aperture(&self, distance: f64, aperture_area: f64) -> Result<f64> {
        Ok(self.irradiance_at(distance)? * aperture_area)
    }

    /// Energy in J emitted over `seconds`
    pub fn energy(&self, seconds: f64) -> f64 {
        super::energy(self.flux, seconds)
    }
}

/// Surface area of a sphere of the given diameter, written as Ω·(d/2)²
pub fn sphere_area(diameter: f64) -> Result<f64> {
    let diameter = ensure_positive("sphere diameter", diameter)?;
    let sphere = SolidAngle::full_sphere().steradians();
    Ok(sphere * (diameter / 2.0).powi(2))
}

/// Area of a circular opening, π·(d/2)²
pub fn disc_area(diameter: f64) -> Result<f64> {
    let diameter = ensure_positive("aperture diameter", diameter)?;
    Ok(PI * (diameter / 2.0).powi(2))
}

/// Irradiance in W/m² at `distance` from a source of known intensity, E = I / r²
pub fn irradiance_from_intensity(intensity: f64, distance: f64) -> Result<f64> {
    let distance = ensure_positive("distance", distance)?;
    Ok(intensity / distance.powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CM, MM};
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_bulb_intensity() {
        let bulb = IsotropicPointSource::new(2.4 * 0.7);
        assert_relative_eq!(bulb.intensity(), 0.133690, epsilon = 5e-7);
        assert_relative_eq!(bulb.energy(300.0), 504.0, epsilon = 1e-9);
    }

    #[rstest]
    #[case(0.5)]
    #[case(1.0)]
    #[case(2.0)]
    #[case(150.0)]
    fn test_irradiance_integrates_back_to_flux(#[case] distance: f64) {
        let source = IsotropicPointSource::new(1.68);
        let irradiance = source.irradiance_at(distance).unwrap();
        let sphere = 4.0 * PI * distance * distance;
        assert_relative_eq!(irradiance * sphere, 1.68, max_relative = 1e-12);
        assert_relative_eq!(
            source.intensity() * SolidAngle::full_sphere().steradians(),
            1.68,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_intensity_and_flux_paths_agree() {
        let source = IsotropicPointSource::new(40.0);
        let via_flux = source.irradiance_at(2.0).unwrap();
        let via_intensity = irradiance_from_intensity(source.intensity(), 2.0).unwrap();
        assert_relative_eq!(via_flux, via_intensity, max_relative = 1e-12);
        assert_relative_eq!(via_intensity, 0.795775, epsilon = 5e-7);
    }

    #[test]
    fn test_small_sphere_exitance() {
        let bulb = IsotropicPointSource::new(1.68);
        assert_relative_eq!(sphere_area(1.0 * CM).unwrap(), 0.00031416, epsilon = 5e-9);
        let exitance = bulb.exitance_over_sphere(1.0 * CM).unwrap();
        assert_relative_eq!(exitance, 5347.61, epsilon = 5e-3);
    }

    #[test]
    fn test_aperture() {
        let bulb = IsotropicPointSource::new(1.68);
        let area = disc_area(6.0 * MM).unwrap();
        assert_relative_eq!(area, PI * 9e-6, max_relative = 1e-12);
        let power = bulb.power_through_aperture(1.0, area).unwrap();
        assert_relative_eq!(power, 1.68 * 9e-6 / 4.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_distances() {
        let source = IsotropicPointSource::new(1.0);
        assert!(source.irradiance_at(0.0).is_err());
        assert!(irradiance_from_intensity(1.0, -2.0).is_err());
        assert!(disc_area(0.0).is_err());
        assert!(source.exitance_over_sphere(f64::NAN).is_err());
    }
}
