//! Lambertian (perfectly diffuse) emitters

use std::f64::consts::PI;

use crate::{ensure_positive, Result};

/// A flat emitter whose radiance is the same in every direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertianEmitter {
    /// Radiance in W/(sr·m²)
    pub radiance: f64,
    /// Emitting area in m²
    pub area: f64,
}

impl LambertianEmitter {
    /// Emitter with the given radiance and area
    pub fn new(radiance: f64, area: f64) -> Result<Self> {
        let area = ensure_positive("emitter area", area)?;
        Ok(Self { radiance, area })
    }

    /// Rectangular emitter of `width` × `height` meters
    pub fn rectangle(radiance: f64, width: f64, height: f64) -> Result<Self> {
        let width = ensure_positive("emitter width", width)?;
        let height = ensure_positive("emitter height", height)?;
        Self::new(radiance, width * height)
    }

    /// Radiant exitance (radiosity) in W/m², M = π·L
    pub fn exitance(&self) -> f64 {
        PI * self.radiance
    }

    /// Total radiant flux in W, Φ = M·A
    pub fn flux(&self) -> f64 {
        self.exitance() * self.area
    }

    /// Energy in J emitted over `seconds`
    pub fn energy(&self, seconds: f64) -> f64 {
        super::energy(self.flux(), seconds)
    }
}

/// Irradiance in W/m² on a flat receiver lit by uniform radiance over a
/// region of the sky with the given projected solid angle
pub fn sky_irradiance(radiance: f64, projected_solid_angle: f64) -> f64 {
    radiance * projected_solid_angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{projected_cone, Angle};
    use approx::assert_relative_eq;

    #[test]
    fn test_square_emitter() {
        let emitter = LambertianEmitter::rectangle(5000.0, 0.10, 0.10).unwrap();
        assert_relative_eq!(emitter.area, 0.01, max_relative = 1e-12);
        assert_relative_eq!(emitter.exitance(), 15707.96, epsilon = 5e-3);
        assert_relative_eq!(emitter.flux(), 157.0796, epsilon = 5e-5);
        assert_eq!(emitter.energy(1.0), emitter.flux());
    }

    #[test]
    fn test_exitance_scales_with_radiance() {
        let a = LambertianEmitter::new(5000.0, 0.01).unwrap();
        let b = LambertianEmitter::new(6000.0, 0.01).unwrap();
        assert_relative_eq!(b.exitance() / a.exitance(), 1.2, max_relative = 1e-12);
        assert_relative_eq!(b.flux(), 188.50, epsilon = 5e-3);
    }

    #[test]
    fn test_sky_irradiance() {
        let full = sky_irradiance(1000.0, PI);
        let cone = sky_irradiance(1000.0, projected_cone(Angle::from_degrees(30.0)));
        assert_relative_eq!(full, 3141.59, epsilon = 5e-3);
        assert_relative_eq!(cone, 785.40, epsilon = 5e-3);
        assert_relative_eq!(cone / full, 0.25, max_relative = 1e-12);
    }

    #[test]
    fn test_degenerate_emitters_rejected() {
        assert!(LambertianEmitter::rectangle(1.0, 0.0, 1.0).is_err());
        assert!(LambertianEmitter::new(1.0, -0.5).is_err());
    }
}
