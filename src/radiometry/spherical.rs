//! Spherical Lambertian emitters seen from afar, such as the Sun

use std::f64::consts::PI;

use crate::constants::FOUR_PI;
use crate::geometry::SolidAngle;
use crate::{ensure_positive, Result};

/// A uniformly bright sphere described by its total flux and surface area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalEmitter {
    /// Total radiant flux in W
    pub flux: f64,
    /// Surface area in m²
    pub surface_area: f64,
}

impl SphericalEmitter {
    /// Emitter radiating `flux` watts from `surface_area` square meters
    pub fn new(flux: f64, surface_area: f64) -> Result<Self> {
        let surface_area = ensure_positive("surface area", surface_area)?;
        Ok(Self { flux, surface_area })
    }

    /// Radius in meters, R = √(A / 4π)
    pub fn radius(&self) -> f64 {
        (self.surface_area / FOUR_PI).sqrt()
    }

    /// Radiant exitance in W/m², M = Φ / A
    pub fn exitance(&self) -> f64 {
        self.flux / self.surface_area
    }

    /// Radiance in W/(sr·m²), L = M / π
    pub fn radiance(&self) -> f64 {
        self.exitance() / PI
    }

    /// Solid angle of the sphere seen from `distance` meters away
    pub fn solid_angle_at(&self, distance: f64) -> Result<SolidAngle> {
        SolidAngle::subtended_by_sphere(self.radius(), distance)
    }

    /// Irradiance in W/m² at `distance`, E = L·Ω
    pub fn irradiance_at(&self, distance: f64) -> Result<f64> {
        let omega = self.solid_angle_at(distance)?;
        log::trace!("solid angle at {distance} m: {} sr", omega.steradians());
        Ok(self.radiance() * omega.steradians())
    }
}
