//! Solid angles in steradians

use std::f64::consts::PI;

use crate::constants::FOUR_PI;
use crate::geometry::Angle;
use crate::{ensure_positive, RadiometryError, Result};

/// A solid angle measured in steradians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SolidAngle(f64);

impl SolidAngle {
    /// Wrap a raw steradian value
    pub fn from_steradians(steradians: f64) -> Self {
        SolidAngle(steradians)
    }

    /// Whole sphere, 4π sr
    pub fn full_sphere() -> Self {
        Self::from_steradians(FOUR_PI)
    }

    /// Half sphere, 2π sr
    pub fn hemisphere() -> Self {
        Self::from_steradians(2.0 * PI)
    }

    /// Right circular cone with the given half-angle: Ω = 2π(1 − cos α)
    pub fn cone(half_angle: Angle) -> Self {
        Self::from_steradians(2.0 * PI * (1.0 - half_angle.cos()))
    }

    /// Solid angle subtended by a sphere of `radius` whose center lies
    /// `distance` away from the observer.
    ///
    /// The tangent half-angle is `asin(R / r)`, so the observer must sit
    /// outside the sphere.
    pub fn subtended_by_sphere(radius: f64, distance: f64) -> Result<Self> {
        let radius = ensure_positive("sphere radius", radius)?;
        let distance = ensure_positive("viewing distance", distance)?;
        if radius > distance {
            return Err(RadiometryError::InvalidGeometry(format!(
                "sphere of radius {radius} m encloses an observer {distance} m from its center"
            )));
        }

        let half_angle = Angle::from_radians((radius / distance).asin());
        Ok(Self::cone(half_angle))
    }

    /// Value in steradians
    pub fn steradians(&self) -> f64 {
        self.0
    }
}

/// Projected solid angle of a cone around the surface normal: π·sin²θ
///
/// Multiplying a uniform radiance by this gives the irradiance on a flat
/// receiver; at θ = 90° it reduces to π for the full hemisphere.
pub fn projected_cone(half_angle: Angle) -> f64 {
    PI * half_angle.sin().powi(2)
}
