//! # Angle Representation Module
//!
//! Angles are stored in the unit they were given in. Half-angles in the
//! worksheets arrive in degrees while `asin` produces radians, and neither
//! should pick up a conversion round trip before it is used.
//!
//! ## Examples
//!
//! ```rust
//! use radiometry::geometry::angle::Angle;
//!
//! let half_angle = Angle::from_degrees(30.0);
//! assert_eq!(half_angle.to_degrees(), 30.0);
//! assert!((half_angle.sin() - 0.5).abs() < 1e-12);
//! ```

use crate::constants::{DEG2RAD, RAD2DEG};

/// Internal representation format for angle values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement kept in its original unit
///
/// Conversion only happens when the other unit is requested, using
/// `value * (π / 180)` in either direction, the same factor as
/// [`f64::to_radians`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radiometry::geometry::angle::Angle;
    ///
    /// let right_angle = Angle::from_degrees(90.0);
    /// assert_eq!(right_angle.to_degrees(), 90.0);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Returns the angle value in degrees
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * RAD2DEG,
        }
    }

    /// Returns the angle value in radians
    ///
    /// Angles stored as radians come back untouched; degrees are multiplied
    /// by `π / 180`.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * DEG2RAD,
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Sine of the angle
    pub fn sin(&self) -> f64 {
        self.to_radians().sin()
    }

    /// Cosine of the angle
    pub fn cos(&self) -> f64 {
        self.to_radians().cos()
    }

    /// Returns the internal format of this angle
    pub fn format(&self) -> AngleFormat {
        self.angle
    }
}
