//! Constants module for radiometric calculations

use std::f64::consts::PI;

// Physics
// The mantissa/exponent products below are kept as written so the derived
// photon energy rounds to the same f64 as the worksheet reference values.
/// Speed of light in m/s (worksheet precision)
pub const SPEED_OF_LIGHT: f64 = 2.9979 * 1e8;
/// Planck's constant in J·s (worksheet precision)
pub const PLANCK: f64 = 6.6261 * 1e-34;
/// Peak luminous efficacy in lm/W used to convert watts to lumens
pub const LUMINOUS_EFFICACY: f64 = 685.0;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Solid angle of a full sphere in steradians
pub const FOUR_PI: f64 = 4.0 * PI;

// Solar system
/// Total radiant flux of the Sun in W
pub const SUN_FLUX: f64 = 3.91e26;
/// Surface area of the Sun in m²
pub const SUN_AREA: f64 = 6.07e18;
/// Mean Sun-Earth distance in meters
pub const EARTH_DISTANCE: f64 = 1.50e11;
/// Mean Sun-Mars distance in meters
pub const MARS_DISTANCE: f64 = 2.28e11;

// Unit scales
/// Meters per nanometer
pub const NM: f64 = 1e-9;
/// Meters per millimeter
pub const MM: f64 = 1e-3;
/// Meters per centimeter
pub const CM: f64 = 1e-2;
/// Seconds in a minute
pub const MINUTE_S: f64 = 60.0;
