//! Angles and solid angles

pub mod angle;
pub mod solid_angle;

pub use angle::{Angle, AngleFormat};
pub use solid_angle::{projected_cone, SolidAngle};
