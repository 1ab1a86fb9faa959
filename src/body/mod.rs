//! Celestial body definitions

use nalgebra::Point3;

/// A spherical body in the simulated system
///
/// Positions use the orbital-plane coordinate system: x and y span the
/// orbital plane, z is the out-of-plane axis. The radius shares the same
/// arbitrary length unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Position in 3D space (arbitrary length units)
    pub position: Point3<f64>,
    /// Physical radius of the body
    pub radius: f64,
}

impl Body {
    /// Create a new body
    pub fn new(position: Point3<f64>, radius: f64) -> Self {
        Self { position, radius }
    }

    /// Create a body fixed at the origin, as the star of the system is
    pub fn at_origin(radius: f64) -> Self {
        Self::new(Point3::origin(), radius)
    }
}
