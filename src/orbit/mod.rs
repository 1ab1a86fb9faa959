//! Circular orbit propagation
//!
//! The planet follows a fixed circular path in the orbital plane, indexed
//! by discrete frame number. One full period spans `period_frames` frames;
//! the phase starts at π/2 so frame 0 places the planet at the top of the
//! orbit, on the far side of the star from the camera.

use crate::constants::TAU;
use nalgebra::Point3;
use std::f64::consts::FRAC_PI_2;

/// A circular orbit in the x/y plane, centered on the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularOrbit {
    /// Orbit radius (arbitrary length units)
    pub radius: f64,
    /// Number of frames in one full revolution
    pub period_frames: usize,
}

impl CircularOrbit {
    /// Create an orbit with the given radius and period
    pub fn new(radius: f64, period_frames: usize) -> Self {
        Self {
            radius,
            period_frames,
        }
    }

    /// Position on the orbit at the given frame index
    ///
    /// Pure function of the frame index; frames are reduced modulo the
    /// period, so `position_at(t)` and `position_at(t + period)` are
    /// bitwise identical.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transitfield::CircularOrbit;
    ///
    /// let orbit = CircularOrbit::new(2.0, 200);
    /// let start = orbit.position_at(0);
    ///
    /// // Phase π/2: the planet starts at (0, radius, 0).
    /// assert!((start.x).abs() < 1e-12);
    /// assert!((start.y - 2.0).abs() < 1e-12);
    /// assert_eq!(start.z, 0.0);
    /// ```
    pub fn position_at(&self, frame: usize) -> Point3<f64> {
        let phase = (frame % self.period_frames) as f64 / self.period_frames as f64;
        let angle = phase * TAU + FRAC_PI_2;

        Point3::new(self.radius * angle.cos(), self.radius * angle.sin(), 0.0)
    }
}
