//! Simulation configuration and validation
//!
//! All knobs of the simulation live in [`SimulationConfig`]: the frame
//! count of one orbital period, the two body radii, the camera distance,
//! and the orbit radius. Every component reads its parameters from this
//! structure; nothing is configured through globals.
//!
//! A configuration must pass [`SimulationConfig::validate`] before the
//! simulation loop starts. The core never runs with degenerate parameters,
//! so the geometric routines downstream can assume positive radii and a
//! camera that no body can reach.

use crate::constants::{
    DEFAULT_CAMERA_DISTANCE, DEFAULT_NUM_FRAMES, DEFAULT_ORBIT_RADIUS, DEFAULT_PLANET_RADIUS,
    DEFAULT_STAR_RADIUS,
};
use crate::{Result, TransitError};

/// Parameters of one simulation run
///
/// Lengths share one arbitrary unit chosen by the caller; only their ratios
/// matter to the resulting light curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Number of frames in one orbital period
    pub num_frames: usize,
    /// Physical radius of the planet
    pub planet_radius: f64,
    /// Physical radius of the star
    pub star_radius: f64,
    /// Distance of the fixed camera from the system barycenter
    pub camera_distance: f64,
    /// Radius of the planet's circular orbit
    pub orbit_radius: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_frames: DEFAULT_NUM_FRAMES,
            planet_radius: DEFAULT_PLANET_RADIUS,
            star_radius: DEFAULT_STAR_RADIUS,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            orbit_radius: DEFAULT_ORBIT_RADIUS,
        }
    }
}

impl SimulationConfig {
    /// Check the configuration for degenerate values
    ///
    /// Rejects non-positive frame counts, radii and distances, and a camera
    /// placed on or inside the orbit (the planet would sweep through it,
    /// making the projection singular).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transitfield::SimulationConfig;
    ///
    /// assert!(SimulationConfig::default().validate().is_ok());
    ///
    /// let bad = SimulationConfig {
    ///     star_radius: 0.0,
    ///     ..SimulationConfig::default()
    /// };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.num_frames == 0 {
            return Err(TransitError::NonPositiveParameter {
                name: "num_frames",
                value: 0.0,
            });
        }

        for (name, value) in [
            ("planet_radius", self.planet_radius),
            ("star_radius", self.star_radius),
            ("camera_distance", self.camera_distance),
            ("orbit_radius", self.orbit_radius),
        ] {
            if !(value > 0.0) {
                return Err(TransitError::NonPositiveParameter { name, value });
            }
        }

        if self.camera_distance <= self.orbit_radius {
            return Err(TransitError::CameraInsideOrbit {
                camera_distance: self.camera_distance,
                orbit_radius: self.orbit_radius,
            });
        }

        Ok(())
    }
}
