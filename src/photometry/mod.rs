//! Transit photometry engine
//!
//! [`TransitSimulation`] orchestrates the frame loop: each step moves the
//! planet along its orbit, projects both bodies through the camera, decides
//! which body is nearer (the occlusion order), computes the light blocked
//! by the planet's disk, and appends a sample to the light curve.
//!
//! A step returns an immutable [`FrameState`] snapshot carrying everything
//! a renderer needs for that frame: body positions, projected disks, draw
//! order, and the brightness sample. The renderer owns no simulation state.

use crate::body::Body;
use crate::camera::{Camera, ProjectedDisk};
use crate::config::SimulationConfig;
use crate::geometry::area_overlap;
use crate::orbit::CircularOrbit;
use crate::Result;
use log::debug;
use nalgebra::Point3;
use std::f64::consts::PI;

/// Which body is nearer the camera this frame
///
/// The nearer body is drawn on top, and only a planet in front of the star
/// can block its light. This is a first-class output of the step, not a
/// rendering detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcclusionOrder {
    /// The planet is nearer the camera and may occlude the star
    PlanetInFront,
    /// The star is nearer the camera; no light is blocked
    StarInFront,
}

/// One point of the synthetic light curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightCurveSample {
    /// Frame index, `0..num_frames`
    pub frame: usize,
    /// Relative system brightness in `[0, 1]`; 1 outside transit
    pub brightness: f64,
}

/// Immutable snapshot of one simulation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Frame index this snapshot belongs to
    pub frame: usize,
    /// Star position (fixed at the origin)
    pub star_position: Point3<f64>,
    /// Planet position for this frame
    pub planet_position: Point3<f64>,
    /// The star's apparent disk
    pub star_disk: ProjectedDisk,
    /// The planet's apparent disk
    pub planet_disk: ProjectedDisk,
    /// Which body is nearer the camera
    pub occlusion: OcclusionOrder,
    /// Brightness sample appended to the light curve this frame
    pub sample: LightCurveSample,
}

/// Blocked-light fraction of one frame, as a brightness in `[0, 1]`
///
/// The occluded area only counts when the planet is the nearer body;
/// otherwise the star outshines everything and the brightness is exactly 1.
pub fn blocked_light_brightness(
    star_disk: &ProjectedDisk,
    planet_disk: &ProjectedDisk,
    occlusion: OcclusionOrder,
) -> f64 {
    let area_star = PI * star_disk.angular_radius * star_disk.angular_radius;

    let area_blocked = match occlusion {
        OcclusionOrder::PlanetInFront => area_overlap(star_disk, planet_disk),
        OcclusionOrder::StarInFront => 0.0,
    };

    (1.0 - area_blocked / area_star).clamp(0.0, 1.0)
}

/// The simulation loop over one or more orbital periods
#[derive(Debug)]
pub struct TransitSimulation {
    config: SimulationConfig,
    camera: Camera,
    orbit: CircularOrbit,
    star: Body,
    planet: Body,
    light_curve: Vec<LightCurveSample>,
}

impl TransitSimulation {
    /// Set up a simulation from a validated configuration
    ///
    /// Returns an error if the configuration contains non-positive
    /// parameters or places the camera inside the orbit.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let orbit = CircularOrbit::new(config.orbit_radius, config.num_frames);

        Ok(Self {
            config,
            camera: Camera::on_y_axis(config.camera_distance),
            star: Body::at_origin(config.star_radius),
            planet: Body::new(orbit.position_at(0), config.planet_radius),
            orbit,
            light_curve: Vec::with_capacity(config.num_frames),
        })
    }

    /// The configuration this simulation runs with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The light curve accumulated so far, one sample per completed step
    pub fn light_curve(&self) -> &[LightCurveSample] {
        &self.light_curve
    }

    /// Advance the simulation by one frame
    ///
    /// Updates the planet position, projects both bodies, computes the
    /// occlusion order and brightness, appends the sample to the light
    /// curve, and returns the frame snapshot. The frame boundary is the
    /// safe cancellation point; no partial-frame state escapes.
    pub fn step(&mut self, frame: usize) -> FrameState {
        self.planet.position = self.orbit.position_at(frame);

        let star_disk = self.camera.project(&self.star);
        let planet_disk = self.camera.project(&self.planet);

        let occlusion = if planet_disk.distance < star_disk.distance {
            OcclusionOrder::PlanetInFront
        } else {
            OcclusionOrder::StarInFront
        };

        let brightness = blocked_light_brightness(&star_disk, &planet_disk, occlusion);
        let sample = LightCurveSample { frame, brightness };
        self.light_curve.push(sample);

        debug!(
            "frame {}: planet at ({:.3}, {:.3}), {:?}, brightness {:.6}",
            frame, self.planet.position.x, self.planet.position.y, occlusion, brightness
        );

        FrameState {
            frame,
            star_position: self.star.position,
            planet_position: self.planet.position,
            star_disk,
            planet_disk,
            occlusion,
            sample,
        }
    }

    /// Run one full orbital period and return the light curve
    pub fn run(&mut self) -> &[LightCurveSample] {
        for frame in 0..self.config.num_frames {
            self.step(frame);
        }
        self.light_curve()
    }
}
