//! Constants module for the transit simulation

use std::f64::consts::PI;

// Angles
/// Tau (2*PI) for a full orbit
pub const TAU: f64 = 2.0 * PI;

// Default simulation parameters (arbitrary length units)
/// Default number of frames in one orbital period
pub const DEFAULT_NUM_FRAMES: usize = 200;
/// Default planet radius
pub const DEFAULT_PLANET_RADIUS: f64 = 0.3;
/// Default star radius
pub const DEFAULT_STAR_RADIUS: f64 = 5.0;
/// Default camera distance from the system barycenter
pub const DEFAULT_CAMERA_DISTANCE: f64 = 8.0;
/// Default orbit radius of the planet
pub const DEFAULT_ORBIT_RADIUS: f64 = 2.0;
