//! Transitfield: exoplanet transit simulation and synthetic photometry
//!
//! This crate models a two-body eclipsing system (a star and an orbiting
//! planet) and derives a synthetic light curve from the time-varying
//! projected overlap of the two disks as seen from a fixed camera.
//!
//! The simulation is a deterministic frame loop: each step advances the
//! planet along a circular orbit, projects both bodies to apparent angular
//! disks, decides which body is nearer the camera, and converts the
//! occluded area into a brightness sample. Rendering and animation are left
//! to the caller; the crate only produces per-frame geometric snapshots and
//! the light curve.
//!
//! # Example
//!
//! ```rust
//! use transitfield::{SimulationConfig, TransitSimulation};
//!
//! let config = SimulationConfig::default();
//! let mut sim = TransitSimulation::new(config).unwrap();
//! let curve = sim.run().to_vec();
//!
//! assert_eq!(curve.len(), 200);
//! // The planet transits the star once per orbit, dipping the brightness.
//! let min = curve.iter().map(|s| s.brightness).fold(f64::INFINITY, f64::min);
//! assert!(min < 1.0);
//! ```

use thiserror::Error;

pub mod body;
pub mod camera;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod orbit;
pub mod photometry;

// Re-export commonly used types
pub use body::Body;
pub use camera::{Camera, ProjectedDisk};
pub use config::SimulationConfig;
pub use orbit::CircularOrbit;
pub use photometry::{FrameState, LightCurveSample, OcclusionOrder, TransitSimulation};

/// Main error type for the transitfield library
#[derive(Debug, Error)]
pub enum TransitError {
    /// A configuration value that must be strictly positive was not
    #[error("{name} must be positive, got {value}")]
    NonPositiveParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The camera sits on or inside the orbit, so a body can reach it
    #[error("camera distance {camera_distance} must exceed orbit radius {orbit_radius}")]
    CameraInsideOrbit {
        /// Configured camera distance
        camera_distance: f64,
        /// Configured orbit radius
        orbit_radius: f64,
    },
}

/// Result type for transitfield operations
pub type Result<T> = std::result::Result<T, TransitError>;
