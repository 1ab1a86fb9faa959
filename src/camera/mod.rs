//! Fixed camera and perspective projection
//!
//! The camera sits at `(0, -camera_distance, 0)`, behind the orbital plane
//! on the negative y axis, and never moves during a run. Projection uses
//! the small-angle approximation: the apparent angular radius of a body is
//! its physical radius divided by its distance from the camera. This is
//! accurate while radius ≪ distance; no correction is applied for large
//! apparent sizes.
//!
//! Projecting a body yields an immutable [`ProjectedDisk`] snapshot rather
//! than mutating the body, so each frame's geometry is a plain value that
//! can be handed to a renderer without aliasing simulation state.

use crate::body::Body;
use nalgebra::Point3;

/// The fixed observer of the system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera location in the same coordinate system as the bodies
    position: Point3<f64>,
}

/// A body's apparent disk as seen by the camera for one frame
///
/// `x` and `z` locate the disk center in the projected view (the two axes
/// perpendicular to the viewing direction); `angular_radius` is the
/// apparent radius in the same angular units used by the overlap geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedDisk {
    /// Horizontal coordinate of the disk center in the projected view
    pub x: f64,
    /// Vertical coordinate of the disk center in the projected view
    pub z: f64,
    /// Distance from the camera to the body center
    pub distance: f64,
    /// Apparent angular radius (physical radius / distance)
    pub angular_radius: f64,
}

impl Camera {
    /// Place the camera on the negative y axis at the given distance
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nalgebra::Point3;
    /// use transitfield::{Body, Camera};
    ///
    /// let camera = Camera::on_y_axis(8.0);
    /// let star = Body::at_origin(5.0);
    /// let disk = camera.project(&star);
    ///
    /// assert_eq!(disk.distance, 8.0);
    /// assert_eq!(disk.angular_radius, 5.0 / 8.0);
    /// ```
    pub fn on_y_axis(distance: f64) -> Self {
        Self {
            position: Point3::new(0.0, -distance, 0.0),
        }
    }

    /// The camera's location
    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Project a body to its apparent disk
    ///
    /// Validated configurations keep every body strictly away from the
    /// camera, so the distance is always positive here.
    pub fn project(&self, body: &Body) -> ProjectedDisk {
        let distance = (body.position - self.position).norm();

        ProjectedDisk {
            x: body.position.x,
            z: body.position.z,
            distance,
            angular_radius: body.radius / distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_position() {
        let camera = Camera::on_y_axis(8.0);
        assert_eq!(camera.position(), Point3::new(0.0, -8.0, 0.0));
    }

    #[test]
    fn test_projection_of_origin_body() {
        let camera = Camera::on_y_axis(8.0);
        let star = Body::at_origin(5.0);
        let disk = camera.project(&star);

        assert_relative_eq!(disk.distance, 8.0);
        assert_relative_eq!(disk.angular_radius, 0.625);
        assert_eq!(disk.x, 0.0);
        assert_eq!(disk.z, 0.0);
    }

    #[test]
    fn test_projection_shrinks_with_distance() {
        let camera = Camera::on_y_axis(8.0);
        let near = Body::new(Point3::new(0.0, -2.0, 0.0), 0.3);
        let far = Body::new(Point3::new(0.0, 2.0, 0.0), 0.3);

        let near_disk = camera.project(&near);
        let far_disk = camera.project(&far);

        assert_relative_eq!(near_disk.distance, 6.0);
        assert_relative_eq!(far_disk.distance, 10.0);
        assert!(near_disk.angular_radius > far_disk.angular_radius);
        assert_relative_eq!(near_disk.angular_radius, 0.05);
    }

    #[test]
    fn test_projection_uses_full_euclidean_distance() {
        let camera = Camera::on_y_axis(4.0);
        let body = Body::new(Point3::new(3.0, 0.0, 0.0), 1.0);
        let disk = camera.project(&body);

        // 3-4-5 triangle in the x/y plane
        assert_relative_eq!(disk.distance, 5.0);
        assert_relative_eq!(disk.angular_radius, 0.2);
        assert_eq!(disk.x, 3.0);
    }
}
