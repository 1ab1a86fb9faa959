//! # Circle Overlap Geometry Module
//!
//! This module computes the area of overlap between two circular disks in
//! the projection plane, the quantity at the heart of transit photometry:
//! the light blocked during a transit is the overlap of the planet's and
//! the star's apparent disks.
//!
//! ## Lens Area Formula
//!
//! For disks of radii `r_a`, `r_b` with center separation `d`, the overlap
//! region is bounded by two circular arcs meeting at the intersection
//! points of the circle boundaries (a "lens"). With `a = r_a²`, `b = r_b²`:
//!
//! - `x = (a − b + d²) / (2d)` is the signed distance from the first
//!   circle's center to the radical line (the line through the two
//!   intersection points);
//! - `y = sqrt(a − x²)` is the half-length of the common chord;
//! - `area = a·asin(y/r_a) + b·asin(y/r_b) − y·(x + sqrt(x² + b − a))`.
//!
//! This is algebraically equivalent to the familiar arccos-based lens
//! formula, expressed through the chord half-length instead.
//!
//! ## Degenerate Cases
//!
//! The formula divides by `d` and feeds `asin`/`sqrt` with quantities that
//! floating-point round-off can push marginally out of domain. Both are
//! handled before the formula runs:
//!
//! - separation at or beyond `r_a + r_b`: the disks are disjoint, area 0;
//! - separation at or below `|r_a − r_b|`: one disk contains the other
//!   (including the concentric `d = 0` case), area `π·min(r_a², r_b²)`;
//! - in the remaining partial-overlap branch, `asin` and `sqrt` arguments
//!   are clamped into their valid domains.
//!
//! ## Examples
//!
//! ```rust
//! use std::f64::consts::PI;
//! use transitfield::geometry::lens_area;
//!
//! // Coincident unit disks overlap fully.
//! assert_eq!(lens_area(1.0, 1.0, 0.0), PI);
//!
//! // Disks touching edge to edge share no area.
//! assert_eq!(lens_area(1.0, 2.0, 3.0), 0.0);
//!
//! // A small disk well inside a large one contributes its own full area.
//! assert!((lens_area(0.1, 1.0, 0.2) - PI * 0.01).abs() < 1e-12);
//! ```

use crate::camera::ProjectedDisk;
use std::f64::consts::PI;

/// Area of overlap of two disks with radii `r_a`, `r_b` and center
/// separation `d`
///
/// Total over all non-negative inputs; the result always lies in
/// `[0, π·min(r_a², r_b²)]`, and is symmetric in the two radii.
pub fn lens_area(r_a: f64, r_b: f64, d: f64) -> f64 {
    if d >= r_a + r_b {
        // Disjoint, boundary touching included
        return 0.0;
    }

    let a = r_a * r_a;
    let b = r_b * r_b;
    let max_area = PI * a.min(b);

    // Containment check comes before the lens formula: it covers the
    // concentric d = 0 case, which would otherwise divide by zero below.
    if d <= (r_a - r_b).abs() {
        return max_area;
    }

    let x = (a - b + d * d) / (2.0 * d);
    let z = x * x;
    // a - z can round slightly negative near tangency
    let y = (a - z).abs().sqrt();

    let area = a * (y / r_a).min(1.0).asin() + b * (y / r_b).min(1.0).asin()
        - y * (x + (z + b - a).max(0.0).sqrt());

    area.clamp(0.0, max_area)
}

/// Overlap area of two projected disks
///
/// The separation is measured between the disk centers in the projection
/// plane; the radii are the apparent angular radii.
pub fn area_overlap(disk_a: &ProjectedDisk, disk_b: &ProjectedDisk) -> f64 {
    let d = (disk_b.x - disk_a.x).hypot(disk_b.z - disk_a.z);
    lens_area(disk_a.angular_radius, disk_b.angular_radius, d)
}
