//! Dot lattice.
//!
//! Dots are all-or-nothing at the piece boundary: a unit is kept in full
//! iff its (rotated) center lands inside the piece polygon, and dropped
//! entirely otherwise. This differs from the circle and hexagon lattices on
//! purpose; see `patterns::circles`.

use crate::geometry::Point;
use super::frame::TextureFrame;

/// Engraved dot radius in document units.
pub const DOT_RADIUS: f64 = 0.3;

/// Lattice of dot centers, start and step `spacing` on both axes.
pub fn raw_dots(frame: &TextureFrame, spacing: f64) -> Vec<Point> {
    let mut centers = Vec::new();
    let mut y = spacing;
    while y < frame.height {
        let mut x = spacing;
        while x < frame.width {
            centers.push(Point::new(frame.x0 + x, frame.y0 + y));
            x += spacing;
        }
        y += spacing;
    }
    centers
}
