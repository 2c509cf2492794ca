//! Circle lattice.
//!
//! A unit whose rotated center is inside the piece stays a true circle; one
//! whose center falls outside is approximated as a 24-gon and each edge is
//! clipped, so partial rings render at the boundary instead of vanishing
//! (contrast with `patterns::dots`).

use std::f64::consts::PI;

use crate::geometry::{Point, Seg};
use super::frame::TextureFrame;

/// Edge count for the boundary approximation of a clipped circle unit.
pub const CIRCLE_EDGES: usize = 24;

#[inline]
pub fn circle_radius(spacing: f64) -> f64 {
    spacing * 0.8
}

/// Lattice of circle centers, start `spacing * 1.5`, step `spacing * 2`.
pub fn raw_circles(frame: &TextureFrame, spacing: f64) -> Vec<Point> {
    let mut centers = Vec::new();
    let mut y = spacing * 1.5;
    while y < frame.height {
        let mut x = spacing * 1.5;
        while x < frame.width {
            centers.push(Point::new(frame.x0 + x, frame.y0 + y));
            x += spacing * 2.0;
        }
        y += spacing * 2.0;
    }
    centers
}

/// Close a circle into chord segments for boundary clipping.
pub fn circle_to_segs(center: Point, radius: f64) -> Vec<Seg> {
    (0..CIRCLE_EDGES)
        .map(|i| {
            let a1 = 2.0 * PI * i as f64 / CIRCLE_EDGES as f64;
            let a2 = 2.0 * PI * (i + 1) as f64 / CIRCLE_EDGES as f64;
            Seg::new(
                center.x + radius * a1.cos(),
                center.y + radius * a1.sin(),
                center.x + radius * a2.cos(),
                center.y + radius * a2.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Cell;

    #[test]
    fn lattice_spacing_is_double() {
        let frame = TextureFrame::new(&[Cell::new(0, 0), Cell::new(1, 0)], 10.0).unwrap();
        let centers = raw_circles(&frame, 2.0);
        assert!(!centers.is_empty());
        let first_row: Vec<&Point> = centers.iter().filter(|p| p.y == centers[0].y).collect();
        if first_row.len() > 1 {
            assert!((first_row[1].x - first_row[0].x - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn chords_close_the_loop() {
        let segs = circle_to_segs(Point::new(5.0, 5.0), 2.0);
        assert_eq!(segs.len(), CIRCLE_EDGES);
        for pair in segs.windows(2) {
            assert!(pair[0].end().distance(pair[1].start()) < 1e-9);
        }
        assert!(segs.last().unwrap().end().distance(segs[0].start()) < 1e-9);
    }

    #[test]
    fn chords_lie_on_the_radius() {
        let center = Point::new(0.0, 0.0);
        for seg in circle_to_segs(center, 3.0) {
            assert!((seg.start().distance(center) - 3.0).abs() < 1e-9);
        }
    }
}
