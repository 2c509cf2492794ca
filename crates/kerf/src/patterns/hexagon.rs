//! Hexagon lattice.
//!
//! Units behave like the circle lattice at the boundary: full hexagons when
//! the rotated center is inside, individually clipped edges otherwise.

use std::f64::consts::PI;

use crate::geometry::{Point, Seg};
use super::frame::TextureFrame;

#[inline]
pub fn hex_radius(spacing: f64) -> f64 {
    spacing * 0.8
}

/// Staggered lattice of hexagon centers: columns `radius * 1.5` apart,
/// rows `radius * sqrt(3)` apart, odd columns shifted half a row.
pub fn raw_hexagons(frame: &TextureFrame, spacing: f64) -> Vec<Point> {
    let radius = hex_radius(spacing);
    let hex_height = radius * 3.0_f64.sqrt();
    let spacing_x = radius * 1.5;
    let spacing_y = hex_height;

    let mut centers = Vec::new();
    let mut row = 0;
    while row as f64 * spacing_y < frame.height + spacing_y {
        let mut col = 0;
        while col as f64 * spacing_x < frame.width + spacing_x {
            let cx = frame.x0 + col as f64 * spacing_x + spacing;
            let cy = frame.y0
                + row as f64 * spacing_y
                + spacing
                + if col % 2 == 1 { spacing_y / 2.0 } else { 0.0 };
            centers.push(Point::new(cx, cy));
            col += 1;
        }
        row += 1;
    }
    centers
}

/// The six edges of one hexagon unit, first vertex due east of the center.
pub fn hex_unit_segs(center: Point, radius: f64) -> Vec<Seg> {
    (0..6)
        .map(|i| {
            let a1 = PI / 3.0 * i as f64;
            let a2 = PI / 3.0 * (i + 1) as f64;
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
    fn lattice_is_staggered() {
        let frame = TextureFrame::new(&[Cell::new(0, 0), Cell::new(1, 0)], 10.0).unwrap();
        let centers = raw_hexagons(&frame, 2.0);
        assert!(centers.len() > 2);

        // Adjacent columns differ by half a row.
        let radius = hex_radius(2.0);
        let col0 = centers.iter().find(|p| (p.x - (frame.x0 + 2.0)).abs() < 1e-9).unwrap();
        let col1 = centers
            .iter()
            .find(|p| (p.x - (frame.x0 + radius * 1.5 + 2.0)).abs() < 1e-9)
            .unwrap();
        assert!((col1.y - col0.y - radius * 3.0_f64.sqrt() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn unit_closes_and_keeps_radius() {
        let center = Point::new(4.0, 4.0);
        let segs = hex_unit_segs(center, 1.6);
        assert_eq!(segs.len(), 6);
        for pair in segs.windows(2) {
            assert!(pair[0].end().distance(pair[1].start()) < 1e-9);
        }
        assert!(segs.last().unwrap().end().distance(segs[0].start()) < 1e-9);
        for seg in &segs {
            assert!((seg.start().distance(center) - 1.6).abs() < 1e-9);
        }
    }
}
