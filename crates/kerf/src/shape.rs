//! Footprint shape mask.
//!
//! Restricts which grid cells take part in region growth, approximating a
//! rectangular, hexagonal or circular outer silhouette.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Outer footprint of the puzzle and its matching base cut-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseShape {
    #[default]
    Rectangle,
    Hexagon,
    Circle,
}

impl BaseShape {
    pub fn all() -> &'static [BaseShape] {
        &[BaseShape::Rectangle, BaseShape::Hexagon, BaseShape::Circle]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BaseShape::Rectangle => "rectangle",
            BaseShape::Hexagon => "hexagon",
            BaseShape::Circle => "circle",
        }
    }

    pub fn from_name(name: &str) -> Option<BaseShape> {
        match name.to_lowercase().as_str() {
            "rectangle" | "rect" => Some(BaseShape::Rectangle),
            "hexagon" | "hex" => Some(BaseShape::Hexagon),
            "circle" => Some(BaseShape::Circle),
            _ => None,
        }
    }
}

/// Margin factor keeping masked cells clear of the ideal silhouette, so a
/// cell straddling the boundary never pokes out of the base cut-out.
const SHAPE_MARGIN: f64 = 0.95;

/// Test whether a grid cell belongs to the footprint.
///
/// The cell is sampled at its center. Pure predicate, no side effects.
pub fn in_shape(x: i32, y: i32, width: i32, height: i32, shape: BaseShape) -> bool {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;

    match shape {
        BaseShape::Rectangle => true,

        BaseShape::Hexagon => {
            let radius = width.min(height) as f64 / 2.0;
            let dx = x as f64 + 0.5 - center_x;
            let dy = y as f64 + 0.5 - center_y;

            let angle = dy.atan2(dx);
            let distance = (dx * dx + dy * dy).sqrt();

            // Max distance from center to a regular flat-top hexagon's edge
            // at this angle: apothem over the cosine of the angular offset
            // from the nearest edge normal.
            let hex_angle = PI / 6.0;
            let sector = PI / 3.0;
            let normalized = ((angle % sector) + sector) % sector;
            let max_dist = radius * hex_angle.cos() / (normalized - hex_angle).cos();

            distance <= max_dist * SHAPE_MARGIN
        }

        BaseShape::Circle => {
            let radius = width.min(height) as f64 / 2.0;
            let dx = x as f64 + 0.5 - center_x;
            let dy = y as f64 + 0.5 - center_y;
            let distance = (dx * dx + dy * dy).sqrt();
            distance <= radius * SHAPE_MARGIN
        }
    }
}

/// Vertices of a flat-top regular hexagon around a center.
pub fn hexagon_points(center: Point, radius: f64) -> Vec<Point> {
    (0..6)
        .map(|i| {
            let angle = PI / 3.0 * i as f64;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_accepts_everything() {
        for y in 0..10 {
            for x in 0..10 {
                assert!(in_shape(x, y, 10, 10, BaseShape::Rectangle));
            }
        }
    }

    #[test]
    fn circle_rejects_corners_keeps_center() {
        assert!(in_shape(5, 5, 10, 10, BaseShape::Circle));
        assert!(!in_shape(0, 0, 10, 10, BaseShape::Circle));
        assert!(!in_shape(9, 9, 10, 10, BaseShape::Circle));
    }

    #[test]
    fn hexagon_rejects_corners_keeps_center() {
        assert!(in_shape(7, 7, 15, 15, BaseShape::Hexagon));
        assert!(!in_shape(0, 0, 15, 15, BaseShape::Hexagon));
        assert!(!in_shape(14, 14, 15, 15, BaseShape::Hexagon));
    }

    #[test]
    fn hexagon_subset_of_circle_bounding_radius() {
        // Every hexagon cell is within the circumscribed circle's radius.
        let (w, h) = (20, 20);
        let radius = w.min(h) as f64 / 2.0;
        for y in 0..h {
            for x in 0..w {
                if in_shape(x, y, w, h, BaseShape::Hexagon) {
                    let dx = x as f64 + 0.5 - w as f64 / 2.0;
                    let dy = y as f64 + 0.5 - h as f64 / 2.0;
                    assert!((dx * dx + dy * dy).sqrt() <= radius);
                }
            }
        }
    }

    #[test]
    fn hexagon_point_count_and_radius() {
        let pts = hexagon_points(Point::new(10.0, 10.0), 5.0);
        assert_eq!(pts.len(), 6);
        for p in &pts {
            assert!((p.distance(Point::new(10.0, 10.0)) - 5.0).abs() < 1e-9);
        }
        // Flat-top: first vertex sits due east of the center.
        assert!((pts[0].x - 15.0).abs() < 1e-9);
        assert!((pts[0].y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn shape_names_round_trip() {
        for shape in BaseShape::all() {
            assert_eq!(BaseShape::from_name(shape.name()), Some(*shape));
        }
        assert_eq!(BaseShape::from_name("triangle"), None);
    }
}
