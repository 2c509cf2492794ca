//! Zigzag rows, emitted as polylines.

use crate::geometry::Point;
use super::frame::TextureFrame;

/// One polyline per row; rows step `spacing * 1.5`, vertices every
/// `spacing`, excursion `spacing * 0.6` alternating by column parity.
pub fn raw_zigzag(frame: &TextureFrame, spacing: f64) -> Vec<Vec<Point>> {
    let zig_height = spacing * 0.6;

    let mut rows = Vec::new();
    let mut y = spacing;
    while y < frame.height {
        let mut points = vec![Point::new(frame.x0, frame.y0 + y)];
        let mut x = 0.0;
        while x <= frame.width {
            let offset = if ((x / spacing).floor() as i64) % 2 == 0 {
                zig_height
            } else {
                -zig_height
            };
            points.push(Point::new(frame.x0 + x, frame.y0 + y + offset));
            x += spacing;
        }
        rows.push(points);
        y += spacing * 1.5;
    }
    rows
}
