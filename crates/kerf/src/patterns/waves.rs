//! Sine-wave rows, emitted as polylines so inside-runs stay continuous
//! after clipping.

use std::f64::consts::PI;

use crate::geometry::Point;
use super::frame::TextureFrame;

/// One polyline per row; rows step `spacing * 1.5`, amplitude
/// `spacing * 0.4`, wavelength `spacing * 2`, sampled every quarter wave.
pub fn raw_waves(frame: &TextureFrame, spacing: f64) -> Vec<Vec<Point>> {
    let amplitude = spacing * 0.4;
    let wavelength = spacing * 2.0;
    let step = wavelength / 4.0;

    let mut rows = Vec::new();
    let mut y = spacing;
    while y < frame.height {
        let mut points = vec![Point::new(frame.x0, frame.y0 + y)];
        let mut x = 0.0;
        while x <= frame.width {
            let phase = x / wavelength * 2.0 * PI;
            points.push(Point::new(
                frame.x0 + x,
                frame.y0 + y + phase.sin() * amplitude,
            ));
            x += step;
        }
        rows.push(points);
        y += spacing * 1.5;
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Cell;

    fn frame() -> TextureFrame {
        TextureFrame::new(&[Cell::new(0, 0), Cell::new(1, 0)], 10.0).unwrap()
    }

    #[test]
    fn rows_cover_frame_width() {
        let rows = raw_waves(&frame(), 2.0);
        assert!(!rows.is_empty());
        let f = frame();
        for row in &rows {
            assert!(row.len() > 2);
            assert!((row[0].x - f.x0).abs() < 1e-9);
            assert!(row.last().unwrap().x <= f.x0 + f.width + 1e-9);
        }
    }

    #[test]
    fn excursion_bounded_by_amplitude() {
        let spacing = 2.0;
        let rows = raw_waves(&frame(), spacing);
        for row in &rows {
            let baseline = row[0].y;
            for p in row {
                assert!((p.y - baseline).abs() <= spacing * 0.4 + 1e-9);
            }
        }
    }
}
