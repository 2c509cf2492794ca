//! Straight-line texture families: horizontal / vertical / diagonal rows
//! and the combined grid.

use crate::geometry::Seg;
use super::frame::TextureFrame;

/// Horizontal rows across the frame.
pub fn raw_lines_h(frame: &TextureFrame, spacing: f64) -> Vec<Seg> {
    let mut segs = Vec::new();
    let mut y = spacing;
    while y < frame.height {
        segs.push(Seg::new(
            frame.x0,
            frame.y0 + y,
            frame.x0 + frame.width,
            frame.y0 + y,
        ));
        y += spacing;
    }
    segs
}

/// Vertical rows across the frame.
pub fn raw_lines_v(frame: &TextureFrame, spacing: f64) -> Vec<Seg> {
    let mut segs = Vec::new();
    let mut x = spacing;
    while x < frame.width {
        segs.push(Seg::new(
            frame.x0 + x,
            frame.y0,
            frame.x0 + x,
            frame.y0 + frame.height,
        ));
        x += spacing;
    }
    segs
}

/// 45-degree diagonals, spacing measured perpendicular to the lines.
pub fn raw_lines_diag(frame: &TextureFrame, spacing: f64) -> Vec<Seg> {
    let mut segs = Vec::new();
    let diagonal_spacing = spacing * 1.414;
    let mut offset = -frame.height;
    while offset < frame.width + frame.height {
        segs.push(Seg::new(
            frame.x0 + offset,
            frame.y0,
            frame.x0 + offset + frame.height,
            frame.y0 + frame.height,
        ));
        offset += diagonal_spacing;
    }
    segs
}

/// Horizontal and vertical rows together.
pub fn raw_grid(frame: &TextureFrame, spacing: f64) -> Vec<Seg> {
    let mut segs = raw_lines_h(frame, spacing);
    segs.extend(raw_lines_v(frame, spacing));
    segs
}
