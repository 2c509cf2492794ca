//! Cross lattice.
//!
//! Crosses are plain segments: no center test, every arm is rotated and
//! clipped independently like the line families.

use crate::geometry::Seg;
use super::frame::TextureFrame;

/// Two diagonal arms per lattice unit; lattice start `spacing * 1.5`,
/// step `spacing * 2`, arm half-diagonal `spacing * 0.6`.
pub fn raw_cross(frame: &TextureFrame, spacing: f64) -> Vec<Seg> {
    let size = spacing * 0.6;
    let mut segs = Vec::new();

    let mut y = spacing * 1.5;
    while y < frame.height {
        let mut x = spacing * 1.5;
        while x < frame.width {
            let (cx, cy) = (frame.x0 + x, frame.y0 + y);
            segs.push(Seg::new(cx - size, cy - size, cx + size, cy + size));
            segs.push(Seg::new(cx + size, cy - size, cx - size, cy + size));
            x += spacing * 2.0;
        }
        y += spacing * 2.0;
    }
    segs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Cell;

    #[test]
    fn arms_come_in_pairs() {
        let frame = TextureFrame::new(&[Cell::new(0, 0)], 10.0).unwrap();
        let segs = raw_cross(&frame, 2.0);
        assert!(!segs.is_empty());
        assert_eq!(segs.len() % 2, 0);
    }

    #[test]
    fn arms_cross_at_the_unit_center() {
        let frame = TextureFrame::new(&[Cell::new(0, 0)], 10.0).unwrap();
        let segs = raw_cross(&frame, 2.0);
        for pair in segs.chunks(2) {
            assert_eq!(pair[0].midpoint(), pair[1].midpoint());
        }
    }
}
