//! Shared generation frame for texture patterns.
//!
//! Patterns are generated over the piece's bounding box expanded outward so
//! that a rotated pattern still covers the whole piece before clipping.

use crate::geometry::Point;
use crate::piece::Cell;

/// Expanded generation area for one piece, in document units.
#[derive(Debug, Clone, Copy)]
pub struct TextureFrame {
    /// Top-left corner of the expanded box.
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation center: the center of the piece's cell bounding box.
    pub center: Point,
}

impl TextureFrame {
    /// Build the frame from a piece's cells, or None when the piece is
    /// empty. Expansion is half the difference between the box diagonal and
    /// its shorter side — the minimum that keeps any rotation covered.
    pub fn new(cells: &[Cell], cell_size: f64) -> Option<Self> {
        let min_x = cells.iter().map(|c| c.x).min()?;
        let max_x = cells.iter().map(|c| c.x).max()?;
        let min_y = cells.iter().map(|c| c.y).min()?;
        let max_y = cells.iter().map(|c| c.y).max()?;

        let base_width = (max_x - min_x + 1) as f64 * cell_size;
        let base_height = (max_y - min_y + 1) as f64 * cell_size;

        let diagonal = (base_width * base_width + base_height * base_height).sqrt();
        let expansion = (diagonal - base_width.min(base_height)) / 2.0;

        Some(Self {
            x0: min_x as f64 * cell_size - expansion,
            y0: min_y as f64 * cell_size - expansion,
            width: base_width + expansion * 2.0,
            height: base_height + expansion * 2.0,
            center: Point::new(
                ((min_x + max_x) as f64 / 2.0 + 0.5) * cell_size,
                ((min_y + max_y) as f64 / 2.0 + 0.5) * cell_size,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_no_frame() {
        assert!(TextureFrame::new(&[], 10.0).is_none());
    }

    #[test]
    fn square_piece_expansion_matches_diagonal() {
        // diagonal - min side for a square is (sqrt(2) - 1) * side.
        let cells = vec![Cell::new(0, 0)];
        let frame = TextureFrame::new(&cells, 10.0).unwrap();
        let expansion = (10.0 * 2.0_f64.sqrt() - 10.0) / 2.0;
        assert!((frame.x0 - (0.0 - expansion)).abs() < 1e-9);
        assert!((frame.width - (10.0 + 2.0 * expansion)).abs() < 1e-9);
        assert_eq!(frame.center, Point::new(5.0, 5.0));
    }

    #[test]
    fn elongated_piece_expands_past_rotation() {
        // A 3x1 strip: rotated 90 degrees it spans 30 units vertically, so
        // the expanded box must be at least that tall.
        let cells = vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)];
        let frame = TextureFrame::new(&cells, 10.0).unwrap();
        assert!(frame.height >= 30.0 - 1e-9);
        assert_eq!(frame.center, Point::new(15.0, 5.0));
    }
}
