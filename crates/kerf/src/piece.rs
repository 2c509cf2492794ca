//! Puzzle pieces and their annotation helpers.

use std::collections::HashSet;

use crate::patterns::Texture;

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One puzzle piece: a connected set of cells plus display attributes.
///
/// Ids are dense when pieces are created but become non-contiguous after
/// small-piece merging — look pieces up by id, never by index.
#[derive(Debug, Clone)]
pub struct Piece {
    pub id: u32,
    pub cells: Vec<Cell>,
    pub color: String,
    pub text: Option<String>,
    pub texture: Option<Texture>,
}

impl Piece {
    pub fn new(id: u32, cells: Vec<Cell>, color: String) -> Self {
        Self {
            id,
            cells,
            color,
            text: None,
            texture: None,
        }
    }

    /// Cell membership set for O(1) neighbor checks.
    pub fn cell_set(&self) -> HashSet<Cell> {
        self.cells.iter().copied().collect()
    }

    /// Bounding box over cells as (min_x, min_y, max_x, max_y), inclusive.
    pub fn bounding_box(&self) -> Option<(i32, i32, i32, i32)> {
        if self.cells.is_empty() {
            return None;
        }
        let min_x = self.cells.iter().map(|c| c.x).min().unwrap();
        let max_x = self.cells.iter().map(|c| c.x).max().unwrap();
        let min_y = self.cells.iter().map(|c| c.y).min().unwrap();
        let max_y = self.cells.iter().map(|c| c.y).max().unwrap();
        Some((min_x, min_y, max_x, max_y))
    }

    /// Center of the piece's bounding box in document units.
    pub fn center(&self, cell_size: f64) -> Option<(f64, f64)> {
        self.bounding_box().map(|(min_x, min_y, max_x, max_y)| {
            (
                ((min_x + max_x) as f64 / 2.0 + 0.5) * cell_size,
                ((min_y + max_y) as f64 / 2.0 + 0.5) * cell_size,
            )
        })
    }
}

/// Anchor for a piece caption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAnchor {
    pub x: f64,
    pub y: f64,
    /// Horizontal room available to the caption, in document units.
    pub width: f64,
    /// Whether two adjacent top-row cells back the caption.
    pub double_cell: bool,
}

/// Caption anchor: the leftmost cell of the piece's top row, widened to two
/// cells when the next cell to the right also belongs to the piece.
pub fn text_anchor(cells: &[Cell], cell_size: f64) -> Option<TextAnchor> {
    let min_y = cells.iter().map(|c| c.y).min()?;
    let left = cells
        .iter()
        .filter(|c| c.y == min_y)
        .min_by_key(|c| c.x)?;

    let has_right_neighbor = cells
        .iter()
        .any(|c| c.x == left.x + 1 && c.y == left.y);

    if has_right_neighbor {
        Some(TextAnchor {
            x: (left.x + 1) as f64 * cell_size,
            y: (left.y as f64 + 0.5) * cell_size,
            width: cell_size * 2.0,
            double_cell: true,
        })
    } else {
        Some(TextAnchor {
            x: (left.x as f64 + 0.5) * cell_size,
            y: (left.y as f64 + 0.5) * cell_size,
            width: cell_size,
            double_cell: false,
        })
    }
}

/// Caption font size, bucketed by text length and capped at the cell height.
pub fn caption_font_size(text: &str, cell_size: f64, available_width: f64) -> f64 {
    let base = available_width * 0.8;
    let len = text.chars().count();
    let max_height = cell_size * 0.8;

    let size = match len {
        l if l > 10 => base * 0.15,
        l if l > 8 => base * 0.2,
        l if l > 6 => base * 0.25,
        l if l > 4 => base * 0.35,
        l if l > 2 => base * 0.5,
        _ => base * 0.7,
    };

    size.min(max_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
        coords.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn bounding_box_and_center() {
        let piece = Piece::new(0, cells(&[(1, 1), (2, 1), (2, 2)]), "#fff".into());
        assert_eq!(piece.bounding_box(), Some((1, 1, 2, 2)));
        let (cx, cy) = piece.center(10.0).unwrap();
        assert_eq!((cx, cy), (20.0, 20.0));
    }

    #[test]
    fn empty_piece_has_no_box() {
        let piece = Piece::new(0, vec![], "#fff".into());
        assert_eq!(piece.bounding_box(), None);
        assert_eq!(piece.center(10.0), None);
    }

    #[test]
    fn anchor_widens_over_two_cells() {
        let anchor = text_anchor(&cells(&[(3, 2), (4, 2), (3, 3)]), 10.0).unwrap();
        assert!(anchor.double_cell);
        assert_eq!(anchor.x, 40.0); // boundary between the two top cells
        assert_eq!(anchor.width, 20.0);
    }

    #[test]
    fn anchor_single_cell() {
        let anchor = text_anchor(&cells(&[(3, 2), (3, 3), (4, 3)]), 10.0).unwrap();
        assert!(!anchor.double_cell);
        assert_eq!(anchor.x, 35.0);
        assert_eq!(anchor.width, 10.0);
    }

    #[test]
    fn font_size_shrinks_with_length() {
        let short = caption_font_size("ab", 10.0, 20.0);
        let long = caption_font_size("abcdefghijkl", 10.0, 20.0);
        assert!(short > long);
        // Never taller than a cell allows.
        assert!(caption_font_size("a", 10.0, 100.0) <= 8.0);
    }
}
