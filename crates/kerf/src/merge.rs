//! Folding undersized pieces into their neighbors.
//!
//! A single pass over the pieces that came out of growth below the minimum
//! size: each one hands all its cells to the first adjacent piece found
//! (scan order over its cells, then over the four directions) and is
//! deleted. Grid ownership is updated immediately, so a small piece
//! processed later in the same pass sees merges that already happened.
//! A small piece with no neighbor at all is kept as-is.

use crate::grid::{DIRECTIONS, GridState};
use crate::piece::Piece;

pub fn merge_undersized(pieces: &mut Vec<Piece>, grid: &mut GridState, min_size: usize) {
    let small_ids: Vec<u32> = pieces
        .iter()
        .filter(|p| p.cells.len() < min_size)
        .map(|p| p.id)
        .collect();

    for small_id in small_ids {
        let Some(small) = pieces.iter().find(|p| p.id == small_id) else {
            continue;
        };
        let cells = small.cells.clone();

        let mut target: Option<u32> = None;
        'search: for cell in &cells {
            for &(dx, dy) in &DIRECTIONS {
                if let Some(neighbor) = grid.owner(cell.x + dx, cell.y + dy) {
                    if neighbor != small_id {
                        target = Some(neighbor);
                        break 'search;
                    }
                }
            }
        }

        // Fully isolated: an intentionally accepted undersized piece.
        let Some(target_id) = target else { continue };

        for cell in &cells {
            grid.claim(cell.x, cell.y, target_id);
        }
        if let Some(target_piece) = pieces.iter_mut().find(|p| p.id == target_id) {
            target_piece.cells.extend(cells.iter().copied());
        }
        if let Some(small_piece) = pieces.iter_mut().find(|p| p.id == small_id) {
            small_piece.cells.clear();
        }
    }

    pieces.retain(|p| !p.cells.is_empty());
}
