//! Stochastic region growing.
//!
//! Each unallocated in-mask cell, visited in row-major order, seeds one
//! piece. Growth is frontier expansion under heuristic scoring: snakiness
//! favors thin continuing runs, complexity favors branches, reversals and
//! ragged perimeters, intricate mode pushes pieces to interlock with their
//! neighbors. The scoring term order is part of the generation contract —
//! reordering draws from the stream changes every puzzle.

use std::collections::HashSet;

use crate::grid::{DIRECTIONS, GridState};
use crate::merge::merge_undersized;
use crate::palette;
use crate::piece::{Cell, Piece};
use crate::rng::Lcg;
use crate::shape::{BaseShape, in_shape};

/// Inputs to a generation pass.
#[derive(Debug, Clone)]
pub struct GrowthParams {
    pub width: i32,
    pub height: i32,
    pub min_size: usize,
    pub max_size: usize,
    pub shape: BaseShape,
    pub snakiness: f64,
    pub complexity: f64,
    pub intricate: bool,
    pub seed: u64,
    pub palette: String,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            min_size: 4,
            max_size: 8,
            shape: BaseShape::Rectangle,
            snakiness: 0.5,
            complexity: 0.5,
            intricate: false,
            seed: 42,
            palette: "wood".to_string(),
        }
    }
}

/// Generate the full piece set for a grid.
///
/// The ownership grid lives and dies inside this call. Identical params
/// always produce an identical piece set.
pub fn generate_pieces(params: &GrowthParams) -> Vec<Piece> {
    let mut grid = GridState::new(params.width, params.height);
    let mut rng = Lcg::new(params.seed);
    let mut pieces: Vec<Piece> = Vec::new();
    let mut next_id: u32 = 0;

    for y in 0..params.height {
        for x in 0..params.width {
            if grid.is_open(x, y) && in_shape(x, y, params.width, params.height, params.shape) {
                let cells = grow_piece(&mut grid, &mut rng, x, y, next_id, params);
                let color = palette::color_for(&params.palette, next_id).to_string();
                pieces.push(Piece::new(next_id, cells, color));
                next_id += 1;
            }
        }
    }

    merge_undersized(&mut pieces, &mut grid, params.min_size);
    pieces
}

struct Candidate {
    x: i32,
    y: i32,
    score: f64,
}

fn grow_piece(
    grid: &mut GridState,
    rng: &mut Lcg,
    start_x: i32,
    start_y: i32,
    id: u32,
    p: &GrowthParams,
) -> Vec<Cell> {
    let target = rng.next_size(p.min_size, p.max_size);

    let mut cells = vec![Cell::new(start_x, start_y)];
    grid.claim(start_x, start_y, id);

    let mut last_dir = DIRECTIONS[rng.next_index(4)];
    let mut history: Vec<(i32, i32)> = Vec::new();

    while cells.len() < target {
        let cell_set: HashSet<Cell> = cells.iter().copied().collect();
        let frontier = select_frontier(&cells, &cell_set, rng, p);

        let mut candidates: Vec<Candidate> = Vec::new();
        for cell in &frontier {
            for &(dx, dy) in &DIRECTIONS {
                let nx = cell.x + dx;
                let ny = cell.y + dy;
                if !grid.is_open(nx, ny)
                    || !in_shape(nx, ny, p.width, p.height, p.shape)
                    || candidates.iter().any(|c| c.x == nx && c.y == ny)
                {
                    continue;
                }

                let score = score_candidate(
                    nx, ny, (dx, dy), grid, &cells, &cell_set, last_dir, &history, rng, id, p,
                );
                candidates.push(Candidate { x: nx, y: ny, score });
            }
        }

        // Frontier exhausted. Accept the piece if it already meets the
        // minimum; otherwise take any open in-mask neighbor at score zero.
        if candidates.is_empty() {
            if cells.len() >= p.min_size {
                break;
            }
            for cell in &cells {
                for &(dx, dy) in &DIRECTIONS {
                    let nx = cell.x + dx;
                    let ny = cell.y + dy;
                    if grid.is_open(nx, ny)
                        && in_shape(nx, ny, p.width, p.height, p.shape)
                        && !candidates.iter().any(|c| c.x == nx && c.y == ny)
                    {
                        candidates.push(Candidate { x: nx, y: ny, score: 0.0 });
                    }
                }
            }
            if candidates.is_empty() {
                break;
            }
        }

        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());

        // Leading window shrinks as determinism increases.
        let window = if p.complexity > 0.7 || p.intricate {
            ((candidates.len() as f64 * 0.2) as usize).max(1)
        } else if p.snakiness > 0.5 {
            candidates.len().min(2)
        } else {
            candidates.len().min(4)
        };
        let chosen = &candidates[rng.next_index(window)];

        let last_cell = cells[cells.len() - 1];
        let new_dir = (
            (chosen.x - last_cell.x).signum(),
            (chosen.y - last_cell.y).signum(),
        );
        if new_dir != (0, 0) {
            last_dir = new_dir;
            history.push(new_dir);
            if history.len() > 5 {
                history.remove(0);
            }
        }

        let cell = Cell::new(chosen.x, chosen.y);
        grid.claim(cell.x, cell.y, id);
        cells.push(cell);
    }

    cells
}

/// Expansion frontier for the next growth step.
fn select_frontier(
    cells: &[Cell],
    cell_set: &HashSet<Cell>,
    rng: &mut Lcg,
    p: &GrowthParams,
) -> Vec<Cell> {
    if p.complexity > 0.6 || p.intricate {
        // Tips and corners, plus a complexity-weighted sample of the body
        // so branches can sprout from the interior.
        let mut frontier: Vec<Cell> = cells
            .iter()
            .filter(|c| own_neighbors(**c, cell_set) <= 2)
            .copied()
            .collect();
        let sampled: Vec<Cell> = cells
            .iter()
            .filter(|_| rng.next_bool(p.complexity * 0.3))
            .copied()
            .collect();
        for c in sampled {
            if !frontier.contains(&c) {
                frontier.push(c);
            }
        }
        if frontier.is_empty() {
            frontier = last_n(cells, 3);
        }
        frontier
    } else if p.snakiness > 0.5 {
        // Pure tips only.
        let tips: Vec<Cell> = cells
            .iter()
            .filter(|c| own_neighbors(**c, cell_set) <= 1)
            .copied()
            .collect();
        if tips.is_empty() { last_n(cells, 2) } else { tips }
    } else {
        cells.to_vec()
    }
}

#[inline]
fn last_n(cells: &[Cell], n: usize) -> Vec<Cell> {
    cells[cells.len().saturating_sub(n)..].to_vec()
}

#[inline]
fn own_neighbors(cell: Cell, cell_set: &HashSet<Cell>) -> usize {
    DIRECTIONS
        .iter()
        .filter(|(dx, dy)| cell_set.contains(&Cell::new(cell.x + dx, cell.y + dy)))
        .count()
}

/// 2x2 completions: the three cells that, together with the candidate,
/// close a square, one pattern per diagonal quadrant.
const BLOCKS_2X2: [[(i32, i32); 3]; 4] = [
    [(0, -1), (1, -1), (1, 0)],
    [(1, 0), (1, 1), (0, 1)],
    [(0, 1), (-1, 1), (-1, 0)],
    [(-1, 0), (-1, -1), (0, -1)],
];

/// 3x2 / 2x3 near-completions, checked only at higher complexity.
const BLOCKS_3X2: [[(i32, i32); 5]; 4] = [
    [(1, 0), (2, 0), (0, 1), (1, 1), (2, 1)],
    [(-1, 0), (-2, 0), (0, 1), (-1, 1), (-2, 1)],
    [(0, 1), (0, 2), (1, 0), (1, 1), (1, 2)],
    [(0, -1), (0, -2), (1, 0), (1, -1), (1, -2)],
];

#[allow(clippy::too_many_arguments)]
fn score_candidate(
    nx: i32,
    ny: i32,
    dir: (i32, i32),
    grid: &GridState,
    cells: &[Cell],
    cell_set: &HashSet<Cell>,
    last_dir: (i32, i32),
    history: &[(i32, i32)],
    rng: &mut Lcg,
    id: u32,
    p: &GrowthParams,
) -> f64 {
    let mut score = rng.next_f64() * 0.2;

    let mut adjacent_own = 0;
    let mut adjacent_other = 0;
    for &(dx, dy) in &DIRECTIONS {
        match grid.owner(nx + dx, ny + dy) {
            Some(owner) if owner == id => adjacent_own += 1,
            Some(_) => adjacent_other += 1,
            None => {}
        }
    }

    // Clumping against the piece's own body.
    score -= adjacent_own as f64 * (p.snakiness + p.complexity) * 1.5;

    // Directional continuity.
    if dir == last_dir {
        score += p.snakiness * 0.6;
    }

    // Probabilistic reward for breaking the latest direction.
    if p.complexity > 0.4 {
        let turns = history.last().is_some_and(|&last| dir != last);
        if turns && rng.next_bool(p.complexity) {
            score += p.complexity * 0.8;
        }
    }

    // Anti-blockiness: completing a 2x2, or nearly completing a 3x2/2x3.
    let mut blocky = BLOCKS_2X2.iter().any(|pattern| {
        pattern
            .iter()
            .filter(|(dx, dy)| cell_set.contains(&Cell::new(nx + dx, ny + dy)))
            .count()
            >= 3
    });
    if p.complexity > 0.5 && !blocky {
        blocky = BLOCKS_3X2.iter().any(|pattern| {
            pattern
                .iter()
                .filter(|(dx, dy)| cell_set.contains(&Cell::new(nx + dx, ny + dy)))
                .count()
                >= pattern.len() - 1
        });
    }
    if blocky {
        score -= (p.snakiness + p.complexity) * 2.0;
    }

    // Ragged-perimeter reward: adding a cell with k own neighbors changes
    // the cell-boundary perimeter by 4 - 2k.
    if p.complexity > 0.3 && adjacent_own < 2 {
        score += p.complexity * 0.4;
    }

    // Interlocking with already-grown neighbors.
    if p.intricate || p.complexity > 0.5 {
        score += adjacent_other as f64 * 0.4;
    }

    // Compact-rectangle penalty: dense bounding-box fill reads as a block.
    if cells.len() > 3 && is_compact_rectangle(cells, nx, ny) {
        score -= p.complexity * 1.5;
    }

    score
}

/// Would the piece plus the candidate fill > 70% of its bounding box with
/// both spans at least two cells?
fn is_compact_rectangle(cells: &[Cell], nx: i32, ny: i32) -> bool {
    let count = cells.len() + 1;
    if count < 4 {
        return false;
    }

    let min_x = cells.iter().map(|c| c.x).min().unwrap().min(nx);
    let max_x = cells.iter().map(|c| c.x).max().unwrap().max(nx);
    let min_y = cells.iter().map(|c| c.y).min().unwrap().min(ny);
    let max_y = cells.iter().map(|c| c.y).max().unwrap().max(ny);

    let bounding_area = ((max_x - min_x + 1) * (max_y - min_y + 1)) as f64;
    let fill_ratio = count as f64 / bounding_area;

    fill_ratio > 0.7 && max_x - min_x >= 1 && max_y - min_y >= 1
}
