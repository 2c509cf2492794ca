//! Boundary tracing: from a piece's cell set to an ordered closed outline.
//!
//! Every cell side without a same-piece neighbor becomes a directed unit
//! edge (top, right, bottom, left orientations chosen so the chained loop
//! winds clockwise on screen). Edges are chained end-to-start and collinear
//! runs collapsed, yielding a minimal-vertex loop.

use std::collections::HashSet;

use crate::geometry::{Point, Polygon};
use crate::piece::Cell;

/// One collapsed boundary segment, in grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySeg {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub dx: f64,
    pub dy: f64,
}

impl BoundarySeg {
    fn from_points(start: (i32, i32), end: (i32, i32)) -> Self {
        Self {
            x1: start.0 as f64,
            y1: start.1 as f64,
            x2: end.0 as f64,
            y2: end.1 as f64,
            dx: (end.0 - start.0) as f64,
            dy: (end.1 - start.1) as f64,
        }
    }

    /// The same segment walked in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            x1: self.x2,
            y1: self.y2,
            x2: self.x1,
            y2: self.y1,
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

/// Directed outer edges of a cell set, unchained, in emission order.
fn outer_edges(cells: &[Cell]) -> Vec<((i32, i32), (i32, i32))> {
    let set: HashSet<Cell> = cells.iter().copied().collect();
    let mut edges = Vec::new();

    for &Cell { x, y } in cells {
        // Top
        if !set.contains(&Cell::new(x, y - 1)) {
            edges.push(((x, y), (x + 1, y)));
        }
        // Right
        if !set.contains(&Cell::new(x + 1, y)) {
            edges.push(((x + 1, y), (x + 1, y + 1)));
        }
        // Bottom
        if !set.contains(&Cell::new(x, y + 1)) {
            edges.push(((x + 1, y + 1), (x, y + 1)));
        }
        // Left
        if !set.contains(&Cell::new(x - 1, y)) {
            edges.push(((x, y + 1), (x, y)));
        }
    }

    edges
}

/// Chain unit edges into an ordered vertex loop.
///
/// Assumes a simply connected cell set with a single outer boundary; a
/// multiply-connected set stops chaining at the first loop closed and the
/// remaining edges are dropped (documented precondition violation).
fn chain_edges(edges: &[((i32, i32), (i32, i32))]) -> Vec<(i32, i32)> {
    if edges.is_empty() {
        return Vec::new();
    }

    let mut used = vec![false; edges.len()];
    let mut vertices = vec![edges[0].0];
    let mut cur = edges[0];
    used[0] = true;
    let mut remaining = edges.len() - 1;

    while remaining > 0 {
        let mut found = false;
        for (i, edge) in edges.iter().enumerate() {
            if used[i] || edge.0 != cur.1 {
                continue;
            }
            vertices.push(cur.1);
            cur = *edge;
            used[i] = true;
            remaining -= 1;
            found = true;
            break;
        }
        if !found {
            break;
        }
    }

    // The closing edge ends at the first vertex; keep its start only.
    if cur.1 != vertices[0] {
        vertices.push(cur.1);
    }

    vertices
}

/// Drop vertices whose incoming and outgoing directions are collinear.
fn collapse_collinear(vertices: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let n = vertices.len();
    if n < 3 {
        return vertices.to_vec();
    }

    let mut kept = Vec::with_capacity(n);
    for i in 0..n {
        let prev = vertices[(i + n - 1) % n];
        let v = vertices[i];
        let next = vertices[(i + 1) % n];
        let d1 = (v.0 - prev.0, v.1 - prev.1);
        let d2 = (next.0 - v.0, next.1 - v.1);
        if d1.0 * d2.1 - d1.1 * d2.0 != 0 {
            kept.push(v);
        }
    }
    kept
}

/// Ordered, collapsed boundary segments of a cell set, in grid units.
pub fn boundary_segments(cells: &[Cell]) -> Vec<BoundarySeg> {
    let vertices = collapse_collinear(&chain_edges(&outer_edges(cells)));
    let n = vertices.len();
    if n < 3 {
        return Vec::new();
    }

    (0..n)
        .map(|i| BoundarySeg::from_points(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

/// The boundary loop as a polygon scaled to document units.
///
/// This is the clip shape for engrave textures: the sharp-cornered outline,
/// with consecutive collinear vertices already removed.
pub fn cells_to_polygon(cells: &[Cell], cell_size: f64) -> Polygon {
    let points = boundary_segments(cells)
        .iter()
        .map(|seg| Point::new(seg.x1 * cell_size, seg.y1 * cell_size))
        .collect();
    Polygon::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
        coords.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn empty_set_traces_nothing() {
        assert!(boundary_segments(&[]).is_empty());
        assert!(cells_to_polygon(&[], 10.0).points.is_empty());
    }

    #[test]
    fn single_cell_is_a_square_loop() {
        let segs = boundary_segments(&cells(&[(2, 3)]));
        assert_eq!(segs.len(), 4);
        // Loop closes: every end is the next start.
        for i in 0..4 {
            let next = segs[(i + 1) % 4];
            assert_eq!((segs[i].x2, segs[i].y2), (next.x1, next.y1));
        }
    }

    #[test]
    fn domino_collapses_to_rectangle() {
        // Two cells in a row: 6 unit edges collapse to 4 segments.
        let segs = boundary_segments(&cells(&[(0, 0), (1, 0)]));
        assert_eq!(segs.len(), 4);
        let poly = cells_to_polygon(&cells(&[(0, 0), (1, 0)]), 1.0);
        assert_eq!(poly.points.len(), 4);
        assert_eq!(poly.bounding_box(), Some((0.0, 0.0, 2.0, 1.0)));
    }

    #[test]
    fn l_tromino_has_six_corners() {
        let poly = cells_to_polygon(&cells(&[(0, 0), (0, 1), (1, 1)]), 1.0);
        assert_eq!(poly.points.len(), 6);
    }

    #[test]
    fn winding_is_clockwise_on_screen() {
        let poly = cells_to_polygon(&cells(&[(0, 0)]), 1.0);
        assert!(poly.signed_area() > 0.0);
    }

    #[test]
    fn polygon_scales_with_cell_size() {
        let poly = cells_to_polygon(&cells(&[(1, 1)]), 10.0);
        assert_eq!(poly.bounding_box(), Some((10.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn no_consecutive_collinear_vertices() {
        let poly = cells_to_polygon(
            &cells(&[(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]),
            1.0,
        );
        let pts = &poly.points;
        let n = pts.len();
        assert_eq!(n, 4); // a 3x2 rectangle
        for i in 0..n {
            let prev = pts[(i + n - 1) % n];
            let v = pts[i];
            let next = pts[(i + 1) % n];
            let cross = (v.x - prev.x) * (next.y - v.y) - (v.y - prev.y) * (next.x - v.x);
            assert!(cross.abs() > 1e-9);
        }
    }
}
