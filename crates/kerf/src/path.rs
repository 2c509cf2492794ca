//! Typed drawing commands and rounded-corner outline emission.
//!
//! The geometry core never concatenates path strings; it builds
//! [`PathCmd`] sequences, and the document assembler converts them to SVG
//! path syntax with [`to_path_data`] at the very end.

use crate::geometry::Point;
use crate::piece::Cell;
use crate::shape::hexagon_points;
use crate::trace::{BoundarySeg, boundary_segments};

/// One drawing command. `Arc` is a circular arc of the given radius to the
/// target point; `sweep` selects the turn direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    Arc { radius: f64, sweep: bool, to: Point },
    Close,
}

/// Convert a command sequence to SVG path data.
pub fn to_path_data(cmds: &[PathCmd]) -> String {
    let mut d = String::new();
    for cmd in cmds {
        if !d.is_empty() {
            d.push(' ');
        }
        match cmd {
            PathCmd::MoveTo(p) => d.push_str(&format!("M {} {}", fmt(p.x), fmt(p.y))),
            PathCmd::LineTo(p) => d.push_str(&format!("L {} {}", fmt(p.x), fmt(p.y))),
            PathCmd::Arc { radius, sweep, to } => d.push_str(&format!(
                "A {} {} 0 0 {} {} {}",
                fmt(*radius),
                fmt(*radius),
                if *sweep { 1 } else { 0 },
                fmt(to.x),
                fmt(to.y)
            )),
            PathCmd::Close => d.push('Z'),
        }
    }
    d
}

/// Format a coordinate without trailing float noise.
pub(crate) fn fmt(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

/// Walk collapsed boundary segments and emit a rounded-corner closed path.
///
/// Each segment is shortened at both ends by the corner radius and joined to
/// the next with an arc whose sweep follows the sign of the cross product of
/// consecutive directions (convex vs. concave corners arc opposite ways).
fn emit_rounded(segs: &[BoundarySeg], cell_size: f64, radius: f64) -> Vec<PathCmd> {
    let n = segs.len();
    if n == 0 {
        return Vec::new();
    }

    let mut cmds = Vec::with_capacity(n * 2 + 2);

    for i in 0..n {
        let cur = segs[i];
        let next = segs[(i + 1) % n];

        let len = (cur.dx * cur.dx + cur.dy * cur.dy).sqrt();
        if len == 0.0 {
            continue;
        }
        let (ux, uy) = (cur.dx / len, cur.dy / len);

        if i == 0 {
            cmds.push(PathCmd::MoveTo(Point::new(
                cur.x1 * cell_size + ux * radius,
                cur.y1 * cell_size + uy * radius,
            )));
        }

        cmds.push(PathCmd::LineTo(Point::new(
            cur.x2 * cell_size - ux * radius,
            cur.y2 * cell_size - uy * radius,
        )));

        let turn = cur.dx * next.dy - cur.dy * next.dx;
        if turn != 0.0 {
            let next_len = (next.dx * next.dx + next.dy * next.dy).sqrt();
            let (nux, nuy) = (next.dx / next_len, next.dy / next_len);
            cmds.push(PathCmd::Arc {
                radius,
                sweep: turn > 0.0,
                to: Point::new(
                    next.x1 * cell_size + nux * radius,
                    next.y1 * cell_size + nuy * radius,
                ),
            });
        }
    }

    cmds.push(PathCmd::Close);
    cmds
}

/// Rounded cut outline of a piece, in document units.
pub fn piece_outline(cells: &[Cell], cell_size: f64, corner_radius: f64) -> Vec<PathCmd> {
    emit_rounded(&boundary_segments(cells), cell_size, corner_radius)
}

/// The same outline with inverted winding.
///
/// Combined with an outer base outline under even-odd fill this renders the
/// frame between the base edge and the puzzle silhouette.
pub fn inverted_outline(cells: &[Cell], cell_size: f64, corner_radius: f64) -> Vec<PathCmd> {
    let mut segs: Vec<BoundarySeg> = boundary_segments(cells)
        .iter()
        .map(|s| s.reversed())
        .collect();
    segs.reverse();
    emit_rounded(&segs, cell_size, corner_radius)
}

/// Axis-aligned rectangle with rounded corners.
pub fn rounded_rect(x: f64, y: f64, width: f64, height: f64, radius: f64) -> Vec<PathCmd> {
    vec![
        PathCmd::MoveTo(Point::new(x + radius, y)),
        PathCmd::LineTo(Point::new(x + width - radius, y)),
        PathCmd::Arc { radius, sweep: true, to: Point::new(x + width, y + radius) },
        PathCmd::LineTo(Point::new(x + width, y + height - radius)),
        PathCmd::Arc { radius, sweep: true, to: Point::new(x + width - radius, y + height) },
        PathCmd::LineTo(Point::new(x + radius, y + height)),
        PathCmd::Arc { radius, sweep: true, to: Point::new(x, y + height - radius) },
        PathCmd::LineTo(Point::new(x, y + radius)),
        PathCmd::Arc { radius, sweep: true, to: Point::new(x + radius, y) },
        PathCmd::Close,
    ]
}

/// Flat-top hexagon outline.
pub fn hexagon_outline(center: Point, radius: f64) -> Vec<PathCmd> {
    let pts = hexagon_points(center, radius);
    let mut cmds = Vec::with_capacity(pts.len() + 2);
    cmds.push(PathCmd::MoveTo(pts[0]));
    for p in &pts[1..] {
        cmds.push(PathCmd::LineTo(*p));
    }
    cmds.push(PathCmd::Close);
    cmds
}

/// Full circle as two half arcs.
pub fn circle_outline(center: Point, radius: f64) -> Vec<PathCmd> {
    vec![
        PathCmd::MoveTo(Point::new(center.x + radius, center.y)),
        PathCmd::Arc { radius, sweep: true, to: Point::new(center.x - radius, center.y) },
        PathCmd::Arc { radius, sweep: true, to: Point::new(center.x + radius, center.y) },
        PathCmd::Close,
    ]
}
