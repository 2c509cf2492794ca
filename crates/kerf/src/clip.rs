//! Segment and polyline clipping against arbitrary simple polygons.
//!
//! Fabrication software tends to treat SVG clip-path as a "power clip" and
//! ignore it, so engrave geometry is clipped geometrically here: the output
//! document only ever contains paths already trimmed to a piece boundary.

use crate::geometry::{Point, Polygon, Seg};

/// Test if a point is inside a polygon using ray casting.
///
/// Casts a ray to the right and counts edge crossings.
/// Odd crossings = inside, even = outside.
#[inline]
pub fn point_in_polygon(p: Point, polygon: &Polygon) -> bool {
    let pts = &polygon.points;
    let n = pts.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (pts[i].x, pts[i].y);
        let (xj, yj) = (pts[j].x, pts[j].y);

        if ((yi > p.y) != (yj > p.y)) && (p.x < (xj - xi) * (p.y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }

        j = i;
    }

    inside
}

/// Clip a segment against a simple polygon, returning the sub-segments that
/// lie inside.
///
/// Works for convex and concave polygons alike: every intersection parameter
/// `t` along the segment is collected, sorted and deduplicated, and each
/// consecutive interval is kept iff its midpoint passes the containment test.
/// Returns zero, one, or several disjoint sub-segments.
pub fn clip_seg_to_polygon(seg: Seg, polygon: &Polygon) -> Vec<Seg> {
    let pts = &polygon.points;
    if pts.len() < 3 {
        return Vec::new();
    }

    let dx = seg.x2 - seg.x1;
    let dy = seg.y2 - seg.y1;

    // Parameter values where the segment crosses a polygon edge, plus the
    // segment's own endpoints.
    let mut t_values: Vec<f64> = vec![0.0, 1.0];

    let mut j = pts.len() - 1;
    for i in 0..pts.len() {
        let ex = pts[i].x - pts[j].x;
        let ey = pts[i].y - pts[j].y;

        let denom = dx * ey - dy * ex;
        if denom.abs() < 1e-12 {
            j = i;
            continue; // parallel
        }

        let t = ((pts[j].x - seg.x1) * ey - (pts[j].y - seg.y1) * ex) / denom;
        let u = ((pts[j].x - seg.x1) * dy - (pts[j].y - seg.y1) * dx) / denom;

        if t > -1e-9 && t < 1.0 + 1e-9 && u > -1e-9 && u < 1.0 + 1e-9 {
            t_values.push(t.clamp(0.0, 1.0));
        }

        j = i;
    }

    t_values.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mut unique: Vec<f64> = Vec::with_capacity(t_values.len());
    unique.push(t_values[0]);
    for &t in &t_values[1..] {
        if t - unique[unique.len() - 1] > 1e-9 {
            unique.push(t);
        }
    }

    let mut result = Vec::new();
    for pair in unique.windows(2) {
        let t_mid = (pair[0] + pair[1]) / 2.0;
        let mid = Point::new(seg.x1 + dx * t_mid, seg.y1 + dy * t_mid);
        if point_in_polygon(mid, polygon) {
            result.push(Seg::new(
                seg.x1 + dx * pair[0],
                seg.y1 + dy * pair[0],
                seg.x1 + dx * pair[1],
                seg.y1 + dy * pair[1],
            ));
        }
    }

    result
}

/// Clip a polyline against a polygon.
///
/// Each consecutive point pair is clipped independently, so a single
/// polyline can contribute multiple disjoint inside-runs. Zero-length
/// segments (repeated points) are skipped.
pub fn clip_polyline_to_polygon(points: &[Point], polygon: &Polygon) -> Vec<Seg> {
    let mut result = Vec::new();
    for pair in points.windows(2) {
        if pair[0] == pair[1] {
            continue;
        }
        let seg = Seg::new(pair[0].x, pair[0].y, pair[1].x, pair[1].y);
        result.extend(clip_seg_to_polygon(seg, polygon));
    }
    result
}

/// Clip a batch of segments against a polygon.
pub fn clip_segs_to_polygon(segs: &[Seg], polygon: &Polygon) -> Vec<Seg> {
    segs.iter()
        .flat_map(|seg| clip_seg_to_polygon(*seg, polygon))
        .collect()
}

/// Rotate a point around a center by an angle in degrees.
#[inline]
pub fn rotate_point(p: Point, center: Point, angle_degrees: f64) -> Point {
    let rad = angle_degrees.to_radians();
    let (sin, cos) = rad.sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

/// Rotate a segment around a center by an angle in degrees.
#[inline]
pub fn rotate_seg(seg: Seg, center: Point, angle_degrees: f64) -> Seg {
    let p1 = rotate_point(seg.start(), center, angle_degrees);
    let p2 = rotate_point(seg.end(), center, angle_degrees);
    Seg::new(p1.x, p1.y, p2.x, p2.y)
}
