//! Engrave texture generators.
//!
//! Each family generates raw geometry over an expanded bounding box
//! ([`frame::TextureFrame`]), which is then rotated about the piece center
//! and clipped geometrically to the piece's boundary polygon:
//!
//! - line, grid and cross families emit raw segments, each rotated and
//!   clipped independently;
//! - wave and zigzag rows emit polylines, rotated and clipped as polylines
//!   so a row can contribute several inside-runs;
//! - dot, circle and hexagon lattices test each unit's rotated center for
//!   containment. Dots are all-or-nothing; circle and hexagon units whose
//!   center is outside are still edge-clipped so partial shapes render at
//!   the boundary. The asymmetry is intentional and preserved.

pub mod frame;

mod circles;
mod cross;
mod dots;
mod hexagon;
mod lines;
mod waves;
mod zigzag;

use serde::{Deserialize, Serialize};

use crate::clip::{
    clip_polyline_to_polygon, clip_seg_to_polygon, point_in_polygon, rotate_point, rotate_seg,
};
use crate::geometry::Seg;
use crate::piece::Cell;
use crate::trace::cells_to_polygon;

use frame::TextureFrame;

pub use dots::DOT_RADIUS;

/// Available texture families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Texture {
    LinesH,
    LinesV,
    LinesDiag,
    Grid,
    Dots,
    Waves,
    Circles,
    Zigzag,
    Cross,
    Hexagon,
}

/// A single clipped engrave element.
///
/// Full dots and full circle units survive as true circles all the way to
/// the document; everything else is segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillElement {
    Segment(Seg),
    Circle { cx: f64, cy: f64, r: f64 },
}

impl Texture {
    pub fn all() -> &'static [Texture] {
        &[
            Texture::LinesH,
            Texture::LinesV,
            Texture::LinesDiag,
            Texture::Grid,
            Texture::Dots,
            Texture::Waves,
            Texture::Circles,
            Texture::Zigzag,
            Texture::Cross,
            Texture::Hexagon,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Texture::LinesH => "lines-h",
            Texture::LinesV => "lines-v",
            Texture::LinesDiag => "lines-diag",
            Texture::Grid => "grid",
            Texture::Dots => "dots",
            Texture::Waves => "waves",
            Texture::Circles => "circles",
            Texture::Zigzag => "zigzag",
            Texture::Cross => "cross",
            Texture::Hexagon => "hexagon",
        }
    }

    /// Short description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Texture::LinesH => "Horizontal line rows",
            Texture::LinesV => "Vertical line rows",
            Texture::LinesDiag => "Diagonal line rows",
            Texture::Grid => "Horizontal and vertical grid",
            Texture::Dots => "Small dot lattice",
            Texture::Waves => "Sine-wave rows",
            Texture::Circles => "Circle lattice",
            Texture::Zigzag => "Zigzag rows",
            Texture::Cross => "Diagonal cross lattice",
            Texture::Hexagon => "Hexagon lattice",
        }
    }

    pub fn from_name(name: &str) -> Option<Texture> {
        match name.to_lowercase().as_str() {
            "lines-h" | "lines" => Some(Texture::LinesH),
            "lines-v" => Some(Texture::LinesV),
            "lines-diag" | "diagonal" => Some(Texture::LinesDiag),
            "grid" => Some(Texture::Grid),
            "dots" | "stipple" => Some(Texture::Dots),
            "waves" | "sine" => Some(Texture::Waves),
            "circles" => Some(Texture::Circles),
            "zigzag" => Some(Texture::Zigzag),
            "cross" | "crosses" => Some(Texture::Cross),
            "hexagon" | "honeycomb" => Some(Texture::Hexagon),
            _ => None,
        }
    }

    /// Generate this texture for a piece, clipped to its boundary.
    ///
    /// `rotation_degrees` spins the pattern about the piece center before
    /// clipping. An empty cell set yields empty geometry.
    pub fn fill(
        &self,
        cells: &[Cell],
        cell_size: f64,
        spacing: f64,
        rotation_degrees: f64,
    ) -> Vec<FillElement> {
        let polygon = cells_to_polygon(cells, cell_size);
        if polygon.points.len() < 3 {
            return Vec::new();
        }
        let Some(frame) = TextureFrame::new(cells, cell_size) else {
            return Vec::new();
        };
        let center = frame.center;

        let rotate_and_clip = |segs: Vec<Seg>| -> Vec<FillElement> {
            segs.iter()
                .flat_map(|seg| {
                    clip_seg_to_polygon(rotate_seg(*seg, center, rotation_degrees), &polygon)
                })
                .map(FillElement::Segment)
                .collect()
        };

        match self {
            Texture::LinesH => rotate_and_clip(lines::raw_lines_h(&frame, spacing)),
            Texture::LinesV => rotate_and_clip(lines::raw_lines_v(&frame, spacing)),
            Texture::LinesDiag => rotate_and_clip(lines::raw_lines_diag(&frame, spacing)),
            Texture::Grid => rotate_and_clip(lines::raw_grid(&frame, spacing)),
            Texture::Cross => rotate_and_clip(cross::raw_cross(&frame, spacing)),

            Texture::Waves | Texture::Zigzag => {
                let rows = match self {
                    Texture::Waves => waves::raw_waves(&frame, spacing),
                    _ => zigzag::raw_zigzag(&frame, spacing),
                };
                rows.iter()
                    .flat_map(|row| {
                        let rotated: Vec<_> = row
                            .iter()
                            .map(|p| rotate_point(*p, center, rotation_degrees))
                            .collect();
                        clip_polyline_to_polygon(&rotated, &polygon)
                    })
                    .map(FillElement::Segment)
                    .collect()
            }

            Texture::Dots => dots::raw_dots(&frame, spacing)
                .iter()
                .filter_map(|c| {
                    let rc = rotate_point(*c, center, rotation_degrees);
                    point_in_polygon(rc, &polygon).then_some(FillElement::Circle {
                        cx: rc.x,
                        cy: rc.y,
                        r: dots::DOT_RADIUS,
                    })
                })
                .collect(),

            Texture::Circles => {
                let radius = circles::circle_radius(spacing);
                let mut elements = Vec::new();
                for c in circles::raw_circles(&frame, spacing) {
                    let rc = rotate_point(c, center, rotation_degrees);
                    if point_in_polygon(rc, &polygon) {
                        elements.push(FillElement::Circle { cx: rc.x, cy: rc.y, r: radius });
                    } else {
                        for seg in circles::circle_to_segs(rc, radius) {
                            elements.extend(
                                clip_seg_to_polygon(seg, &polygon).into_iter().map(FillElement::Segment),
                            );
                        }
                    }
                }
                elements
            }

            Texture::Hexagon => {
                let radius = hexagon::hex_radius(spacing);
                let mut elements = Vec::new();
                for c in hexagon::raw_hexagons(&frame, spacing) {
                    let rc = rotate_point(c, center, rotation_degrees);
                    let unit: Vec<Seg> = hexagon::hex_unit_segs(c, radius)
                        .iter()
                        .map(|seg| rotate_seg(*seg, center, rotation_degrees))
                        .collect();
                    if point_in_polygon(rc, &polygon) {
                        elements.extend(unit.into_iter().map(FillElement::Segment));
                    } else {
                        for seg in unit {
                            elements.extend(
                                clip_seg_to_polygon(seg, &polygon).into_iter().map(FillElement::Segment),
                            );
                        }
                    }
                }
                elements
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn square_cells() -> Vec<Cell> {
        vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
        ]
    }

    fn l_cells() -> Vec<Cell> {
        vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
    }

    #[test]
    fn names_round_trip() {
        for texture in Texture::all() {
            assert_eq!(Texture::from_name(texture.name()), Some(*texture));
        }
        assert_eq!(Texture::from_name("plaid"), None);
    }

    #[test]
    fn every_texture_fills_a_square() {
        for texture in Texture::all() {
            let elements = texture.fill(&square_cells(), 10.0, 2.0, 0.0);
            assert!(!elements.is_empty(), "{} produced nothing", texture.name());
        }
    }

    #[test]
    fn empty_cells_empty_fill() {
        for texture in Texture::all() {
            assert!(texture.fill(&[], 10.0, 2.0, 0.0).is_empty());
        }
    }

    #[test]
    fn segments_stay_inside_the_piece() {
        let cells = l_cells();
        let polygon = cells_to_polygon(&cells, 10.0);
        for texture in [Texture::LinesH, Texture::Grid, Texture::Waves, Texture::Zigzag] {
            for element in texture.fill(&cells, 10.0, 2.0, 30.0) {
                let FillElement::Segment(seg) = element else { continue };
                let mid = seg.midpoint();
                assert!(
                    point_in_polygon(mid, &polygon),
                    "{} emitted a segment outside the piece",
                    texture.name()
                );
            }
        }
    }

    #[test]
    fn dot_centers_are_all_inside() {
        let cells = l_cells();
        let polygon = cells_to_polygon(&cells, 10.0);
        let elements = Texture::Dots.fill(&cells, 10.0, 2.0, 0.0);
        assert!(!elements.is_empty());
        for element in elements {
            let FillElement::Circle { cx, cy, .. } = element else {
                panic!("dots must emit circles only");
            };
            assert!(point_in_polygon(Point::new(cx, cy), &polygon));
        }
    }

    #[test]
    fn circles_emit_partial_units_at_the_boundary() {
        // On a concave piece some lattice centers fall outside; those units
        // must degrade to clipped segments rather than disappear.
        let elements = Texture::Circles.fill(&l_cells(), 10.0, 2.0, 0.0);
        let full = elements
            .iter()
            .filter(|e| matches!(e, FillElement::Circle { .. }))
            .count();
        let partial = elements
            .iter()
            .filter(|e| matches!(e, FillElement::Segment(_)))
            .count();
        assert!(full > 0, "expected full circles in the interior");
        assert!(partial > 0, "expected clipped edges at the boundary");
    }

    #[test]
    fn hexagons_emit_only_segments() {
        let elements = Texture::Hexagon.fill(&square_cells(), 10.0, 2.0, 0.0);
        assert!(!elements.is_empty());
        assert!(elements.iter().all(|e| matches!(e, FillElement::Segment(_))));
    }

    #[test]
    fn rotation_changes_geometry() {
        let cells = square_cells();
        let a = Texture::LinesH.fill(&cells, 10.0, 2.0, 0.0);
        let b = Texture::LinesH.fill(&cells, 10.0, 2.0, 45.0);
        assert_ne!(a, b);
    }

    #[test]
    fn fill_is_deterministic() {
        let cells = l_cells();
        for texture in Texture::all() {
            let a = texture.fill(&cells, 10.0, 2.5, 15.0);
            let b = texture.fill(&cells, 10.0, 2.5, 15.0);
            assert_eq!(a, b);
        }
    }
}
