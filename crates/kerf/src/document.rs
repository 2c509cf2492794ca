//! SVG document assembly.
//!
//! Produces the final laser document: two side-by-side footprints — the
//! puzzle (frame, piece outlines, engrave textures, captions) and a
//! matching base cut-out — color-coded by operation class and with
//! millimetre-true declared size. This is the only place geometry becomes
//! strings.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::patterns::FillElement;
use crate::path::{
    PathCmd, circle_outline, fmt, hexagon_outline, inverted_outline, piece_outline, rounded_rect,
    to_path_data,
};
use crate::piece::{Cell, Piece, caption_font_size, text_anchor};
use crate::shape::BaseShape;

/// Horizontal alignment of the base caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Engraved caption on the base cut-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseCaption {
    pub text: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub align: TextAlign,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_font_size() -> f64 {
    5.0
}

/// Physical layout and styling of the output document.
#[derive(Debug, Clone)]
pub struct DocumentParams {
    pub grid_width: i32,
    pub grid_height: i32,
    pub shape: BaseShape,
    /// Cell edge length in millimetres.
    pub cell_size: f64,
    /// Corner rounding radius in millimetres.
    pub corner_radius: f64,
    /// Cut stroke width in millimetres; engrave strokes use half of it.
    pub stroke_width: f64,
    /// Fill pieces with their palette colors (preview aid; fabrication
    /// software keys on stroke colors only).
    pub show_colors: bool,
    /// Render per-piece captions.
    pub include_text: bool,
    /// Gap between the puzzle and the base footprint, millimetres.
    pub margin: f64,
    /// Base overhang around the puzzle, in whole cells.
    pub base_padding: i32,
    /// Texture lattice spacing in millimetres.
    pub texture_spacing: f64,
    /// Texture rotation in degrees.
    pub texture_rotation: f64,
    pub cut_color: String,
    pub engrave_color: String,
    pub raster_color: String,
    pub base_caption: Option<BaseCaption>,
}

impl Default for DocumentParams {
    fn default() -> Self {
        Self {
            grid_width: 10,
            grid_height: 10,
            shape: BaseShape::Rectangle,
            cell_size: 10.0,
            corner_radius: 1.0,
            stroke_width: 0.2,
            show_colors: false,
            include_text: false,
            margin: 20.0,
            base_padding: 1,
            texture_spacing: 2.0,
            texture_rotation: 0.0,
            cut_color: "#FF0000".to_string(),
            engrave_color: "#0000FF".to_string(),
            raster_color: "#000000".to_string(),
            base_caption: None,
        }
    }
}

/// Escape text for XML content and attribute values.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Outline of the base footprint with its top-left corner at (x, y).
fn base_outline(shape: BaseShape, x: f64, y: f64, width: f64, height: f64, corner_radius: f64) -> Vec<PathCmd> {
    match shape {
        BaseShape::Rectangle => rounded_rect(x, y, width, height, corner_radius),
        BaseShape::Hexagon => hexagon_outline(
            Point::new(x + width / 2.0, y + height / 2.0),
            width.min(height) / 2.0,
        ),
        BaseShape::Circle => circle_outline(
            Point::new(x + width / 2.0, y + height / 2.0),
            width.min(height) / 2.0,
        ),
    }
}

/// Common display-font fallback stacks.
fn font_stack(family: &str) -> String {
    match family {
        "Arial" => "Arial, sans-serif".to_string(),
        "Helvetica" => "Helvetica, Arial, sans-serif".to_string(),
        "Times New Roman" => "Times New Roman, Times, serif".to_string(),
        "Georgia" => "Georgia, serif".to_string(),
        "Courier New" => "Courier New, Courier, monospace".to_string(),
        "Verdana" => "Verdana, Geneva, sans-serif".to_string(),
        other => format!("{}, sans-serif", other),
    }
}

/// Render the complete laser document.
///
/// Empty piece sets still produce a valid document (base only).
pub fn render_document(pieces: &[Piece], params: &DocumentParams) -> String {
    let cell = params.cell_size;
    let svg_width = params.grid_width as f64 * cell;
    let svg_height = params.grid_height as f64 * cell;
    let base_width = (params.grid_width + params.base_padding * 2) as f64 * cell;
    let base_height = (params.grid_height + params.base_padding * 2) as f64 * cell;
    let pad = params.base_padding as f64 * cell;

    let total_width = base_width * 2.0 + params.margin;
    let total_height = svg_height.max(base_height);

    // Puzzle-layer content shifts by the base padding so the puzzle sits
    // centered on its base.
    let wrap_layer = |content: String| -> String {
        if content.is_empty() {
            content
        } else if pad > 0.0 {
            format!(
                "  <g transform=\"translate({}, {})\">\n{}  </g>\n",
                fmt(pad),
                fmt(pad),
                content
            )
        } else {
            content
        }
    };
    let indent = if pad > 0.0 { "    " } else { "  " };

    // Engrave textures, clipped to each piece.
    let mut textures = String::new();
    let engrave_width = params.stroke_width * 0.5;
    for piece in pieces {
        let Some(texture) = piece.texture else { continue };
        let elements = texture.fill(
            &piece.cells,
            cell,
            params.texture_spacing,
            params.texture_rotation,
        );
        if elements.is_empty() {
            continue;
        }

        let mut d = String::new();
        let mut circles = String::new();
        for element in &elements {
            match element {
                FillElement::Segment(seg) => {
                    if !d.is_empty() {
                        d.push(' ');
                    }
                    d.push_str(&format!(
                        "M {} {} L {} {}",
                        fmt(seg.x1),
                        fmt(seg.y1),
                        fmt(seg.x2),
                        fmt(seg.y2)
                    ));
                }
                FillElement::Circle { cx, cy, r } => {
                    circles.push_str(&format!(
                        "{}<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />\n",
                        indent,
                        fmt(*cx),
                        fmt(*cy),
                        fmt(*r),
                        params.engrave_color,
                        fmt(engrave_width)
                    ));
                }
            }
        }
        if !d.is_empty() {
            textures.push_str(&format!(
                "{}<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />\n",
                indent, d, params.engrave_color, fmt(engrave_width)
            ));
        }
        textures.push_str(&circles);
    }
    let textures = wrap_layer(textures);

    // Raster captions on pieces.
    let mut texts = String::new();
    if params.include_text {
        for piece in pieces {
            let Some(text) = &piece.text else { continue };
            let Some(anchor) = text_anchor(&piece.cells, cell) else { continue };
            let font_size = caption_font_size(text, cell, anchor.width);
            let rect_width = if anchor.double_cell && text.chars().count() <= 2 {
                anchor.width * 0.7
            } else {
                font_size * text.chars().count() as f64 * 0.6
            };
            let rect_height = font_size * 1.2;
            texts.push_str(&format!(
                "{}<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#FFFFFF\" rx=\"2\" />\n",
                indent,
                fmt(anchor.x - rect_width / 2.0),
                fmt(anchor.y - rect_height / 2.0),
                fmt(rect_width),
                fmt(rect_height)
            ));
            texts.push_str(&format!(
                "{}<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"{}\" font-family=\"Arial, sans-serif\" font-weight=\"bold\">{}</text>\n",
                indent,
                fmt(anchor.x),
                fmt(anchor.y),
                fmt(font_size),
                params.raster_color,
                escape_xml(text)
            ));
        }
    }
    let texts = wrap_layer(texts);

    // Frame between the base edge and the puzzle silhouette.
    let mut frame = String::new();
    if params.base_padding > 0 && !pieces.is_empty() {
        let outer = base_outline(
            params.shape,
            -pad,
            -pad,
            base_width,
            base_height,
            params.corner_radius,
        );
        let all_cells: Vec<Cell> = pieces.iter().flat_map(|p| p.cells.iter().copied()).collect();
        let silhouette = inverted_outline(&all_cells, cell, params.corner_radius);

        frame.push_str(&format!(
            "  <g transform=\"translate({}, {})\">\n    <path d=\"{} {}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" fill-rule=\"evenodd\" />\n  </g>\n",
            fmt(pad),
            fmt(pad),
            to_path_data(&outer),
            to_path_data(&silhouette),
            params.cut_color,
            fmt(params.stroke_width)
        ));
    }

    // Piece cut outlines.
    let mut piece_paths = String::new();
    for piece in pieces {
        let outline = piece_outline(&piece.cells, cell, params.corner_radius);
        if outline.is_empty() {
            continue;
        }
        let fill = if params.show_colors { piece.color.as_str() } else { "none" };
        piece_paths.push_str(&format!(
            "{}<path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" />\n",
            indent,
            to_path_data(&outline),
            fill,
            params.cut_color,
            fmt(params.stroke_width)
        ));
    }
    let piece_paths = wrap_layer(piece_paths);

    // Base cut-out, to the right of the puzzle footprint.
    let base_x = base_width + params.margin;
    let base = base_outline(
        params.shape,
        base_x,
        0.0,
        base_width,
        base_height,
        params.corner_radius,
    );

    // Engraved caption centered on the base.
    let mut base_caption = String::new();
    if let Some(caption) = &params.base_caption {
        let (x, text_anchor_attr) = match caption.align {
            TextAlign::Left => (base_x + caption.offset_x, "start"),
            TextAlign::Center => (base_x + base_width / 2.0 + caption.offset_x, "middle"),
            TextAlign::Right => (base_x + base_width + caption.offset_x, "end"),
        };

        let lines: Vec<&str> = caption.text.split('\n').collect();
        let line_height = caption.font_size * 1.2;
        let block_height = (lines.len() - 1) as f64 * line_height + caption.font_size;
        let y = base_height / 2.0 - block_height / 2.0 + caption.font_size * 0.8 + caption.offset_y;

        let tspans: Vec<String> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    format!("<tspan x=\"{}\">{}</tspan>", fmt(x), escape_xml(line))
                } else {
                    format!(
                        "<tspan x=\"{}\" dy=\"{}\">{}</tspan>",
                        fmt(x),
                        fmt(line_height),
                        escape_xml(line)
                    )
                }
            })
            .collect();

        base_caption.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{}\" fill=\"{}\" font-family=\"{}\" font-weight=\"bold\">\n    {}\n  </text>\n",
            fmt(x),
            fmt(y),
            fmt(caption.font_size),
            text_anchor_attr,
            params.raster_color,
            escape_xml(&font_stack(&caption.font_family)),
            tspans.join("\n    ")
        ));
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\">\n\
         {textures}{texts}{base_caption}\
         {frame}{piece_paths}\
         \x20 <path d=\"{base}\" fill=\"none\" stroke=\"{cut}\" stroke-width=\"{sw}\" />\n\
         </svg>\n",
        w = fmt(total_width),
        h = fmt(total_height),
        textures = textures,
        texts = texts,
        base_caption = base_caption,
        frame = frame,
        piece_paths = piece_paths,
        base = to_path_data(&base),
        cut = params.cut_color,
        sw = fmt(params.stroke_width),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grow::{GrowthParams, generate_pieces};
    use crate::patterns::Texture;

    fn reference_pieces() -> Vec<Piece> {
        generate_pieces(&GrowthParams::default())
    }

    #[test]
    fn document_declares_physical_size() {
        let doc = render_document(&reference_pieces(), &DocumentParams::default());
        // 10 cells * 10mm + 2 padding cells = 120mm base; two bases + 20mm.
        assert!(doc.contains("width=\"260mm\""));
        assert!(doc.contains("viewBox=\"0 0 260 120\""));
        assert!(doc.starts_with("<?xml"));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn document_has_frame_pieces_and_base() {
        let pieces = reference_pieces();
        let doc = render_document(&pieces, &DocumentParams::default());
        assert!(doc.contains("fill-rule=\"evenodd\""), "frame path missing");
        let cut_paths = doc.matches("stroke=\"#FF0000\"").count();
        // One per piece, plus the frame, plus the base.
        assert_eq!(cut_paths, pieces.len() + 2);
    }

    #[test]
    fn no_padding_no_frame() {
        let params = DocumentParams { base_padding: 0, ..DocumentParams::default() };
        let doc = render_document(&reference_pieces(), &params);
        assert!(!doc.contains("evenodd"));
        assert!(!doc.contains("translate"));
    }

    #[test]
    fn empty_piece_set_still_renders_base() {
        let doc = render_document(&[], &DocumentParams::default());
        assert!(doc.contains("<svg"));
        assert!(doc.contains("stroke=\"#FF0000\""));
        assert!(!doc.contains("evenodd"));
    }

    #[test]
    fn textures_engrave_in_engrave_color() {
        let mut pieces = reference_pieces();
        pieces[0].texture = Some(Texture::Grid);
        let doc = render_document(&pieces, &DocumentParams::default());
        assert!(doc.contains("stroke=\"#0000FF\""));
    }

    #[test]
    fn dots_emit_circle_elements() {
        let mut pieces = reference_pieces();
        for piece in &mut pieces {
            piece.texture = Some(Texture::Dots);
        }
        let doc = render_document(&pieces, &DocumentParams::default());
        assert!(doc.contains("<circle"));
    }

    #[test]
    fn captions_render_when_enabled() {
        let mut pieces = reference_pieces();
        pieces[0].text = Some("a".to_string());
        let params = DocumentParams { include_text: true, ..DocumentParams::default() };
        let doc = render_document(&pieces, &params);
        assert!(doc.contains("<text"));
        assert!(doc.contains(">a</text>"));

        let without = render_document(&pieces, &DocumentParams::default());
        assert!(!without.contains("<text"));
    }

    #[test]
    fn base_caption_multiline() {
        let params = DocumentParams {
            base_caption: Some(BaseCaption {
                text: "hello\nworld".to_string(),
                font_family: "Arial".to_string(),
                font_size: 5.0,
                align: TextAlign::Center,
                offset_x: 0.0,
                offset_y: 0.0,
            }),
            ..DocumentParams::default()
        };
        let doc = render_document(&reference_pieces(), &params);
        assert_eq!(doc.matches("<tspan").count(), 2);
        assert!(doc.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn caption_text_is_escaped() {
        let mut pieces = reference_pieces();
        pieces[0].text = Some("<&>".to_string());
        let params = DocumentParams { include_text: true, ..DocumentParams::default() };
        let doc = render_document(&pieces, &params);
        assert!(doc.contains("&lt;&amp;&gt;"));
        assert!(!doc.contains("><&></text>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let pieces = reference_pieces();
        let params = DocumentParams::default();
        assert_eq!(render_document(&pieces, &params), render_document(&pieces, &params));
    }
}
