//! Puzzle recipes: declarative YAML/JSON parameter files.
//!
//! A recipe covers the full input surface of the generator; every field has
//! a default, so `{}` is a valid recipe.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use kerf::{
    BaseCaption, BaseShape, Distribution, DocumentParams, GrowthParams, Piece, Texture,
    assign_texts, assign_textures, generate_pieces, render_document, text::parse_units,
};

/// Error type for recipe loading.
#[derive(Debug)]
pub enum RecipeError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for RecipeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeError::Io(e) => write!(f, "Failed to read recipe file: {}", e),
            RecipeError::Parse(msg) => write!(f, "Failed to parse recipe: {}", msg),
        }
    }
}

impl std::error::Error for RecipeError {}

/// A complete puzzle recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Grid width in cells.
    #[serde(default = "default_dimension")]
    pub width: i32,

    /// Grid height in cells.
    #[serde(default = "default_dimension")]
    pub height: i32,

    /// Minimum piece size in cells.
    #[serde(default = "default_min_size")]
    pub min_piece_size: usize,

    /// Maximum piece size in cells.
    #[serde(default = "default_max_size")]
    pub max_piece_size: usize,

    /// Footprint shape: rectangle, hexagon or circle.
    #[serde(default)]
    pub shape: BaseShape,

    /// How strongly pieces snake into thin runs (0..1).
    #[serde(default = "default_heuristic")]
    pub snakiness: f64,

    /// How strongly pieces branch and stay ragged (0..1).
    #[serde(default = "default_heuristic")]
    pub complexity: f64,

    /// Push pieces to interlock with their neighbors.
    #[serde(default)]
    pub intricate: bool,

    /// Generation seed; drawn at random when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Piece color palette id.
    #[serde(default = "default_palette")]
    pub palette: String,

    #[serde(default)]
    pub layout: Layout,

    #[serde(default)]
    pub colors: OperationColors,

    /// Per-piece caption settings; absent means no captions.
    #[serde(default)]
    pub text: Option<TextSettings>,

    /// Engrave texture settings; absent means no textures.
    #[serde(default)]
    pub textures: Option<TextureSettings>,

    /// Engraved caption on the base cut-out.
    #[serde(default)]
    pub base_caption: Option<BaseCaption>,
}

fn default_dimension() -> i32 {
    10
}

fn default_min_size() -> usize {
    4
}

fn default_max_size() -> usize {
    8
}

fn default_heuristic() -> f64 {
    0.5
}

fn default_palette() -> String {
    "wood".to_string()
}

impl Default for Recipe {
    fn default() -> Self {
        serde_yaml::from_str("{}").expect("empty recipe must parse")
    }
}

/// Physical layout of the output document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    /// Cell edge length in millimetres.
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,

    /// Corner rounding radius in millimetres.
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,

    /// Cut stroke width in millimetres.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Base overhang around the puzzle, in whole cells.
    #[serde(default = "default_base_padding")]
    pub base_padding: i32,

    /// Gap between puzzle and base footprints, millimetres.
    #[serde(default = "default_margin")]
    pub margin: f64,

    /// Fill pieces with their palette colors.
    #[serde(default)]
    pub show_colors: bool,
}

fn default_cell_size() -> f64 {
    10.0
}

fn default_corner_radius() -> f64 {
    1.0
}

fn default_stroke_width() -> f64 {
    0.2
}

fn default_base_padding() -> i32 {
    1
}

fn default_margin() -> f64 {
    20.0
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            corner_radius: default_corner_radius(),
            stroke_width: default_stroke_width(),
            base_padding: default_base_padding(),
            margin: default_margin(),
            show_colors: false,
        }
    }
}

/// Stroke colors distinguishing the three operation classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationColors {
    #[serde(default = "default_cut_color")]
    pub cut: String,
    #[serde(default = "default_engrave_color")]
    pub engrave: String,
    #[serde(default = "default_raster_color")]
    pub raster: String,
}

fn default_cut_color() -> String {
    "#FF0000".to_string()
}

fn default_engrave_color() -> String {
    "#0000FF".to_string()
}

fn default_raster_color() -> String {
    "#000000".to_string()
}

impl Default for OperationColors {
    fn default() -> Self {
        Self {
            cut: default_cut_color(),
            engrave: default_engrave_color(),
            raster: default_raster_color(),
        }
    }
}

/// Per-piece caption distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSettings {
    /// Caption source text, split into one unit per character.
    pub text: String,
    #[serde(default)]
    pub distribution: Distribution,
    #[serde(default)]
    pub seed: u32,
}

/// Engrave texture distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureSettings {
    /// Texture pool drawn from during distribution.
    pub textures: Vec<Texture>,
    #[serde(default)]
    pub distribution: Distribution,
    #[serde(default)]
    pub seed: u32,
    /// Lattice spacing in millimetres.
    #[serde(default = "default_texture_spacing")]
    pub spacing: f64,
    /// Pattern rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
}

fn default_texture_spacing() -> f64 {
    2.0
}

impl Recipe {
    /// Load a recipe from a YAML or JSON file (by extension).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RecipeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(RecipeError::Io)?;

        if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            serde_json::from_str(&content).map_err(|e| RecipeError::Parse(e.to_string()))
        } else {
            serde_yaml::from_str(&content).map_err(|e| RecipeError::Parse(e.to_string()))
        }
    }

    pub fn growth_params(&self, seed: u64) -> GrowthParams {
        GrowthParams {
            width: self.width,
            height: self.height,
            min_size: self.min_piece_size,
            max_size: self.max_piece_size,
            shape: self.shape,
            snakiness: self.snakiness,
            complexity: self.complexity,
            intricate: self.intricate,
            seed,
            palette: self.palette.clone(),
        }
    }

    pub fn document_params(&self) -> DocumentParams {
        let texture = self.textures.as_ref();
        DocumentParams {
            grid_width: self.width,
            grid_height: self.height,
            shape: self.shape,
            cell_size: self.layout.cell_size,
            corner_radius: self.layout.corner_radius,
            stroke_width: self.layout.stroke_width,
            show_colors: self.layout.show_colors,
            include_text: self.text.is_some(),
            margin: self.layout.margin,
            base_padding: self.layout.base_padding,
            texture_spacing: texture.map_or(default_texture_spacing(), |t| t.spacing),
            texture_rotation: texture.map_or(0.0, |t| t.rotation),
            cut_color: self.colors.cut.clone(),
            engrave_color: self.colors.engrave.clone(),
            raster_color: self.colors.raster.clone(),
            base_caption: self.base_caption.clone(),
        }
    }

    /// Run growth, merge and attribute distribution.
    pub fn pieces(&self, seed: u64) -> Vec<Piece> {
        let mut pieces = generate_pieces(&self.growth_params(seed));

        if let Some(settings) = &self.text {
            let units = parse_units(&settings.text);
            assign_texts(&mut pieces, &units, settings.distribution, settings.seed);
        }
        if let Some(settings) = &self.textures {
            assign_textures(
                &mut pieces,
                &settings.textures,
                settings.distribution,
                settings.seed,
            );
        }

        pieces
    }

    /// Render the final document for an already-generated piece set.
    pub fn document(&self, pieces: &[Piece]) -> String {
        render_document(pieces, &self.document_params())
    }
}

/// Print an example recipe to stdout.
pub fn print_example() {
    println!(
        r##"# Example kerf recipe
width: 12
height: 8
min_piece_size: 4
max_piece_size: 8
shape: rectangle      # rectangle | hexagon | circle
snakiness: 0.5
complexity: 0.6
intricate: false
seed: 42              # omit for a random seed
palette: wood         # see `kerf palettes`

layout:
  cell_size: 10       # millimetres per cell
  corner_radius: 1
  stroke_width: 0.2
  base_padding: 1     # cells of base overhang
  margin: 20          # millimetres between puzzle and base
  show_colors: false

colors:
  cut: "#FF0000"
  engrave: "#0000FF"
  raster: "#000000"

text:
  text: "ABCDEFGHIJKL"
  distribution: all   # all | alternate | random
  seed: 1

textures:
  textures: [lines-diag, dots, waves]   # see `kerf textures`
  distribution: random
  seed: 7
  spacing: 2
  rotation: 15

base_caption:
  text: "Happy hacking"
  font_family: Arial
  font_size: 5
  align: center
"##
    );
}
