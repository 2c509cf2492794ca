//! Listing commands: available textures and palettes.

use kerf::Texture;
use kerf::palette::PALETTES;

/// Execute the textures command.
pub fn cmd_textures() {
    println!("Available textures:");
    println!();
    for texture in Texture::all() {
        println!("  {:<12} {}", texture.name(), texture.description());
    }
}

/// Execute the palettes command.
pub fn cmd_palettes() {
    println!("Available palettes:");
    println!();
    for palette in &PALETTES {
        println!("  {:<8} {:<14} {}", palette.id, palette.name, palette.colors.join(" "));
    }
}
