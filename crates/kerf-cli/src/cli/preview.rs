//! Preview command: rasterize a generated document to PNG.

use tiny_skia::Pixmap;

use super::recipe::Recipe;

/// Execute the preview command.
pub fn cmd_preview(args: &[String]) {
    let mut recipe_path: Option<&str> = None;
    let mut output_path = "preview.png".to_string();
    let mut pixel_width: u32 = 1200;
    let mut seed_override: Option<u64> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = args[i].clone();
                }
            }
            "--px" => {
                i += 1;
                if i < args.len() {
                    pixel_width = args[i].parse().unwrap_or(1200);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed_override = args[i].parse().ok();
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            path if !path.starts_with('-') => {
                if recipe_path.is_none() {
                    recipe_path = Some(path);
                }
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
            }
        }
        i += 1;
    }

    let recipe = match recipe_path {
        Some(path) => match Recipe::load(path) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Recipe::default(),
    };

    let seed = seed_override
        .or(recipe.seed)
        .unwrap_or_else(|| rand::random::<u32>() as u64);

    let pieces = recipe.pieces(seed);
    eprintln!("Generated {} pieces (seed {})", pieces.len(), seed);
    let svg = recipe.document(&pieces);

    match render_png(&svg, pixel_width) {
        Ok(pixmap) => {
            if let Err(e) = pixmap.save_png(&output_path) {
                eprintln!("Failed to write {}: {}", output_path, e);
                std::process::exit(1);
            }
            eprintln!("Wrote: {}", output_path);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Rasterize SVG content at the given pixel width.
fn render_png(svg: &str, pixel_width: u32) -> Result<Pixmap, String> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| format!("Failed to parse generated SVG: {}", e))?;

    let size = tree.size();
    let scale = pixel_width as f32 / size.width();
    let pixel_height = (size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(pixel_width, pixel_height.max(1))
        .ok_or_else(|| "Failed to allocate pixmap".to_string())?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    Ok(pixmap)
}

fn print_usage() {
    eprintln!("Usage: kerf preview [recipe.yaml] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <file>   Output PNG file (default: preview.png)");
    eprintln!("  --px <n>              Output pixel width (default: 1200)");
    eprintln!("  --seed <n>            Generation seed");
    eprintln!("  -h, --help            Show this help");
}

#[cfg(test)]
mod tests {
    use super::*;
    use kerf::render_document;

    #[test]
    fn generated_document_rasterizes() {
        let recipe = Recipe::default();
        let svg = recipe.document(&recipe.pieces(42));
        let pixmap = render_png(&svg, 300).unwrap();
        assert_eq!(pixmap.width(), 300);
        assert!(pixmap.height() > 0);
    }

    #[test]
    fn empty_piece_set_still_rasterizes() {
        let svg = render_document(&[], &kerf::DocumentParams::default());
        assert!(render_png(&svg, 100).is_ok());
    }
}
