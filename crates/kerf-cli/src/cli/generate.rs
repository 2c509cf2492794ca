//! Generate command: recipe/flags -> SVG document.

use std::fs;

use chrono::Local;

use kerf::{BaseShape, Distribution, Texture};

use super::recipe::{Recipe, TextSettings, TextureSettings, print_example};

/// Execute the generate command.
pub fn cmd_generate(args: &[String]) {
    let mut recipe_path: Option<&str> = None;
    let mut output_path: Option<&str> = None;
    let mut seed_override: Option<u64> = None;
    let mut width: Option<i32> = None;
    let mut height: Option<i32> = None;
    let mut min_size: Option<usize> = None;
    let mut max_size: Option<usize> = None;
    let mut shape: Option<BaseShape> = None;
    let mut snakiness: Option<f64> = None;
    let mut complexity: Option<f64> = None;
    let mut intricate = false;
    let mut palette: Option<&str> = None;
    let mut text: Option<&str> = None;
    let mut textures: Vec<Texture> = Vec::new();
    let mut distribution: Option<Distribution> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-r" | "--recipe" => {
                i += 1;
                if i < args.len() {
                    recipe_path = Some(&args[i]);
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed_override = args[i].parse().ok();
                }
            }
            "-W" | "--width" => {
                i += 1;
                if i < args.len() {
                    width = args[i].parse().ok();
                }
            }
            "-H" | "--height" => {
                i += 1;
                if i < args.len() {
                    height = args[i].parse().ok();
                }
            }
            "--min-size" => {
                i += 1;
                if i < args.len() {
                    min_size = args[i].parse().ok();
                }
            }
            "--max-size" => {
                i += 1;
                if i < args.len() {
                    max_size = args[i].parse().ok();
                }
            }
            "--shape" => {
                i += 1;
                if i < args.len() {
                    shape = Some(BaseShape::from_name(&args[i]).unwrap_or_else(|| {
                        eprintln!("Unknown shape: {}. Use rectangle, hexagon or circle.", args[i]);
                        std::process::exit(1);
                    }));
                }
            }
            "--snakiness" => {
                i += 1;
                if i < args.len() {
                    snakiness = args[i].parse().ok();
                }
            }
            "--complexity" => {
                i += 1;
                if i < args.len() {
                    complexity = args[i].parse().ok();
                }
            }
            "--intricate" => {
                intricate = true;
            }
            "--palette" => {
                i += 1;
                if i < args.len() {
                    palette = Some(&args[i]);
                }
            }
            "--text" => {
                i += 1;
                if i < args.len() {
                    text = Some(&args[i]);
                }
            }
            "-t" | "--texture" => {
                i += 1;
                if i < args.len() {
                    match Texture::from_name(&args[i]) {
                        Some(t) => textures.push(t),
                        None => {
                            eprintln!(
                                "Unknown texture: {}. Use 'kerf textures' to list available.",
                                args[i]
                            );
                            std::process::exit(1);
                        }
                    }
                }
            }
            "--distribution" => {
                i += 1;
                if i < args.len() {
                    distribution = Some(Distribution::from_name(&args[i]).unwrap_or_else(|| {
                        eprintln!("Unknown distribution: {}. Use all, alternate or random.", args[i]);
                        std::process::exit(1);
                    }));
                }
            }
            "--example" => {
                print_example();
                return;
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
            }
        }
        i += 1;
    }

    let mut recipe = match recipe_path {
        Some(path) => {
            eprintln!("Loading recipe: {}", path);
            match Recipe::load(path) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => Recipe::default(),
    };

    // Flags override the recipe.
    if let Some(v) = width {
        recipe.width = v;
    }
    if let Some(v) = height {
        recipe.height = v;
    }
    if let Some(v) = min_size {
        recipe.min_piece_size = v;
    }
    if let Some(v) = max_size {
        recipe.max_piece_size = v;
    }
    if let Some(v) = shape {
        recipe.shape = v;
    }
    if let Some(v) = snakiness {
        recipe.snakiness = v;
    }
    if let Some(v) = complexity {
        recipe.complexity = v;
    }
    if intricate {
        recipe.intricate = true;
    }
    if let Some(v) = palette {
        recipe.palette = v.to_string();
    }
    if let Some(v) = text {
        recipe.text = Some(TextSettings {
            text: v.to_string(),
            distribution: distribution.unwrap_or_default(),
            seed: 0,
        });
    }
    if !textures.is_empty() {
        recipe.textures = Some(TextureSettings {
            textures,
            distribution: distribution.unwrap_or_default(),
            seed: 0,
            spacing: 2.0,
            rotation: 0.0,
        });
    }

    let seed = seed_override
        .or(recipe.seed)
        .unwrap_or_else(|| rand::random::<u32>() as u64);

    eprintln!(
        "Generating {}x{} {} puzzle (seed {})",
        recipe.width,
        recipe.height,
        recipe.shape.name(),
        seed
    );

    let pieces = recipe.pieces(seed);
    eprintln!("Generated {} pieces", pieces.len());

    let svg = recipe.document(&pieces);

    match output_path {
        Some("-") => println!("{}", svg),
        Some(path) => {
            write_or_die(path, &svg);
        }
        None => {
            let path = format!("kerf-{}.svg", Local::now().format("%Y%m%d-%H%M%S"));
            write_or_die(&path, &svg);
        }
    }
}

fn write_or_die(path: &str, svg: &str) {
    if let Err(e) = fs::write(path, svg) {
        eprintln!("Failed to write {}: {}", path, e);
        std::process::exit(1);
    }
    eprintln!("Wrote: {}", path);
}

fn print_usage() {
    eprintln!("Usage: kerf generate [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -r, --recipe <file>     YAML/JSON recipe file");
    eprintln!("  -o, --output <file>     Output SVG file ('-' for stdout; default: timestamped)");
    eprintln!("  --seed <n>              Generation seed (default: recipe seed or random)");
    eprintln!("  -W, --width <n>         Grid width in cells");
    eprintln!("  -H, --height <n>        Grid height in cells");
    eprintln!("  --min-size <n>          Minimum piece size in cells");
    eprintln!("  --max-size <n>          Maximum piece size in cells");
    eprintln!("  --shape <name>          rectangle | hexagon | circle");
    eprintln!("  --snakiness <f>         0..1, thin continuing runs");
    eprintln!("  --complexity <f>        0..1, branching and ragged edges");
    eprintln!("  --intricate             Interlocking piece silhouettes");
    eprintln!("  --palette <id>          Piece color palette (see 'kerf palettes')");
    eprintln!("  --text <string>         Distribute caption characters over pieces");
    eprintln!("  -t, --texture <name>    Add a texture to the pool (repeatable)");
    eprintln!("  --distribution <name>   all | alternate | random (for --text/--texture)");
    eprintln!("  --example               Print an example recipe");
    eprintln!("  -h, --help              Show this help");
}
