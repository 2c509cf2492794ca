//! kerf - laser-cut puzzle generator CLI
//!
//! Usage:
//!   kerf generate [options]        Generate a puzzle SVG document
//!   kerf preview [recipe] [opts]   Render a puzzle to PNG
//!   kerf textures                  List available engrave textures
//!   kerf palettes                  List available color palettes

use std::env;

mod cli;

use cli::generate::cmd_generate;
use cli::list::{cmd_palettes, cmd_textures};
use cli::preview::cmd_preview;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(|s| s.as_str()) {
        Some("generate" | "gen") => cmd_generate(&args[1..]),
        Some("preview") => cmd_preview(&args[1..]),
        Some("textures") => cmd_textures(),
        Some("palettes") => cmd_palettes(),
        Some("help" | "-h" | "--help") | None => print_usage(),
        Some(unknown) => {
            eprintln!("Unknown command: {}", unknown);
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("kerf - laser-cut puzzle generator");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    kerf generate [options]          Generate a puzzle SVG document");
    eprintln!("    kerf preview [recipe] [options]  Render a puzzle to PNG");
    eprintln!("    kerf textures                    List available engrave textures");
    eprintln!("    kerf palettes                    List available color palettes");
    eprintln!();
    eprintln!("Run 'kerf generate --help' for generation options,");
    eprintln!("or 'kerf generate --example' for an annotated recipe file.");
}
