//! Integration tests for the kerf CLI.
//!
//! These run the actual binary and verify end-to-end behavior.

use std::path::PathBuf;
use std::process::Command;

use quick_xml::Reader;
use quick_xml::events::Event;

/// Get the path to the kerf binary from the workspace root.
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // crates
    path.pop(); // workspace root

    let release = path.join("target/release/kerf");
    if release.exists() {
        return release;
    }
    path.join("target/debug/kerf")
}

fn generate_stdout(extra: &[&str]) -> String {
    let mut args = vec!["generate", "-o", "-", "--seed", "42"];
    args.extend_from_slice(extra);
    let output = Command::new(binary_path())
        .args(&args)
        .output()
        .expect("Failed to execute command");
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn generate_produces_svg() {
    let stdout = generate_stdout(&[]);
    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert!(stdout.contains("mm\""), "Should declare physical units");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn generated_svg_is_well_formed_xml() {
    let stdout = generate_stdout(&["--text", "abc", "-t", "dots", "-t", "waves"]);

    let mut reader = Reader::from_str(&stdout);
    let mut saw_svg = false;
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"svg" => saw_svg = true,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("Generated SVG is not well-formed XML: {}", e),
        }
        buf.clear();
    }
    assert!(saw_svg, "Should contain an <svg> root element");
}

#[test]
fn same_seed_is_byte_identical() {
    let a = generate_stdout(&[]);
    let b = generate_stdout(&[]);
    assert_eq!(a, b, "Same seed must reproduce the identical document");
}

#[test]
fn different_seeds_differ() {
    let a = generate_stdout(&[]);
    let output = Command::new(binary_path())
        .args(["generate", "-o", "-", "--seed", "43"])
        .output()
        .expect("Failed to execute command");
    let b = String::from_utf8_lossy(&output.stdout).into_owned();
    assert_ne!(a, b);
}

#[test]
fn shapes_accepted() {
    for shape in ["rectangle", "hexagon", "circle"] {
        let stdout = generate_stdout(&["--shape", shape, "-W", "12", "-H", "12"]);
        assert!(
            stdout.contains("<svg"),
            "Shape '{}' should produce a document",
            shape
        );
    }
}

#[test]
fn textures_command_lists_all_families() {
    let output = Command::new(binary_path())
        .arg("textures")
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);

    for name in [
        "lines-h", "lines-v", "lines-diag", "grid", "dots", "waves", "circles", "zigzag",
        "cross", "hexagon",
    ] {
        assert!(stdout.contains(name), "Should list '{}' texture", name);
    }
}

#[test]
fn palettes_command_lists_wood() {
    let output = Command::new(binary_path())
        .arg("palettes")
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("wood"));
    assert!(stdout.contains("#E8D4B8"));
}

#[test]
fn help_shows_commands() {
    let output = Command::new(binary_path())
        .arg("help")
        .output()
        .expect("Failed to execute command");
    let combined = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(combined.contains("generate"));
    assert!(combined.contains("preview"));
    assert!(combined.contains("textures"));
}

#[test]
fn unknown_command_fails() {
    let output = Command::new(binary_path())
        .arg("frobnicate")
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
}
