//! Caption text parsing.

/// Split a caption string into distributable units.
///
/// One unit per Unicode scalar value; spaces and newlines are skipped
/// rather than distributed.
pub fn parse_units(text: &str) -> Vec<String> {
    text.chars()
        .filter(|c| *c != ' ' && *c != '\n')
        .map(|c| c.to_string())
        .collect()
}
