//! Line classification for the single-line `"key" = "value";` grammar.
//!
//! One physical line maps to exactly one [`Line`] variant. The classifier is a
//! pure function of the line text, so the pattern can be unit tested in
//! isolation from any file handling.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Matches: "key" = "value"; with optional whitespace around the equals
    // sign and before the terminating semicolon. Keys and values are maximal
    // runs of non-quote characters; escaped quotes are not supported.
    static ref KEY_VALUE: Regex = Regex::new(r#""([^"]+)"\s*=\s*"([^"]+)"\s*;"#).unwrap();
}

/// Classification of one physical line of a `.strings` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A blank line or a `//` comment, preserved verbatim on clean.
    Passthrough,
    /// A recognized key-value pair.
    Entry { key: String, value: String },
    /// A non-blank, non-comment line that is not a key-value pair.
    /// Preserved verbatim on clean, never counted as a key occurrence.
    Unrecognized,
}

/// Classifies a single line of text.
///
/// Blank and comment checks run against the trimmed line before the pattern,
/// so a commented-out pair like `// "key" = "value";` stays a comment. A line
/// containing more than one pair contributes only its leftmost match.
pub fn classify(line: &str) -> Line {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with("//") {
        return Line::Passthrough;
    }

    match KEY_VALUE.captures(line) {
        Some(captures) => Line::Entry {
            key: captures[1].to_string(),
            value: captures[2].to_string(),
        },
        None => Line::Unrecognized,
    }
}
