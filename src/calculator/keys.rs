//! Keypad mapping for typed input.
//!
//! Turns a line typed on a regular keyboard into calculator tokens. The
//! ASCII stand-ins `*`, `x` and `/` become the keypad glyphs `×` and `÷`;
//! everything else is one token per character.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches lines made only of keys the keypad has.
    static ref KEYPAD_CHARS: Regex = Regex::new(r"^[0-9\s\.\+\-\*/xX×÷]*$").unwrap();
}

/// Check if a line only uses keypad keys.
pub fn is_keypad_input(line: &str) -> bool {
    KEYPAD_CHARS.is_match(line)
}

/// Map a single key to its token text.
pub fn map_key(key: char) -> Option<String> {
    match key {
        c if c.is_whitespace() => None,
        '*' | 'x' | 'X' => Some("×".to_string()),
        '/' => Some("÷".to_string()),
        c => Some(c.to_string()),
    }
}

/// Split a typed line into token texts.
///
/// Returns `None` if the line contains a key the keypad doesn't have.
pub fn tokenize(line: &str) -> Option<Vec<String>> {
    if !is_keypad_input(line) {
        return None;
    }
    Some(line.chars().filter_map(map_key).collect())
}
