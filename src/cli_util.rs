//! Stderr diagnostics for the `bf` binary.

use std::io::{self, Write};

use crate::BrainfuckError;

/// Characters of source shown on each side of the caret.
const WINDOW_CHARS: usize = 32;

/// Print `err` to stderr with a caret context window into the source.
///
/// Every [`BrainfuckError`] carries the character offset it refers to, so
/// the window is centered on [`BrainfuckError::position`]. Slicing is done
/// by char index to stay valid for non-ASCII comment text.
pub fn report_error(source: &str, err: &BrainfuckError) {
    eprintln!("bf: {err}");

    let pos = err.position();
    let total_chars = source.chars().count();
    let start_char = pos.saturating_sub(WINDOW_CHARS);
    let end_char = (pos + WINDOW_CHARS + 1).min(total_chars);

    let start_byte = char_to_byte_index(source, start_char);
    let end_byte = char_to_byte_index(source, end_char);
    eprintln!("  {}", &source[start_byte..end_byte]);

    // Caret under the exact position.
    let caret_offset = pos.saturating_sub(start_char);
    eprintln!("  {}^", " ".repeat(caret_offset));
    let _ = io::stderr().flush();
}

/// Convert a char index into a byte index, saturating at the end of `s`.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte_idx, _)| byte_idx)
}
