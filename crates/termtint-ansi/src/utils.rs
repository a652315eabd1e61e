//! Utilities for text that already carries ANSI escape sequences.
//!
//! Printers append a reset after every styled write, so downstream code
//! mostly never needs to care about the escapes. These helpers exist for
//! the cases that do: asserting on emitted output, aligning styled text,
//! or logging it somewhere escapes are unwelcome.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// Regex pattern for ANSI escape sequences (CSI and OSC).
pub const ESCAPE: &str = r"\x1b(?:\[[0-9;?]*[a-zA-Z]|\][^\x07\x1b]*(?:\x07|\x1b\\))";

static ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(ESCAPE).unwrap());

/// Remove all ANSI escape sequences from text.
///
/// Returns only the visible text content.
///
/// # Example
///
/// ```
/// use termtint_ansi::utils::visible;
/// let text = "\x1b[1;31mBold red\x1b[0m text";
/// assert_eq!(visible(text), "Bold red text");
/// ```
pub fn visible(text: &str) -> String {
    ESCAPE_RE.replace_all(text, "").to_string()
}

/// Calculate the visible display width of text.
///
/// Escape sequences contribute nothing; the remaining characters are
/// measured by Unicode width, so CJK characters count as two columns.
///
/// # Example
///
/// ```
/// use termtint_ansi::utils::visible_length;
/// assert_eq!(visible_length("\x1b[4munderlined\x1b[0m"), 10);
/// assert_eq!(visible_length("日本"), 4);
/// ```
pub fn visible_length(text: &str) -> usize {
    visible(text).width()
}
