//! SGR escape sequence constants and assembly.
//!
//! All terminal formatting in termtint goes through Select Graphic
//! Rendition (SGR) sequences of the form `\x1b[<codes>m`.

/// Control Sequence Introducer, the prefix of every SGR sequence.
pub const CSI: &str = "\x1b[";

/// Separator between individual SGR codes.
pub const SEP: &str = ";";

/// Terminator of an SGR sequence.
pub const SGR_SUFFIX: &str = "m";

/// Reset all attributes and colors.
pub const RESET: &str = "\x1b[0m";

/// Assemble an SGR sequence from individual code parts.
///
/// Empty parts are skipped; an input with no non-empty parts yields an
/// empty string rather than a bare `\x1b[m`, so callers can emit the
/// result unconditionally.
///
/// # Example
///
/// ```
/// use termtint_ansi::codes::sgr;
/// assert_eq!(sgr(&["1", "31"]), "\x1b[1;31m");
/// assert_eq!(sgr(&["", "31", ""]), "\x1b[31m");
/// assert_eq!(sgr(&["", ""]), "");
/// ```
pub fn sgr(parts: &[&str]) -> String {
    let codes: Vec<&str> = parts.iter().copied().filter(|p| !p.is_empty()).collect();
    if codes.is_empty() {
        String::new()
    } else {
        format!("{}{}{}", CSI, codes.join(SEP), SGR_SUFFIX)
    }
}
