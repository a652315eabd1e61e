//! The terminal printer and its builder.

use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

use log::trace;

use termtint_ansi::codes::RESET;
use termtint_core::{Printer, Result, Style, StyledPrinter};

use crate::config::ColorChoice;

/// Timestamp prefix format, e.g. `[2026-08-27 14:03:59] `.
const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// A printer writing styled text to a pair of sinks.
///
/// The out sink carries standard and debug messages, the err sink
/// carries error messages; neither ever receives the other's traffic.
/// Each write renders the effective style as one SGR sequence, emits
/// the message, resets, and flushes, so styling never leaks into
/// surrounding output.
///
/// Construct with [`TerminalPrinter::stdio`] for the common case or
/// [`TerminalPrinter::builder`] for full control, including injecting
/// in-memory sinks.
pub struct TerminalPrinter<O: Write, E: Write> {
    out: O,
    err: E,
    style: Style,
    debug_level: i32,
    timestamps: bool,
    color: bool,
}

impl TerminalPrinter<Stdout, Stderr> {
    /// A printer on the process stdout/stderr with default settings
    /// (auto color, threshold 0, no timestamps).
    pub fn stdio() -> Self {
        Self::builder().build()
    }

    /// Start building a printer.
    ///
    /// The builder itself is sink-agnostic; pick the sinks at the end
    /// with `build` or `build_with_sinks`.
    pub fn builder() -> TerminalPrinterBuilder {
        TerminalPrinterBuilder::new()
    }
}

impl<O: Write, E: Write> TerminalPrinter<O, E> {
    /// A printer over the given sinks with default settings and color
    /// forced on. Mostly useful for capturing output in tests.
    pub fn with_sinks(out: O, err: E) -> Self {
        TerminalPrinterBuilder::new()
            .color(ColorChoice::Always)
            .build_with_sinks(out, err)
    }

    /// Whether escape sequences are being emitted.
    pub fn colored(&self) -> bool {
        self.color
    }

    /// Consume the printer and hand back its sinks.
    pub fn into_sinks(self) -> (O, E) {
        (self.out, self.err)
    }

    fn emit_out(&mut self, msg: &dyn Display, style: Style, newline: bool) -> Result<()> {
        write_styled(&mut self.out, msg, &style, self.color, self.timestamps, newline)
    }

    fn emit_err(&mut self, msg: &dyn Display, style: Style, newline: bool) -> Result<()> {
        write_styled(&mut self.err, msg, &style, self.color, self.timestamps, newline)
    }
}

/// Render one message to a sink: timestamp prefix, SGR sequence,
/// message, reset, optional newline, flush.
///
/// The reset is only written when a sequence was, so unstyled output
/// stays byte-for-byte plain.
fn write_styled<W: Write>(
    writer: &mut W,
    msg: &dyn Display,
    style: &Style,
    color: bool,
    timestamps: bool,
    newline: bool,
) -> Result<()> {
    if timestamps {
        write!(writer, "[{}] ", jiff::Zoned::now().strftime(TIMESTAMP_FMT))?;
    }

    let seq = if color { style.escape() } else { String::new() };
    if seq.is_empty() {
        write!(writer, "{}", msg)?;
    } else {
        write!(writer, "{}{}{}", seq, msg, RESET)?;
    }

    if newline {
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

impl<O: Write, E: Write> Printer for TerminalPrinter<O, E> {
    fn print(&mut self, msg: &dyn Display) -> Result<()> {
        self.emit_out(msg, self.style, false)
    }

    fn println(&mut self, msg: &dyn Display) -> Result<()> {
        self.emit_out(msg, self.style, true)
    }

    fn error_print(&mut self, msg: &dyn Display) -> Result<()> {
        self.emit_err(msg, self.style, false)
    }

    fn error_println(&mut self, msg: &dyn Display) -> Result<()> {
        self.emit_err(msg, self.style, true)
    }

    fn debug_print(&mut self, msg: &dyn Display) -> Result<()> {
        self.emit_out(msg, self.style, false)
    }

    fn debug_println(&mut self, msg: &dyn Display) -> Result<()> {
        self.emit_out(msg, self.style, true)
    }

    fn debug_print_at(&mut self, msg: &dyn Display, level: i32) -> Result<()> {
        if !self.can_print(level) {
            trace!(
                "suppressing debug message at level {} (threshold {})",
                level,
                self.debug_level
            );
            return Ok(());
        }
        self.emit_out(msg, self.style, false)
    }

    fn debug_println_at(&mut self, msg: &dyn Display, level: i32) -> Result<()> {
        if !self.can_print(level) {
            trace!(
                "suppressing debug message at level {} (threshold {})",
                level,
                self.debug_level
            );
            return Ok(());
        }
        self.emit_out(msg, self.style, true)
    }

    fn debug_level(&self) -> i32 {
        self.debug_level
    }

    fn set_debug_level(&mut self, level: i32) {
        self.debug_level = level;
    }
}

impl<O: Write, E: Write> StyledPrinter for TerminalPrinter<O, E> {
    fn style(&self) -> &Style {
        &self.style
    }

    fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    fn print_with(&mut self, msg: &dyn Display, over: &Style) -> Result<()> {
        self.emit_out(msg, self.style.overlay(over), false)
    }

    fn println_with(&mut self, msg: &dyn Display, over: &Style) -> Result<()> {
        self.emit_out(msg, self.style.overlay(over), true)
    }

    fn error_print_with(&mut self, msg: &dyn Display, over: &Style) -> Result<()> {
        self.emit_err(msg, self.style.overlay(over), false)
    }

    fn error_println_with(&mut self, msg: &dyn Display, over: &Style) -> Result<()> {
        self.emit_err(msg, self.style.overlay(over), true)
    }

    fn debug_print_with(&mut self, msg: &dyn Display, over: &Style) -> Result<()> {
        self.emit_out(msg, self.style.overlay(over), false)
    }

    fn debug_println_with(&mut self, msg: &dyn Display, over: &Style) -> Result<()> {
        self.emit_out(msg, self.style.overlay(over), true)
    }

    fn debug_print_at_with(
        &mut self,
        msg: &dyn Display,
        level: i32,
        over: &Style,
    ) -> Result<()> {
        if !self.can_print(level) {
            trace!(
                "suppressing debug message at level {} (threshold {})",
                level,
                self.debug_level
            );
            return Ok(());
        }
        self.emit_out(msg, self.style.overlay(over), false)
    }

    fn debug_println_at_with(
        &mut self,
        msg: &dyn Display,
        level: i32,
        over: &Style,
    ) -> Result<()> {
        if !self.can_print(level) {
            trace!(
                "suppressing debug message at level {} (threshold {})",
                level,
                self.debug_level
            );
            return Ok(());
        }
        self.emit_out(msg, self.style.overlay(over), true)
    }
}

/// Builder for [`TerminalPrinter`].
#[derive(Debug, Clone, Default)]
pub struct TerminalPrinterBuilder {
    debug_level: i32,
    timestamps: bool,
    color: ColorChoice,
    style: Style,
}

impl TerminalPrinterBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debug threshold.
    pub fn debug_level(mut self, level: i32) -> Self {
        self.debug_level = level;
        self
    }

    /// Enable or disable timestamp prefixes.
    pub fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Set the color behavior. `Auto` is resolved once, at build time.
    pub fn color(mut self, choice: ColorChoice) -> Self {
        self.color = choice;
        self
    }

    /// Set the initial persistent style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Build a printer on the process stdout/stderr.
    pub fn build(self) -> TerminalPrinter<Stdout, Stderr> {
        self.build_with_sinks(io::stdout(), io::stderr())
    }

    /// Build a printer over the given sinks.
    pub fn build_with_sinks<O: Write, E: Write>(self, out: O, err: E) -> TerminalPrinter<O, E> {
        let color = self.color.resolve();
        trace!(
            "building printer (debug_level={}, timestamps={}, color={})",
            self.debug_level,
            self.timestamps,
            color
        );
        TerminalPrinter {
            out,
            err,
            style: self.style,
            debug_level: self.debug_level,
            timestamps: self.timestamps,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termtint_ansi::{Attribute, BgColor, FgColor};

    fn capture() -> (Vec<u8>, Vec<u8>) {
        (Vec::new(), Vec::new())
    }

    #[test]
    fn test_print_uses_persistent_style() {
        let (out, err) = capture();
        let mut p = TerminalPrinter::with_sinks(out, err);
        p.set_attribute(Attribute::Bold);
        p.set_foreground(FgColor::Red);
        p.print(&"msg").unwrap();

        let (out, _) = p.into_sinks();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[1;31mmsg\x1b[0m");
    }

    #[test]
    fn test_plain_style_emits_no_escapes() {
        let (out, err) = capture();
        let mut p = TerminalPrinter::with_sinks(out, err);
        p.println(&"plain").unwrap();

        let (out, _) = p.into_sinks();
        assert_eq!(String::from_utf8(out).unwrap(), "plain\n");
    }

    #[test]
    fn test_color_never_drops_escapes() {
        let (out, err) = capture();
        let mut p = TerminalPrinter::builder()
            .color(ColorChoice::Never)
            .style(Style::new().foreground(FgColor::Blue))
            .build_with_sinks(out, err);
        assert!(!p.colored());
        assert!(!p.style().is_plain());
        p.println(&"quiet").unwrap();

        let (out, _) = p.into_sinks();
        assert_eq!(String::from_utf8(out).unwrap(), "quiet\n");
    }

    #[test]
    fn test_override_does_not_touch_persistent_style() {
        let (out, err) = capture();
        let mut p = TerminalPrinter::with_sinks(out, err);
        p.set_style(Style::new().foreground(FgColor::Green));

        let over = Style::new()
            .attribute(Attribute::Underline)
            .background(BgColor::White);
        p.println_with(&"once", &over).unwrap();
        assert_eq!(*p.style(), Style::new().foreground(FgColor::Green));

        p.println(&"again").unwrap();
        let (out, _) = p.into_sinks();
        let text = String::from_utf8(out).unwrap();
        // First line overlaid, second line back to the persistent style.
        assert!(text.contains("\x1b[4;32;47monce\x1b[0m\n"));
        assert!(text.ends_with("\x1b[32magain\x1b[0m\n"));
    }

    #[test]
    fn test_error_channel_isolation() {
        let (out, err) = capture();
        let mut p = TerminalPrinter::with_sinks(out, err);
        p.error_println(&"bad").unwrap();

        let (out, err) = p.into_sinks();
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "bad\n");
    }

    #[test]
    fn test_debug_gating_boundary() {
        let (out, err) = capture();
        let mut p = TerminalPrinter::builder()
            .color(ColorChoice::Never)
            .debug_level(2)
            .build_with_sinks(out, err);

        p.debug_println_at(&"zero", 0).unwrap();
        p.debug_println_at(&"one", 1).unwrap();
        p.debug_println_at(&"two", 2).unwrap();
        p.debug_println_at(&"three", 3).unwrap();

        let (out, _) = p.into_sinks();
        assert_eq!(String::from_utf8(out).unwrap(), "zero\none\ntwo\n");
    }

    #[test]
    fn test_gated_out_call_emits_nothing_even_with_timestamps() {
        let (out, err) = capture();
        let mut p = TerminalPrinter::builder()
            .timestamps(true)
            .build_with_sinks(out, err);

        p.debug_println_at(&"hidden", 9).unwrap();
        let (out, _) = p.into_sinks();
        assert!(out.is_empty());
    }

    #[test]
    fn test_set_debug_level_takes_effect() {
        let (out, err) = capture();
        let mut p = TerminalPrinter::builder()
            .color(ColorChoice::Never)
            .build_with_sinks(out, err);

        p.debug_println_at(&"early", 1).unwrap();
        p.set_debug_level(1);
        p.debug_println_at(&"late", 1).unwrap();

        let (out, _) = p.into_sinks();
        assert_eq!(String::from_utf8(out).unwrap(), "late\n");
    }

    #[test]
    fn test_unconditional_debug_ignores_threshold() {
        let (out, err) = capture();
        let mut p = TerminalPrinter::builder()
            .color(ColorChoice::Never)
            .debug_level(-10)
            .build_with_sinks(out, err);

        p.debug_println(&"always").unwrap();
        let (out, _) = p.into_sinks();
        assert_eq!(String::from_utf8(out).unwrap(), "always\n");
    }

    #[test]
    fn test_timestamp_prefix_shape() {
        let (out, err) = capture();
        let mut p = TerminalPrinter::builder()
            .color(ColorChoice::Never)
            .timestamps(true)
            .build_with_sinks(out, err);

        p.println(&"stamped").unwrap();
        let (out, _) = p.into_sinks();
        let text = String::from_utf8(out).unwrap();
        // "[YYYY-MM-DD HH:MM:SS] stamped\n"
        assert!(text.starts_with('['));
        assert_eq!(&text[11..12], " ");
        assert!(text.ends_with("] stamped\n"));
        assert_eq!(text.len(), "[2026-08-27 14:03:59] stamped\n".len());
    }

    #[test]
    fn test_display_messages() {
        let (out, err) = capture();
        let mut p = TerminalPrinter::builder()
            .color(ColorChoice::Never)
            .build_with_sinks(out, err);

        p.println(&42).unwrap();
        p.println(&3.5).unwrap();
        let (out, _) = p.into_sinks();
        assert_eq!(String::from_utf8(out).unwrap(), "42\n3.5\n");
    }
}
