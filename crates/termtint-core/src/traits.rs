//! Printer trait contracts.
//!
//! [`Printer`] is the plain contract: four channels (standard, error,
//! debug, level-gated debug), each with and without a trailing newline.
//! [`StyledPrinter`] extends it with a persistent style, per-field
//! setters, and override variants of every print operation.
//!
//! Messages are `&dyn Display` so any value with a string representation
//! can be printed. Every operation writes and flushes before returning;
//! none of them return output.

use std::fmt::Display;

use termtint_ansi::{Attribute, BgColor, FgColor};

use crate::error::Result;
use crate::style::Style;

/// An output sink pair with debug-level gating.
///
/// Implementations own a standard-output channel, an error channel, and a
/// debug threshold. Debug output shares the standard-output sink; gated
/// debug calls above the threshold are silent no-ops, not errors.
pub trait Printer {
    /// Write `msg` to the standard output channel.
    fn print(&mut self, msg: &dyn Display) -> Result<()>;

    /// Write `msg` and a trailing newline to the standard output channel.
    fn println(&mut self, msg: &dyn Display) -> Result<()>;

    /// Write `msg` to the error channel.
    fn error_print(&mut self, msg: &dyn Display) -> Result<()>;

    /// Write `msg` and a trailing newline to the error channel.
    fn error_println(&mut self, msg: &dyn Display) -> Result<()>;

    /// Write a debug message unconditionally.
    fn debug_print(&mut self, msg: &dyn Display) -> Result<()>;

    /// Write a debug message and a trailing newline unconditionally.
    fn debug_println(&mut self, msg: &dyn Display) -> Result<()>;

    /// Write a debug message if `level` is within the printer's
    /// threshold; otherwise do nothing and return `Ok(())`.
    fn debug_print_at(&mut self, msg: &dyn Display, level: i32) -> Result<()>;

    /// Newline-terminated variant of [`Printer::debug_print_at`].
    fn debug_println_at(&mut self, msg: &dyn Display, level: i32) -> Result<()>;

    /// The configured debug threshold.
    fn debug_level(&self) -> i32;

    /// Replace the debug threshold.
    fn set_debug_level(&mut self, level: i32);

    /// Whether a gated debug message at `level` would be emitted.
    ///
    /// The single rule is `level <= threshold`, which also covers
    /// negative levels: they print only when the threshold is at least
    /// as low.
    fn can_print(&self, level: i32) -> bool {
        level <= self.debug_level()
    }
}

/// A [`Printer`] that carries a persistent [`Style`] and accepts
/// call-scoped style overrides.
///
/// Every print reflects the persistent style. The `*_with` variants
/// overlay the supplied style onto it for that single call; they never
/// alter the stored style.
pub trait StyledPrinter: Printer {
    /// The persistent style.
    fn style(&self) -> &Style;

    /// Replace the persistent style wholesale. Unset fields in the new
    /// style become unset on the printer.
    fn set_style(&mut self, style: Style);

    /// Set only the attribute field of the persistent style.
    fn set_attribute(&mut self, attr: Attribute) {
        let current = *self.style();
        self.set_style(current.attribute(attr));
    }

    /// Set only the foreground field of the persistent style.
    fn set_foreground(&mut self, color: FgColor) {
        let current = *self.style();
        self.set_style(current.foreground(color));
    }

    /// Set only the background field of the persistent style.
    fn set_background(&mut self, color: BgColor) {
        let current = *self.style();
        self.set_style(current.background(color));
    }

    /// [`Printer::print`] with a transient style override.
    fn print_with(&mut self, msg: &dyn Display, over: &Style) -> Result<()>;

    /// [`Printer::println`] with a transient style override.
    fn println_with(&mut self, msg: &dyn Display, over: &Style) -> Result<()>;

    /// [`Printer::error_print`] with a transient style override.
    fn error_print_with(&mut self, msg: &dyn Display, over: &Style) -> Result<()>;

    /// [`Printer::error_println`] with a transient style override.
    fn error_println_with(&mut self, msg: &dyn Display, over: &Style) -> Result<()>;

    /// [`Printer::debug_print`] with a transient style override.
    fn debug_print_with(&mut self, msg: &dyn Display, over: &Style) -> Result<()>;

    /// [`Printer::debug_println`] with a transient style override.
    fn debug_println_with(&mut self, msg: &dyn Display, over: &Style) -> Result<()>;

    /// [`Printer::debug_print_at`] with a transient style override.
    fn debug_print_at_with(&mut self, msg: &dyn Display, level: i32, over: &Style)
        -> Result<()>;

    /// [`Printer::debug_println_at`] with a transient style override.
    fn debug_println_at_with(
        &mut self,
        msg: &dyn Display,
        level: i32,
        over: &Style,
    ) -> Result<()>;
}
