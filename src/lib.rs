//! Termtint - styled console printing with debug-level gating.
//!
//! A termtint printer owns two sinks (standard output and standard
//! error), a persistent [`Style`], and a debug threshold. Every print
//! reflects the persistent style; any call may supply a transient style
//! override that is overlaid field by field for that call only. Gated
//! debug calls are emitted only when their level is within the
//! threshold.
//!
//! # Example
//!
//! ```
//! use termtint::{Attribute, ColorChoice, FgColor, Printer, Style, StyledPrinter,
//!                TerminalPrinter};
//!
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! {
//!     let mut printer = TerminalPrinter::builder()
//!         .color(ColorChoice::Always)
//!         .debug_level(1)
//!         .build_with_sinks(&mut out, &mut err);
//!
//!     printer.set_foreground(FgColor::Green);
//!     printer.println(&"ready").unwrap();
//!
//!     // One-off override; the persistent green is untouched.
//!     let alert = Style::new().attribute(Attribute::Bold).foreground(FgColor::Red);
//!     printer.error_println_with(&"failed", &alert).unwrap();
//!
//!     printer.debug_println_at(&"details", 2).unwrap(); // above threshold: silent
//! }
//! assert!(String::from_utf8(out).unwrap().contains("ready"));
//! ```
//!
//! For printing to the real terminal use [`TerminalPrinter::stdio`] or
//! the builder's [`build`](terminal::TerminalPrinterBuilder::build); with
//! [`ColorChoice::Auto`] escape sequences are dropped when the output is
//! not a color-capable terminal.

pub mod config;
pub mod detect;
pub mod terminal;

pub use config::{ColorChoice, PrinterConfig};
pub use detect::colors_supported;
pub use terminal::{TerminalPrinter, TerminalPrinterBuilder};

pub use termtint_ansi as ansi;
pub use termtint_ansi::{Attribute, BgColor, FgColor};
pub use termtint_core::{Printer, Result, Style, StyledPrinter, TermtintError};
