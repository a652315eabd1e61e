//! Termtint ANSI
//!
//! This crate provides the ANSI escape-code layer for termtint:
//! the fixed enumerations a printer style is drawn from, the SGR
//! code table mapping each member to its escape code, and utilities
//! for working with already-styled text.
//!
//! # Overview
//!
//! - [`codes`] - SGR escape sequence constants and assembly
//! - [`color`] - [`Attribute`], [`FgColor`], [`BgColor`] enumerations
//! - [`utils`] - Visible-text extraction and width measurement
//!
//! # Example
//!
//! ```
//! use termtint_ansi::{codes, Attribute, FgColor};
//!
//! let seq = codes::sgr(&[Attribute::Bold.code(), FgColor::Red.code()]);
//! assert_eq!(seq, "\x1b[1;31m");
//!
//! // Undo everything afterwards so styling does not leak.
//! let styled = format!("{}warning{}", seq, codes::RESET);
//! assert_eq!(termtint_ansi::utils::visible(&styled), "warning");
//! ```

pub mod codes;
pub mod color;
pub mod utils;

pub use color::{Attribute, BgColor, FgColor};
