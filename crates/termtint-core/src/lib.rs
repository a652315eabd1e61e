//! Termtint Core
//!
//! This crate provides the core types and trait contracts for the
//! termtint styled printers.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Style`] - An attribute/foreground/background triple with
//!   per-field overlay semantics
//! - [`Printer`], [`StyledPrinter`] - The printer trait contracts
//! - [`TermtintError`] - Error types

pub mod error;
pub mod style;
pub mod traits;

pub use error::{Result, TermtintError};
pub use style::Style;
pub use traits::{Printer, StyledPrinter};
