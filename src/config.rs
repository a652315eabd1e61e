//! Printer configuration.
//!
//! Hosts that want their printer settings in a config file can
//! deserialize a [`PrinterConfig`] from TOML (standalone or embedded as
//! a table in their own config) and turn it into a builder.
//!
//! # Example
//!
//! ```
//! use termtint::{Printer, PrinterConfig};
//!
//! let config = PrinterConfig::from_toml_str(r#"
//! debug_level = 2
//! timestamps  = true
//! color       = "never"
//! "#).unwrap();
//! let printer = config.builder().build();
//! assert_eq!(printer.debug_level(), 2);
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use termtint_core::{Result, TermtintError};

use crate::terminal::TerminalPrinterBuilder;

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"debug_level = 0
timestamps  = false
color       = "auto"
"#;

/// Whether a printer emits escape sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Detect at build time: `NO_COLOR`, `TERM=dumb`, and non-TTY
    /// stdout all disable color.
    #[default]
    Auto,
    /// Always emit escape sequences, even to a pipe.
    Always,
    /// Never emit escape sequences.
    Never,
}

impl ColorChoice {
    /// Resolve the choice into a concrete on/off decision.
    pub fn resolve(&self) -> bool {
        match self {
            ColorChoice::Auto => crate::detect::colors_supported(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl std::fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorChoice::Auto => write!(f, "auto"),
            ColorChoice::Always => write!(f, "always"),
            ColorChoice::Never => write!(f, "never"),
        }
    }
}

/// Printer settings.
///
/// All fields default, so a partial TOML table is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterConfig {
    /// Debug threshold; gated debug messages above it are suppressed.
    #[serde(default)]
    pub debug_level: i32,

    /// Prefix every emitted message with a timestamp.
    #[serde(default)]
    pub timestamps: bool,

    /// Color behavior.
    #[serde(default)]
    pub color: ColorChoice,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl PrinterConfig {
    /// Returns the default TOML configuration string.
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| TermtintError::Config(format!("Parse error: {}", e)))
    }

    /// Load a configuration from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        debug!("Loading printer config from {}", path.display());
        toml::from_str(&content).map_err(|e| {
            TermtintError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Convert into a printer builder carrying these settings.
    pub fn builder(&self) -> TerminalPrinterBuilder {
        TerminalPrinterBuilder::new()
            .debug_level(self.debug_level)
            .timestamps(self.timestamps)
            .color(self.color)
    }
}
