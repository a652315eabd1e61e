//! Attribute and color enumerations for terminal styling.
//!
//! These are the fixed sets a printer style is drawn from. Foreground
//! and background colors are deliberately distinct types so one can
//! never be supplied where the other is expected, even though their
//! SGR codes differ only by an offset.

use serde::{Deserialize, Serialize};

/// A stylistic modifier independent of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Reset all attributes (SGR 0)
    Clear,
    /// Bold or increased intensity (SGR 1)
    Bold,
    /// Dim or decreased intensity (SGR 2)
    Dim,
    /// Italic (SGR 3)
    Italic,
    /// Underline (SGR 4)
    Underline,
    /// Slow blink (SGR 5)
    Blink,
    /// Reverse video (SGR 7)
    Reverse,
    /// Concealed text (SGR 8)
    Hidden,
    /// Strikethrough (SGR 9)
    Strikethrough,
}

impl Attribute {
    /// The SGR code for this attribute.
    pub fn code(&self) -> &'static str {
        match self {
            Attribute::Clear => "0",
            Attribute::Bold => "1",
            Attribute::Dim => "2",
            Attribute::Italic => "3",
            Attribute::Underline => "4",
            Attribute::Blink => "5",
            Attribute::Reverse => "7",
            Attribute::Hidden => "8",
            Attribute::Strikethrough => "9",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attribute::Clear => write!(f, "clear"),
            Attribute::Bold => write!(f, "bold"),
            Attribute::Dim => write!(f, "dim"),
            Attribute::Italic => write!(f, "italic"),
            Attribute::Underline => write!(f, "underline"),
            Attribute::Blink => write!(f, "blink"),
            Attribute::Reverse => write!(f, "reverse"),
            Attribute::Hidden => write!(f, "hidden"),
            Attribute::Strikethrough => write!(f, "strikethrough"),
        }
    }
}

/// A foreground (font) color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FgColor {
    /// SGR 30
    Black,
    /// SGR 31
    Red,
    /// SGR 32
    Green,
    /// SGR 33
    Yellow,
    /// SGR 34
    Blue,
    /// SGR 35
    Magenta,
    /// SGR 36
    Cyan,
    /// SGR 37
    White,
    /// The terminal's default foreground (SGR 39)
    Default,
}

impl FgColor {
    /// The SGR code for this foreground color.
    pub fn code(&self) -> &'static str {
        match self {
            FgColor::Black => "30",
            FgColor::Red => "31",
            FgColor::Green => "32",
            FgColor::Yellow => "33",
            FgColor::Blue => "34",
            FgColor::Magenta => "35",
            FgColor::Cyan => "36",
            FgColor::White => "37",
            FgColor::Default => "39",
        }
    }
}

impl std::fmt::Display for FgColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FgColor::Black => write!(f, "black"),
            FgColor::Red => write!(f, "red"),
            FgColor::Green => write!(f, "green"),
            FgColor::Yellow => write!(f, "yellow"),
            FgColor::Blue => write!(f, "blue"),
            FgColor::Magenta => write!(f, "magenta"),
            FgColor::Cyan => write!(f, "cyan"),
            FgColor::White => write!(f, "white"),
            FgColor::Default => write!(f, "default"),
        }
    }
}

/// A background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BgColor {
    /// SGR 40
    Black,
    /// SGR 41
    Red,
    /// SGR 42
    Green,
    /// SGR 43
    Yellow,
    /// SGR 44
    Blue,
    /// SGR 45
    Magenta,
    /// SGR 46
    Cyan,
    /// SGR 47
    White,
    /// The terminal's default background (SGR 49)
    Default,
}

impl BgColor {
    /// The SGR code for this background color.
    pub fn code(&self) -> &'static str {
        match self {
            BgColor::Black => "40",
            BgColor::Red => "41",
            BgColor::Green => "42",
            BgColor::Yellow => "43",
            BgColor::Blue => "44",
            BgColor::Magenta => "45",
            BgColor::Cyan => "46",
            BgColor::White => "47",
            BgColor::Default => "49",
        }
    }
}

impl std::fmt::Display for BgColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BgColor::Black => write!(f, "black"),
            BgColor::Red => write!(f, "red"),
            BgColor::Green => write!(f, "green"),
            BgColor::Yellow => write!(f, "yellow"),
            BgColor::Blue => write!(f, "blue"),
            BgColor::Magenta => write!(f, "magenta"),
            BgColor::Cyan => write!(f, "cyan"),
            BgColor::White => write!(f, "white"),
            BgColor::Default => write!(f, "default"),
        }
    }
}
