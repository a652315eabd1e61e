//! The style value object and its overlay rule.

use serde::{Deserialize, Serialize};
use termtint_ansi::codes;
use termtint_ansi::{Attribute, BgColor, FgColor};

/// A complete text style: attribute, foreground color, background color.
///
/// Each field may be unset, meaning "do not touch the terminal's (or the
/// printer's) current value for this field". A printer stores one `Style`
/// persistently; a print call may supply another as a transient override,
/// combined with [`Style::overlay`].
///
/// # Example
///
/// ```
/// use termtint_core::Style;
/// use termtint_ansi::{Attribute, FgColor};
///
/// let style = Style::new().attribute(Attribute::Bold).foreground(FgColor::Red);
/// assert_eq!(style.escape(), "\x1b[1;31m");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Stylistic modifier (bold, underline, ...)
    #[serde(default)]
    pub attribute: Option<Attribute>,
    /// Font color
    #[serde(default)]
    pub foreground: Option<FgColor>,
    /// Background color
    #[serde(default)]
    pub background: Option<BgColor>,
}

impl Style {
    /// Create a new style with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// A style with all fields unset. Printing with it emits no
    /// escape sequences at all.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Set the attribute.
    pub fn attribute(mut self, attr: Attribute) -> Self {
        self.attribute = Some(attr);
        self
    }

    /// Set the foreground color.
    pub fn foreground(mut self, color: FgColor) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Set the background color.
    pub fn background(mut self, color: BgColor) -> Self {
        self.background = Some(color);
        self
    }

    /// Whether all fields are unset.
    pub fn is_plain(&self) -> bool {
        self.attribute.is_none() && self.foreground.is_none() && self.background.is_none()
    }

    /// Overlay `over` onto this style, field by field.
    ///
    /// For each field the override's value wins if set, otherwise this
    /// style's value is kept. Neither operand is modified; this is how a
    /// print call computes its effective style from the printer's
    /// persistent style and a call-scoped override.
    ///
    /// # Example
    ///
    /// ```
    /// use termtint_core::Style;
    /// use termtint_ansi::{Attribute, FgColor};
    ///
    /// let base = Style::new().attribute(Attribute::Bold).foreground(FgColor::Red);
    /// let over = Style::new().foreground(FgColor::Green);
    /// let effective = base.overlay(&over);
    /// assert_eq!(effective.attribute, Some(Attribute::Bold));
    /// assert_eq!(effective.foreground, Some(FgColor::Green));
    /// ```
    pub fn overlay(&self, over: &Style) -> Style {
        Style {
            attribute: over.attribute.or(self.attribute),
            foreground: over.foreground.or(self.foreground),
            background: over.background.or(self.background),
        }
    }

    /// The SGR escape sequence for this style.
    ///
    /// Unset fields contribute nothing; a fully unset style yields an
    /// empty string.
    pub fn escape(&self) -> String {
        codes::sgr(&[
            self.attribute.map(|a| a.code()).unwrap_or(""),
            self.foreground.map(|c| c.code()).unwrap_or(""),
            self.background.map(|c| c.code()).unwrap_or(""),
        ])
    }
}
