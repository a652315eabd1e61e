//! Styled printing: persistent styles and per-call overrides.
//!
//! Run with: `cargo run --example styled`

use termtint::{Attribute, BgColor, FgColor, Printer, Style, StyledPrinter, TerminalPrinter};

fn main() -> termtint::Result<()> {
    env_logger::init();

    let mut printer = TerminalPrinter::stdio();

    // Persistent style: everything prints green until changed.
    printer.set_foreground(FgColor::Green);
    printer.println(&"green")?;
    printer.println(&"still green")?;

    // A one-off override; the persistent green is untouched.
    let alert = Style::new()
        .attribute(Attribute::Bold)
        .foreground(FgColor::White)
        .background(BgColor::Red);
    printer.println_with(&"ALERT", &alert)?;
    printer.println(&"green again")?;

    // Partial override: keep the green foreground, add underline.
    printer.println_with(&"underlined green", &Style::new().attribute(Attribute::Underline))?;

    // Back to the terminal's defaults.
    printer.set_style(Style::plain());
    printer.println(&"plain")?;

    Ok(())
}
