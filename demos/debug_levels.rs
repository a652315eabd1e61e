//! Debug-level gating driven by a TOML config.
//!
//! Run with: `cargo run --example debug_levels`

use termtint::{FgColor, Printer, PrinterConfig, Style, StyledPrinter};

fn main() -> termtint::Result<()> {
    env_logger::init();

    let config = PrinterConfig::from_toml_str(
        r#"
debug_level = 2
timestamps  = true
"#,
    )?;
    let mut printer = config.builder().build();

    let dim = Style::new().foreground(FgColor::Cyan);
    for level in 0..=4 {
        printer.debug_println_at_with(
            &format!("message at level {}", level),
            level,
            &dim,
        )?;
    }

    printer.println(&format!(
        "threshold is {}, so levels 3 and 4 were suppressed",
        printer.debug_level()
    ))?;

    Ok(())
}
