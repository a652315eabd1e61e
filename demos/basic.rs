//! Basic example: plain printing on all four channels.
//!
//! Run with: `cargo run --example basic`

use termtint::{Printer, TerminalPrinter};

fn main() -> termtint::Result<()> {
    env_logger::init();

    let mut printer = TerminalPrinter::builder().debug_level(1).build();

    printer.println(&"A standard message.")?;
    printer.error_println(&"An error message, on stderr.")?;

    printer.debug_println(&"An unconditional debug message.")?;
    printer.debug_println_at(&"A debug message at level 1 (emitted).", 1)?;
    printer.debug_println_at(&"A debug message at level 2 (suppressed).", 2)?;

    Ok(())
}
