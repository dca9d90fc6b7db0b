//! Character-by-character colored terminal output for decoded hex text.

use rand::Rng;
use std::{io::Write, thread, time::Duration};

/// ANSI foreground codes of the colors text is printed in.
pub const PALETTE: [u8; 15] = [
    34, // dark blue
    32, // dark green
    36, // dark cyan
    31, // dark red
    35, // dark magenta
    33, // dark yellow
    37, // gray
    90, // dark gray
    94, // blue
    92, // green
    96, // cyan
    91, // red
    95, // magenta
    93, // yellow
    97, // white
];

const RESET: &str = "\x1b[0m";

/// Default pause between two printed characters.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1);

/// Writes `text` one character at a time, switching to a random palette color before every
/// character that is not a space, and pausing `delay` after each one.
///
/// Colors are reset and a newline is written once the text is exhausted.
pub fn print_rainbow<W: Write>(out: &mut W, text: &str, delay: Duration) -> std::io::Result<()> {
    let mut rng = rand::rng();

    for c in text.chars() {
        if c != ' ' {
            let color = PALETTE[rng.random_range(0..PALETTE.len())];
            write!(out, "\x1b[{color}m")?;
        }
        write!(out, "{c}")?;
        out.flush()?;

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    writeln!(out, "{RESET}")?;
    out.flush()
}
