//! Formatting utilities used for CLI outputs.

use crate::utils::time::is_negative;
use ansi_term::Colour;

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Renders a signed `HH:MM` balance: deficits in red, the rest in green.
pub fn colored_balance(balance: &str) -> String {
    let colour = if is_negative(balance) {
        Colour::Red
    } else {
        Colour::Green
    };
    colour.paint(balance).to_string()
}
