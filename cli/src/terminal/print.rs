use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use tracing_indicatif::indicatif_println;

#[macro_export]
macro_rules! tprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

/// Disables colors when stdout is not a terminal so piped output stays plain.
pub fn initialize() {
    if !console::Term::stdout().is_term() {
        colored::control::set_override(false);
    }
}

/// Writes one line of command output to stdout without tearing the spinner.
pub fn print(msg: &str) {
    indicatif_println!("{}", msg);
}

pub fn header(msg: &str) {
    print(&format!("{}", msg.bold().color(colors::PRIMARY)));
}

pub fn aligned_line<V>(key: &str, value: V, key_width: usize)
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print(&format!("{}{} {}", key.color(colors::SECONDARY), colon, value));
}
