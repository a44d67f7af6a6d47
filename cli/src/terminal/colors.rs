use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const SECONDARY: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

/// The same palette for table cells, which are styled through `cli_table`.
pub mod cells {
    use cli_table::Color;

    pub const PRIMARY: Color = Color::Ansi256(10);
    pub const SECONDARY: Color = Color::Cyan;
    pub const SEPARATOR: Color = Color::Ansi256(8);
    pub const TEXT_DEFAULT: Color = Color::White;
    pub const FAILURE: Color = Color::Red;
    pub const LEGACY: Color = Color::Ansi256(11);
}
