use ratatui::style::Color;

pub const CURSOR_INDICATOR: char = '▌';
pub const STATUS_SEARCH_PREFIX: &str = "Search: ";
pub const STATUS_DIAMETER_PREFIX: &str = "Diameter (ft): ";
pub const NO_CHOICE: &str = "(none)";

// Marker colours
pub const PLACED_COLOR: Color = Color::Green;
pub const SELECTED_COLOR: Color = Color::Yellow;
pub const SESSION_COLOR: Color = Color::Cyan;
pub const DELETE_COLOR: Color = Color::Red;
