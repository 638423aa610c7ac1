use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const CARRIED_TEXT: Color = Color::DarkGray;
pub const DROP_SLOT: Color = Color::Green;
pub const TRASH_ACTIVE: Color = Color::Red;

pub const POPUP_BG: Color = Color::Black;
pub const DANGER_TEXT: Color = Color::Red;
