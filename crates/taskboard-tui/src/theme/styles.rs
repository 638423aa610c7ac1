use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

/// The row a drag was picked up from, shown in place until the drop lands.
pub fn carried_item() -> Style {
    Style::default()
        .fg(CARRIED_TEXT)
        .add_modifier(Modifier::ITALIC)
}

/// The slot the carried task would land in if dropped now.
pub fn drop_slot() -> Style {
    Style::default()
        .fg(DROP_SLOT)
        .add_modifier(Modifier::BOLD)
}

pub fn trash_target(hovered: bool) -> Style {
    if hovered {
        Style::default()
            .fg(TRASH_ACTIVE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(LABEL_TEXT)
    }
}

/// Rows the last move touched, flashed for one frame batch.
pub fn changed_row() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn danger_text() -> Style {
    Style::default().fg(DANGER_TEXT)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
