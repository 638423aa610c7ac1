use crossterm::event::KeyCode;
use taskboard_core::InputState;

pub enum DialogAction {
    None,
    Cancel,
    Confirm,
}

/// Shared keystroke handling for the text-input popups. Enter with an empty
/// buffer does nothing; the add/edit operation only ever sees real text.
pub fn handle_dialog_input(input: &mut InputState, key_code: KeyCode) -> DialogAction {
    match key_code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter => {
            if input.as_str().trim().is_empty() {
                DialogAction::None
            } else {
                DialogAction::Confirm
            }
        }
        KeyCode::Char(c) => {
            input.insert_char(c);
            DialogAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            DialogAction::None
        }
        KeyCode::Delete => {
            input.delete();
            DialogAction::None
        }
        KeyCode::Left => {
            input.move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            input.move_right();
            DialogAction::None
        }
        KeyCode::Home => {
            input.move_home();
            DialogAction::None
        }
        KeyCode::End => {
            input.move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}

/// Keystroke handling for the yes/no confirm popups.
pub fn handle_confirm_input(key_code: KeyCode) -> DialogAction {
    match key_code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => DialogAction::Confirm,
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => DialogAction::Cancel,
        _ => DialogAction::None,
    }
}
