use crate::app::{App, AppMode};
use crate::dialog::{handle_confirm_input, handle_dialog_input, DialogAction};
use crossterm::event::KeyEvent;

impl App {
    pub fn handle_input_dialog_key(&mut self, key: KeyEvent) {
        match handle_dialog_input(&mut self.input, key.code) {
            DialogAction::Confirm => self.confirm_input_dialog(),
            DialogAction::Cancel => self.close_dialog(),
            DialogAction::None => {}
        }
    }

    fn confirm_input_dialog(&mut self) {
        let text = self.input.as_str().trim().to_string();
        match self.mode {
            AppMode::CreateBoard => self.create_board(text),
            AppMode::CreateTask => self.create_task(text),
            AppMode::RenameBoard => self.rename_selected_board(text),
            AppMode::EditTask => {
                // Save stays disabled while the text equals the original.
                if self.edit_original.as_deref() == Some(text.as_str()) {
                    return;
                }
                self.save_task_edit(text);
            }
            _ => {}
        }
        self.close_dialog();
    }

    pub fn handle_confirm_dialog_key(&mut self, key: KeyEvent) {
        match handle_confirm_input(key.code) {
            DialogAction::Confirm => {
                match self.mode {
                    AppMode::ConfirmDeleteBoard => self.delete_selected_board(),
                    AppMode::ConfirmDeleteTask => self.delete_selected_task(),
                    _ => {}
                }
                self.close_dialog();
            }
            DialogAction::Cancel => self.close_dialog(),
            DialogAction::None => {}
        }
    }

    pub fn close_dialog(&mut self) {
        self.input.clear();
        self.edit_original = None;
        self.mode = AppMode::Normal;
    }
}
