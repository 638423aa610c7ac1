use crate::app::{App, AppMode};
use taskboard_domain::RowUpdate;

impl App {
    pub fn handle_create_task_key(&mut self) {
        if self.selected_board().is_some() {
            self.input.clear();
            self.mode = AppMode::CreateTask;
        }
    }

    pub fn handle_edit_task_key(&mut self) {
        let text = self
            .selected_board()
            .zip(self.task_selection.get())
            .and_then(|(board, index)| board.task(index));
        if let Some(text) = text {
            let text = text.to_string();
            self.input.set(text.clone());
            self.edit_original = Some(text);
            self.mode = AppMode::EditTask;
        }
    }

    pub fn handle_delete_task_key(&mut self) {
        let has_task = self
            .selected_board()
            .zip(self.task_selection.get())
            .and_then(|(board, index)| board.task(index))
            .is_some();
        if has_task {
            self.mode = AppMode::ConfirmDeleteTask;
        }
    }

    pub fn create_task(&mut self, text: String) {
        if let Some(id) = self.selected_board_id() {
            // The list scrolls to the appended row: selection jumps to it.
            if let Ok(index) = self.store.add_task(id, text) {
                self.task_selection.set(Some(index));
                self.apply_row_updates(vec![RowUpdate::Inserted { board: id, index }]);
            }
        }
    }

    pub fn save_task_edit(&mut self, text: String) {
        if let (Some(id), Some(index)) = (self.selected_board_id(), self.task_selection.get()) {
            if self.store.update_task(id, index, text).is_ok() {
                self.apply_row_updates(vec![RowUpdate::Reloaded {
                    board: id,
                    from: index,
                    to: index,
                }]);
            }
        }
    }

    pub fn delete_selected_task(&mut self) {
        if let (Some(id), Some(index)) = (self.selected_board_id(), self.task_selection.get()) {
            if self.store.remove_task(id, index).is_ok() {
                self.apply_row_updates(vec![RowUpdate::Deleted { board: id, index }]);
            }
        }
    }
}
