use crate::app::{App, AppMode};
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    pub fn handle_create_board_key(&mut self) {
        self.input.clear();
        self.mode = AppMode::CreateBoard;
    }

    pub fn handle_rename_board_key(&mut self) {
        if let Some(board) = self.selected_board() {
            self.input.set(board.title.clone());
            self.mode = AppMode::RenameBoard;
        }
    }

    pub fn handle_delete_board_key(&mut self) {
        if self.selected_board().is_some() {
            self.mode = AppMode::ConfirmDeleteBoard;
        }
    }

    pub fn create_board(&mut self, title: String) {
        let id = self.store.add_board(title);
        // The new board scrolls into view: selection jumps to it.
        if let Some(index) = self.store.index_of(id) {
            self.board_selection.set(Some(index));
        }
        self.task_selection.clear();
    }

    pub fn rename_selected_board(&mut self, title: String) {
        if let Some(id) = self.selected_board_id() {
            let _ = self.store.rename_board(id, title);
        }
    }

    pub fn delete_selected_board(&mut self) {
        if let Some(id) = self.selected_board_id() {
            if self.store.remove_board(id).is_ok() {
                self.clamp_selections();
            }
        }
    }

    /// Begin the board-move gesture on the selected board.
    pub fn begin_board_move(&mut self) {
        if let Some(index) = self.board_selection.get() {
            if self.reorder.begin(&self.store, index) {
                self.mode = AppMode::MoveBoard;
            }
        }
    }

    pub fn handle_move_board_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.shift_board_target_left(),
            KeyCode::Right | KeyCode::Char('l') => self.shift_board_target_right(),
            KeyCode::Enter => self.commit_board_move(),
            KeyCode::Esc => self.cancel_board_move(),
            _ => {}
        }
    }

    fn shift_board_target_left(&mut self) {
        if let Some(target) = self.reorder.target() {
            self.reorder.update_target(&self.store, target.saturating_sub(1));
        }
    }

    fn shift_board_target_right(&mut self) {
        if let Some(target) = self.reorder.target() {
            self.reorder.update_target(&self.store, target + 1);
        }
    }

    fn commit_board_move(&mut self) {
        // Selection follows the board so it stays in view after the move.
        if let Some(landed) = self.reorder.end(&mut self.store) {
            self.board_selection.set(Some(landed));
        }
        self.clamp_selections();
        self.mode = AppMode::Normal;
    }

    fn cancel_board_move(&mut self) {
        self.reorder.cancel();
        self.mode = AppMode::Normal;
    }
}
