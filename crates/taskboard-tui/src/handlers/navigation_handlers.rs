use crate::app::App;
use taskboard_domain::Board;

impl App {
    pub fn select_prev_board(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.board_selection.prev();
        self.sync_task_selection();
    }

    pub fn select_next_board(&mut self) {
        self.board_selection.next(self.store.len());
        self.sync_task_selection();
    }

    pub fn select_prev_task(&mut self) {
        if self.selected_board().map_or(0, Board::task_count) > 0 {
            self.task_selection.prev();
        }
    }

    pub fn select_next_task(&mut self) {
        let count = self.selected_board().map_or(0, Board::task_count);
        self.task_selection.next(count);
    }

    /// Keep the task cursor valid when the board under it changes.
    fn sync_task_selection(&mut self) {
        let count = self.selected_board().map_or(0, Board::task_count);
        self.task_selection.clamp(count);
        if !self.task_selection.has_selection() && count > 0 {
            self.task_selection.set(Some(0));
        }
    }
}
