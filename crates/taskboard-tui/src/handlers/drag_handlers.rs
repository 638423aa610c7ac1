use crate::app::{App, AppMode, DragCursor, TaskDrag};
use crossterm::event::{KeyCode, KeyEvent};
use taskboard_domain::{perform_drop, Board, DragContext, DropSpot, RowUpdate};

impl App {
    /// Pick up the selected task. Nothing is removed at pick-up; cancelling
    /// the drag needs no compensating action.
    pub fn begin_task_drag(&mut self) {
        let (Some(board_index), Some(row)) = (self.board_selection.get(), self.task_selection.get())
        else {
            return;
        };
        let Some(board_id) = self.store.board_at(board_index).map(|b| b.id) else {
            return;
        };
        let Some(context) = DragContext::begin(&self.store, board_id, row) else {
            return;
        };
        self.drag = Some(TaskDrag {
            context,
            cursor: DragCursor::Slot {
                board_index,
                row: Some(row),
            },
        });
        self.mode = AppMode::DragTask;
    }

    pub fn handle_drag_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.drag_cursor_left(),
            KeyCode::Right | KeyCode::Char('l') => self.drag_cursor_right(),
            KeyCode::Up | KeyCode::Char('k') => self.drag_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.drag_cursor_down(),
            KeyCode::Char('t') => self.drag_cursor_to_trash(),
            KeyCode::Enter => self.drop_carried_task(),
            KeyCode::Esc => self.cancel_task_drag(),
            _ => {}
        }
    }

    /// First row slot to land on when the cursor enters a board, keeping the
    /// previous row where possible. `None` over an empty list.
    fn entry_row(&self, board_index: usize, prefer: Option<usize>) -> Option<usize> {
        let len = self
            .store
            .board_at(board_index)
            .map_or(0, Board::task_count);
        if len == 0 {
            None
        } else {
            Some(prefer.unwrap_or(0).min(len - 1))
        }
    }

    fn set_drag_cursor(&mut self, cursor: DragCursor) {
        if let Some(drag) = self.drag.as_mut() {
            drag.cursor = cursor;
        }
    }

    fn drag_cursor_left(&mut self) {
        let Some(cursor) = self.drag.as_ref().map(|d| d.cursor) else {
            return;
        };
        let next = match cursor {
            DragCursor::Trash => {
                if self.store.is_empty() {
                    DragCursor::Trash
                } else {
                    let last = self.store.len() - 1;
                    DragCursor::Slot {
                        board_index: last,
                        row: self.entry_row(last, None),
                    }
                }
            }
            DragCursor::Slot { board_index, row } => {
                if board_index == 0 {
                    cursor
                } else {
                    DragCursor::Slot {
                        board_index: board_index - 1,
                        row: self.entry_row(board_index - 1, row),
                    }
                }
            }
        };
        self.set_drag_cursor(next);
    }

    fn drag_cursor_right(&mut self) {
        let Some(cursor) = self.drag.as_ref().map(|d| d.cursor) else {
            return;
        };
        let next = match cursor {
            DragCursor::Trash => DragCursor::Trash,
            DragCursor::Slot { board_index, row } => {
                if board_index + 1 >= self.store.len() {
                    // Past the last board sits the discard target.
                    DragCursor::Trash
                } else {
                    DragCursor::Slot {
                        board_index: board_index + 1,
                        row: self.entry_row(board_index + 1, row),
                    }
                }
            }
        };
        self.set_drag_cursor(next);
    }

    fn drag_cursor_up(&mut self) {
        let Some(cursor) = self.drag.as_ref().map(|d| d.cursor) else {
            return;
        };
        if let DragCursor::Slot { board_index, row } = cursor {
            let next_row = match row {
                Some(i) => Some(i.saturating_sub(1)),
                // Up from the empty tail lands on the last real row.
                None => self.entry_row(board_index, Some(usize::MAX)),
            };
            self.set_drag_cursor(DragCursor::Slot {
                board_index,
                row: next_row,
            });
        }
    }

    fn drag_cursor_down(&mut self) {
        let Some(cursor) = self.drag.as_ref().map(|d| d.cursor) else {
            return;
        };
        if let DragCursor::Slot { board_index, row } = cursor {
            let len = self
                .store
                .board_at(board_index)
                .map_or(0, Board::task_count);
            let next_row = match row {
                Some(i) if i + 1 < len => Some(i + 1),
                // Below the last row sits the append slot.
                _ => None,
            };
            self.set_drag_cursor(DragCursor::Slot {
                board_index,
                row: next_row,
            });
        }
    }

    fn drag_cursor_to_trash(&mut self) {
        self.set_drag_cursor(DragCursor::Trash);
    }

    /// Resolve the drop: the context is consumed here, exactly once.
    pub fn drop_carried_task(&mut self) {
        let Some(drag) = self.drag.take() else {
            self.mode = AppMode::Normal;
            return;
        };

        let spot = match drag.cursor {
            DragCursor::Trash => Some(DropSpot::Discard),
            DragCursor::Slot { board_index, row } => {
                self.store.board_at(board_index).map(|b| match row {
                    Some(index) => DropSpot::Row { board: b.id, index },
                    None => DropSpot::List { board: b.id },
                })
            }
        };

        if let Some(spot) = spot {
            let updates = perform_drop(&mut self.store, drag.context, spot);
            self.follow_drop(&drag.cursor, &updates);
            self.apply_row_updates(updates);
        }
        self.mode = AppMode::Normal;
    }

    /// Keep the moved task selected at its destination.
    fn follow_drop(&mut self, cursor: &DragCursor, updates: &[RowUpdate]) {
        if updates.is_empty() {
            return;
        }

        let inserted = updates.iter().find_map(|u| match u {
            RowUpdate::Inserted { board, index } => Some((*board, *index)),
            _ => None,
        });

        match (inserted, cursor) {
            (Some((board, index)), _) => {
                if let Some(board_index) = self.store.index_of(board) {
                    self.board_selection.set(Some(board_index));
                    self.task_selection.set(Some(index));
                }
            }
            // Same-list reorder reports only a reload; the cursor row is
            // where the task landed.
            (
                None,
                DragCursor::Slot {
                    board_index,
                    row: Some(row),
                },
            ) => {
                self.board_selection.set(Some(*board_index));
                self.task_selection.set(Some(*row));
            }
            _ => {}
        }
    }

    pub fn cancel_task_drag(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!("Drag cancelled, no mutation");
        }
        self.mode = AppMode::Normal;
    }
}
