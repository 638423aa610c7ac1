//! The move engine: reconciles a drop outcome with the board store and
//! reports the visual diff the view must mirror.

use crate::board::BoardId;
use crate::drag::DragContext;
use crate::store::BoardStore;

/// Where a drop landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSpot {
    /// A concrete row slot in a board's task list.
    Row { board: BoardId, index: usize },
    /// The empty area of a board's task list; the task is appended.
    List { board: BoardId },
    /// The discard target; the carried task is deleted.
    Discard,
}

/// One visual list operation, scoped to a board. Mirrors exactly the model
/// mutation just performed — no extra or missing rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowUpdate {
    Inserted { board: BoardId, index: usize },
    Deleted { board: BoardId, index: usize },
    /// Inclusive range of rows whose displayed content shifted.
    Reloaded { board: BoardId, from: usize, to: usize },
}

/// Apply a completed drop to the store.
///
/// The context is consumed: a drag is resolved exactly once. Every failure
/// mode is a silent no-op with an empty update list — an undecodable
/// payload aborts the drop, an unresolvable source skips the removal, and a
/// destination board that vanished mid-drag leaves the source untouched
/// (the destination is validated before the removal is applied, so a removed
/// task can never be stranded).
pub fn perform_drop(store: &mut BoardStore, context: DragContext, spot: DropSpot) -> Vec<RowUpdate> {
    let Some(text) = context.payload_text() else {
        tracing::debug!("Drop payload failed to decode, ignoring drop");
        return Vec::new();
    };
    let source_board = context.source_board();
    let source_index = context.source_index();

    match spot {
        // Same-list reorder: remove at the source row, insert at the
        // destination row, reload everything in between.
        DropSpot::Row { board, index } if board == source_board => {
            if source_index == index {
                return Vec::new();
            }
            let removed = match store.remove_task(board, source_index) {
                Ok(removed) => removed,
                Err(_) => {
                    tracing::debug!("Reorder source row no longer exists, ignoring drop");
                    return Vec::new();
                }
            };
            tracing::trace!("Reorder displaced task: {}", removed);
            let at = match store.insert_task(board, index, text) {
                Ok(at) => at,
                Err(_) => return Vec::new(),
            };
            vec![RowUpdate::Reloaded {
                board,
                from: source_index.min(at),
                to: source_index.max(at),
            }]
        }

        // Cross-list move onto a concrete row.
        DropSpot::Row { board, index } => {
            if store.board(board).is_none() {
                tracing::debug!("Drop destination board vanished, ignoring drop");
                return Vec::new();
            }
            let mut updates = remove_source(store, source_board, source_index);
            if let Ok(at) = store.insert_task(board, index, text) {
                updates.push(RowUpdate::Inserted { board, index: at });
            }
            updates
        }

        // Dropped on the empty area of a list: append. Landing back on the
        // source list this way changes nothing.
        DropSpot::List { board } => {
            if board == source_board {
                return Vec::new();
            }
            if store.board(board).is_none() {
                tracing::debug!("Drop destination board vanished, ignoring drop");
                return Vec::new();
            }
            let mut updates = remove_source(store, source_board, source_index);
            if let Ok(at) = store.add_task(board, text) {
                updates.push(RowUpdate::Inserted { board, index: at });
            }
            updates
        }

        // Discard target: removal only, the task appears nowhere else.
        DropSpot::Discard => remove_source(store, source_board, source_index),
    }
}

/// Shared source-removal step for cross-list drops. A source that no longer
/// resolves (board deleted or list shrunk mid-drag) is a silent no-op.
fn remove_source(store: &mut BoardStore, board: BoardId, index: usize) -> Vec<RowUpdate> {
    match store.remove_task(board, index) {
        Ok(_) => vec![RowUpdate::Deleted { board, index }],
        Err(_) => {
            tracing::debug!("Drag source no longer resolves, skipping removal");
            Vec::new()
        }
    }
}
