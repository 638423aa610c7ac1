use crate::board::BoardId;
use crate::store::BoardStore;
use serde::{Deserialize, Serialize};

/// Plain-text envelope a task travels in between pick-up and drop.
///
/// The drop side must decode the envelope before it can insert anything; a
/// payload that fails to decode silently aborts the whole drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub text: String,
}

impl TaskPayload {
    pub fn encode(text: &str) -> String {
        let payload = Self {
            text: text.to_string(),
        };
        // Serializing a plain string cannot realistically fail; an empty
        // envelope simply fails to decode at the drop site.
        serde_json::to_string(&payload).unwrap_or_default()
    }

    pub fn decode(raw: &str) -> Option<String> {
        serde_json::from_str::<Self>(raw).ok().map(|p| p.text)
    }
}

/// Transient carrier of source-location information between a drag's start
/// and its completion.
///
/// Created exactly once per drag at pick-up, consumed by value by exactly one
/// drop handler. The source is held as `(board id, index)` and re-resolved
/// against the live store at drop time, so a list that changed mid-drag is
/// seen as it is then, not as it was at pick-up. A cancelled drag just drops
/// the context; pick-up performs no mutation, so there is nothing to undo.
#[derive(Debug)]
pub struct DragContext {
    source_board: BoardId,
    source_index: usize,
    payload: String,
}

impl DragContext {
    /// Pick up the task at `(board, index)`. Returns `None` when no such row
    /// exists, in which case no drag starts.
    pub fn begin(store: &BoardStore, board: BoardId, index: usize) -> Option<Self> {
        let text = store.board(board)?.task(index)?;
        tracing::debug!("Drag begun from board {} row {}", board, index);
        Some(Self {
            source_board: board,
            source_index: index,
            payload: TaskPayload::encode(text),
        })
    }

    pub fn source_board(&self) -> BoardId {
        self.source_board
    }

    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// Decode the carried text. `None` means the payload is not usable and
    /// the drop must be ignored.
    pub fn payload_text(&self) -> Option<String> {
        TaskPayload::decode(&self.payload)
    }

    #[cfg(test)]
    pub(crate) fn with_raw_payload(board: BoardId, index: usize, payload: String) -> Self {
        Self {
            source_board: board,
            source_index: index,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_round_trip() {
        let raw = TaskPayload::encode("Fix the roof");
        assert_eq!(TaskPayload::decode(&raw), Some("Fix the roof".to_string()));
    }

    #[test]
    fn test_payload_decode_garbage_fails() {
        assert_eq!(TaskPayload::decode("not json"), None);
        assert_eq!(TaskPayload::decode(""), None);
    }

    #[test]
    fn test_begin_requires_concrete_row() {
        let mut store = BoardStore::new();
        let id = store.add_board("Todo".to_string());
        assert!(DragContext::begin(&store, id, 0).is_none());

        store.add_task(id, "A".to_string()).unwrap();
        let ctx = DragContext::begin(&store, id, 0).unwrap();
        assert_eq!(ctx.source_board(), id);
        assert_eq!(ctx.source_index(), 0);
        assert_eq!(ctx.payload_text(), Some("A".to_string()));
    }

    #[test]
    fn test_begin_on_missing_board() {
        let store = BoardStore::new();
        assert!(DragContext::begin(&store, BoardId::new_v4(), 0).is_none());
    }
}
