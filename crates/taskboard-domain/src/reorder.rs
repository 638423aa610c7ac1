use crate::store::BoardStore;

/// Phases of the whole-board reorder gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// Gesture began on a board; the carried board has not moved yet.
    Pressing { origin: usize },
    /// The board is being carried; `target` tracks its would-be position.
    Dragging { origin: usize, target: usize },
}

/// State machine for reordering boards within the strip.
///
/// The model is untouched until the gesture ends: movement only updates the
/// tracked target, `end` commits a single remove+insert pair, and any other
/// terminal state cancels with no partial commit. Board count is invariant
/// across the whole interaction.
#[derive(Debug)]
pub struct BoardReorderController {
    phase: Phase,
}

impl BoardReorderController {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Begin the gesture on the board at `index`. Stays `Idle` when the
    /// index does not hit a board.
    pub fn begin(&mut self, store: &BoardStore, index: usize) -> bool {
        if self.is_active() || index >= store.len() {
            return false;
        }
        tracing::debug!("Board reorder began at index {}", index);
        self.phase = Phase::Pressing { origin: index };
        true
    }

    /// Track a new target position while the gesture is active. The target
    /// clamps to the strip; the store is not consulted for anything else and
    /// not mutated.
    pub fn update_target(&mut self, store: &BoardStore, target: usize) {
        let clamped = target.min(store.len().saturating_sub(1));
        match self.phase {
            Phase::Pressing { origin } | Phase::Dragging { origin, .. } => {
                self.phase = Phase::Dragging {
                    origin,
                    target: clamped,
                };
            }
            Phase::Idle => {}
        }
    }

    pub fn origin(&self) -> Option<usize> {
        match self.phase {
            Phase::Pressing { origin } | Phase::Dragging { origin, .. } => Some(origin),
            Phase::Idle => None,
        }
    }

    /// The position the carried board would land at if dropped now.
    pub fn target(&self) -> Option<usize> {
        match self.phase {
            Phase::Pressing { origin } => Some(origin),
            Phase::Dragging { target, .. } => Some(target),
            Phase::Idle => None,
        }
    }

    /// Board order as currently displayed, with the carried board shown at
    /// its tracked target. Identity order when the gesture is inactive.
    pub fn display_order(&self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        if let Phase::Dragging { origin, target } = self.phase {
            if origin < len && target < len {
                let moved = order.remove(origin);
                order.insert(target, moved);
            }
        }
        order
    }

    /// Gesture ended: commit the final move and return the board's new
    /// index.
    pub fn end(&mut self, store: &mut BoardStore) -> Option<usize> {
        let (origin, target) = match self.phase {
            Phase::Pressing { origin } => (origin, origin),
            Phase::Dragging { origin, target } => (origin, target),
            Phase::Idle => return None,
        };
        self.phase = Phase::Idle;
        match store.move_board(origin, target) {
            Ok(()) => {
                tracing::info!("Board reorder committed: {} -> {}", origin, target);
                Some(target)
            }
            Err(_) => None,
        }
    }

    /// Gesture cancelled or failed: leave the model unchanged.
    pub fn cancel(&mut self) {
        if self.is_active() {
            tracing::debug!("Board reorder cancelled");
        }
        self.phase = Phase::Idle;
    }
}

impl Default for BoardReorderController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(titles: &[&str]) -> BoardStore {
        let mut store = BoardStore::new();
        for t in titles {
            store.add_board(t.to_string());
        }
        store
    }

    fn titles(store: &BoardStore) -> Vec<String> {
        store.boards().iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn test_begin_misses_when_no_board_under_index() {
        let store = store_with(&["A"]);
        let mut ctl = BoardReorderController::new();
        assert!(!ctl.begin(&store, 5));
        assert!(!ctl.is_active());
    }

    #[test]
    fn test_commit_moves_board_and_preserves_count() {
        let mut store = store_with(&["A", "B", "C"]);
        let ids: Vec<_> = store.boards().iter().map(|b| b.id).collect();
        let mut ctl = BoardReorderController::new();

        assert!(ctl.begin(&store, 0));
        ctl.update_target(&store, 2);
        let landed = ctl.end(&mut store);

        assert_eq!(landed, Some(2));
        assert_eq!(store.len(), 3);
        assert_eq!(titles(&store), vec!["B", "C", "A"]);

        // Same identities, only order changed.
        let mut before = ids;
        let mut after: Vec<_> = store.boards().iter().map(|b| b.id).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_cancel_leaves_model_unchanged() {
        let mut store = store_with(&["A", "B", "C"]);
        let mut ctl = BoardReorderController::new();

        ctl.begin(&store, 2);
        ctl.update_target(&store, 0);
        ctl.cancel();

        assert_eq!(titles(&store), vec!["A", "B", "C"]);
        assert!(!ctl.is_active());
        assert_eq!(ctl.end(&mut store), None);
    }

    #[test]
    fn test_end_without_movement_commits_in_place() {
        let mut store = store_with(&["A", "B"]);
        let mut ctl = BoardReorderController::new();

        ctl.begin(&store, 1);
        let landed = ctl.end(&mut store);

        assert_eq!(landed, Some(1));
        assert_eq!(titles(&store), vec!["A", "B"]);
    }

    #[test]
    fn test_target_clamps_to_strip() {
        let store = store_with(&["A", "B"]);
        let mut ctl = BoardReorderController::new();

        ctl.begin(&store, 0);
        ctl.update_target(&store, 9);
        assert_eq!(ctl.target(), Some(1));
    }

    #[test]
    fn test_display_order_previews_without_mutation() {
        let store = store_with(&["A", "B", "C"]);
        let mut ctl = BoardReorderController::new();

        assert_eq!(ctl.display_order(3), vec![0, 1, 2]);

        ctl.begin(&store, 0);
        assert_eq!(ctl.display_order(3), vec![0, 1, 2]);

        ctl.update_target(&store, 2);
        assert_eq!(ctl.display_order(3), vec![1, 2, 0]);
        assert_eq!(titles(&store), vec!["A", "B", "C"]);
    }
}
