use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskboard_core::{TaskboardError, TaskboardResult};
use uuid::Uuid;

pub type BoardId = Uuid;

/// A named column holding an ordered list of task strings.
///
/// Identity is the generated `id`; two boards with equal titles and tasks
/// are still distinct entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub tasks: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(title: String) -> Self {
        Self::with_tasks(title, Vec::new())
    }

    pub fn with_tasks(title: String, tasks: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            tasks,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn rename(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Append a task, returning its row index.
    pub fn push_task(&mut self, text: String) -> usize {
        self.tasks.push(text);
        self.updated_at = Utc::now();
        self.tasks.len() - 1
    }

    /// Insert a task at `index`, clamping to the current length. Returns the
    /// index the task actually landed at.
    pub fn insert_task(&mut self, index: usize, text: String) -> usize {
        let at = index.min(self.tasks.len());
        self.tasks.insert(at, text);
        self.updated_at = Utc::now();
        at
    }

    pub fn remove_task(&mut self, index: usize) -> TaskboardResult<String> {
        if index >= self.tasks.len() {
            return Err(TaskboardError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        let text = self.tasks.remove(index);
        self.updated_at = Utc::now();
        Ok(text)
    }

    pub fn set_task(&mut self, index: usize, text: String) -> TaskboardResult<()> {
        match self.tasks.get_mut(index) {
            Some(slot) => {
                *slot = text;
                self.updated_at = Utc::now();
                Ok(())
            }
            None => Err(TaskboardError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            }),
        }
    }

    pub fn task(&self, index: usize) -> Option<&str> {
        self.tasks.get(index).map(String::as_str)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_task_appends_last() {
        let mut board = Board::with_tasks("Todo".to_string(), vec!["A".to_string()]);
        let idx = board.push_task("B".to_string());
        assert_eq!(idx, 1);
        assert_eq!(board.task_count(), 2);
        assert_eq!(board.task(1), Some("B"));
    }

    #[test]
    fn test_insert_task_clamps_to_len() {
        let mut board = Board::with_tasks("Todo".to_string(), vec!["A".to_string()]);
        let at = board.insert_task(10, "B".to_string());
        assert_eq!(at, 1);
        assert_eq!(board.tasks, vec!["A", "B"]);
    }

    #[test]
    fn test_remove_task_shifts_later_items() {
        let mut board = Board::with_tasks(
            "Todo".to_string(),
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
        );
        let removed = board.remove_task(1).unwrap();
        assert_eq!(removed, "B");
        assert_eq!(board.tasks, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_task_out_of_range() {
        let mut board = Board::new("Todo".to_string());
        assert!(board.remove_task(0).is_err());
    }

    #[test]
    fn test_set_task_out_of_range() {
        let mut board = Board::with_tasks("Todo".to_string(), vec!["A".to_string()]);
        assert!(board.set_task(1, "X".to_string()).is_err());
        assert!(board.set_task(0, "X".to_string()).is_ok());
        assert_eq!(board.task(0), Some("X"));
    }

    #[test]
    fn test_boards_with_same_title_are_distinct() {
        let a = Board::new("Todo".to_string());
        let b = Board::new("Todo".to_string());
        assert_ne!(a.id, b.id);
    }
}
