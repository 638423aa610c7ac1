pub mod board;
pub mod drag;
pub mod moves;
pub mod reorder;
pub mod store;

pub use board::{Board, BoardId};
pub use drag::{DragContext, TaskPayload};
pub use moves::{perform_drop, DropSpot, RowUpdate};
pub use reorder::BoardReorderController;
pub use store::BoardStore;
