pub mod error;
pub mod input;
pub mod result;
pub mod selection;

pub use error::TaskboardError;
pub use input::InputState;
pub use result::TaskboardResult;
pub use selection::SelectionState;
