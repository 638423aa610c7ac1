use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskboardError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
