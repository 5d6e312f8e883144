use thiserror::Error;

pub type CrafterResult<T> = Result<T, CrafterError>;

#[derive(Debug, Error)]
pub enum CrafterError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("panel grid must have at least one row and one column: rows={rows}, cols={cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("{what} length mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
