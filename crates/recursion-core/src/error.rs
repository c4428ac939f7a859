use thiserror::Error;

/// Errors raised while building a [`Board`](crate::Board) from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board needs exactly 25 letters, found {found}")]
    Shape { found: usize },

    #[error("token {index} ({token:?}) is not a single letter")]
    InvalidToken { index: usize, token: String },
}

/// Result type for board construction
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors raised while reading a [`Quad`](crate::Quad)
#[derive(Error, Debug)]
pub enum QuadError {
    #[error("invalid square shape: {0}")]
    InvalidShape(String),

    #[error("malformed square text: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for quad operations
pub type QuadResult<T> = Result<T, QuadError>;
