use thiserror::Error;

use super::todo::TodoId;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("todo {0} not found")]
    NotFound(TodoId),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
