//! Error types for the core library

use thiserror::Error;

use crate::task::TaskId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Status change declined for task {0}")]
    ConfirmationDeclined(TaskId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
