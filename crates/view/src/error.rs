//! Error types for the view

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),

    #[error("Invalid task id: {0}")]
    InvalidId(String),

    #[error("Invalid due date {input:?}, expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Core(#[from] todo_core::Error),
}
