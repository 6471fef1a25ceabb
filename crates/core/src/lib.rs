//! Core library for the todo list
//!
//! This crate contains the in-memory data layer, including:
//! - Task records and the immutable task collection
//! - The task repository (create, read, and update operations)
//! - The application state container consumed by a presentation layer

pub mod config;
pub mod error;
pub mod state;
pub mod task;

pub use config::Settings;
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
