//! Task module
//!
//! This module contains the task record types, the repository interface, and
//! the in-memory store with its injectable capabilities.

mod hooks;
mod memory_store;
mod model;
mod repository;

pub use hooks::*;
pub use memory_store::{seed_tasks, MemoryTaskStore};
pub use model::*;
pub use repository::TaskRepository;
