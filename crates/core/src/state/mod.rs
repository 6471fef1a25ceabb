//! Application state
//!
//! This module provides the snapshot consumed by views and the container
//! whose actions replace it.

mod container;
mod model;

pub use container::AppState;
pub use model::*;
