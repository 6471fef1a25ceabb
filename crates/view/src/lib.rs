//! Terminal view for the todo list
//!
//! Renders application snapshots and turns typed commands into container
//! actions.

pub mod error;
pub mod intent;
pub mod render;

pub use error::ViewError;
pub use intent::Intent;
pub use render::{render, render_item, RenderedItem};
