//! Runtime settings read from the environment

use serde::Serialize;

/// Behaviour switches for the state container and its front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Reset the draft priority and due date after a successful create
    pub reset_drafts_after_create: bool,
    /// Ask before changing a task's completion status
    pub confirm_status_changes: bool,
    /// Start from the seed list instead of an empty one
    pub seed: bool,
    /// Report repository mutations through `tracing`
    pub log_mutations: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reset_drafts_after_create: false,
            confirm_status_changes: true,
            seed: true,
            log_mutations: true,
        }
    }
}

impl Settings {
    /// Load settings from `TODO_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let flag = |name: &str, default: bool| parse_flag(lookup(name).as_deref(), default);
        Self {
            reset_drafts_after_create: flag("TODO_RESET_DRAFTS", defaults.reset_drafts_after_create),
            confirm_status_changes: flag("TODO_CONFIRM_STATUS", defaults.confirm_status_changes),
            seed: flag("TODO_SEED", defaults.seed),
            log_mutations: flag("TODO_LOG_MUTATIONS", defaults.log_mutations),
        }
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}
