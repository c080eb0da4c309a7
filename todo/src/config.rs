//! Configuration management for the todolist application.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Values that fail to parse or are out of range fall back to the default.

use crate::components::TextPolicy;
use std::env;
use todolist_runtime::StoreConfig;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "todolist=info,todolist_runtime=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directives (`RUST_LOG`)
    pub log_filter: String,
    /// Text stored for submitted todos (`TODOLIST_TRIM_TEXT`)
    pub text_policy: TextPolicy,
    /// Strike completed rows through with ANSI escapes (`TODOLIST_ANSI`)
    pub ansi: bool,
    /// Store limits (`TODOLIST_MAX_FEEDBACK_ACTIONS`, `TODOLIST_ACTION_BROADCAST_CAPACITY`)
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            text_policy: TextPolicy::Raw,
            ansi: true,
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let trim = lookup("TODOLIST_TRIM_TEXT")
            .and_then(|s| parse_bool(&s))
            .unwrap_or(false);

        Self {
            log_filter: lookup("RUST_LOG")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            text_policy: if trim { TextPolicy::Trimmed } else { TextPolicy::Raw },
            ansi: lookup("TODOLIST_ANSI")
                .and_then(|s| parse_bool(&s))
                .unwrap_or(defaults.ansi),
            store: StoreConfig::new(
                // Adding a todo feeds back one action, so 0 would reject every add.
                lookup("TODOLIST_MAX_FEEDBACK_ACTIONS")
                    .and_then(|s| s.trim().parse::<usize>().ok())
                    .filter(|&limit| limit >= 1)
                    .unwrap_or(defaults.store.max_feedback_actions),
                lookup("TODOLIST_ACTION_BROADCAST_CAPACITY")
                    .and_then(|s| s.trim().parse::<usize>().ok())
                    .filter(|capacity| {
                        (1..=StoreConfig::MAX_ACTION_BROADCAST_CAPACITY).contains(capacity)
                    })
                    .unwrap_or(defaults.store.action_broadcast_capacity),
            ),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
