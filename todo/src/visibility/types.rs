//! Domain types for the visibility filter slice.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use todolist_macros::Action;

/// Error for filter values that name no [`VisibilityFilter`].
///
/// The enum itself is closed, so this can only arise where a raw value
/// enters the program. It is never turned into a default filter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The value is not one of the three filters
    #[error("Invalid filter: {0:?} (expected all, active or completed)")]
    InvalidFilter(String),
}

/// Which todos are visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    /// Every todo
    #[default]
    ShowAll,
    /// Todos not yet completed
    ShowActive,
    /// Completed todos
    ShowCompleted,
}

impl VisibilityFilter {
    /// All filters in display order
    pub const ALL: [Self; 3] = [Self::ShowAll, Self::ShowActive, Self::ShowCompleted];

    /// Button label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShowAll => "All",
            Self::ShowActive => "Active",
            Self::ShowCompleted => "Completed",
        }
    }

    /// Serialized name, e.g. `SHOW_ACTIVE`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowAll => "SHOW_ALL",
            Self::ShowActive => "SHOW_ACTIVE",
            Self::ShowCompleted => "SHOW_COMPLETED",
        }
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisibilityFilter {
    type Err = FilterError;

    /// Accepts `all`, `active`, `completed` and the serialized names,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "show_all" => Ok(Self::ShowAll),
            "active" | "show_active" => Ok(Self::ShowActive),
            "completed" | "show_completed" => Ok(Self::ShowCompleted),
            _ => Err(FilterError::InvalidFilter(s.to_string())),
        }
    }
}

/// Actions for the visibility filter slice
#[derive(Action, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterAction {
    /// Command: Replace the current filter
    #[command]
    SetVisibilityFilter(VisibilityFilter),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_show_all() {
        assert_eq!(VisibilityFilter::default(), VisibilityFilter::ShowAll);
    }

    #[test]
    fn display_order_and_labels() {
        let labels: Vec<&str> = VisibilityFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "Active", "Completed"]);
    }

    #[test]
    fn parses_short_and_serialized_names() {
        assert_eq!("active".parse::<VisibilityFilter>(), Ok(VisibilityFilter::ShowActive));
        assert_eq!(" Completed ".parse::<VisibilityFilter>(), Ok(VisibilityFilter::ShowCompleted));
        assert_eq!("SHOW_ALL".parse::<VisibilityFilter>(), Ok(VisibilityFilter::ShowAll));
    }

    #[test]
    fn unknown_value_is_invalid_filter() {
        assert_eq!(
            "done".parse::<VisibilityFilter>(),
            Err(FilterError::InvalidFilter("done".to_string()))
        );
    }

    #[test]
    fn serde_uses_screaming_names() {
        let json = serde_json::to_string(&VisibilityFilter::ShowCompleted).unwrap();
        assert_eq!(json, "\"SHOW_COMPLETED\"");

        let back: VisibilityFilter = serde_json::from_str("\"SHOW_ACTIVE\"").unwrap();
        assert_eq!(back, VisibilityFilter::ShowActive);
    }

    #[test]
    fn deserializing_unknown_value_fails() {
        assert!(serde_json::from_str::<VisibilityFilter>("\"SHOW_NOTHING\"").is_err());
    }

    #[test]
    fn display_matches_serialized_name() {
        for filter in VisibilityFilter::ALL {
            let json = serde_json::to_string(&filter).unwrap();
            assert_eq!(json, format!("\"{filter}\""));
        }
    }
}
