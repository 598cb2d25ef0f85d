//! To-do item domain model
//!
//! A to-do item is a line of text that is either active or completed.
//! Items only change through [`TodoItem::toggle`]; everything else about
//! them is fixed at creation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::id::TodoId;

#[derive(Debug, Error, PartialEq)]
#[error("Unknown filter '{0}': expected one of all, active, completed")]
pub struct FilterParseError(String);

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier within its list
    pub id: TodoId,

    /// Display text, stored as entered
    pub text: String,

    /// Whether the item has been checked off
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new active item
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Returns true if the item is still open
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// View selector over a to-do list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items only
    Completed,
}

impl FilterMode {
    /// All modes in display order
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    /// Returns true if `item` belongs in this view
    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !item.completed,
            FilterMode::Completed => item.completed,
        }
    }

    /// Returns a display label for the mode
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }

    /// Placeholder text for a view with nothing in it
    pub fn empty_message(&self) -> &'static str {
        match self {
            FilterMode::All => "No todos yet. Add one above!",
            FilterMode::Active => "No active todos!",
            FilterMode::Completed => "No completed todos!",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterMode {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FilterMode::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FilterParseError(s.to_string()))
    }
}

/// Derived totals for a list, recomputed on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TodoCounts {
    /// Tallies a sequence of items
    pub fn tally<'a>(items: impl IntoIterator<Item = &'a TodoItem>) -> Self {
        items.into_iter().fold(Self::default(), |mut counts, item| {
            counts.total += 1;
            if item.completed {
                counts.completed += 1;
            } else {
                counts.active += 1;
            }
            counts
        })
    }

    /// Count shown next to a filter button
    pub fn for_filter(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.total,
            FilterMode::Active => self.active,
            FilterMode::Completed => self.completed,
        }
    }
}
