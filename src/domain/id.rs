//! Identifiers for to-do items
//!
//! ID Format: a non-negative integer, rendered bare (`7`).
//!
//! Ids come from an [`IdGenerator`]. The default [`SequentialIds`] hands out
//! 1, 2, 3, ... so ids are deterministic and reproducible in tests. The id
//! space is finite: once `u64::MAX` has been handed out there are no more.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single to-do item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Wraps a raw id value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the id immediately after this one, or `None` at `u64::MAX`
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh ids for a [`TodoList`](super::TodoList)
///
/// Ids should be strictly increasing. The list treats any id at or below the
/// highest one it has issued as a repeat and falls back to its own sequence.
pub trait IdGenerator {
    /// Produces the next id, or `None` once the generator is exhausted
    fn next_id(&mut self) -> Option<TodoId>;

    /// Informs the generator that `id` is already taken
    ///
    /// Called for every seeded item so generators can skip past them.
    /// The default does nothing.
    fn observe(&mut self, _id: TodoId) {}
}

/// Monotonic counter, the default id generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    /// `None` once `u64::MAX` has been handed out
    next: Option<u64>,
}

impl SequentialIds {
    /// Creates a generator whose first id is 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first id is `first`
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Option<TodoId> {
        let id = TodoId(self.next?);
        self.next = id.0.checked_add(1);
        Some(id)
    }

    fn observe(&mut self, id: TodoId) {
        if let Some(next) = self.next {
            if id.0 >= next {
                self.next = id.0.checked_add(1);
            }
        }
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> TodoId,
{
    fn next_id(&mut self) -> Option<TodoId> {
        Some(self())
    }
}
