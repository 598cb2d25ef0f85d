//! To-do list state and transitions
//!
//! [`TodoList`] owns an ordered collection of [`TodoItem`]s plus the current
//! [`FilterMode`]. All operations are total: blank input and unknown ids are
//! ignored rather than reported, so a presentation layer can forward user
//! events without pre-validating them.
//!
//! ```text
//! TodoList + TodoAction  →  apply()  →  TodoList'
//! ```
//!
//! Derived data (the filtered view and the counts) is recomputed from the
//! collection on every call and never cached.

use std::collections::HashSet;

use log::{debug, trace, warn};
use thiserror::Error;

use super::id::{IdGenerator, SequentialIds, TodoId};
use super::todo::{FilterMode, TodoCounts, TodoItem};

#[derive(Debug, Error, PartialEq)]
pub enum TodoListError {
    #[error("Duplicate todo ID in initial items: {0}")]
    DuplicateId(TodoId),
}

/// Everything a user can do to a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    Add(String),
    Toggle(TodoId),
    Delete(TodoId),
    ClearCompleted,
    SetFilter(FilterMode),
}

/// Ordered, in-memory to-do collection with a filter selector
#[derive(Debug, Clone)]
pub struct TodoList<G = SequentialIds> {
    items: Vec<TodoItem>,
    filter: FilterMode,
    ids: G,
    /// Highest id this list has ever held, including deleted ones
    high_water: Option<TodoId>,
}

impl TodoList<SequentialIds> {
    /// Creates an empty list with sequential ids starting at 1
    pub fn new() -> Self {
        Self::with_generator(SequentialIds::new())
    }

    /// Creates a list seeded with `items`, in order
    ///
    /// New ids continue after the largest seeded id.
    pub fn with_items(items: impl IntoIterator<Item = TodoItem>) -> Result<Self, TodoListError> {
        Self::with_items_and_generator(items, SequentialIds::new())
    }
}

impl Default for TodoList<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> TodoList<G> {
    /// Creates an empty list that draws ids from `ids`
    pub fn with_generator(ids: G) -> Self {
        Self {
            items: Vec::new(),
            filter: FilterMode::default(),
            ids,
            high_water: None,
        }
    }

    /// Creates a list seeded with `items` that draws new ids from `ids`
    pub fn with_items_and_generator(
        items: impl IntoIterator<Item = TodoItem>,
        ids: G,
    ) -> Result<Self, TodoListError> {
        let mut list = Self::with_generator(ids);
        let mut seen = HashSet::new();

        for item in items {
            if !seen.insert(item.id) {
                return Err(TodoListError::DuplicateId(item.id));
            }
            list.ids.observe(item.id);
            list.high_water = list.high_water.max(Some(item.id));
            list.items.push(item);
        }

        debug!("todo list seeded with {} items", list.items.len());
        Ok(list)
    }

    /// Appends a new active item, returning its id
    ///
    /// Text that is empty after trimming is ignored and `None` is returned.
    /// The text is stored as given, surrounding whitespace included.
    /// `None` is also returned, and nothing added, once the id space is used up.
    pub fn add(&mut self, text: impl Into<String>) -> Option<TodoId> {
        let text = text.into();
        if text.trim().is_empty() {
            trace!("todo add ignored: blank text");
            return None;
        }

        let id = self.fresh_id()?;
        self.items.push(TodoItem::new(id, text));
        debug!("todo added id={} total={}", id, self.items.len());
        Some(id)
    }

    /// Flips completion of the item with `id`
    ///
    /// Returns false if no such item exists.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.toggle();
                debug!("todo toggled id={} completed={}", id, item.completed);
                true
            }
            None => {
                trace!("todo toggle ignored: unknown id={}", id);
                false
            }
        }
    }

    /// Removes the item with `id`, keeping the order of the rest
    ///
    /// Returns false if no such item exists.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|item| item.id != id);

        let removed = self.items.len() != len_before;
        if removed {
            debug!("todo deleted id={} total={}", id, self.items.len());
        } else {
            trace!("todo delete ignored: unknown id={}", id);
        }
        removed
    }

    /// Removes every completed item, returning how many were dropped
    pub fn clear_completed(&mut self) -> usize {
        let len_before = self.items.len();
        self.items.retain(TodoItem::is_active);

        let removed = len_before - self.items.len();
        debug!("todo clear_completed removed={} total={}", removed, self.items.len());
        removed
    }

    /// Sets the current filter mode
    pub fn set_filter(&mut self, mode: FilterMode) {
        if self.filter != mode {
            debug!("todo filter {} -> {}", self.filter, mode);
        }
        self.filter = mode;
    }

    /// Returns the current filter mode
    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Items matching the current filter, in list order
    pub fn filtered_view(&self) -> Vec<&TodoItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    /// Total, active and completed counts for the whole list
    pub fn counts(&self) -> TodoCounts {
        TodoCounts::tally(&self.items)
    }

    /// Applies an action, returning true if the list changed
    pub fn apply(&mut self, action: TodoAction) -> bool {
        match action {
            TodoAction::Add(text) => self.add(text).is_some(),
            TodoAction::Toggle(id) => self.toggle(id),
            TodoAction::Delete(id) => self.delete(id),
            TodoAction::ClearCompleted => self.clear_completed() > 0,
            TodoAction::SetFilter(mode) => {
                let changed = self.filter != mode;
                self.set_filter(mode);
                changed
            }
        }
    }

    /// All items in insertion order
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Looks up an item by id
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if there is anything for `clear_completed` to remove
    pub fn has_completed(&self) -> bool {
        self.items.iter().any(|item| item.completed)
    }

    /// Placeholder text for the current filter
    pub fn empty_message(&self) -> &'static str {
        self.filter.empty_message()
    }

    /// Draws an id above every id this list has held
    ///
    /// Returns `None` when no such id exists.
    fn fresh_id(&mut self) -> Option<TodoId> {
        let fallback = match self.high_water {
            Some(high) => high.next(),
            None => Some(TodoId::new(1)),
        };

        let id = match self.ids.next_id() {
            Some(candidate) if self.high_water.map_or(true, |high| candidate > high) => {
                Some(candidate)
            }
            Some(candidate) => {
                warn!("id generator repeated id={}, falling back to {:?}", candidate, fallback);
                fallback
            }
            None => {
                debug!("id generator exhausted, falling back to {:?}", fallback);
                fallback
            }
        };

        match id {
            Some(id) => self.high_water = Some(id),
            None => warn!("todo add ignored: no unused ids left"),
        }
        id
    }
}
