//! Domain models for taskpad
//!
//! Contains the widget state and its transitions without any I/O concerns.

mod counter;
mod id;
mod todo;
mod todo_list;

pub use counter::{Counter, DEFAULT_INITIAL_VALUE, DEFAULT_STEP};
pub use id::{IdGenerator, SequentialIds, TodoId};
pub use todo::{FilterMode, FilterParseError, TodoCounts, TodoItem};
pub use todo_list::{TodoAction, TodoList, TodoListError};
