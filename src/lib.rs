//! taskpad - to-do list and counter state with small text and number helpers
//!
//! The widgets are plain state objects: a presentation layer forwards user
//! events to them and renders what they report back. Nothing here renders,
//! persists, or spawns threads.

pub mod config;
pub mod domain;
pub mod logging;
pub mod util;

pub use config::{Config, ConfigError};
pub use domain::{
    Counter, FilterMode, IdGenerator, SequentialIds, TodoAction, TodoCounts, TodoId, TodoItem,
    TodoList, TodoListError,
};
pub use logging::{init_logging, LoggingError};
pub use util::MathError;
