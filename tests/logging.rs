//! Logger bootstrap tests
//!
//! A process can only install one logger, so everything runs in one test.

use std::fs;

use taskpad::config::{LogLevel, LoggingConfig};
use taskpad::logging::init_from_config;
use taskpad::{LoggingError, TodoList};
use tempfile::TempDir;

#[test]
fn test_file_logger_records_state_changes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logs").join("taskpad.log");

    let config = LoggingConfig {
        level: LogLevel::Debug,
        file: Some(path.clone()),
    };
    init_from_config(&config).unwrap();

    let mut list = TodoList::new();
    list.add("Logged item");

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("taskpad logging to"));
    assert!(contents.contains("todo added id=1"));

    let second = init_from_config(&LoggingConfig::default());
    assert!(matches!(second, Err(LoggingError::AlreadyInitialized)));
}
