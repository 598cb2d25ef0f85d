//! Configuration handling for taskpad
//!
//! Configuration is stored as TOML, by default in the per-user config
//! directory (`~/.config/taskpad/config.toml` on Linux). Every section is
//! optional; anything left out falls back to its default.
//!
//! ```toml
//! [counter]
//! initial_value = 0
//! step = 1
//!
//! [todo]
//! default_filter = "all"
//!
//! [[todo.items]]
//! id = 1
//! text = "Water the plants"
//! completed = false
//!
//! [logging]
//! level = "info"
//! file = "/tmp/taskpad.log"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{debug, info, LevelFilter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    Counter, FilterMode, TodoItem, TodoList, TodoListError, DEFAULT_INITIAL_VALUE, DEFAULT_STEP,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Counter construction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Starting value, also the value `reset` returns to
    pub initial_value: i64,

    /// Amount added or removed per step
    pub step: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_value: DEFAULT_INITIAL_VALUE,
            step: DEFAULT_STEP,
        }
    }
}

/// To-do list construction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TodoConfig {
    /// Filter selected when the list is created
    pub default_filter: FilterMode,

    /// Items the list starts with
    pub items: Vec<TodoItem>,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,

    /// Log file; stderr is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Combined configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub counter: CounterConfig,
    pub todo: TodoConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Returns the per-user config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "taskpad", "taskpad").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the default config file path
    pub fn default_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from `path`, or defaults if the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Writes the configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    /// Checks the seed items: ids must be unique and text must not be blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for item in &self.todo.items {
            if !seen.insert(item.id) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate todo id {} in [todo.items]",
                    item.id
                )));
            }
            if item.text.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "todo {} in [todo.items] has blank text",
                    item.id
                )));
            }
        }
        Ok(())
    }
}

impl Counter {
    /// Creates a counter from its config section
    pub fn from_config(config: &CounterConfig) -> Self {
        Self::new(config.initial_value, config.step)
    }
}

impl TodoList {
    /// Creates a list seeded from its config section
    pub fn from_config(config: &TodoConfig) -> Result<Self, TodoListError> {
        let mut list = Self::with_items(config.items.iter().cloned())?;
        list.set_filter(config.default_filter);
        Ok(list)
    }
}
