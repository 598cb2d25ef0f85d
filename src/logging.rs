//! Logging bootstrap
//!
//! The library logs through the `log` facade and never installs a logger on
//! its own. Hosts that want output call [`init_logging`] (or
//! [`init_from_config`]) once at startup:
//!
//! - with a file path, records go to that file via `WriteLogger`
//! - without one, records go to stderr via `TermLogger`
//!
//! Timestamps are RFC 3339.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::info;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use thiserror::Error;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A logger is already installed for this process")]
    AlreadyInitialized,
}

/// Installs the process-wide logger
///
/// # Errors
/// - [`LoggingError::CreateFile`] when the log file or its directory can't be created
/// - [`LoggingError::AlreadyInitialized`] when any logger was installed before
pub fn init_logging(level: LevelFilter, file: Option<&Path>) -> Result<(), LoggingError> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match file {
        Some(path) => {
            let log_file = create_log_file(path)?;
            WriteLogger::init(level, log_config, log_file)
                .map_err(|_| LoggingError::AlreadyInitialized)?;
            info!("taskpad logging to {} at {}", path.display(), level);
        }
        None => {
            TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto)
                .map_err(|_| LoggingError::AlreadyInitialized)?;
            info!("taskpad logging to stderr at {}", level);
        }
    }

    Ok(())
}

/// Installs the logger described by a `[logging]` config section
pub fn init_from_config(config: &LoggingConfig) -> Result<(), LoggingError> {
    init_logging(config.level.level_filter(), config.file.as_deref())
}

fn create_log_file(path: &Path) -> Result<File, LoggingError> {
    let to_error = |source| LoggingError::CreateFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    File::create(path).map_err(to_error)
}
