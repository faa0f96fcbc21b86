//! Defines custom error types for the application.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a map page cannot be produced or opened.
pub enum MapError {
    #[error("Invalid separator '{0}'. Please use 'tab' or 'comma'.")]
    InvalidSeparator(String),

    #[error("Unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    #[error("Failed to create temporary file")]
    TempFile(#[source] io::Error),

    #[error("Failed to write map page to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open browser with '{command}'")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open browser: '{command}' exited with {status}")]
    LaunchStatus { command: String, status: ExitStatus },
}
