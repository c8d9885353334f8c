//! Error types for the task runner
//!
//! Provides structured error handling with context and proper error chains.

use thiserror::Error;

/// Main error type for the task runner
#[derive(Error, Debug)]
pub enum TaskError {
    /// A spawned tool exited non-zero or could not be started
    #[error("Process error: {command} failed")]
    Process {
        command: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The requested task name is not in the registry
    #[error("Unknown task: {name}")]
    UnknownTask { name: String },
}

impl TaskError {
    /// Create a new process error
    pub fn process(command: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            source: None,
        }
    }

    /// Create a new process error caused by an I/O failure (e.g. tool not installed)
    pub fn process_io(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Process {
            command: command.into(),
            exit_code: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new unknown-task error
    pub fn unknown_task(name: impl Into<String>) -> Self {
        Self::UnknownTask { name: name.into() }
    }

    /// Exit status to report for this error: a failed step's own status
    /// where one exists, 1 for everything else (spawn failures, signal
    /// deaths, bad input).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Process {
                exit_code: Some(code),
                ..
            } => *code,
            _ => 1,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TaskError>;
