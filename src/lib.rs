//! # devtasks
//!
//! A minimal task runner for one project's development workflow.
//! Each task is a thin wrapper around external tooling (pip-tools,
//! black, isort, ruff, pytest, mypy, pre-commit), plus one built-in
//! routine that removes build artifacts and caches.
//!
//! ## Features
//!
//! - Static task table resolved at startup, no plugin discovery
//! - Fail-fast multi-step tasks with verbatim exit-status propagation
//! - Best-effort, idempotent artifact cleanup
//! - Structured logging with configurable verbosity
//!
//! ## Example
//!
//! ```no_run
//! use devtasks::tasks::TaskRegistry;
//!
//! let registry = TaskRegistry::standard();
//! for task in registry.iter() {
//!     println!("{:<14}{}", task.name, task.summary);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod tasks;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
