//! Command-line interface module
//!
//! Provides argument parsing and task dispatch.

pub mod args;
pub mod commands;

pub use args::{Args, parse_args};
pub use commands::execute_task;
