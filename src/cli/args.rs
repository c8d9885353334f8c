//! Command-line argument parsing and validation

use clap::Parser;
use std::path::PathBuf;

/// devtasks - A minimal task runner for day-to-day development chores
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "devtasks")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Project root the tasks run against
    #[arg(short = 'C', long = "root", default_value = ".")]
    pub root: PathBuf,

    /// Task to run; omit to list the available tasks
    #[arg(value_name = "TASK")]
    pub task: Option<String>,
}

impl Args {
    /// Name of the task to dispatch; no argument means the help listing
    pub fn task_name(&self) -> &str {
        self.task.as_deref().unwrap_or("help")
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
