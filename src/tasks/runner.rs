//! Step execution for tasks that wrap external tools

use crate::{config::Config, error::Result, tasks::registry::Step, utils::process::ProcessRunner};
use tracing::{debug, instrument};

/// Runs a task's step sequence in the project root
///
/// Steps run one at a time, each to completion, with stdout/stderr
/// passed straight through to the terminal. The first non-zero exit
/// aborts the sequence and its status becomes the task's status.
pub struct TaskRunner {
    process_runner: ProcessRunner,
}

impl TaskRunner {
    /// Create a new task runner for the given configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            process_runner: ProcessRunner::new(config.debug, config.root.clone()),
        }
    }

    /// Run each step in order, stopping at the first failure
    #[instrument(skip(self, steps))]
    pub fn run_steps(&self, steps: &[Step]) -> Result<()> {
        for (i, step) in steps.iter().enumerate() {
            debug!("Running step {} of {}: {}", i + 1, steps.len(), step);
            self.process_runner.run_command(step.program, step.args)?;
        }

        Ok(())
    }
}
