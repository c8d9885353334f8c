//! Process execution utilities
//!
//! Provides safe process execution with proper error handling and logging.

use crate::error::{Result, TaskError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
    work_dir: PathBuf,
}

impl ProcessRunner {
    /// Create a new process runner executing in the given working directory
    #[must_use]
    pub fn new(debug: bool, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            debug,
            work_dir: work_dir.into(),
        }
    }

    /// Run a command with arguments, inheriting stdout/stderr
    ///
    /// The child's output streams straight to the terminal; nothing is
    /// captured. A non-zero exit becomes a [`TaskError::Process`] carrying
    /// the child's exit code.
    #[instrument(skip(self))]
    pub fn run_command(&self, command: &str, args: &[&str]) -> Result<()> {
        let cmd_str = if args.is_empty() {
            command.to_string()
        } else {
            format!("{} {}", command, args.join(" "))
        };

        if self.debug {
            debug!(
                "Running command: {} (in {})",
                cmd_str,
                self.work_dir.display()
            );
        } else {
            info!("+ {}", cmd_str);
        }

        let status = Command::new(command)
            .args(args)
            .current_dir(&self.work_dir)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| TaskError::process_io(cmd_str.clone(), e))?;

        if !status.success() {
            let exit_code = status.code();
            debug!("Command failed with exit code: {:?}", exit_code);
            return Err(TaskError::process(cmd_str, exit_code));
        }

        debug!("Command completed successfully");
        Ok(())
    }

    /// Working directory the runner spawns commands in
    #[must_use]
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false, ".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_runner_creation() {
        let runner = ProcessRunner::new(true, "/tmp");
        assert!(runner.debug);
        assert_eq!(runner.work_dir(), Path::new("/tmp"));

        let runner = ProcessRunner::default();
        assert!(!runner.debug);
    }

    #[test]
    fn test_run_simple_command() {
        let runner = ProcessRunner::default();
        let result = runner.run_command("echo", &["hello"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_failing_command() {
        let runner = ProcessRunner::default();
        let result = runner.run_command("false", &[]);
        assert!(result.is_err());

        if let Err(TaskError::Process {
            command, exit_code, ..
        }) = result
        {
            assert_eq!(command, "false");
            assert_eq!(exit_code, Some(1));
        } else {
            panic!("Expected Process error");
        }
    }

    #[test]
    fn test_exit_code_is_preserved() {
        let runner = ProcessRunner::default();
        let result = runner.run_command("sh", &["-c", "exit 3"]);

        match result {
            Err(TaskError::Process { exit_code, .. }) => assert_eq!(exit_code, Some(3)),
            other => panic!("Expected Process error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_program_is_process_error() {
        let runner = ProcessRunner::default();
        let result = runner.run_command("nonexistent_command_12345", &[]);

        match result {
            Err(TaskError::Process {
                exit_code, source, ..
            }) => {
                assert_eq!(exit_code, None);
                assert!(source.is_some());
            }
            other => panic!("Expected Process error, got {other:?}"),
        }
    }

    #[test]
    fn test_runs_in_work_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let runner = ProcessRunner::new(false, temp_dir.path());
        let result = runner.run_command("sh", &["-c", "touch marker.txt"]);
        assert!(result.is_ok());
        assert!(temp_dir.path().join("marker.txt").exists());
    }
}
