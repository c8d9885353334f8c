//! Task dispatch for the CLI

use crate::{
    config::Config,
    error::TaskError,
    tasks::{Action, ArtifactCleaner, TaskRegistry, TaskRunner},
};
use anyhow::Context;
use tracing::instrument;

/// Look up the named task in the registry and execute it
///
/// Unknown names print the usage listing and fail without spawning
/// anything.
#[instrument(skip(config))]
pub fn execute_task(config: &Config, name: &str) -> anyhow::Result<()> {
    let registry = TaskRegistry::standard();

    let Some(spec) = registry.find(name) else {
        print_usage(&registry);
        return Err(TaskError::unknown_task(name).into());
    };

    match spec.action {
        Action::Help => {
            print_help(&registry);
            Ok(())
        }
        Action::Clean => {
            let cleaner = ArtifactCleaner::new(config.clone());
            cleaner.clean().context("Failed to clean artifacts")?;
            Ok(())
        }
        Action::Steps(steps) => {
            let runner = TaskRunner::new(config);
            runner.run_steps(steps)?;
            Ok(())
        }
    }
}

/// Print the task listing to stdout
fn print_help(registry: &TaskRegistry) {
    println!("Available tasks:");
    for task in registry.iter() {
        println!("  {:<14}{}", task.name, task.summary);
    }
}

/// Print usage to stderr when the task name is not recognized
fn print_usage(registry: &TaskRegistry) {
    eprintln!("Usage: devtasks [OPTIONS] [TASK]");
    eprintln!();
    eprintln!("Available tasks:");
    for task in registry.iter() {
        eprintln!("  {:<14}{}", task.name, task.summary);
    }
}
