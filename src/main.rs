#![allow(clippy::cargo_common_metadata)]
use devtasks::{cli, config::Config, error::TaskError, setup_logging};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    if let Err(e) = setup_logging(args.debug) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    // Initialize configuration
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Execute the requested task, reporting the failing step's own exit
    // status as ours
    match cli::execute_task(&config, args.task_name()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            exit_code_for(&e)
        }
    }
}

/// Map a dispatch error onto the process exit status
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    let code = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<TaskError>())
        .map_or(1, TaskError::exit_code);

    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
