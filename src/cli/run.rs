use anyhow::Result;
use tracing::debug;

use super::{
    args::{Arguments, Command},
    commands::{init::init, suffix::suffix},
    exit_status::ExitStatus,
};

/// Dispatch to the handler for the parsed command.
///
/// # Returns
/// - `Ok(ExitStatus)` describing whether every value resolved
/// - `Err` if the command fails (e.g., unreadable config, I/O errors)
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    debug!(?command, "running command");
    match command {
        Some(Command::Suffix(cmd)) => suffix(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
