use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): every value resolved
/// - `Failure` (1): at least one value was invalid, or the command refused to run
/// - `Error` (2): internal error (config error, I/O failure, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully, every value resolved.
    Success,
    /// Command completed but rejected at least one value, or refused to run.
    Failure,
    /// Command failed due to internal error (config error, I/O failure, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
