use std::io;
use thiserror::Error;

/// Failure of a single dispatched command. Every variant is terminal: it is
/// reported once on standard error and ends the process.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Error: Cannot open file {path}")]
    ResourceUnavailable { path: String },
    #[error("Error: Cannot read file {path}")]
    ReadFailed { path: String },
    #[error("Error: Cannot write file {path}")]
    WriteFailed { path: String },
    #[error("Error: Unknown command or invalid arguments. Use --help for usage.")]
    InvalidInvocation,
    #[error("Error: HTTP request failed: {reason}")]
    Http { reason: String },
    #[error("Exec failed with code {code}")]
    ExecFailed { code: i32 },
    #[error("Error: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ExecFailed { code } => *code,
            _ => 1,
        }
    }
}

/// File system failure. `Open` replaces a null handle: nothing was opened, so
/// there is nothing to close.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("cannot open {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error("i/o on {path}: {source}")]
    Io { path: String, source: io::Error },
}
