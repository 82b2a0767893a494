use crate::capabilities::Capabilities;
use crate::cli::{Commands, USAGE};
use crate::command_handlers::{exec, files, http};
use crate::error::CliError;
use std::ffi::OsString;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Run(Commands),
}

impl Invocation {
    /// Match `args` (program name excluded) against the fixed command shapes.
    /// `--help` only counts in first position; any other name or arity is an
    /// invalid invocation.
    pub fn from_args(args: &[OsString]) -> Result<Self, CliError> {
        match args.first() {
            None => return Ok(Invocation::Help),
            Some(first) if first == "--help" => return Ok(Invocation::Help),
            Some(_) => {}
        }
        match Commands::parse(args) {
            Some(cmd) => Ok(Invocation::Run(cmd)),
            None => {
                tracing::debug!(argc = args.len(), "no command shape matched");
                Err(CliError::InvalidInvocation)
            }
        }
    }
}

pub fn print_usage(out: &mut dyn Write) -> Result<(), CliError> {
    out.write_all(USAGE.as_bytes())?;
    Ok(())
}

/// Run exactly one command and return the process exit code. All output goes
/// through `out` and `err`; side effects go through `caps`.
pub fn dispatch(
    args: &[OsString],
    caps: &Capabilities,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32 {
    let result = Invocation::from_args(args)
        .and_then(|inv| run(inv, caps, &mut *out))
        .and_then(|()| out.flush().map_err(CliError::from));
    match result {
        Ok(()) => 0,
        Err(e) => {
            // stderr is the last resort; nothing left to report a failure to
            let _ = writeln!(err, "{e}");
            let _ = err.flush();
            e.exit_code()
        }
    }
}

fn run(inv: Invocation, caps: &Capabilities, out: &mut dyn Write) -> Result<(), CliError> {
    let cmd = match inv {
        Invocation::Help => return print_usage(out),
        Invocation::Run(cmd) => cmd,
    };
    tracing::debug!(?cmd, "dispatching");
    match cmd {
        Commands::Read { file } => files::run_read(caps.fs, &file, out),
        Commands::Write { file, content } => files::run_write(caps.fs, &file, &content, out),
        Commands::Http { url } => http::run_http(caps.http, &url, out),
        Commands::Exec { bin, args } => exec::run_exec(caps.process, &bin, &args),
    }
}
