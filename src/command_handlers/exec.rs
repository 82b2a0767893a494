use crate::capabilities::ProcessRunner;
use crate::error::CliError;
use std::ffi::{OsStr, OsString};

/// Reported when the child could not be started at all, the same code a
/// forked child returns when its exec fails.
pub const SPAWN_FAILURE_CODE: i32 = 127;

pub fn run_exec(
    process: &dyn ProcessRunner,
    bin: &OsStr,
    args: &[OsString],
) -> Result<(), CliError> {
    match process.run(bin, args) {
        Ok(0) => Ok(()),
        Ok(code) => Err(CliError::ExecFailed { code }),
        Err(e) => {
            tracing::debug!(bin = %bin.to_string_lossy(), error = %e, "spawn failed");
            Err(CliError::ExecFailed {
                code: SPAWN_FAILURE_CODE,
            })
        }
    }
}
