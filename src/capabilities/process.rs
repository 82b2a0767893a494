use crate::capabilities::ProcessRunner;
use crate::platform::platform;
use std::ffi::{OsStr, OsString};
use std::io;
use std::process::Command;

pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, bin: &OsStr, args: &[OsString]) -> io::Result<i32> {
        // PATH lookup the way execvp does it; paths with a separator are taken as-is.
        let program = which::which(bin).map_err(|e| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: {e}", bin.to_string_lossy()),
            )
        })?;
        tracing::debug!(program = %program.display(), ?args, "spawning");
        let status = Command::new(&program).args(args).status()?;
        let code = platform().exit_code(status);
        tracing::debug!(code, "child exited");
        Ok(code)
    }
}
