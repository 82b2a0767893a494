use crate::platform::PlatformOps;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

pub static UNIX_PLATFORM: Unix = Unix;

pub struct Unix;

impl PlatformOps for Unix {
    fn exit_code(&self, status: ExitStatus) -> i32 {
        match (status.code(), status.signal()) {
            (Some(code), _) => code,
            // a signal death is reported as the negated signal number
            (None, Some(sig)) => -sig,
            (None, None) => 1,
        }
    }
}
