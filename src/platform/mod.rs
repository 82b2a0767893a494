pub fn platform() -> &'static dyn PlatformOps {
    &ConcretePlatform
}

use std::process::ExitStatus;

pub trait PlatformOps: Sync + Send {
    /// Exit code this program reports for a finished child.
    fn exit_code(&self, status: ExitStatus) -> i32;
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::UNIX_PLATFORM as ConcretePlatform;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WINDOWS_PLATFORM as ConcretePlatform;
