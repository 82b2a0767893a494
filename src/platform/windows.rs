use crate::platform::PlatformOps;
use std::process::ExitStatus;

pub static WINDOWS_PLATFORM: Windows = Windows;

pub struct Windows;

impl PlatformOps for Windows {
    fn exit_code(&self, status: ExitStatus) -> i32 { status.code().unwrap_or(1) }
}
