//! External collaborators the dispatcher consumes but does not implement.
//!
//! Each one is a trait so the dispatcher can run against in-memory fakes;
//! the real implementations live in the submodules.

mod fs;
mod http;
mod process;

pub use fs::LocalFs;
pub use http::ReqwestClient;
pub use process::SystemRunner;

use crate::error::FsError;
use anyhow::Result;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;

pub trait FileSystem {
    /// Whole-file read. The handle lives only for the duration of the call.
    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError>;
    /// Create or truncate `path` and write `content` to it.
    fn write(&self, path: &Path, content: &[u8]) -> Result<(), FsError>;
}

pub trait HttpClient {
    /// Blocking GET returning the raw response body, whatever the status.
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

pub trait ProcessRunner {
    /// Spawn `bin` with `args`, inheriting standard streams, and wait for it.
    /// `Err` means the child never started.
    fn run(&self, bin: &OsStr, args: &[OsString]) -> io::Result<i32>;
}

pub struct Capabilities<'a> {
    pub fs: &'a dyn FileSystem,
    pub http: &'a dyn HttpClient,
    pub process: &'a dyn ProcessRunner,
}
