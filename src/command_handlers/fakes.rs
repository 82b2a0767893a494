//! In-memory capabilities for dispatcher tests.

use crate::capabilities::{Capabilities, FileSystem, HttpClient, ProcessRunner};
use crate::command_handlers::dispatch::dispatch;
use crate::error::FsError;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::Path;

#[derive(Default)]
pub struct MemFs {
    files: RefCell<HashMap<String, Vec<u8>>>,
    denied: RefCell<HashSet<String>>,
    broken: RefCell<HashSet<String>>,
}

impl MemFs {
    pub fn insert(&self, path: &str, content: &[u8]) {
        self.files.borrow_mut().insert(path.to_string(), content.to_vec());
    }

    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    /// Opening `path` fails in any mode.
    pub fn deny(&self, path: &str) {
        self.denied.borrow_mut().insert(path.to_string());
    }

    /// Opening `path` succeeds but reading or writing it fails.
    pub fn fail_io(&self, path: &str) {
        self.insert(path, b"");
        self.broken.borrow_mut().insert(path.to_string());
    }

    fn check(&self, path: &str) -> Result<(), FsError> {
        if self.denied.borrow().contains(path) {
            return Err(FsError::Open {
                path: path.to_string(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        if self.broken.borrow().contains(path) {
            return Err(FsError::Io {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::Other, "is a directory"),
            });
        }
        Ok(())
    }
}

impl FileSystem for MemFs {
    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        let path = path.to_string_lossy();
        self.check(&path)?;
        self.contents(&path).ok_or_else(|| FsError::Open {
            path: path.to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<(), FsError> {
        let path = path.to_string_lossy();
        self.check(&path)?;
        self.insert(&path, content);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeHttp {
    bodies: RefCell<HashMap<String, String>>,
    requests: RefCell<Vec<String>>,
}

impl FakeHttp {
    pub fn respond(&self, url: &str, body: &str) {
        self.bodies.borrow_mut().insert(url.to_string(), body.to_string());
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl HttpClient for FakeHttp {
    fn get(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        self.bodies
            .borrow()
            .get(url)
            .map(|body| body.as_bytes().to_vec())
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }
}

#[derive(Default)]
pub struct FakeRunner {
    codes: RefCell<HashMap<String, i32>>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl FakeRunner {
    pub fn exit_with(&self, bin: &str, code: i32) {
        self.codes.borrow_mut().insert(bin.to_string(), code);
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, bin: &OsStr, args: &[OsString]) -> io::Result<i32> {
        let bin = bin.to_string_lossy().into_owned();
        let args = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        self.calls.borrow_mut().push((bin.clone(), args));
        self.codes
            .borrow()
            .get(&bin)
            .copied()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

pub struct Output {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Default)]
pub struct Harness {
    pub fs: MemFs,
    pub http: FakeHttp,
    pub process: FakeRunner,
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

impl Harness {
    pub fn with_fs(fs: MemFs) -> Self {
        Self {
            fs,
            ..Default::default()
        }
    }

    fn caps(&self) -> Capabilities<'_> {
        Capabilities {
            fs: &self.fs,
            http: &self.http,
            process: &self.process,
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut stdout = Vec::new();
        let (code, stderr) = self.run_into(args, &mut stdout);
        Output {
            code,
            stdout: String::from_utf8(stdout).unwrap(),
            stderr,
        }
    }

    pub fn run_with_broken_stdout(&self, args: &[&str]) -> Output {
        let (code, stderr) = self.run_into(args, &mut BrokenPipe);
        Output {
            code,
            stdout: String::new(),
            stderr,
        }
    }

    fn run_into(&self, args: &[&str], stdout: &mut dyn Write) -> (i32, String) {
        let args: Vec<OsString> = args.iter().map(OsString::from).collect();
        let mut stderr = Vec::new();
        let code = dispatch(&args, &self.caps(), stdout, &mut stderr);
        (code, String::from_utf8(stderr).unwrap())
    }
}
