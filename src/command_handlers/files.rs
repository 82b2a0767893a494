use crate::capabilities::FileSystem;
use crate::error::{CliError, FsError};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

pub fn run_read(fs: &dyn FileSystem, path: &Path, out: &mut dyn Write) -> Result<(), CliError> {
    let content = fs.read(path).map_err(|e| match e {
        FsError::Open { path, source } => {
            tracing::debug!(%source, "open for read failed");
            CliError::ResourceUnavailable { path }
        }
        FsError::Io { path, source } => {
            tracing::debug!(%source, "read failed");
            CliError::ReadFailed { path }
        }
    })?;
    out.write_all(&content)?;
    Ok(())
}

pub fn run_write(
    fs: &dyn FileSystem,
    path: &Path,
    content: &OsStr,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    fs.write(path, content.as_encoded_bytes())
        .map_err(|e| match e {
            FsError::Open { path, source } => {
                tracing::debug!(%source, "open for write failed");
                CliError::ResourceUnavailable { path }
            }
            FsError::Io { path, source } => {
                tracing::debug!(%source, "write failed");
                CliError::WriteFailed { path }
            }
        })?;
    out.write_all(b"Write successful\n")?;
    Ok(())
}
