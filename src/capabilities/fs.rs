use crate::capabilities::FileSystem;
use crate::error::FsError;
use fs_err as fs;
use std::io::{self, Read, Write};
use std::path::Path;

pub struct LocalFs;

fn open_err(path: &Path) -> impl FnOnce(io::Error) -> FsError + '_ {
    move |source| FsError::Open {
        path: path.display().to_string(),
        source,
    }
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> FsError + '_ {
    move |source| FsError::Io {
        path: path.display().to_string(),
        source,
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        let mut file = fs::File::open(path).map_err(open_err(path))?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).map_err(io_err(path))?;
        tracing::trace!(path = %path.display(), bytes = buf.len(), "read file");
        Ok(buf)
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<(), FsError> {
        let mut file = fs::File::create(path).map_err(open_err(path))?;
        file.write_all(content).map_err(io_err(path))?;
        file.flush().map_err(io_err(path))?;
        tracing::trace!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}
