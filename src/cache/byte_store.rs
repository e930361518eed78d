use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{Error, Result};

/// Serialized form of a cache with no entries, written on first access.
pub const EMPTY_STORE: &[u8] = b"[]";

/// Durable get/set of the raw cache bytes. Implementations own exactly one
/// backing resource; `set` replaces its whole contents.
pub trait ByteStore {
    fn get(&self) -> Result<Vec<u8>>;
    fn set(&self, value: &[u8]) -> Result<()>;
}

impl<S: ByteStore + ?Sized> ByteStore for &S {
    fn get(&self) -> Result<Vec<u8>> {
        (**self).get()
    }

    fn set(&self, value: &[u8]) -> Result<()> {
        (**self).set(value)
    }
}

/// File-backed store. The file is created lazily with the empty-store
/// contents the first time it is read.
#[derive(Debug, Clone)]
pub struct FileByteStore {
    pub path: PathBuf,
}

impl FileByteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn bootstrap(&self) -> Result<()> {
        debug!(path = %self.path.display(), "initializing empty kubetoken cache file");
        write_private(&self.path, EMPTY_STORE).map_err(Error::Storage)
    }
}

impl ByteStore for FileByteStore {
    fn get(&self) -> Result<Vec<u8>> {
        match fs::metadata(&self.path) {
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => self.bootstrap()?,
            Err(err) => return Err(Error::Storage(err)),
        }

        fs::read(&self.path).map_err(Error::Storage)
    }

    fn set(&self, value: &[u8]) -> Result<()> {
        write_private(&self.path, value).map_err(Error::Storage)
    }
}

// Token material: the cache file must not be group/world readable.
#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    fs::write(path, contents)
}
