use log::debug;
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use crate::error::Error;

/// Implement this trait to provide raw snapshot content.
pub trait SnapshotReader {
    /// Provide up to `size` bytes of the named snapshot.
    /// Shorter content must not be padded: it is rejected by the decoder.
    fn read(&self, filename: &str, size: usize) -> Result<Vec<u8>, Error>;
}

impl<R: SnapshotReader + ?Sized> SnapshotReader for &R {
    fn read(&self, filename: &str, size: usize) -> Result<Vec<u8>, Error> {
        (**self).read(filename, size)
    }
}

/// Reads snapshot files from a dataset directory
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryReader {
    root: PathBuf,
}

impl DirectoryReader {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
    /// Dataset directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SnapshotReader for DirectoryReader {
    fn read(&self, filename: &str, size: usize) -> Result<Vec<u8>, Error> {
        let path = self.root.join(filename);
        let file = File::open(&path)?;
        let mut content = Vec::with_capacity(size);
        file.take(size as u64).read_to_end(&mut content)?;
        debug!("{}: read {}/{} bytes", path.display(), content.len(), size);
        Ok(content)
    }
}
