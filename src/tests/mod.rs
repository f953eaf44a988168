use std::{cell::Cell, collections::HashMap, path::Path};

use crate::{
    error::Error, frame::LocalFrame, position::GeodeticPoint, prelude::Vector3,
    reader::SnapshotReader,
};


pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Flat earth frame: one degree is one meter,
/// latitude along North and longitude along East.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatFrame;

impl LocalFrame for FlatFrame {
    fn enu(&self, point: &GeodeticPoint, reference: &GeodeticPoint) -> Vector3<f64> {
        Vector3::new(
            point.longitude_ddeg - reference.longitude_ddeg,
            point.latitude_ddeg - reference.latitude_ddeg,
            point.altitude_m - reference.altitude_m,
        )
    }
}

/// In memory snapshots, that counts read accesses
#[derive(Debug, Default)]
pub struct MemoryReader {
    files: HashMap<String, Vec<u8>>,
    reads: Cell<usize>,
}

impl MemoryReader {
    pub fn with_file(mut self, name: &str, content: Vec<u8>) -> Self {
        self.files.insert(name.to_string(), content);
        self
    }
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl SnapshotReader for MemoryReader {
    fn read(&self, filename: &str, size: usize) -> Result<Vec<u8>, Error> {
        self.reads.set(self.reads.get() + 1);
        let content = self.files.get(filename).ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                filename.to_string(),
            ))
        })?;
        Ok(content.iter().take(size).copied().collect())
    }
}

/// Writes a file in a (temporary) dataset directory
pub fn write_file(directory: &Path, name: &str, content: &[u8]) {
    std::fs::write(directory.join(name), content).unwrap();
}
