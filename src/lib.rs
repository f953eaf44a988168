#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod cfg;
mod dataset;
mod error;
mod frame;
mod ground_truth;
mod metadata;
mod position;
mod reader;
mod snapshot;

pub mod constants;

// pub export
pub use error::Error;
pub use snapshot::decode;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, Ellipsoid};
    pub use crate::constants::{BYTES_PER_SNAPSHOT, SAMPLES_PER_SNAPSHOT};
    pub use crate::dataset::Dataset;
    pub use crate::error::Error;
    pub use crate::frame::{Ellipsoidal, LocalFrame};
    pub use crate::ground_truth::{
        parse_kml_coordinates, GroundTruth, GroundTruthFormat, GroundTruthModel, Polyline,
        TrackSource,
    };
    pub use crate::metadata::{Field, Metadata};
    pub use crate::position::GeodeticPoint;
    pub use crate::reader::{DirectoryReader, SnapshotReader};
    pub use crate::snapshot::{decode, Samples};
    // re-export
    pub use hifitime::Epoch;
    pub use nalgebra::{Vector2, Vector3};
}
