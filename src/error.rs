use thiserror::Error;

use crate::metadata::Field;

#[derive(Debug, Error)]
pub enum Error {
    /// Requested snapshot does not exist. No file access was attempted.
    #[error("snapshot index {index} out of range (dataset size: {size})")]
    IndexOutOfRange { index: usize, size: usize },

    /// Raw snapshot is shorter than a complete capture.
    /// We never decode a partial snapshot.
    #[error("truncated snapshot: expecting {expected} bytes, got {found}")]
    TruncatedInput { expected: usize, found: usize },

    /// Operation requires a metadata field that this dataset does not define.
    #[error("missing \"{0}\" field")]
    MissingField(Field),

    /// Ground truth track defines no point at all.
    #[error("empty ground truth track")]
    EmptyTrack,

    /// Ground truth file extension is neither GPX nor KML.
    #[error("unknown ground truth format \"{0}\"")]
    UnknownGroundTruthFormat(String),

    /// Coordinates that do not decode to (latitude, longitude) in decimal degrees.
    #[error("invalid coordinates \"{0}\"")]
    InvalidCoordinates(String),

    /// Dataset directory or file access failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata file is not valid JSON, or a field has an unexpected type.
    #[error("metadata error: {0}")]
    Metadata(#[from] serde_json::Error),

    /// Ground truth file is not a valid XML document.
    #[error("ground truth file error: {0}")]
    GroundTruthFile(#[from] roxmltree::Error),
}
