//! Dataset metadata
use hifitime::Epoch;
use log::warn;
use serde::Deserialize;
use std::path::Path;

use crate::{error::Error, position::GeodeticPoint};

/// Metadata field. Each field may be independently absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    IntermediateFrequency,
    Filenames,
    Timestamps,
    Temperatures,
    Pressures,
    GroundTruth,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Self::IntermediateFrequency,
        Self::Filenames,
        Self::Timestamps,
        Self::Temperatures,
        Self::Pressures,
        Self::GroundTruth,
    ];
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::IntermediateFrequency => write!(f, "intermediate_frequency"),
            Self::Filenames => write!(f, "file"),
            Self::Timestamps => write!(f, "timestamp"),
            Self::Temperatures => write!(f, "temperature"),
            Self::Pressures => write!(f, "pressure"),
            Self::GroundTruth => write!(f, "ground truth"),
        }
    }
}

/// meta.json content, as is
#[derive(Debug, Default, Deserialize)]
struct RawMetadata {
    intermediate_frequency: Option<f64>,
    file: Option<Vec<String>>,
    timestamp: Option<Vec<String>>,
    temperature: Option<Vec<f64>>,
    pressure: Option<Vec<f64>>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Snapshot dataset metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Intermediate frequency [Hz]
    pub intermediate_frequency: Option<f64>,
    /// Snapshot file names, relative to the dataset directory
    pub filenames: Option<Vec<String>>,
    /// Capture instants (UTC)
    pub timestamps: Option<Vec<Epoch>>,
    /// Ambient temperatures [°C]
    pub temperatures: Option<Vec<f64>>,
    /// Ambient pressures [Pa]
    pub pressures: Option<Vec<f64>>,
    /// Static ground truth location
    pub location: Option<GeodeticPoint>,
}

fn parse_timestamps(timestamps: &[String]) -> Option<Vec<Epoch>> {
    timestamps
        .iter()
        .map(|t| {
            Epoch::from_gregorian_str(t.trim())
                .map_err(|e| warn!("invalid timestamp \"{}\": {}", t, e))
                .ok()
        })
        .collect()
}

impl Metadata {
    /// Decodes metadata from JSON content.
    /// Missing fields are reported and left out. Timestamps that
    /// do not match the expected format are left out as well.
    pub fn from_json(content: &str) -> Result<Self, Error> {
        let raw: RawMetadata = serde_json::from_str(content)?;

        let timestamps = raw
            .timestamp
            .as_ref()
            .and_then(|timestamps| parse_timestamps(timestamps));

        let location = match (raw.latitude, raw.longitude) {
            (Some(lat), Some(lon)) => Some(GeodeticPoint::new(lat, lon)),
            _ => None,
        };

        let metadata = Self {
            timestamps,
            location,
            intermediate_frequency: raw.intermediate_frequency,
            filenames: raw.file,
            temperatures: raw.temperature,
            pressures: raw.pressure,
        };

        for field in metadata.missing_fields() {
            if field != Field::GroundTruth {
                warn!("no \"{}\" in metadata", field);
            }
        }
        Ok(metadata)
    }
    /// Reads metadata file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
    /// True if this field is defined
    pub fn is_available(&self, field: Field) -> bool {
        match field {
            Field::IntermediateFrequency => self.intermediate_frequency.is_some(),
            Field::Filenames => self.filenames.is_some(),
            Field::Timestamps => self.timestamps.is_some(),
            Field::Temperatures => self.temperatures.is_some(),
            Field::Pressures => self.pressures.is_some(),
            Field::GroundTruth => self.location.is_some(),
        }
    }
    /// Lists the fields that are not defined
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.is_available(*field))
            .collect()
    }
}
