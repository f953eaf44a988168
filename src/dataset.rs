//! Snapshot dataset
use hifitime::Epoch;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::{
    cfg::Config,
    constants::BYTES_PER_SNAPSHOT,
    error::Error,
    frame::{Ellipsoidal, LocalFrame},
    ground_truth::{
        discover, load, GroundTruth, GroundTruthFormat, GroundTruthModel, TrackSource,
    },
    metadata::{Field, Metadata},
    position::GeodeticPoint,
    reader::{DirectoryReader, SnapshotReader},
    snapshot::{decode, Samples},
};

/// GNSS snapshot dataset: raw snapshots, their metadata
/// and the ground truth they were captured at.
#[derive(Debug)]
pub struct Dataset<R: SnapshotReader = DirectoryReader, F: LocalFrame = Ellipsoidal> {
    metadata: Metadata,
    model: Option<GroundTruthModel<F>>,
    reader: R,
}

impl<R: SnapshotReader, F: LocalFrame> Dataset<R, F> {
    /// Builds new [Dataset] from its [Metadata], an optional [GroundTruth],
    /// the [SnapshotReader] that grants access to raw snapshots,
    /// and the [LocalFrame] in which ground truth error is evaluated.
    pub fn new(
        metadata: Metadata,
        ground_truth: Option<GroundTruth>,
        reader: R,
        frame: F,
    ) -> Result<Self, Error> {
        let model = match ground_truth {
            Some(ground_truth) => Some(GroundTruthModel::new(ground_truth, frame)?),
            None => {
                warn!("no ground truth");
                None
            },
        };

        let size = metadata.filenames.as_ref().map(|f| f.len()).unwrap_or(0);
        for (field, len) in [
            (Field::Timestamps, metadata.timestamps.as_ref().map(|t| t.len())),
            (Field::Temperatures, metadata.temperatures.as_ref().map(|t| t.len())),
            (Field::Pressures, metadata.pressures.as_ref().map(|p| p.len())),
        ] {
            if let Some(len) = len {
                if len != size {
                    warn!("{} entries for {} snapshots in \"{}\"", len, size, field);
                }
            }
        }

        Ok(Self {
            metadata,
            model,
            reader,
        })
    }
    /// Number of snapshots
    pub fn size(&self) -> usize {
        self.metadata.filenames.as_ref().map(|f| f.len()).unwrap_or(0)
    }
    /// Reads and decodes snapshot at index.
    /// See [decode] for `normalize`.
    pub fn snapshot(&self, index: usize, normalize: bool) -> Result<Samples, Error> {
        let filename = self
            .metadata
            .filenames
            .as_ref()
            .and_then(|f| f.get(index))
            .ok_or(Error::IndexOutOfRange {
                index,
                size: self.size(),
            })?;
        debug!("snapshot #{}: {}", index, filename);
        let content = self.reader.read(filename, BYTES_PER_SNAPSHOT)?;
        decode(&content, normalize)
    }
    /// Static location or track
    pub fn ground_truth(&self) -> Option<&GroundTruth> {
        self.model.as_ref().map(|m| m.ground_truth())
    }
    /// [SnapshotReader] granting access to raw snapshots
    pub fn reader(&self) -> &R {
        &self.reader
    }
    /// Ground truth model, that resolves position errors
    pub fn ground_truth_model(&self) -> Option<&GroundTruthModel<F>> {
        self.model.as_ref()
    }
    /// Intermediate frequency [Hz]
    pub fn intermediate_frequency(&self) -> Option<f64> {
        self.metadata.intermediate_frequency
    }
    /// Snapshot file names
    pub fn filenames(&self) -> Option<&[String]> {
        self.metadata.filenames.as_deref()
    }
    /// Capture instants (UTC)
    pub fn timestamps(&self) -> Option<&[Epoch]> {
        self.metadata.timestamps.as_deref()
    }
    /// Ambient temperatures [°C]
    pub fn temperatures(&self) -> Option<&[f64]> {
        self.metadata.temperatures.as_deref()
    }
    /// Ambient pressures [Pa]
    pub fn pressures(&self) -> Option<&[f64]> {
        self.metadata.pressures.as_deref()
    }
    /// Capture instant of snapshot at index
    pub fn timestamp(&self, index: usize) -> Option<Epoch> {
        self.timestamps()?.get(index).copied()
    }
    /// Ambient temperature [°C] when snapshot at index was captured
    pub fn temperature(&self, index: usize) -> Option<f64> {
        self.temperatures()?.get(index).copied()
    }
    /// Ambient pressure [Pa] when snapshot at index was captured
    pub fn pressure(&self, index: usize) -> Option<f64> {
        self.pressures()?.get(index).copied()
    }
    /// True if this field is defined for this dataset
    pub fn is_available(&self, field: Field) -> bool {
        match field {
            Field::GroundTruth => self.model.is_some(),
            field => self.metadata.is_available(field),
        }
    }
    /// Lists the fields that this dataset does not define
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.is_available(*field))
            .collect()
    }
    /// Horizontal error [m] of given position estimate, with respect to
    /// the ground truth location, or the closest point of the ground truth track.
    /// [f64::INFINITY] when the error is not defined.
    pub fn error(&self, latitude_ddeg: f64, longitude_ddeg: f64) -> Result<f64, Error> {
        let model = self
            .model
            .as_ref()
            .ok_or(Error::MissingField(Field::GroundTruth))?;
        Ok(model.nearest_distance(&GeodeticPoint::new(latitude_ddeg, longitude_ddeg)))
    }
    /// Horizontal errors [m] of a series of (latitude, longitude) estimates
    pub fn errors(&self, estimates: &[(f64, f64)]) -> Result<Vec<f64>, Error> {
        estimates
            .iter()
            .map(|(lat, lon)| self.error(*lat, *lon))
            .collect()
    }
}

impl Dataset<DirectoryReader, Ellipsoidal> {
    /// Opens dataset directory, with default [Config].
    /// See [Self::open_with_config].
    pub fn open<P: AsRef<Path>>(directory: P) -> Result<Self, Error> {
        Self::open_with_config(directory, &Config::default())
    }
    /// Opens dataset directory with given [Config].
    /// Ground truth is the track described by the GPX and KML ground truth files,
    /// concatenated in [Self::ground_truth_files] order. Without ground truth file,
    /// ground truth is the static location described in the metadata, if any.
    pub fn open_with_config<P: AsRef<Path>>(directory: P, cfg: &Config) -> Result<Self, Error> {
        let directory = directory.as_ref();
        let segments = Self::ground_truth_files(directory, cfg)?
            .into_iter()
            .map(|(path, format)| -> Result<Vec<GeodeticPoint>, Error> {
                let segment = load(&path, format)?;
                info!("{}: {} ground truth nodes", path.display(), segment.len());
                Ok(segment)
            })
            .collect::<Result<Vec<Vec<GeodeticPoint>>, Error>>()?;
        Self::open_with_track(directory, cfg, segments.into_iter())
    }
    /// Opens dataset directory with given [Config]. Ground truth
    /// is the track that [TrackSource] provides. When it provides no segment,
    /// we fall back to the static location described in the metadata.
    pub fn open_with_track<P: AsRef<Path>, S: TrackSource>(
        directory: P,
        cfg: &Config,
        source: S,
    ) -> Result<Self, Error> {
        let directory = directory.as_ref();
        let metadata = Metadata::from_file(directory.join(&cfg.metadata_file))?;

        let ground_truth = GroundTruth::from_track_source(source)
            .or_else(|| metadata.location.map(GroundTruth::Point));

        info!(
            "{}: {} snapshots",
            directory.display(),
            metadata.filenames.as_ref().map(|f| f.len()).unwrap_or(0)
        );

        Self::new(
            metadata,
            ground_truth,
            DirectoryReader::new(directory),
            Ellipsoidal::new(cfg.ellipsoid),
        )
    }
    /// Lists the ground truth files of a dataset directory, in concatenation order.
    pub fn ground_truth_files<P: AsRef<Path>>(
        directory: P,
        cfg: &Config,
    ) -> Result<Vec<(PathBuf, GroundTruthFormat)>, Error> {
        discover(directory.as_ref(), &cfg.ground_truth_prefix)
    }
}
