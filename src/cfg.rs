use serde::Deserialize;

/// Reference ellipsoid used by the local tangent plane projection
#[derive(Default, Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum Ellipsoid {
    #[default]
    WGS84,
    WGS72,
    GRS80,
    /// GLONASS reference ellipsoid
    PZ90,
    /// BeiDou reference ellipsoid
    BDC,
}

impl Ellipsoid {
    pub(crate) fn model(&self) -> map_3d::Ellipsoid {
        match self {
            Self::WGS84 => map_3d::Ellipsoid::WGS84,
            Self::WGS72 => map_3d::Ellipsoid::WGS72,
            Self::GRS80 => map_3d::Ellipsoid::GRS80,
            Self::PZ90 => map_3d::Ellipsoid::PZ90,
            Self::BDC => map_3d::Ellipsoid::BDC,
        }
    }
}

impl std::fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::WGS84 => write!(f, "WGS84"),
            Self::WGS72 => write!(f, "WGS72"),
            Self::GRS80 => write!(f, "GRS80"),
            Self::PZ90 => write!(f, "PZ90"),
            Self::BDC => write!(f, "BDC"),
        }
    }
}

fn default_metadata_file() -> String {
    "meta.json".to_string()
}

fn default_ground_truth_prefix() -> String {
    "ground_truth".to_string()
}

/// Dataset loading configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Name of the metadata file, within the dataset directory
    #[serde(default = "default_metadata_file")]
    pub metadata_file: String,
    /// Ground truth files are discovered by this file name prefix
    #[serde(default = "default_ground_truth_prefix")]
    pub ground_truth_prefix: String,
    /// Ellipsoid for geodetic to local frame conversions
    #[serde(default)]
    pub ellipsoid: Ellipsoid,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metadata_file: default_metadata_file(),
            ground_truth_prefix: default_ground_truth_prefix(),
            ellipsoid: Ellipsoid::default(),
        }
    }
}
