//! Ground truth representation
mod model;
mod polyline;

pub use model::GroundTruthModel;
pub use polyline::Polyline;

use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::{error::Error, position::GeodeticPoint};

/// Ground truth of a dataset
#[derive(Debug, Clone, PartialEq)]
pub enum GroundTruth {
    /// Static deployment: single location
    Point(GeodeticPoint),
    /// Dynamic deployment: ordered nodes of a polyline.
    /// Nodes are not related to the snapshots (no timing information).
    Track(Vec<GeodeticPoint>),
}

impl GroundTruth {
    /// Builds a [GroundTruth::Track] by concatenating all segments
    /// provided by the [TrackSource], in the order they are provided.
    /// Segments are not sorted nor deduplicated. Empty segments are skipped.
    /// Returns None if the source provides no node at all.
    pub fn from_track_source<S: TrackSource>(mut source: S) -> Option<Self> {
        let mut points = Vec::<GeodeticPoint>::new();
        let mut segments = 0;
        while let Some(segment) = source.next_segment() {
            if segment.is_empty() {
                debug!("skipping empty ground truth segment");
                continue;
            }
            debug!("ground truth segment #{}: {} nodes", segments, segment.len());
            points.extend(segment);
            segments += 1;
        }
        if points.is_empty() {
            None
        } else {
            if segments > 1 {
                warn!("concatenating {} ground truth segments", segments);
            }
            Some(Self::Track(points))
        }
    }
    /// True for a dynamic ground truth
    pub fn is_track(&self) -> bool {
        matches!(self, Self::Track(_))
    }
    /// Returns the static location, if any
    pub fn as_point(&self) -> Option<&GeodeticPoint> {
        match self {
            Self::Point(p) => Some(p),
            Self::Track(_) => None,
        }
    }
    /// Returns the track nodes, if any
    pub fn as_track(&self) -> Option<&[GeodeticPoint]> {
        match self {
            Self::Point(_) => None,
            Self::Track(t) => Some(t),
        }
    }
}

/// Implement this trait to provide ground truth track segments, for example
/// after parsing GPX or KML files.
pub trait TrackSource {
    /// Provide the next track segment, in discovery order.
    fn next_segment(&mut self) -> Option<Vec<GeodeticPoint>>;
}

impl<I> TrackSource for I
where
    I: Iterator<Item = Vec<GeodeticPoint>>,
{
    fn next_segment(&mut self) -> Option<Vec<GeodeticPoint>> {
        self.next()
    }
}

/// Supported ground truth file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTruthFormat {
    /// GPS Exchange Format: track points
    Gpx,
    /// Keyhole Markup Language: path coordinates
    Kml,
}

impl std::str::FromStr for GroundTruthFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = s.trim().to_lowercase();
        match c.as_str() {
            "gpx" => Ok(Self::Gpx),
            "kml" => Ok(Self::Kml),
            _ => Err(Error::UnknownGroundTruthFormat(c)),
        }
    }
}

impl std::fmt::Display for GroundTruthFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Gpx => write!(f, "GPX"),
            Self::Kml => write!(f, "KML"),
        }
    }
}

/// Lists ground truth files of a directory: files whose name starts with `prefix`.
/// Files are sorted by name, which defines the concatenation order of the segments.
pub fn discover(directory: &Path, prefix: &str) -> Result<Vec<(PathBuf, GroundTruthFormat)>, Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with(prefix))
            .unwrap_or(false);
        if !matches || !path.is_file() {
            continue;
        }
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        let format = extension.parse::<GroundTruthFormat>()?;
        debug!("ground truth file {} ({})", path.display(), format);
        files.push((path, format));
    }
    files.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(files)
}

/// Loads the nodes of a ground truth file.
/// GPX: every `trkpt` (`lat`, `lon` attributes), in document order.
/// KML: the last `coordinates` element of the document.
pub fn load(path: &Path, format: GroundTruthFormat) -> Result<Vec<GeodeticPoint>, Error> {
    let content = std::fs::read_to_string(path)?;
    let document = roxmltree::Document::parse(&content)?;
    match format {
        GroundTruthFormat::Gpx => document
            .descendants()
            .filter(|node| node.tag_name().name() == "trkpt")
            .map(|node| -> Result<GeodeticPoint, Error> {
                let coordinate = |name: &str| {
                    node.attribute(name)
                        .and_then(|value| value.trim().parse::<f64>().ok())
                        .ok_or_else(|| {
                            Error::InvalidCoordinates(format!(
                                "trkpt {}={:?}",
                                name,
                                node.attribute(name)
                            ))
                        })
                };
                Ok(GeodeticPoint::new(coordinate("lat")?, coordinate("lon")?))
            })
            .collect(),
        GroundTruthFormat::Kml => {
            let coordinates = document
                .descendants()
                .filter(|node| node.tag_name().name() == "coordinates")
                .last()
                .and_then(|node| node.text())
                .unwrap_or_default();
            parse_kml_coordinates(coordinates)
        },
    }
}

/// Parses the content of a KML `coordinates` element: whitespace separated
/// `longitude,latitude[,altitude]` tuples, in decimal degrees.
pub fn parse_kml_coordinates(content: &str) -> Result<Vec<GeodeticPoint>, Error> {
    content
        .split_whitespace()
        .map(|tuple| {
            let fields = tuple
                .split(',')
                .map(|field| field.parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| Error::InvalidCoordinates(tuple.to_string()))?;
            match fields.as_slice() {
                [lon, lat] => Ok(GeodeticPoint::new(*lat, *lon)),
                [lon, lat, alt] => Ok(GeodeticPoint::new(*lat, *lon).with_altitude(*alt)),
                _ => Err(Error::InvalidCoordinates(tuple.to_string())),
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::{load, parse_kml_coordinates, GroundTruth, GroundTruthFormat};
    use crate::{error::Error, position::GeodeticPoint, tests::write_file};
    use std::str::FromStr;
    use tempfile::TempDir;

    #[test]
    fn segments_concatenation() {
        let segments = vec![
            vec![GeodeticPoint::new(1.0, 1.0), GeodeticPoint::new(2.0, 2.0)],
            vec![GeodeticPoint::new(3.0, 3.0)],
        ];
        let gt = GroundTruth::from_track_source(segments.into_iter()).unwrap();
        assert!(gt.is_track());
        assert!(gt.as_point().is_none());
        assert_eq!(
            gt.as_track().unwrap(),
            &[
                GeodeticPoint::new(1.0, 1.0),
                GeodeticPoint::new(2.0, 2.0),
                GeodeticPoint::new(3.0, 3.0),
            ]
        );

        let gt = GroundTruth::from_track_source(Vec::<Vec<GeodeticPoint>>::new().into_iter());
        assert!(gt.is_none());
    }

    #[test]
    fn empty_segments() {
        let gt = GroundTruth::from_track_source(vec![Vec::<GeodeticPoint>::new()].into_iter());
        assert!(gt.is_none());

        let gt = GroundTruth::from_track_source(vec![Vec::<GeodeticPoint>::new(); 2].into_iter());
        assert!(gt.is_none());

        let segments = vec![Vec::new(), vec![GeodeticPoint::new(1.0, 2.0)], Vec::new()];
        let gt = GroundTruth::from_track_source(segments.into_iter()).unwrap();
        assert_eq!(gt.as_track().unwrap(), &[GeodeticPoint::new(1.0, 2.0)]);
    }

    #[test]
    fn gpx_track_points() {
        let dir = TempDir::new().unwrap();
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="logger" xmlns="http://www.topografix.com/GPX/1/1">
  <wpt lat="10.0" lon="10.0"/>
  <trk>
    <trkseg>
      <trkpt lat="51.7546" lon="-1.2543"><ele>62.0</ele></trkpt>
      <trkpt lat="51.7547" lon="-1.2544"/>
    </trkseg>
    <trkseg>
      <trkpt lat="51.7548" lon="-1.2545"/>
    </trkseg>
  </trk>
</gpx>"#;
        write_file(dir.path(), "ground_truth.gpx", content.as_bytes());

        let points = load(&dir.path().join("ground_truth.gpx"), GroundTruthFormat::Gpx).unwrap();
        assert_eq!(
            points,
            vec![
                GeodeticPoint::new(51.7546, -1.2543),
                GeodeticPoint::new(51.7547, -1.2544),
                GeodeticPoint::new(51.7548, -1.2545),
            ]
        );

        write_file(
            dir.path(),
            "ground_truth_invalid.gpx",
            br#"<gpx><trk><trkseg><trkpt lat="north" lon="0.0"/></trkseg></trk></gpx>"#,
        );
        match load(
            &dir.path().join("ground_truth_invalid.gpx"),
            GroundTruthFormat::Gpx,
        ) {
            Err(Error::InvalidCoordinates(_)) => {},
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn kml_last_path() {
        let dir = TempDir::new().unwrap();
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <Point><coordinates>0.0,0.0,0.0</coordinates></Point>
    </Placemark>
    <Placemark>
      <LineString>
        <coordinates>
          -1.2543,51.7546,0.0
          -1.2544,51.7547,0.0
        </coordinates>
      </LineString>
    </Placemark>
  </Document>
</kml>"#;
        write_file(dir.path(), "ground_truth.kml", content.as_bytes());

        let points = load(&dir.path().join("ground_truth.kml"), GroundTruthFormat::Kml).unwrap();
        assert_eq!(
            points,
            vec![
                GeodeticPoint::new(51.7546, -1.2543),
                GeodeticPoint::new(51.7547, -1.2544),
            ]
        );
    }

    #[test]
    fn malformed_document() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "ground_truth.kml", b"<kml><Document></kml>");
        match load(&dir.path().join("ground_truth.kml"), GroundTruthFormat::Kml) {
            Err(Error::GroundTruthFile(_)) => {},
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn formats() {
        assert_eq!(GroundTruthFormat::from_str("gpx").unwrap(), GroundTruthFormat::Gpx);
        assert_eq!(GroundTruthFormat::from_str(" KML").unwrap(), GroundTruthFormat::Kml);
        match GroundTruthFormat::from_str("csv") {
            Err(Error::UnknownGroundTruthFormat(fmt)) => assert_eq!(fmt, "csv"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn kml_coordinates() {
        let content = "
            -1.2543,51.7546,0.0 -1.2544,51.7547,12.5
            \t-1.2545,51.7548
        ";
        let points = parse_kml_coordinates(content).unwrap();
        assert_eq!(
            points,
            vec![
                GeodeticPoint::new(51.7546, -1.2543),
                GeodeticPoint::new(51.7547, -1.2544).with_altitude(12.5),
                GeodeticPoint::new(51.7548, -1.2545),
            ]
        );

        assert!(parse_kml_coordinates("").unwrap().is_empty());

        for invalid in ["1.0", "1.0,2.0,3.0,4.0", "a,b", "1.0,,2.0"] {
            match parse_kml_coordinates(invalid) {
                Err(Error::InvalidCoordinates(tuple)) => assert_eq!(tuple, invalid),
                other => panic!("unexpected result {:?}", other),
            }
        }
    }
}
