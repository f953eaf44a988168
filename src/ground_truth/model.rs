use log::debug;
use nalgebra::Vector2;

use crate::{
    error::Error, frame::LocalFrame, ground_truth::GroundTruth, ground_truth::Polyline,
    position::GeodeticPoint,
};

/// [GroundTruthModel] resolves the horizontal error of position estimates,
/// with respect to a static point or a track.
/// The local frame is anchored at the static point, or at the first node of the track,
/// and the track is projected once, at build up.
#[derive(Debug, Clone)]
pub struct GroundTruthModel<F: LocalFrame> {
    ground_truth: GroundTruth,
    reference: GeodeticPoint,
    track: Option<Polyline>,
    frame: F,
}

impl<F: LocalFrame> GroundTruthModel<F> {
    /// Builds new [GroundTruthModel], using given [LocalFrame] conversion.
    pub fn new(ground_truth: GroundTruth, frame: F) -> Result<Self, Error> {
        let (reference, track) = match &ground_truth {
            GroundTruth::Point(point) => (point.horizontal(), None),
            GroundTruth::Track(points) => {
                let reference = points.first().ok_or(Error::EmptyTrack)?.horizontal();
                let vertices = points
                    .iter()
                    .map(|p| {
                        let enu = frame.enu(&p.horizontal(), &reference);
                        Vector2::new(enu[0], enu[1])
                    })
                    .collect::<Vec<_>>();
                (reference, Some(Polyline::new(vertices)))
            },
        };

        match &track {
            Some(track) => debug!(
                "ground truth track: {} nodes, {:.3}m long, reference {}",
                track.len(),
                track.length(),
                reference
            ),
            None => debug!("ground truth point {}", reference),
        }

        Ok(Self {
            ground_truth,
            reference,
            track,
            frame,
        })
    }
    /// Local frame origin
    pub fn reference_point(&self) -> GeodeticPoint {
        self.reference
    }
    pub fn ground_truth(&self) -> &GroundTruth {
        &self.ground_truth
    }
    /// Projected track, in the local (East, North) frame.
    /// None for a static ground truth.
    pub fn polyline(&self) -> Option<&Polyline> {
        self.track.as_ref()
    }
    /// Horizontal distance [m] between given point and the ground truth:
    /// either the static point, or the closest point of the track.
    /// Altitude is not taken into account.
    /// Returns [f64::INFINITY] when the distance is not defined.
    pub fn nearest_distance(&self, point: &GeodeticPoint) -> f64 {
        let enu = self.frame.enu(&point.horizontal(), &self.reference);
        let en = Vector2::new(enu[0], enu[1]);

        let err = match &self.track {
            Some(track) => track.distance(&en).unwrap_or(f64::NAN),
            None => en.norm(),
        };

        if err.is_finite() {
            err
        } else {
            debug!("undefined distance from {}", point);
            f64::INFINITY
        }
    }
}
