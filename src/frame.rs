//! Geodetic to local tangent plane conversion
use map_3d::geodetic2enu;

use crate::{cfg::Ellipsoid, position::GeodeticPoint, prelude::Vector3};

/// Implement this trait to provide the geodetic to local (East, North, Up) frame
/// conversion, anchored at a reference point. Ground truth error
/// is entirely resolved in this frame.
pub trait LocalFrame {
    /// Returns ENU coordinates [m] of `point` in the tangent plane anchored at `reference`.
    fn enu(&self, point: &GeodeticPoint, reference: &GeodeticPoint) -> Vector3<f64>;
}

impl<F: LocalFrame + ?Sized> LocalFrame for &F {
    fn enu(&self, point: &GeodeticPoint, reference: &GeodeticPoint) -> Vector3<f64> {
        (**self).enu(point, reference)
    }
}

/// Standard ellipsoidal tangent plane projection
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoidal {
    ellipsoid: Ellipsoid,
}

impl Ellipsoidal {
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }
    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }
}

impl LocalFrame for Ellipsoidal {
    fn enu(&self, point: &GeodeticPoint, reference: &GeodeticPoint) -> Vector3<f64> {
        let (lat, lon) = point.geodetic_rad();
        let (lat0, lon0) = reference.geodetic_rad();
        let (e, n, u) = geodetic2enu(
            lat,
            lon,
            point.altitude_m,
            lat0,
            lon0,
            reference.altitude_m,
            self.ellipsoid.model(),
        );
        Vector3::new(e, n, u)
    }
}
