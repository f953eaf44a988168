use map_3d::deg2rad;

/// Geodetic coordinates of a ground truth node, or of a position estimate.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPoint {
    /// Latitude in decimal degrees
    pub latitude_ddeg: f64,
    /// Longitude in decimal degrees
    pub longitude_ddeg: f64,
    /// Altitude above the ellipsoid [m]
    pub altitude_m: f64,
}

impl GeodeticPoint {
    /// Builds new [GeodeticPoint] on the ellipsoid (null altitude)
    pub fn new(latitude_ddeg: f64, longitude_ddeg: f64) -> Self {
        Self {
            latitude_ddeg,
            longitude_ddeg,
            altitude_m: 0.0,
        }
    }
    /// Copies and returns Self with given altitude [m]
    pub fn with_altitude(&self, altitude_m: f64) -> Self {
        let mut s = *self;
        s.altitude_m = altitude_m;
        s
    }
    /// Returns Self projected onto the ellipsoid.
    /// Horizontal error is always evaluated at null altitude.
    pub fn horizontal(&self) -> Self {
        self.with_altitude(0.0)
    }
    /// Returns (latitude, longitude) in radians
    pub fn geodetic_rad(&self) -> (f64, f64) {
        (deg2rad(self.latitude_ddeg), deg2rad(self.longitude_ddeg))
    }
}

impl std::fmt::Display for GeodeticPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "(lat={:.7}°, lon={:.7}°, alt={:.3}m)",
            self.latitude_ddeg, self.longitude_ddeg, self.altitude_m
        )
    }
}
