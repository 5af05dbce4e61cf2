use crate::domain::GeoPoint;

/// WGS84 semi-major axis used by EPSG:3857, in metres.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude beyond which Web Mercator diverges.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Spherical Web Mercator (EPSG:3857) projection, recentred on a point and
/// optionally rotated.
///
/// - x = R * lon
/// - y = R * ln(tan(pi/4 + lat/2))
///
/// Output is metres relative to the projection center. With a non-zero
/// heading the plane is turned so that the heading direction points along +y.
#[derive(Debug, Clone)]
pub struct MercatorProjector {
    origin: (f64, f64),
    sin_heading: f64,
    cos_heading: f64,
}

impl MercatorProjector {
    /// Create a projector centered at `center` with north up.
    pub fn new(center: GeoPoint) -> Self {
        Self::with_heading(center, 0.0)
    }

    /// Create a projector centered at `center` that rotates `heading_deg`
    /// (clockwise from north) to the top of the plane.
    pub fn with_heading(center: GeoPoint, heading_deg: f64) -> Self {
        let heading = heading_deg.to_radians();
        Self {
            origin: to_web_mercator(center),
            sin_heading: heading.sin(),
            cos_heading: heading.cos(),
        }
    }

    /// Project a point to local metres.
    pub fn project(&self, point: GeoPoint) -> (f64, f64) {
        let (mx, my) = to_web_mercator(point);
        let x = mx - self.origin.0;
        let y = my - self.origin.1;

        (
            x * self.cos_heading - y * self.sin_heading,
            x * self.sin_heading + y * self.cos_heading,
        )
    }

    /// Project a slice of points
    pub fn project_points(&self, points: &[GeoPoint]) -> Vec<(f64, f64)> {
        points.iter().map(|&p| self.project(p)).collect()
    }
}

/// Absolute EPSG:3857 coordinates of a WGS84 point.
pub fn to_web_mercator(point: GeoPoint) -> (f64, f64) {
    let lat = point.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let phi = lat.to_radians();
    let x = EARTH_RADIUS * point.longitude.to_radians();
    let y = EARTH_RADIUS * (std::f64::consts::FRAC_PI_4 + phi / 2.0).tan().ln();
    (x, y)
}
