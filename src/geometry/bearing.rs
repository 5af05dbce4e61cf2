use crate::domain::GeoPoint;

/// Initial great-circle bearing from `from` to `to`.
///
/// Degrees clockwise from true north, in `[0, 360)`. Identical points
/// yield 0 since `atan2(0, 0) == 0`.
pub fn bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    let degrees = y.atan2(x).to_degrees();
    (degrees + 360.0) % 360.0
}
