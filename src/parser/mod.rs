use crate::api::HoleDataRecord;
use crate::domain::{DirectionalVector, GeoPoint, Hole, PolygonPoint};

/// Group key for polygon rows without a surface type.
pub const UNKNOWN_SURFACE: &str = "Unknown";

/// Convert a hole payload into a domain hole
///
/// # Algorithm
/// 1. Keep rows in source order (ring reconstruction depends on it)
/// 2. Drop rows whose lat or long is missing or not finite
/// 3. Polygon rows without a surface type are filed under "Unknown"
pub fn parse_hole(record: &HoleDataRecord) -> Hole {
    let polygons = record
        .polygons
        .iter()
        .filter_map(|p| {
            let point = to_point(p.lat, p.long)?;
            let surface_type = p.surface_type.as_deref().unwrap_or(UNKNOWN_SURFACE);
            Some(PolygonPoint::new(surface_type, point))
        })
        .collect();

    let vectors = record
        .vectors
        .iter()
        .filter_map(|v| {
            let point = to_point(v.lat, v.long)?;
            Some(DirectionalVector {
                vector_type: v.vector_type.clone(),
                point,
            })
        })
        .collect();

    Hole {
        id: record.hole.hole_id,
        number: record.hole.number,
        polygons,
        vectors,
    }
}

/// Number of rows `parse_hole` discards for lacking usable coordinates.
pub fn count_skipped(record: &HoleDataRecord) -> usize {
    let polygons = record
        .polygons
        .iter()
        .filter(|p| to_point(p.lat, p.long).is_none())
        .count();
    let vectors = record
        .vectors
        .iter()
        .filter(|v| to_point(v.lat, v.long).is_none())
        .count();
    polygons + vectors
}

fn to_point(lat: Option<f64>, lon: Option<f64>) -> Option<GeoPoint> {
    let lat = lat.filter(|l| l.is_finite())?;
    let lon = lon.filter(|l| l.is_finite())?;
    Some(GeoPoint::new(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::parse_hole_data;

    #[test]
    fn test_parse_hole() {
        let record = parse_hole_data(
            r#"{
                "hole": {"id": 1, "hole_id": 77, "number": 3},
                "polygons": [
                    {"id": 1, "surface_type": "Sand", "lat": 1.0, "long": 2.0},
                    {"id": 2, "surface_type": null, "lat": 3.0, "long": 4.0},
                    {"id": 3, "surface_type": "Sand", "lat": null, "long": 4.0},
                    {"id": 4, "surface_type": "Green", "lat": 5.0}
                ],
                "vectors": [
                    {"id": 1, "vector_type": "White", "lat": 1.0, "long": 1.0},
                    {"id": 2, "vector_type": null, "lat": 2.0, "long": 2.0},
                    {"id": 3, "vector_type": "Flag"}
                ]
            }"#,
        )
        .unwrap();

        let hole = parse_hole(&record);
        assert_eq!(hole.id, 77);
        assert_eq!(hole.number, Some(3));

        assert_eq!(hole.polygons.len(), 2);
        assert_eq!(hole.polygons[0].surface_type, "Sand");
        assert_eq!(hole.polygons[0].point, GeoPoint::new(1.0, 2.0));
        assert_eq!(hole.polygons[1].surface_type, UNKNOWN_SURFACE);

        assert_eq!(hole.vectors.len(), 2);
        assert!(hole.vectors[0].is("White"));
        assert!(hole.vectors[1].vector_type.is_none());

        assert_eq!(count_skipped(&record), 3);
    }

    #[test]
    fn test_empty_payload_gives_empty_hole() {
        let record = parse_hole_data(r#"{"hole": {"id": 1, "hole_id": 2}}"#).unwrap();
        let hole = parse_hole(&record);
        assert!(hole.is_empty());
        assert_eq!(count_skipped(&record), 0);
    }
}
