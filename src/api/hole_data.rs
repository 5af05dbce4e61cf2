use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Body of `GET /hole/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct HoleDataRecord {
    pub hole: HoleRecord,
    #[serde(default)]
    pub polygons: Vec<PolygonRecord>,
    #[serde(default)]
    pub vectors: Vec<VectorRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HoleRecord {
    pub id: i64,
    pub hole_id: i64,
    #[serde(default)]
    pub number: Option<i32>,
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default)]
    pub rotation: Option<f64>,
    #[serde(default)]
    pub flag_lat: Option<f64>,
    #[serde(default)]
    pub flag_long: Option<f64>,
}

/// A single polygon vertex row.
#[derive(Debug, Clone, Deserialize)]
pub struct PolygonRecord {
    pub id: i64,
    #[serde(default)]
    pub hole_id: Option<i64>,
    #[serde(default)]
    pub surface_type: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
}

/// A single point-of-interest row.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorRecord {
    pub id: i64,
    #[serde(default)]
    pub hole_id: Option<i64>,
    #[serde(default)]
    pub vector_type: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
}

/// Decode a hole payload from JSON text.
pub fn parse_hole_data(json: &str) -> Result<HoleDataRecord> {
    serde_json::from_str(json).context("Failed to parse hole JSON")
}

/// Read and decode a hole payload from a file.
pub fn load_hole_data(path: &Path) -> Result<HoleDataRecord> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read hole file: {}", path.display()))?;
    parse_hole_data(&contents)
        .with_context(|| format!("Invalid hole file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "hole": {"id": 1, "hole_id": 101, "number": 4, "course_id": 9,
                 "rotation": null, "range_x_min": 0.0, "flag_lat": 40.1, "flag_long": -75.2},
        "polygons": [
            {"id": 1, "hole_id": 101, "surface_type": "Green", "lat": 40.1, "long": -75.2},
            {"id": 2, "hole_id": 101, "surface_type": null, "lat": 40.2, "long": -75.3}
        ],
        "vectors": [
            {"id": 5, "hole_id": 101, "vector_type": "Flag", "lat": 40.1, "long": -75.2}
        ]
    }"#;

    #[test]
    fn test_parse_hole_response() {
        let data = parse_hole_data(SAMPLE).unwrap();
        assert_eq!(data.hole.hole_id, 101);
        assert_eq!(data.hole.number, Some(4));
        assert_eq!(data.polygons.len(), 2);
        assert_eq!(data.polygons[0].surface_type.as_deref(), Some("Green"));
        assert!(data.polygons[1].surface_type.is_none());
        assert_eq!(data.vectors[0].vector_type.as_deref(), Some("Flag"));
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let data = parse_hole_data(r#"{"hole": {"id": 2, "hole_id": 3}}"#).unwrap();
        assert!(data.polygons.is_empty());
        assert!(data.vectors.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(parse_hole_data("{\"hole\":").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hole.json");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(SAMPLE.as_bytes())
            .unwrap();

        let data = load_hole_data(&path).unwrap();
        assert_eq!(data.hole.id, 1);
        assert!(load_hole_data(&dir.path().join("missing.json")).is_err());
    }
}
