use serde::{Deserialize, Serialize};

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Planar distance in degrees, treating lat/lon as Cartesian axes.
    ///
    /// Only meaningful for points a few metres apart.
    pub fn degree_distance(&self, other: &GeoPoint) -> f64 {
        let d_lat = self.latitude - other.latitude;
        let d_lon = self.longitude - other.longitude;
        d_lat.hypot(d_lon)
    }
}

impl From<GeoPoint> for geo::Coord<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::coord! { x: p.longitude, y: p.latitude }
    }
}

impl From<geo::Coord<f64>> for GeoPoint {
    fn from(c: geo::Coord<f64>) -> Self {
        GeoPoint::new(c.y, c.x)
    }
}

/// One vertex of a mapped ground region.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPoint {
    pub surface_type: String,
    pub point: GeoPoint,
}

impl PolygonPoint {
    pub fn new(surface_type: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            surface_type: surface_type.into(),
            point,
        }
    }
}

/// A named point of interest on the hole (tee marker, flag).
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalVector {
    pub vector_type: Option<String>,
    pub point: GeoPoint,
}

impl DirectionalVector {
    pub fn new(vector_type: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            vector_type: Some(vector_type.into()),
            point,
        }
    }

    pub fn untyped(point: GeoPoint) -> Self {
        Self {
            vector_type: None,
            point,
        }
    }

    pub fn is(&self, vector_type: &str) -> bool {
        self.vector_type.as_deref() == Some(vector_type)
    }
}

/// A golf hole with its raw, ungrouped geometry.
///
/// `polygons` keeps source order; the grouper relies on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Hole {
    pub id: i64,
    pub number: Option<i32>,
    pub polygons: Vec<PolygonPoint>,
    pub vectors: Vec<DirectionalVector>,
}

impl Hole {
    pub fn new(id: i64, polygons: Vec<PolygonPoint>, vectors: Vec<DirectionalVector>) -> Self {
        Self {
            id,
            number: None,
            polygons,
            vectors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty() && self.vectors.is_empty()
    }

    /// First vector of the given type, in source order.
    pub fn find_vector(&self, vector_type: &str) -> Option<&DirectionalVector> {
        self.vectors.iter().find(|v| v.is(vector_type))
    }

    /// Every polygon point followed by every vector point.
    pub fn all_points(&self) -> Vec<GeoPoint> {
        self.polygons
            .iter()
            .map(|p| p.point)
            .chain(self.vectors.iter().map(|v| v.point))
            .collect()
    }
}
