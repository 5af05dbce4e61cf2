use serde::Serialize;

use crate::domain::{Color, GeoPoint};
use crate::geometry::Viewport;

/// One polygon boundary ready to be filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRing {
    pub surface_type: String,
    pub color: Color,
    pub points: Vec<GeoPoint>,
}

/// A coloured point of interest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub point: GeoPoint,
    pub color: Color,
    /// Vector type, empty when the source had none
    pub label: String,
}

/// Initial map camera for a hole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    /// Degrees clockwise from north, `[0, 360)`
    pub heading: f64,
    pub center: GeoPoint,
    pub pitch: f64,
    pub altitude: f64,
    pub zoom: f64,
}

/// Everything a map or canvas needs to draw one hole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub hole_id: i64,
    pub rings: Vec<RenderRing>,
    pub markers: Vec<Marker>,
    pub camera: CameraPose,
    pub viewport: Viewport,
}

impl RenderModel {
    pub fn rings_of<'a>(&'a self, surface_type: &'a str) -> impl Iterator<Item = &'a RenderRing> {
        self.rings
            .iter()
            .filter(move |r| r.surface_type == surface_type)
    }
}
