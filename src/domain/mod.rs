pub mod color;
pub mod hole;

pub use color::{Color, marker_color, surface_color};
pub use hole::{DirectionalVector, GeoPoint, Hole, PolygonPoint};
