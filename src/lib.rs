//! holemap - Project golf hole geometry into renderable map scenes

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod parser;
pub mod render;
pub mod scene;

pub use domain::{Color, DirectionalVector, GeoPoint, Hole, PolygonPoint};
pub use error::HoleMapError;
pub use geometry::{Viewport, bearing, fit_region, group_polygons};
pub use scene::{ProjectionOptions, RenderModel, project, project_with};
