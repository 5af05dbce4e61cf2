//! Hole Map Projector: turns raw hole geometry into a render model.

pub mod model;

pub use model::{CameraPose, Marker, RenderModel, RenderRing};

use crate::domain::{Hole, marker_color, surface_color};
use crate::error::{HoleMapError, Result};
use crate::geometry::{
    DEFAULT_PADDING, GroupingRules, bearing, fit_region_with_padding, group_polygons_with,
};

/// Vector type of the tee the camera looks from.
pub const TEE_VECTOR: &str = "White";
/// Vector type of the target the camera looks towards.
pub const FLAG_VECTOR: &str = "Flag";

/// Fixed presentation values for the initial map camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDefaults {
    pub pitch: f64,
    pub altitude: f64,
    pub zoom: f64,
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            altitude: 1200.0,
            zoom: 15.0,
        }
    }
}

/// Tunables for [`project_with`]. `Default` gives the stock behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionOptions {
    pub padding: f64,
    pub grouping: GroupingRules,
    pub camera: CameraDefaults,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            grouping: GroupingRules::default(),
            camera: CameraDefaults::default(),
        }
    }
}

/// Project a hole with default options.
pub fn project(hole: &Hole, aspect_ratio: f64) -> Result<RenderModel> {
    project_with(hole, aspect_ratio, &ProjectionOptions::default())
}

/// Build the render model for `hole`.
///
/// # Algorithm
/// 1. Group polygon points into rings per surface type
/// 2. Fit the viewport over every polygon and vector point
/// 3. Head the camera from the first "White" tee to the first "Flag"
///    (0 when either is missing)
/// 4. Colour rings and markers
///
/// Returns [`HoleMapError::NoContent`] when the hole has no geometry at all.
/// Pure: the same hole always produces an equal model.
pub fn project_with(
    hole: &Hole,
    aspect_ratio: f64,
    options: &ProjectionOptions,
) -> Result<RenderModel> {
    if hole.is_empty() {
        return Err(HoleMapError::NoContent);
    }

    let groups = group_polygons_with(&hole.polygons, &options.grouping);
    let viewport = fit_region_with_padding(&hole.all_points(), aspect_ratio, options.padding)?;

    let heading = match (hole.find_vector(TEE_VECTOR), hole.find_vector(FLAG_VECTOR)) {
        (Some(tee), Some(flag)) => bearing(tee.point, flag.point),
        _ => 0.0,
    };

    let rings = groups
        .into_iter()
        .flat_map(|group| {
            let color = surface_color(Some(group.surface_type.as_str()));
            let surface_type = group.surface_type;
            group.rings.into_iter().map(move |points| RenderRing {
                surface_type: surface_type.clone(),
                color,
                points,
            })
        })
        .collect();

    let markers = hole
        .vectors
        .iter()
        .map(|v| Marker {
            point: v.point,
            color: marker_color(v.vector_type.as_deref()),
            label: v.vector_type.clone().unwrap_or_default(),
        })
        .collect();

    Ok(RenderModel {
        hole_id: hole.id,
        rings,
        markers,
        camera: CameraPose {
            heading,
            center: viewport.center,
            pitch: options.camera.pitch,
            altitude: options.camera.altitude,
            zoom: options.camera.zoom,
        },
        viewport,
    })
}
