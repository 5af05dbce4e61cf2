pub mod bearing;
pub mod grouping;
pub mod projection;
pub mod region;
pub mod scaling;

pub use bearing::bearing;
pub use grouping::{
    ADJACENCY_THRESHOLD, FRAGMENTING_SURFACES, GroupingRules, SurfaceGroup, SurfaceGroups,
    group_polygons, group_polygons_with,
};
pub use projection::{MercatorProjector, to_web_mercator};
pub use region::{DEFAULT_PADDING, Viewport, fit_region, fit_region_with_padding};
pub use scaling::{Bounds, Scaler};
