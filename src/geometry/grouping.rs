use std::collections::HashMap;

use crate::domain::{GeoPoint, PolygonPoint};

/// Two consecutive points of a fragmenting surface closer than this (in
/// degrees) belong to the same ring.
pub const ADJACENCY_THRESHOLD: f64 = 0.00008;

/// Surface types that may appear as several disjoint regions per hole.
pub const FRAGMENTING_SURFACES: [&str; 2] = ["Woods", "Sand"];

/// Controls how flat polygon points are split into rings.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingRules {
    pub adjacency_threshold: f64,
    pub fragmenting_surfaces: Vec<String>,
}

impl Default for GroupingRules {
    fn default() -> Self {
        Self {
            adjacency_threshold: ADJACENCY_THRESHOLD,
            fragmenting_surfaces: FRAGMENTING_SURFACES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GroupingRules {
    pub fn fragments(&self, surface_type: &str) -> bool {
        self.fragmenting_surfaces.iter().any(|s| s == surface_type)
    }
}

/// All rings of one surface type, in the order they were opened.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGroup {
    pub surface_type: String,
    pub rings: Vec<Vec<GeoPoint>>,
}

/// Rings keyed by surface type, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurfaceGroups {
    groups: Vec<SurfaceGroup>,
}

impl SurfaceGroups {
    pub fn get(&self, surface_type: &str) -> Option<&[Vec<GeoPoint>]> {
        self.groups
            .iter()
            .find(|g| g.surface_type == surface_type)
            .map(|g| g.rings.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SurfaceGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn ring_count(&self) -> usize {
        self.groups.iter().map(|g| g.rings.len()).sum()
    }
}

impl IntoIterator for SurfaceGroups {
    type Item = SurfaceGroup;
    type IntoIter = std::vec::IntoIter<SurfaceGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Group polygon points into rings using the default rules.
pub fn group_polygons(points: &[PolygonPoint]) -> SurfaceGroups {
    group_polygons_with(points, &GroupingRules::default())
}

/// Rebuild renderable rings from a flat, ordered list of polygon points.
///
/// # Algorithm
/// - Non-fragmenting types collapse into one ring, in input order.
/// - For fragmenting types, a point joins the currently open ring only when
///   it lies within `adjacency_threshold` of that ring's last point;
///   otherwise it opens a new ring.
///
/// Adjacency is tested against the most recent point only, so rings can
/// self-intersect when the input is not locally contiguous.
pub fn group_polygons_with(points: &[PolygonPoint], rules: &GroupingRules) -> SurfaceGroups {
    let mut groups: Vec<SurfaceGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for polygon_point in points {
        let surface_type = polygon_point.surface_type.as_str();
        let slot = *index.entry(surface_type).or_insert_with(|| {
            groups.push(SurfaceGroup {
                surface_type: surface_type.to_string(),
                rings: Vec::new(),
            });
            groups.len() - 1
        });
        let rings = &mut groups[slot].rings;
        let point = polygon_point.point;

        let open_ring = if rules.fragments(surface_type) {
            rings
                .last_mut()
                .filter(|ring| continues(ring, &point, rules.adjacency_threshold))
        } else {
            rings.last_mut()
        };

        match open_ring {
            Some(ring) => ring.push(point),
            None => rings.push(vec![point]),
        }
    }

    SurfaceGroups { groups }
}

/// Whether `point` is close enough to the last point of `ring` to extend it.
fn continues(ring: &[GeoPoint], point: &GeoPoint, threshold: f64) -> bool {
    ring.last()
        .is_some_and(|last| last.degree_distance(point) < threshold)
}
