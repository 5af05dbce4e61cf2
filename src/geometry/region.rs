use geo::{BoundingRect, Coord, MultiPoint};
use serde::Serialize;

use crate::domain::GeoPoint;
use crate::error::{HoleMapError, Result};

/// Span multiplier applied around the tight bounding box.
pub const DEFAULT_PADDING: f64 = 1.2;

/// A map viewport: center plus latitude/longitude extent in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: GeoPoint,
    pub lat_span: f64,
    pub lon_span: f64,
}

/// Fit a viewport around `points` with the default padding.
///
/// See [`fit_region_with_padding`].
pub fn fit_region(points: &[GeoPoint], aspect_ratio: f64) -> Result<Viewport> {
    fit_region_with_padding(points, aspect_ratio, DEFAULT_PADDING)
}

/// Fit a viewport around `points`.
///
/// `aspect_ratio` is viewport height over width. Each span is widened to at
/// least the other span scaled by the aspect ratio, using the padded spans
/// from before either correction, so a point set that is flat along one axis
/// still gets a usable viewport.
///
/// This is a planar box in degree space and is only reasonable at the scale
/// of a single hole.
pub fn fit_region_with_padding(
    points: &[GeoPoint],
    aspect_ratio: f64,
    padding: f64,
) -> Result<Viewport> {
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return Err(HoleMapError::InvalidInput(format!(
            "aspect ratio must be positive, got {}",
            aspect_ratio
        )));
    }
    if !padding.is_finite() || padding < 0.0 {
        return Err(HoleMapError::InvalidInput(format!(
            "padding must be non-negative, got {}",
            padding
        )));
    }
    if let Some(bad) = points
        .iter()
        .find(|p| !p.latitude.is_finite() || !p.longitude.is_finite())
    {
        return Err(HoleMapError::InvalidInput(format!(
            "non-finite coordinate ({}, {})",
            bad.latitude, bad.longitude
        )));
    }

    let multi: MultiPoint<f64> = points.iter().map(|&p| Coord::from(p)).collect();
    let rect = multi.bounding_rect().ok_or_else(|| {
        HoleMapError::InvalidInput("cannot fit a region to an empty point set".to_string())
    })?;

    let lat_span = rect.height() * padding;
    let lon_span = rect.width() * padding;

    Ok(Viewport {
        center: GeoPoint::from(rect.center()),
        lat_span: lat_span.max(lon_span * aspect_ratio),
        lon_span: lon_span.max(lat_span / aspect_ratio),
    })
}
