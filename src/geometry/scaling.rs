/// Bounding box in projected coordinates (meters)
#[derive(Debug, Clone)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from a set of points
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        let mut min_y = f64::MAX;
        let mut max_y = f64::MIN;

        for &(x, y) in points {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        Some(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Maps projected metres onto a pixel canvas.
///
/// The larger relative dimension fills the canvas minus `margin_px` on every
/// side; the other is centred. Screen y grows downwards, so the y axis is
/// flipped.
#[derive(Debug, Clone)]
pub struct Scaler {
    /// Pixels per metre
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    height_px: f64,
}

impl Scaler {
    pub fn from_bounds(bounds: &Bounds, width_px: f64, height_px: f64, margin_px: f64) -> Self {
        let usable_w = (width_px - 2.0 * margin_px).max(0.0);
        let usable_h = (height_px - 2.0 * margin_px).max(0.0);

        let scale_w = if bounds.width() > 0.0 {
            usable_w / bounds.width()
        } else {
            f64::INFINITY
        };
        let scale_h = if bounds.height() > 0.0 {
            usable_h / bounds.height()
        } else {
            f64::INFINITY
        };
        let scale = match scale_w.min(scale_h) {
            s if s.is_finite() => s,
            // Degenerate bounds (single point)
            _ => 1.0,
        };

        let offset_x = (width_px - bounds.width() * scale) / 2.0 - bounds.min_x * scale;
        let offset_y = (height_px - bounds.height() * scale) / 2.0 - bounds.min_y * scale;

        Self {
            scale,
            offset_x,
            offset_y,
            height_px,
        }
    }

    /// Scale a point from metres to canvas pixels
    pub fn scale(&self, x: f64, y: f64) -> (f64, f64) {
        let px = x * self.scale + self.offset_x;
        let py = self.height_px - (y * self.scale + self.offset_y);
        (px, py)
    }

    /// Scale a slice of points
    pub fn scale_points(&self, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
        points.iter().map(|&(x, y)| self.scale(x, y)).collect()
    }

    /// Get the scale factor (pixels per metre)
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }
}
