use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::geometry::{Bounds, MercatorProjector, Scaler};
use crate::scene::RenderModel;

/// Canvas settings for SVG output.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    pub width: f64,
    pub height: f64,
    /// Blank border in pixels
    pub margin: f64,
    pub marker_radius: f64,
    /// Turn the scene so the camera heading points up
    pub rotate: bool,
    pub background: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 1200.0,
            margin: 20.0,
            marker_radius: 5.0,
            rotate: true,
            background: "lightgrey".to_string(),
        }
    }
}

/// Render a model as a standalone SVG document
///
/// # Algorithm
/// 1. Project every ring and marker point to Web Mercator metres around the
///    viewport center, rotated by the camera heading when enabled
/// 2. Fit the projected bounds into the canvas
/// 3. Emit rings as black-stroked filled polygons, then markers as circles
pub fn render_svg(model: &RenderModel, options: &SvgOptions) -> String {
    let heading = if options.rotate {
        model.camera.heading
    } else {
        0.0
    };
    let projector = MercatorProjector::with_heading(model.viewport.center, heading);

    let rings: Vec<Vec<(f64, f64)>> = model
        .rings
        .iter()
        .map(|ring| projector.project_points(&ring.points))
        .collect();
    let markers: Vec<(f64, f64)> = model
        .markers
        .iter()
        .map(|m| projector.project(m.point))
        .collect();

    let all_points: Vec<(f64, f64)> = rings
        .iter()
        .flatten()
        .copied()
        .chain(markers.iter().copied())
        .collect();
    let bounds = Bounds::from_points(&all_points).unwrap_or(Bounds {
        min_x: 0.0,
        max_x: 0.0,
        min_y: 0.0,
        max_y: 0.0,
    });
    let scaler = Scaler::from_bounds(&bounds, options.width, options.height, options.margin);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = options.width,
        h = options.height
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        escape(&options.background)
    );

    for (ring, projected) in model.rings.iter().zip(&rings) {
        let points = scaler
            .scale_points(projected)
            .iter()
            .map(|(x, y)| format!("{:.2},{:.2}", x, y))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            svg,
            r#"  <polygon class="{}" points="{}" fill="{}" stroke="black" stroke-width="1"/>"#,
            escape(&ring.surface_type),
            points,
            ring.color
        );
    }

    for (marker, &(x, y)) in model.markers.iter().zip(&markers) {
        let (cx, cy) = scaler.scale(x, y);
        let _ = writeln!(
            svg,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" stroke="black" stroke-width="1"><title>{}</title></circle>"#,
            cx,
            cy,
            options.marker_radius,
            marker.color,
            escape(&marker.label)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write a model to an SVG file
pub fn write_svg(path: &Path, model: &RenderModel, options: &SvgOptions) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create SVG file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render_svg(model, options).as_bytes())?;
    writer.flush()?;

    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DirectionalVector, GeoPoint, Hole, PolygonPoint};
    use crate::scene::project;

    fn sample_model() -> RenderModel {
        let hole = Hole::new(
            5,
            vec![
                PolygonPoint::new("Green", GeoPoint::new(40.0, -75.0)),
                PolygonPoint::new("Green", GeoPoint::new(40.0005, -75.0)),
                PolygonPoint::new("Green", GeoPoint::new(40.0005, -74.9995)),
                PolygonPoint::new("Sand", GeoPoint::new(40.001, -75.001)),
            ],
            vec![
                DirectionalVector::new("White", GeoPoint::new(39.998, -75.0)),
                DirectionalVector::new("Flag", GeoPoint::new(40.0003, -74.9998)),
            ],
        );
        project(&hole, 1.5).unwrap()
    }

    #[test]
    fn test_render_contains_shapes() {
        let svg = render_svg(&sample_model(), &SvgOptions::default());

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polygon").count(), 2);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(r##"fill="#228B22""##));
        assert!(svg.contains(r##"fill="#FFD700""##));
        assert!(svg.contains("<title>Flag</title>"));
    }

    #[test]
    fn test_points_stay_on_canvas() {
        let options = SvgOptions::default();
        let svg = render_svg(&sample_model(), &options);

        for cap in svg.split("cx=\"").skip(1) {
            let x: f64 = cap.split('"').next().unwrap().parse().unwrap();
            assert!(x >= 0.0 && x <= options.width, "cx {} off canvas", x);
        }
    }

    #[test]
    fn test_rotation_puts_flag_above_tee() {
        let model = sample_model();
        let options = SvgOptions::default();
        let svg = render_svg(&model, &options);

        let cys: Vec<f64> = svg
            .split("cy=\"")
            .skip(1)
            .map(|s| s.split('"').next().unwrap().parse().unwrap())
            .collect();
        // Tee first, flag second; screen y grows downward
        assert!(cys[1] < cys[0]);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_write_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hole.svg");
        write_svg(&path, &sample_model(), &SvgOptions::default()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<polygon"));
    }
}
