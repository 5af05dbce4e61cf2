use serde::Deserialize;
use std::path::PathBuf;

use crate::geometry::{ADJACENCY_THRESHOLD, DEFAULT_PADDING, FRAGMENTING_SURFACES, GroupingRules};
use crate::render::SvgOptions;
use crate::scene::{CameraDefaults, ProjectionOptions};

/// What the CLI writes for each projected hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Svg => "svg",
        }
    }
}

fn default_aspect_ratio() -> f64 {
    16.0 / 9.0
}
fn default_padding() -> f64 {
    DEFAULT_PADDING
}
fn default_adjacency_threshold() -> f64 {
    ADJACENCY_THRESHOLD
}
fn default_fragmenting_surfaces() -> Vec<String> {
    FRAGMENTING_SURFACES.iter().map(|s| s.to_string()).collect()
}
fn default_format() -> OutputFormat {
    OutputFormat::Json
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Viewport height divided by width
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_adjacency_threshold")]
    pub adjacency_threshold: f64,
    #[serde(default = "default_fragmenting_surfaces")]
    pub fragmenting_surfaces: Vec<String>,
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub camera: Option<CameraConfig>,
    #[serde(default)]
    pub svg: Option<SvgConfig>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: default_aspect_ratio(),
            padding: default_padding(),
            adjacency_threshold: default_adjacency_threshold(),
            fragmenting_surfaces: default_fragmenting_surfaces(),
            format: default_format(),
            output: None,
            verbose: default_verbose(),
            camera: None,
            svg: None,
        }
    }
}

fn default_pitch() -> f64 {
    0.0
}
fn default_altitude() -> f64 {
    1200.0
}
fn default_zoom() -> f64 {
    15.0
}

#[derive(Debug, Deserialize, Clone)]
pub struct CameraConfig {
    #[serde(default = "default_pitch")]
    pub pitch: f64,
    #[serde(default = "default_altitude")]
    pub altitude: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

fn default_svg_width() -> f64 {
    800.0
}
fn default_svg_height() -> f64 {
    1200.0
}
fn default_svg_margin() -> f64 {
    20.0
}
fn default_marker_radius() -> f64 {
    5.0
}
fn default_rotate() -> bool {
    true
}
fn default_background() -> String {
    "lightgrey".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SvgConfig {
    #[serde(default = "default_svg_width")]
    pub width: f64,
    #[serde(default = "default_svg_height")]
    pub height: f64,
    #[serde(default = "default_svg_margin")]
    pub margin: f64,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default = "default_rotate")]
    pub rotate: bool,
    #[serde(default = "default_background")]
    pub background: String,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        Self::load_from(&get_config_paths())
    }

    /// First config in `paths` that exists and parses. Unparseable files
    /// are reported and skipped.
    pub fn load_from(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    pub fn projection_options(&self) -> ProjectionOptions {
        let camera = self
            .camera
            .as_ref()
            .map(|c| CameraDefaults {
                pitch: c.pitch,
                altitude: c.altitude,
                zoom: c.zoom,
            })
            .unwrap_or_default();

        ProjectionOptions {
            padding: self.padding,
            grouping: GroupingRules {
                adjacency_threshold: self.adjacency_threshold,
                fragmenting_surfaces: self.fragmenting_surfaces.clone(),
            },
            camera,
        }
    }

    pub fn svg_options(&self) -> SvgOptions {
        match &self.svg {
            Some(c) => SvgOptions {
                width: c.width,
                height: c.height,
                margin: c.margin,
                marker_radius: c.marker_radius,
                rotate: c.rotate,
                background: c.background.clone(),
            },
            None => SvgOptions::default(),
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("holemap.toml"));
    paths.push(PathBuf::from(".holemap.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("holemap").join("config.toml"));
        paths.push(config_dir.join("holemap.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".holemap.toml"));
        paths.push(home.join(".config").join("holemap").join("config.toml"));
    }

    paths
}
