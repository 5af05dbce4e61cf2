use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use holemap::HoleMapError;
use holemap::api::load_hole_data;
use holemap::config::{FileConfig, OutputFormat};
use holemap::parser::{count_skipped, parse_hole};
use holemap::render::{SvgOptions, write_svg};
use holemap::scene::{ProjectionOptions, RenderModel, project_with};

/// Project golf hole geometry into renderable map scenes
///
/// Examples:
///   # Write hole_12.map.json next to the input
///   holemap hole_12.json
///
///   # Render a whole course to SVG in one directory
///   holemap --format svg -o course/ holes/*.json
///
///   # Tall phone viewport, tighter framing
///   holemap --aspect-ratio 2.16 --padding 1.05 hole_3.json -o hole_3.map.json
#[derive(Parser, Debug)]
#[command(name = "holemap")]
#[command(version, about, long_about = None)]
struct Args {
    /// Hole JSON files as served by the hole endpoint
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Path to config file (optional, auto-searches holemap.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport height divided by width
    #[arg(short = 'a', long)]
    aspect_ratio: Option<f64>,

    /// Span multiplier around the hole's bounding box
    #[arg(short = 'p', long)]
    padding: Option<f64>,

    /// Output format
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Output file (single input) or directory (several inputs)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

struct RunSettings {
    aspect_ratio: f64,
    format: OutputFormat,
    projection: ProjectionOptions,
    svg: SvgOptions,
    verbose: bool,
}

enum Outcome {
    Written(PathBuf),
    NoContent(i64),
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config: FileConfig = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let mut projection = file_config.projection_options();
    if let Some(padding) = args.padding {
        projection.padding = padding;
    }
    let settings = RunSettings {
        aspect_ratio: args.aspect_ratio.unwrap_or(file_config.aspect_ratio),
        format: args.format.unwrap_or(file_config.format),
        projection,
        svg: file_config.svg_options(),
        verbose: args.verbose || file_config.verbose,
    };
    let output = args.output.clone().or(file_config.output.clone());

    validate_settings(&settings)?;

    if settings.verbose {
        println!("Configuration:");
        println!("  Aspect ratio: {:.3}", settings.aspect_ratio);
        println!("  Padding: {}", settings.projection.padding);
        println!(
            "  Adjacency threshold: {}",
            settings.projection.grouping.adjacency_threshold
        );
        println!(
            "  Fragmenting surfaces: {}",
            settings.projection.grouping.fragmenting_surfaces.join(", ")
        );
        println!("  Format: {:?}", settings.format);
        println!();
    }

    let batch = args.files.len() > 1;
    let targets = plan_outputs(&args.files, output.as_deref(), batch, settings.format)?;
    if batch && let Some(ref dir) = output {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let progress = if batch {
        Some(create_progress_bar(args.files.len() as u64))
    } else {
        None
    };

    let mut written = 0;
    let mut skipped = 0;
    for (input, target) in args.files.iter().zip(&targets) {
        let outcome = process_file(input, target, &settings)
            .with_context(|| format!("Failed to process {}", input.display()))?;

        let line = match outcome {
            Outcome::Written(path) => {
                written += 1;
                format!("{} -> {}", input.display(), path.display())
            }
            Outcome::NoContent(id) => {
                skipped += 1;
                format!("Hole {} has no renderable content, skipped", id)
            }
        };

        match progress {
            Some(ref pb) => {
                if settings.verbose {
                    pb.println(line);
                }
                pb.inc(1);
            }
            None => println!("{}", line),
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }

    println!();
    println!(
        "Done! {} written, {} skipped [{:.1}ms]",
        written,
        skipped,
        total_start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}

fn validate_settings(settings: &RunSettings) -> Result<()> {
    if !settings.aspect_ratio.is_finite() || settings.aspect_ratio <= 0.0 {
        bail!("--aspect-ratio must be a positive number");
    }
    if !settings.projection.padding.is_finite() || settings.projection.padding < 0.0 {
        bail!("--padding must be a non-negative number");
    }
    let threshold = settings.projection.grouping.adjacency_threshold;
    if !threshold.is_finite() || threshold <= 0.0 {
        bail!(
            "adjacency_threshold must be a positive number, got {}",
            threshold
        );
    }
    Ok(())
}

fn process_file(input: &Path, target: &Path, settings: &RunSettings) -> Result<Outcome> {
    let record = load_hole_data(input)?;

    let dropped = count_skipped(&record);
    if dropped > 0 {
        eprintln!(
            "Warning: {}: ignored {} rows without coordinates",
            input.display(),
            dropped
        );
    }

    let hole = parse_hole(&record);
    let model = match project_with(&hole, settings.aspect_ratio, &settings.projection) {
        Ok(model) => model,
        Err(HoleMapError::NoContent) => return Ok(Outcome::NoContent(hole.id)),
        Err(e) => return Err(e.into()),
    };

    if settings.verbose {
        print_summary(&model);
    }

    match settings.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&model)
                .context("Failed to serialize render model")?;
            std::fs::write(target, json + "\n")
                .with_context(|| format!("Failed to write {}", target.display()))?;
        }
        OutputFormat::Svg => write_svg(target, &model, &settings.svg)?,
    }

    Ok(Outcome::Written(target.to_path_buf()))
}

/// Pick where a hole's output goes.
///
/// Without `--output` the file lands next to its input as
/// `<stem>.map.json` / `<stem>.svg`, never on top of the input itself.
fn output_path(
    input: &Path,
    output: Option<&Path>,
    batch: bool,
    format: OutputFormat,
) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hole".to_string());
    let file_name = match format {
        OutputFormat::Json => format!("{}.map.json", stem),
        OutputFormat::Svg => format!("{}.{}", stem, format.extension()),
    };

    match output {
        Some(dir) if batch => dir.join(file_name),
        Some(file) => file.to_path_buf(),
        None => input.with_file_name(file_name),
    }
}

/// Output path for every input, refusing to let two inputs share one.
fn plan_outputs(
    files: &[PathBuf],
    output: Option<&Path>,
    batch: bool,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    let mut targets = Vec::with_capacity(files.len());

    for input in files {
        let target = output_path(input, output, batch, format);
        if let Some(previous) = seen.insert(target.clone(), input.as_path()) {
            bail!(
                "{} and {} would both be written to {}",
                previous.display(),
                input.display(),
                target.display()
            );
        }
        targets.push(target);
    }

    Ok(targets)
}

fn print_summary(model: &RenderModel) {
    println!("Hole {}:", model.hole_id);
    println!("  Rings: {}", model.rings.len());
    println!("  Markers: {}", model.markers.len());
    println!("  Heading: {:.2}°", model.camera.heading);
    println!(
        "  Viewport: ({:.6}, {:.6}) span {:.6} x {:.6}",
        model.viewport.center.latitude,
        model.viewport.center.longitude,
        model.viewport.lat_span,
        model.viewport.lon_span
    );
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let template = "{spinner:.green} [{bar:30.green}] {pos}/{len} holes {msg}";
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(template)
            .unwrap()
            .progress_chars("=> "),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> RunSettings {
        RunSettings {
            aspect_ratio: 1.0,
            format: OutputFormat::Json,
            projection: ProjectionOptions::default(),
            svg: SvgOptions::default(),
            verbose: false,
        }
    }

    #[test]
    fn test_output_path_defaults_next_to_input() {
        let input = Path::new("data/hole_3.json");

        let path = output_path(input, None, false, OutputFormat::Json);
        assert_eq!(path, PathBuf::from("data/hole_3.map.json"));

        let path = output_path(input, None, true, OutputFormat::Svg);
        assert_eq!(path, PathBuf::from("data/hole_3.svg"));
    }

    #[test]
    fn test_plan_outputs_rejects_shared_target() {
        let files = vec![PathBuf::from("a/1.json"), PathBuf::from("b/1.json")];

        let err = plan_outputs(&files, Some(Path::new("out")), true, OutputFormat::Svg)
            .unwrap_err()
            .to_string();
        assert!(err.contains("out/1.svg"), "unexpected error: {}", err);

        // Next to their inputs the same stems do not clash
        let targets = plan_outputs(&files, None, true, OutputFormat::Svg).unwrap();
        assert_eq!(
            targets,
            vec![PathBuf::from("a/1.svg"), PathBuf::from("b/1.svg")]
        );
    }

    #[test]
    fn test_validate_settings_adjacency_threshold() {
        assert!(validate_settings(&test_settings()).is_ok());

        for bad in [0.0, -0.00008, f64::NAN, f64::INFINITY] {
            let mut settings = test_settings();
            settings.projection.grouping.adjacency_threshold = bad;
            assert!(validate_settings(&settings).is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn test_validate_settings_padding_and_aspect() {
        let mut settings = test_settings();
        settings.projection.padding = -1.0;
        assert!(validate_settings(&settings).is_err());

        let mut settings = test_settings();
        settings.aspect_ratio = 0.0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_output_path_explicit() {
        let single = output_path(
            Path::new("hole.json"),
            Some(Path::new("out.svg")),
            false,
            OutputFormat::Svg,
        );
        assert_eq!(single, PathBuf::from("out.svg"));

        let batch = output_path(
            Path::new("holes/7.json"),
            Some(Path::new("out")),
            true,
            OutputFormat::Json,
        );
        assert_eq!(batch, PathBuf::from("out/7.map.json"));
    }

    #[test]
    fn test_process_file_skips_empty_hole() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.json");
        std::fs::write(&input, r#"{"hole": {"id": 1, "hole_id": 9}}"#).unwrap();

        let settings = test_settings();
        let target = dir.path().join("empty.map.json");
        match process_file(&input, &target, &settings).unwrap() {
            Outcome::NoContent(id) => assert_eq!(id, 9),
            Outcome::Written(_) => panic!("empty hole should not be written"),
        }
        assert!(!target.exists());
    }

    #[test]
    fn test_process_file_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("hole.json");
        std::fs::write(
            &input,
            r#"{"hole": {"id": 1, "hole_id": 9},
                "polygons": [{"id": 1, "surface_type": "Green", "lat": 1.0, "long": 1.0}],
                "vectors": [{"id": 1, "vector_type": "Flag", "lat": 1.0, "long": 1.0}]}"#,
        )
        .unwrap();

        let settings = test_settings();
        let target = dir.path().join("hole.map.json");
        assert!(matches!(
            process_file(&input, &target, &settings).unwrap(),
            Outcome::Written(_)
        ));

        let contents = std::fs::read_to_string(&target).unwrap();
        let written: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(written["hole_id"], 9);
        assert_eq!(written["rings"][0]["color"], "#228B22");
        assert_eq!(written["markers"][0]["label"], "Flag");
    }
}
