//! DishaNav - Heading advisor for depth-guided wayfinding
//!
//! Acquires a depth map from the configured source (a file standing in for
//! a live depth model, or a synthetic scene), estimates the most open
//! direction of travel, and reports it. Optionally writes an SVG audit
//! file showing the point cloud, the slice scores, and the advised ray.

mod config;
mod error;
mod guidance;
mod source;

use clap::Parser;
use config::DishaConfig;
use error::Result;
use guidance::{AdviceOrigin, Guidance};
use source::create_source;

use disha_vision::{depth_to_cloud, SvgConfig, SvgVisualizer};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "disha-nav", about = "Depth-guided heading advisor")]
struct Args {
    /// Configuration file (default: disha.toml if present)
    config: Option<PathBuf>,

    /// Depth input file, overrides the configured source
    #[arg(long)]
    input: Option<PathBuf>,

    /// SVG audit output path, overrides the configured one
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("disha_nav=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            DishaConfig::load(path)?
        }
        None if Path::new("disha.toml").exists() => {
            info!("Loading configuration from disha.toml");
            DishaConfig::load(Path::new("disha.toml"))?
        }
        None => {
            info!("Using default configuration");
            DishaConfig::default()
        }
    };

    if let Some(input) = &args.input {
        config.source.kind = config::SourceKind::File;
        config.source.path = Some(input.display().to_string());
    }
    if let Some(svg) = &args.svg {
        config.output.svg_path = svg.display().to_string();
    }

    info!("DishaNav v{}", env!("CARGO_PKG_VERSION"));

    let source = create_source(&config.source)?;
    info!("Depth source: {}", source.name());

    let mut guidance = Guidance::new(source);
    let advice = guidance.advise()?;

    match advice.origin {
        AdviceOrigin::Estimated => {
            info!("Advised heading: {:.1}° (estimated)", advice.angle_deg);
        }
        AdviceOrigin::EmptySelection => {
            warn!(
                "No qualifying slice; advising default heading {:.1}°",
                advice.angle_deg
            );
        }
        AdviceOrigin::UpstreamFallback => {
            warn!(
                "Depth source failed; advising default heading {:.1}°",
                advice.angle_deg
            );
        }
    }

    if !config.output.svg_path.is_empty() {
        if let (Some(depth), Some(estimate)) = (&advice.depth, &advice.estimate) {
            save_audit_svg(&config.output.svg_path, depth, estimate)?;
        }
    }

    Ok(())
}

/// Save the SVG audit file for one estimation.
fn save_audit_svg(
    svg_path: &str,
    depth: &disha_vision::DepthMap,
    estimate: &disha_vision::DirectionEstimate,
) -> Result<()> {
    let path = Path::new(svg_path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let cloud = depth_to_cloud(depth);
    let title = format!(
        "Disha heading {:.1}° ({}x{} depth map)",
        estimate.angle_deg,
        depth.height(),
        depth.width()
    );

    SvgVisualizer::new(cloud, estimate.clone(), SvgConfig::default())
        .with_title(title)
        .save(path)?;
    info!("SVG saved to {:?}", path);
    Ok(())
}
