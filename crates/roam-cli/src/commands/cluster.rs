use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use roam_core::cluster::cluster;
use roam_core::geo::Coordinate;
use roam_core::viewport::Region;

use super::{load_config, load_points};
use crate::summary::{print_markers, print_region};

#[derive(Args)]
pub struct ClusterArgs {
    /// Listings file (GeoJSON-like feature collection)
    pub file: PathBuf,

    /// Map config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Region center latitude (defaults to the configured initial region)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Region center longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Visible latitude span in degrees
    #[arg(long)]
    pub lat_delta: Option<f64>,

    /// Visible longitude span in degrees
    #[arg(long)]
    pub lon_delta: Option<f64>,

    /// Merge radius in pixels
    #[arg(long)]
    pub radius: Option<f64>,

    /// Print markers as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ClusterArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(radius) = args.radius {
        config.clustering.pixel_radius = radius;
    }

    let initial = config.viewport.initial_region;
    let region = Region::new(
        Coordinate::new(
            args.lat.unwrap_or(initial.latitude),
            args.lon.unwrap_or(initial.longitude),
        ),
        args.lat_delta.unwrap_or(initial.latitude_delta),
        args.lon_delta.unwrap_or(initial.longitude_delta),
    )
    .context("Invalid region")?;

    let report = load_points(&args.file)?;
    let markers = cluster(&report.points, &region, &config.clustering);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&markers)?);
        return Ok(());
    }

    print_region(&region, config.clustering.pixel_radius);
    print_markers(&markers, report.points.len(), report.rejected.len());
    let visible = markers
        .iter()
        .filter(|m| region.contains(m.coordinate()))
        .count();
    println!("  {} of {} markers inside the region", visible, markers.len());
    Ok(())
}
