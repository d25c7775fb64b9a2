use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::load_points;

#[derive(Args)]
pub struct InfoArgs {
    /// Listings file (GeoJSON-like feature collection)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let report = load_points(&args.file)?;
    let points = &report.points;

    println!("File:        {}", args.file.display());
    println!("Listings:    {}", points.len());
    println!("Rejected:    {}", report.rejected.len());

    if !points.is_empty() {
        let (mut min_lat, mut max_lat) = (f64::MAX, f64::MIN);
        let (mut min_lon, mut max_lon) = (f64::MAX, f64::MIN);
        let (mut min_price, mut max_price) = (f64::MAX, f64::MIN);
        for p in points {
            min_lat = min_lat.min(p.latitude);
            max_lat = max_lat.max(p.latitude);
            min_lon = min_lon.min(p.longitude);
            max_lon = max_lon.max(p.longitude);
            min_price = min_price.min(p.price);
            max_price = max_price.max(p.price);
        }
        println!("Latitude:    {:.5} .. {:.5}", min_lat, max_lat);
        println!("Longitude:   {:.5} .. {:.5}", min_lon, max_lon);
        println!("Price:       {} .. {}", min_price, max_price);
    }

    for (index, err) in &report.rejected {
        println!("  #{:<6} {}", index, err);
    }

    Ok(())
}
