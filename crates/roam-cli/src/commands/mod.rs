pub mod cluster;
pub mod config;
pub mod info;
pub mod replay;

use std::path::Path;

use anyhow::{Context, Result};
use roam_core::config::MapConfig;
use roam_core::geo::NormalizeReport;
use roam_core::listing::load_listings;

/// Read a TOML map config, or fall back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<MapConfig> {
    let Some(path) = path else {
        return Ok(MapConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid map config")
}

/// Load and normalize a listing feature collection.
pub fn load_points(path: &Path) -> Result<NormalizeReport> {
    let collection = load_listings(path)
        .with_context(|| format!("Failed to load listings from {}", path.display()))?;
    Ok(collection.normalize())
}
