//! Listing source: a GeoJSON-like feature collection whose features carry
//! the listing fields in `properties`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::geo::{normalize_all, NormalizeReport, RawListing};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListingCollection {
    #[serde(default)]
    pub features: Vec<ListingFeature>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListingFeature {
    #[serde(default)]
    pub properties: RawListing,
}

impl ListingCollection {
    pub fn raw_listings(&self) -> impl Iterator<Item = &RawListing> {
        self.features.iter().map(|f| &f.properties)
    }

    /// Normalize every feature, dropping the invalid ones.
    pub fn normalize(&self) -> NormalizeReport {
        let report = normalize_all(self.raw_listings());
        info!(
            accepted = report.points.len(),
            rejected = report.rejected.len(),
            "Listings normalized"
        );
        report
    }
}

/// Parse a feature collection from a JSON string.
pub fn parse_listings(json: &str) -> Result<ListingCollection> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a feature collection from disk.
pub fn load_listings(path: &Path) -> Result<ListingCollection> {
    let contents = std::fs::read_to_string(path)?;
    parse_listings(&contents)
}
