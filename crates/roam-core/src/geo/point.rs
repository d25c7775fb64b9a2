use serde::{Deserialize, Serialize};

use crate::consts::{LISTING_ROUTE_PREFIX, PRICE_CURRENCY_SYMBOL};

/// A latitude/longitude pair in signed degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both components are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A sanitized listing location, ready for clustering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
}

impl GeoPoint {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Price label shown on a leaf marker, e.g. `€ 120`.
    pub fn price_label(&self) -> String {
        format!("{} {}", PRICE_CURRENCY_SYMBOL, format_price(self.price))
    }
}

/// Navigation route for a listing detail screen.
pub fn listing_route(id: &str) -> String {
    format!("{LISTING_ROUTE_PREFIX}{id}")
}

/// Whole prices print without a fractional part; others keep up to two decimals.
fn format_price(price: f64) -> String {
    let s = format!("{:.2}", price);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
