use serde::{Deserialize, Serialize};

use crate::consts::{INITIAL_DELTA, INITIAL_LATITUDE, INITIAL_LONGITUDE};
use crate::error::{Result, RoamError};
use crate::geo::Coordinate;

/// Visible map region: a center plus the latitude/longitude span in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            latitude: INITIAL_LATITUDE,
            longitude: INITIAL_LONGITUDE,
            latitude_delta: INITIAL_DELTA,
            longitude_delta: INITIAL_DELTA,
        }
    }
}

impl Region {
    /// Build a region, rejecting invalid centers and non-positive spans.
    pub fn new(center: Coordinate, latitude_delta: f64, longitude_delta: f64) -> Result<Self> {
        let region = Self {
            latitude: center.latitude,
            longitude: center.longitude,
            latitude_delta,
            longitude_delta,
        };
        region.validate()?;
        Ok(region)
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.center().is_valid() {
            return Err(RoamError::InvalidRegion(format!(
                "center ({}, {}) out of range",
                self.latitude, self.longitude
            )));
        }
        for (name, delta) in [
            ("latitude_delta", self.latitude_delta),
            ("longitude_delta", self.longitude_delta),
        ] {
            if !(delta.is_finite() && delta > 0.0) {
                return Err(RoamError::InvalidRegion(format!(
                    "{name} must be positive, got {delta}"
                )));
            }
        }
        Ok(())
    }

    /// True when the coordinate falls inside the visible span.
    pub fn contains(&self, coord: Coordinate) -> bool {
        (coord.latitude - self.latitude).abs() <= self.latitude_delta / 2.0
            && (coord.longitude - self.longitude).abs() <= self.longitude_delta / 2.0
    }
}
