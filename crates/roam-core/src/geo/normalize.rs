use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, RoamError};

use super::point::GeoPoint;

/// A scalar field as it arrives from the listing source: either a JSON
/// number or a string that should hold one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(serde_json::Number),
    Text(String),
}

impl RawValue {
    /// Numeric value, if the field holds a finite number or a numeric string.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => n.as_f64()?,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Self::Number)
            .unwrap_or_else(|| Self::Text(value.to_string()))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// An untrusted listing record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub id: Option<RawValue>,
    #[serde(default)]
    pub latitude: Option<RawValue>,
    #[serde(default)]
    pub longitude: Option<RawValue>,
    #[serde(default)]
    pub price: Option<RawValue>,
}

/// Outcome of normalizing a batch of raw listings.
#[derive(Debug, Default)]
pub struct NormalizeReport {
    /// Accepted points, in input order.
    pub points: Vec<GeoPoint>,
    /// Rejected records as (input index, reason).
    pub rejected: Vec<(usize, RoamError)>,
}

/// Convert one raw listing into a [`GeoPoint`].
pub fn normalize(raw: &RawListing) -> Result<GeoPoint> {
    let id = match &raw.id {
        Some(RawValue::Text(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(RawValue::Number(n)) => n.to_string(),
        _ => return Err(RoamError::InvalidId),
    };

    let latitude = coordinate_field(&id, "latitude", raw.latitude.as_ref(), 90.0)?;
    let longitude = coordinate_field(&id, "longitude", raw.longitude.as_ref(), 180.0)?;

    let price = match raw.price.as_ref().and_then(RawValue::as_f64) {
        Some(p) if p >= 0.0 => p,
        _ => {
            return Err(RoamError::InvalidPrice {
                id,
                value: describe(raw.price.as_ref()),
            })
        }
    };

    Ok(GeoPoint {
        id,
        latitude,
        longitude,
        price,
    })
}

/// Normalize a batch, dropping invalid records and repeated ids.
///
/// The first occurrence of an id wins; later ones are rejected with
/// [`RoamError::DuplicateId`]. Every rejection is logged.
pub fn normalize_all<'a, I>(raws: I) -> NormalizeReport
where
    I: IntoIterator<Item = &'a RawListing>,
{
    let mut report = NormalizeReport::default();
    let mut seen = HashSet::new();

    for (index, raw) in raws.into_iter().enumerate() {
        let result = normalize(raw).and_then(|point| {
            if seen.insert(point.id.clone()) {
                Ok(point)
            } else {
                Err(RoamError::DuplicateId(point.id))
            }
        });

        match result {
            Ok(point) => report.points.push(point),
            Err(err) => {
                warn!(index, error = %err, "Dropping listing");
                report.rejected.push((index, err));
            }
        }
    }

    report
}

fn coordinate_field(
    id: &str,
    field: &'static str,
    value: Option<&RawValue>,
    limit: f64,
) -> Result<f64> {
    match value.and_then(RawValue::as_f64) {
        Some(v) if (-limit..=limit).contains(&v) => Ok(v),
        _ => Err(RoamError::InvalidCoordinate {
            id: id.to_string(),
            field,
            value: describe(value),
        }),
    }
}

fn describe(value: Option<&RawValue>) -> String {
    value.map_or_else(|| "missing".to_string(), |v| v.to_string())
}
