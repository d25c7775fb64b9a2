use serde::{Deserialize, Serialize};

use crate::consts::{CLUSTER_KEY_PREFIX, DEFAULT_MIN_POINTS, DEFAULT_PIXEL_RADIUS};
use crate::geo::{Coordinate, GeoPoint};

use super::projection::ScreenSize;

/// Parameters of a clustering pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterParams {
    /// Merge distance in screen pixels. Non-positive disables merging.
    #[serde(default = "default_pixel_radius")]
    pub pixel_radius: f64,
    /// Smallest group emitted as a cluster; smaller groups become leaves.
    #[serde(default = "default_min_points")]
    pub min_points: usize,
    #[serde(default)]
    pub screen: ScreenSize,
}

fn default_pixel_radius() -> f64 {
    DEFAULT_PIXEL_RADIUS
}
fn default_min_points() -> usize {
    DEFAULT_MIN_POINTS
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            pixel_radius: DEFAULT_PIXEL_RADIUS,
            min_points: DEFAULT_MIN_POINTS,
            screen: ScreenSize::default(),
        }
    }
}

/// Two or more nearby listings aggregated for the current pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Id of the first member in input order.
    pub id: String,
    /// Arithmetic mean of member coordinates.
    pub centroid: Coordinate,
    pub point_count: usize,
    /// Members in input order.
    pub members: Vec<GeoPoint>,
}

impl Cluster {
    pub(super) fn from_members(members: Vec<GeoPoint>) -> Self {
        let n = members.len() as f64;
        let (lat_sum, lon_sum) = members
            .iter()
            .fold((0.0, 0.0), |(la, lo), p| (la + p.latitude, lo + p.longitude));
        Self {
            id: members[0].id.clone(),
            centroid: Coordinate::new(lat_sum / n, lon_sum / n),
            point_count: members.len(),
            members,
        }
    }

    pub fn member_ids(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|p| p.id.as_str())
    }
}

/// A renderable map marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Marker {
    Leaf(GeoPoint),
    Cluster(Cluster),
}

impl Marker {
    /// Render key: the listing id for leaves, `cluster-{id}` for clusters.
    pub fn key(&self) -> String {
        match self {
            Self::Leaf(p) => p.id.clone(),
            Self::Cluster(c) => format!("{CLUSTER_KEY_PREFIX}{}", c.id),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        match self {
            Self::Leaf(p) => p.coordinate(),
            Self::Cluster(c) => c.centroid,
        }
    }

    /// Text drawn inside the marker bubble.
    pub fn label(&self) -> String {
        match self {
            Self::Leaf(p) => p.price_label(),
            Self::Cluster(c) => c.point_count.to_string(),
        }
    }

    pub fn point_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Cluster(c) => c.point_count,
        }
    }

    pub fn member_ids(&self) -> Vec<&str> {
        match self {
            Self::Leaf(p) => vec![p.id.as_str()],
            Self::Cluster(c) => c.member_ids().collect(),
        }
    }

    pub fn is_cluster(&self) -> bool {
        matches!(self, Self::Cluster(_))
    }
}
