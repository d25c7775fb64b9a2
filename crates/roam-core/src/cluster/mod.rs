mod engine;
mod grid;
pub mod projection;
mod types;
mod union_find;

pub use engine::{cluster, cluster_with_radius};
pub use projection::{Projector, ScreenSize};
pub use types::{Cluster, ClusterParams, Marker};
