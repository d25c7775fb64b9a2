use std::f64::consts::SQRT_2;

use rayon::prelude::*;
use tracing::debug;

use crate::consts::PARALLEL_POINT_THRESHOLD;
use crate::geo::GeoPoint;
use crate::viewport::Region;

use super::grid::SpatialGrid;
use super::projection::Projector;
use super::types::{Cluster, ClusterParams, Marker};
use super::union_find::DisjointSet;

/// Cell offsets checked against each occupied cell. With a cell side of
/// `radius / sqrt(2)`, points up to two cells apart can still be within
/// `radius`. Only the forward half of the 5x5 block is listed so each
/// cell pair is visited once.
const NEIGHBOR_OFFSETS: [(i64, i64); 12] = [
    (0, 1),
    (0, 2),
    (1, -2),
    (1, -1),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, -2),
    (2, -1),
    (2, 0),
    (2, 1),
    (2, 2),
];

/// Cluster with default parameters except for the merge radius.
pub fn cluster_with_radius(points: &[GeoPoint], region: &Region, pixel_radius: f64) -> Vec<Marker> {
    let params = ClusterParams {
        pixel_radius,
        ..Default::default()
    };
    cluster(points, region, &params)
}

/// Group points whose projected distance is within `params.pixel_radius`,
/// transitively.
///
/// Output order follows the first input index of each group, and members
/// keep input order, so identical inputs always produce identical output.
/// Every input point appears in exactly one marker.
pub fn cluster(points: &[GeoPoint], region: &Region, params: &ClusterParams) -> Vec<Marker> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    let projector = Projector::new(region, &params.screen);
    let projected: Vec<(f64, f64)> = if n >= PARALLEL_POINT_THRESHOLD {
        points
            .par_iter()
            .map(|p| projector.project(p.coordinate()))
            .collect()
    } else {
        points
            .iter()
            .map(|p| projector.project(p.coordinate()))
            .collect()
    };

    let mut sets = DisjointSet::new(n);
    let radius = params.pixel_radius;
    if radius.is_finite() && radius > 0.0 && projector.scale().is_finite() {
        merge_within_radius(&projected, radius, &mut sets);
    }

    // Groups in order of their smallest index (which is also the set root).
    let mut group_of_root: Vec<Option<usize>> = vec![None; n];
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for i in 0..n {
        let root = sets.find(i);
        match group_of_root[root] {
            Some(g) => groups[g].push(i),
            None => {
                group_of_root[root] = Some(groups.len());
                groups.push(vec![i]);
            }
        }
    }

    let min_points = params.min_points.max(2);
    let mut markers = Vec::with_capacity(groups.len());
    for group in groups {
        if group.len() >= min_points {
            let members = group.iter().map(|&i| points[i].clone()).collect();
            markers.push(Marker::Cluster(Cluster::from_members(members)));
        } else {
            markers.extend(group.iter().map(|&i| Marker::Leaf(points[i].clone())));
        }
    }

    debug!(
        points = n,
        markers = markers.len(),
        radius,
        "Cluster pass complete"
    );
    markers
}

fn merge_within_radius(projected: &[(f64, f64)], radius: f64, sets: &mut DisjointSet) {
    let grid = SpatialGrid::build(projected, radius / SQRT_2);
    let radius_sq = radius * radius;

    for (key, members) in grid.sorted_cells() {
        // A cell's diagonal equals the radius, so its points all merge.
        for &m in &members[1..] {
            sets.union(members[0], m);
        }

        for (dx, dy) in NEIGHBOR_OFFSETS {
            let Some(other) = grid.get((key.0 + dx, key.1 + dy)) else {
                continue;
            };
            if sets.same(members[0], other[0]) {
                continue;
            }
            // One close pair joins the two cells; the rest are redundant.
            // Dense neighbouring cells with no close pair cost |A| * |B| here,
            // which stays cheap for the listing counts a map screen holds.
            'pairs: for &a in members {
                for &b in other {
                    if distance_sq(projected[a], projected[b]) <= radius_sq {
                        sets.union(a, b);
                        break 'pairs;
                    }
                }
            }
        }
    }

    // Points too far out to bucket get an exact check against every point.
    for &a in grid.outliers() {
        for b in 0..projected.len() {
            if a != b && !sets.same(a, b) && distance_sq(projected[a], projected[b]) <= radius_sq {
                sets.union(a, b);
            }
        }
    }
}

fn distance_sq(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy
}
