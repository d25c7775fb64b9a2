#![allow(dead_code)]

use roam_core::cluster::Cluster;
use roam_core::geo::{Coordinate, GeoPoint};
use roam_core::viewport::Region;

pub fn point(id: &str, latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint {
        id: id.to_string(),
        latitude,
        longitude,
        price: 100.0,
    }
}

/// Five listings within ~0.001 degrees of the default map center.
pub fn packed_points() -> Vec<GeoPoint> {
    vec![
        point("p0", 52.520, 13.405),
        point("p1", 52.520, 13.406),
        point("p2", 52.521, 13.405),
        point("p3", 52.521, 13.406),
        point("p4", 52.5205, 13.4055),
    ]
}

/// `rows * cols` listings on a regular lat/lon lattice.
pub fn lattice(rows: usize, cols: usize, origin: Coordinate, step: f64) -> Vec<GeoPoint> {
    let mut points = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            points.push(point(
                &format!("g{r}-{c}"),
                origin.latitude + r as f64 * step,
                origin.longitude + c as f64 * step,
            ));
        }
    }
    points
}

pub fn region(latitude: f64, longitude: f64, delta: f64) -> Region {
    Region {
        latitude,
        longitude,
        latitude_delta: delta,
        longitude_delta: delta,
    }
}

pub fn cluster_of(points: Vec<GeoPoint>) -> Cluster {
    let n = points.len() as f64;
    let latitude = points.iter().map(|p| p.latitude).sum::<f64>() / n;
    let longitude = points.iter().map(|p| p.longitude).sum::<f64>() / n;
    Cluster {
        id: points[0].id.clone(),
        centroid: Coordinate::new(latitude, longitude),
        point_count: points.len(),
        members: points,
    }
}
