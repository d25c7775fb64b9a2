use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, MERCATOR_MAX_LATITUDE};
use crate::geo::Coordinate;
use crate::viewport::Region;

/// Logical size of the map view in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

/// Web Mercator projection into screen pixels, relative to the region center.
///
/// The scale is chosen so that the region's longitude span covers the
/// screen width. Both axes are monotonic: x grows eastward, y grows southward.
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    scale: f64,
    origin: (f64, f64),
}

impl Projector {
    pub fn new(region: &Region, screen: &ScreenSize) -> Self {
        let scale = screen.width * 360.0 / region.longitude_delta;
        Self {
            scale,
            origin: mercator(region.center()),
        }
    }

    /// Pixels per unit of normalized Mercator world space.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn project(&self, coord: Coordinate) -> (f64, f64) {
        let (x, y) = mercator(coord);
        (
            (x - self.origin.0) * self.scale,
            (y - self.origin.1) * self.scale,
        )
    }
}

/// Normalized Mercator coordinates in [0, 1] x [0, 1].
fn mercator(coord: Coordinate) -> (f64, f64) {
    let lat = coord
        .latitude
        .clamp(-MERCATOR_MAX_LATITUDE, MERCATOR_MAX_LATITUDE)
        .to_radians();
    let x = (coord.longitude + 180.0) / 360.0;
    let y = (1.0 - (PI / 4.0 + lat / 2.0).tan().ln() / PI) / 2.0;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_projects_to_origin() {
        let region = Region::default();
        let p = Projector::new(&region, &ScreenSize::default());
        let (x, y) = p.project(region.center());
        assert!(x.abs() < 1e-9 && y.abs() < 1e-9);
    }

    #[test]
    fn longitude_span_covers_screen_width() {
        let region = Region::default();
        let screen = ScreenSize::default();
        let p = Projector::new(&region, &screen);
        let west = Coordinate::new(region.latitude, region.longitude - region.longitude_delta / 2.0);
        let east = Coordinate::new(region.latitude, region.longitude + region.longitude_delta / 2.0);
        let width = p.project(east).0 - p.project(west).0;
        assert!((width - screen.width).abs() < 1e-6);
    }

    #[test]
    fn north_is_up() {
        let p = Projector::new(&Region::default(), &ScreenSize::default());
        let north = p.project(Coordinate::new(60.0, 13.0)).1;
        let south = p.project(Coordinate::new(40.0, 13.0)).1;
        assert!(north < south);
    }
}
