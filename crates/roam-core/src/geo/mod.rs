pub mod normalize;
pub mod point;

pub use normalize::{normalize, normalize_all, NormalizeReport, RawListing, RawValue};
pub use point::{listing_route, Coordinate, GeoPoint};
