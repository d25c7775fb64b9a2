/// Minimum point count to project coordinates with Rayon parallelism.
pub const PARALLEL_POINT_THRESHOLD: usize = 2_048;

/// Default merge radius in screen pixels.
pub const DEFAULT_PIXEL_RADIUS: f64 = 40.0;

/// Default minimum group size emitted as a cluster rather than as leaves.
pub const DEFAULT_MIN_POINTS: usize = 2;

/// Default logical screen width in pixels used for projection.
pub const DEFAULT_SCREEN_WIDTH: f64 = 390.0;

/// Default logical screen height in pixels used for projection.
pub const DEFAULT_SCREEN_HEIGHT: f64 = 844.0;

/// Latitude limit of the Web Mercator projection, in degrees.
pub const MERCATOR_MAX_LATITUDE: f64 = 85.051_128_78;

/// Initial map center latitude (Berlin).
pub const INITIAL_LATITUDE: f64 = 52.52;

/// Initial map center longitude (Berlin).
pub const INITIAL_LONGITUDE: f64 = 13.405;

/// Initial latitude/longitude span in degrees.
pub const INITIAL_DELTA: f64 = 9.0;

/// Factor applied to both deltas when a cluster is tapped.
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.5;

/// Smallest delta (degrees) a cluster tap may zoom to.
pub const DEFAULT_MIN_DELTA: f64 = 0.0005;

/// Horizontal padding subtracted from a chip offset when scrolling to it.
pub const DEFAULT_LEADING_MARGIN: f64 = 16.0;

/// Currency symbol prefixed to leaf marker prices.
pub const PRICE_CURRENCY_SYMBOL: &str = "\u{20ac}";

/// Prefix of synthesized cluster marker keys.
pub const CLUSTER_KEY_PREFIX: &str = "cluster-";

/// Route prefix used when navigating to a listing.
pub const LISTING_ROUTE_PREFIX: &str = "/listing/";
