use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cluster::Cluster;
use crate::consts::{DEFAULT_MIN_DELTA, DEFAULT_ZOOM_FACTOR};
use crate::error::Result;
use crate::geo::{Coordinate, GeoPoint};
use crate::services::{MapSurface, NavigationService};

use super::region::Region;

/// Identifies one programmatic region change. Ids increase monotonically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnimationId(pub u64);

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerState {
    Idle,
    Animating { animation: AnimationId, target: Region },
}

/// How far a cluster tap zooms in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomPolicy {
    /// Multiplier applied to both deltas, in (0, 1).
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f64,
    /// Deltas never shrink below this many degrees.
    #[serde(default = "default_min_delta")]
    pub min_delta: f64,
}

fn default_zoom_factor() -> f64 {
    DEFAULT_ZOOM_FACTOR
}
fn default_min_delta() -> f64 {
    DEFAULT_MIN_DELTA
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self {
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            min_delta: DEFAULT_MIN_DELTA,
        }
    }
}

impl ZoomPolicy {
    /// Next delta after one zoom step. Deltas at or below the floor are
    /// returned unchanged; a factor outside (0, 1) falls back to the default.
    pub fn narrow(&self, delta: f64) -> f64 {
        let factor = if self.zoom_factor > 0.0 && self.zoom_factor < 1.0 {
            self.zoom_factor
        } else {
            DEFAULT_ZOOM_FACTOR
        };
        if delta > self.min_delta {
            (delta * factor).max(self.min_delta)
        } else {
            delta
        }
    }
}

/// Single owner of the visible map region.
///
/// Programmatic changes (`focus_on`, `recenter`, cluster taps) move the
/// controller to `Animating` and ask the [`MapSurface`] to animate; the view
/// layer reports completion later. User pans arrive through
/// `on_region_change` and never touch the state.
pub struct ViewportController {
    region: Region,
    state: ControllerState,
    policy: ZoomPolicy,
    next_animation: u64,
}

impl ViewportController {
    pub fn new(initial: Region, policy: ZoomPolicy) -> Result<Self> {
        initial.validate()?;
        Ok(Self {
            region: initial,
            state: ControllerState::Idle,
            policy,
            next_animation: 1,
        })
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, ControllerState::Animating { .. })
    }

    pub fn policy(&self) -> &ZoomPolicy {
        &self.policy
    }

    /// Animate to `center` with the given spans. Supersedes any animation
    /// already in flight.
    pub fn focus_on(
        &mut self,
        center: Coordinate,
        latitude_delta: f64,
        longitude_delta: f64,
        map: &dyn MapSurface,
    ) -> Result<AnimationId> {
        let target = Region::new(center, latitude_delta, longitude_delta)?;
        Ok(self.start_animation(target, map))
    }

    pub fn recenter(&mut self, region: Region, map: &dyn MapSurface) -> Result<AnimationId> {
        region.validate()?;
        Ok(self.start_animation(region, map))
    }

    /// Zoom one step in around the cluster centroid.
    pub fn on_cluster_tap(&mut self, cluster: &Cluster, map: &dyn MapSurface) -> Result<AnimationId> {
        let latitude_delta = self.policy.narrow(self.region.latitude_delta);
        let longitude_delta = self.policy.narrow(self.region.longitude_delta);
        self.focus_on(cluster.centroid, latitude_delta, longitude_delta, map)
    }

    /// Hand the listing to navigation. The region is left untouched.
    pub fn on_marker_tap(&self, point: &GeoPoint, navigation: &dyn NavigationService) {
        navigation.navigate_to_listing(&point.id);
    }

    /// Passively observe a region reported by the map (user pan/zoom or an
    /// animation frame).
    pub fn on_region_change(&mut self, region: Region) -> Result<()> {
        region.validate()?;
        self.region = region;
        Ok(())
    }

    /// The view layer finished animating. Returns false when `animation` was
    /// superseded by a newer request; that signal is dropped.
    pub fn on_animation_complete(&mut self, animation: AnimationId) -> bool {
        match self.state {
            ControllerState::Animating { animation: current, .. } if current == animation => {
                self.state = ControllerState::Idle;
                true
            }
            _ => {
                debug!(%animation, "Ignoring completion of interrupted animation");
                false
            }
        }
    }

    fn start_animation(&mut self, target: Region, map: &dyn MapSurface) -> AnimationId {
        let animation = AnimationId(self.next_animation);
        self.next_animation += 1;

        if let ControllerState::Animating { animation: previous, .. } = self.state {
            debug!(%previous, %animation, "Superseding in-flight animation");
        }

        self.region = target;
        self.state = ControllerState::Animating { animation, target };
        map.animate_to_region(&target, animation);
        animation
    }
}
