use crate::cluster::Cluster;
use crate::geo::GeoPoint;
use crate::selection::SelectOutcome;
use crate::viewport::AnimationId;

/// A discrete user input on the explore screen.
#[derive(Clone, Debug, PartialEq)]
pub enum Interaction {
    ClusterTap(Cluster),
    MarkerTap(GeoPoint),
    ChipTap(usize),
}

impl Interaction {
    /// Whether this input is acknowledged with a haptic pulse.
    pub fn wants_feedback(&self) -> bool {
        matches!(self, Self::MarkerTap(_) | Self::ChipTap(_))
    }
}

/// What the routed call did.
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchOutcome {
    Zoomed(AnimationId),
    Navigated { id: String },
    Selected(SelectOutcome),
}
