use tracing::debug;

use crate::error::Result;
use crate::selection::SelectionSynchronizer;
use crate::services::{
    FeedbackService, FeedbackStyle, MapSurface, NavigationService, SelectionSink,
};
use crate::viewport::ViewportController;

use super::events::{DispatchOutcome, Interaction};

/// The external services a dispatched interaction may reach.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub navigation: &'a dyn NavigationService,
    pub feedback: &'a dyn FeedbackService,
    pub map: &'a dyn MapSurface,
    pub selection: &'a dyn SelectionSink,
}

impl<'a> Collaborators<'a> {
    /// Use one object for every collaborator.
    pub fn all<S>(services: &'a S) -> Self
    where
        S: NavigationService + FeedbackService + MapSurface + SelectionSink,
    {
        Self {
            navigation: services,
            feedback: services,
            map: services,
            selection: services,
        }
    }
}

/// Routes each input to exactly one handler.
#[derive(Clone, Debug, Default)]
pub struct InteractionDispatcher {
    feedback_style: FeedbackStyle,
}

impl InteractionDispatcher {
    pub fn new(feedback_style: FeedbackStyle) -> Self {
        Self { feedback_style }
    }

    /// Route `interaction`, then pulse feedback for marker and chip taps.
    ///
    /// The pulse is only attempted after the routed call succeeded, and a
    /// failing pulse is logged and dropped.
    pub fn dispatch(
        &self,
        interaction: &Interaction,
        viewport: &mut ViewportController,
        selection: &mut SelectionSynchronizer,
        collaborators: Collaborators<'_>,
    ) -> Result<DispatchOutcome> {
        let outcome = match interaction {
            Interaction::ClusterTap(cluster) => {
                DispatchOutcome::Zoomed(viewport.on_cluster_tap(cluster, collaborators.map)?)
            }
            Interaction::MarkerTap(point) => {
                viewport.on_marker_tap(point, collaborators.navigation);
                DispatchOutcome::Navigated {
                    id: point.id.clone(),
                }
            }
            Interaction::ChipTap(index) => {
                DispatchOutcome::Selected(selection.select(*index, collaborators.selection)?)
            }
        };

        if interaction.wants_feedback() {
            if let Err(err) = collaborators.feedback.pulse(self.feedback_style) {
                debug!(error = %err, "Feedback pulse failed");
            }
        }

        Ok(outcome)
    }
}
