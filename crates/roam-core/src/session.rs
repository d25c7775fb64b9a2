use std::sync::Arc;

use tracing::{debug, info};

use crate::cluster::{cluster, ClusterParams, Marker};
use crate::config::MapConfig;
use crate::dispatch::{Collaborators, DispatchOutcome, Interaction, InteractionDispatcher};
use crate::error::Result;
use crate::geo::GeoPoint;
use crate::selection::SelectionSynchronizer;
use crate::viewport::{AnimationId, Region, ViewportController};
use crate::worker::{ClusterResult, ClusterWorker};

/// State of one explore screen: the listings, the map region, the category
/// strip and the markers currently rendered.
pub struct ExploreSession {
    points: Vec<GeoPoint>,
    /// Bumped whenever the listing set is replaced.
    revision: u64,
    params: ClusterParams,
    viewport: ViewportController,
    selection: SelectionSynchronizer,
    dispatcher: InteractionDispatcher,
    markers: Vec<Marker>,
    rendered_region: Region,
}

impl ExploreSession {
    pub fn new(points: Vec<GeoPoint>, config: &MapConfig) -> Result<Self> {
        let viewport =
            ViewportController::new(config.viewport.initial_region, config.viewport.zoom)?;
        let selection = SelectionSynchronizer::new(
            config.selection.categories.clone(),
            config.selection.leading_margin,
            config.selection.reselect,
        )?;
        let region = *viewport.region();
        let markers = cluster(&points, &region, &config.clustering);

        info!(
            listings = points.len(),
            markers = markers.len(),
            "Explore session started"
        );

        Ok(Self {
            points,
            revision: 0,
            params: config.clustering.clone(),
            viewport,
            selection,
            dispatcher: InteractionDispatcher::new(config.selection.feedback),
            markers,
            rendered_region: region,
        })
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn params(&self) -> &ClusterParams {
        &self.params
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn selection(&self) -> &SelectionSynchronizer {
        &self.selection
    }

    /// Marker whose render key is `key`.
    pub fn find_marker(&self, key: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.key() == key)
    }

    /// Replace the listing set and recluster.
    pub fn set_points(&mut self, points: Vec<GeoPoint>) {
        self.points = points;
        self.revision += 1;
        self.recluster();
    }

    /// Recluster if the region moved since the markers were computed.
    pub fn refresh(&mut self) -> &[Marker] {
        if *self.viewport.region() != self.rendered_region {
            self.recluster();
        }
        &self.markers
    }

    /// Queue a background clustering pass for the current listings and region.
    pub fn request_markers(&self, worker: &ClusterWorker) -> u64 {
        let points: Arc<[GeoPoint]> = self.points.as_slice().into();
        worker.request(
            self.revision,
            points,
            *self.viewport.region(),
            self.params.clone(),
        )
    }

    /// Install a marker set computed in the background. Returns false when it
    /// was computed for a region other than the current one, or for a listing
    /// set that has since been replaced.
    pub fn apply_markers(&mut self, result: ClusterResult) -> bool {
        if result.region != *self.viewport.region() || result.revision != self.revision {
            debug!(
                generation = result.generation,
                revision = result.revision,
                "Rejecting out-of-date cluster result"
            );
            return false;
        }
        self.markers = result.markers;
        self.rendered_region = result.region;
        true
    }

    pub fn handle(
        &mut self,
        interaction: &Interaction,
        collaborators: Collaborators<'_>,
    ) -> Result<DispatchOutcome> {
        let outcome = self.dispatcher.dispatch(
            interaction,
            &mut self.viewport,
            &mut self.selection,
            collaborators,
        )?;
        if matches!(outcome, DispatchOutcome::Zoomed(_)) {
            self.refresh();
        }
        Ok(outcome)
    }

    pub fn on_region_change(&mut self, region: Region) -> Result<()> {
        self.viewport.on_region_change(region)?;
        self.refresh();
        Ok(())
    }

    pub fn on_animation_complete(&mut self, animation: AnimationId) -> bool {
        self.viewport.on_animation_complete(animation)
    }

    pub fn report_layout(&mut self, index: usize, offset: f64) -> Result<()> {
        self.selection.report_layout(index, offset)
    }

    fn recluster(&mut self) {
        let region = *self.viewport.region();
        self.markers = cluster(&self.points, &region, &self.params);
        self.rendered_region = region;
    }
}
