//! Background clustering with last-request-wins delivery.
//!
//! Every request gets a generation number. The worker thread coalesces
//! queued requests down to the newest one, and the receiving side only ever
//! hands out a result whose generation matches the newest request, so a
//! superseded marker set is never applied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cluster::{cluster, ClusterParams, Marker};
use crate::error::Result;
use crate::geo::GeoPoint;
use crate::viewport::Region;

struct ClusterRequest {
    generation: u64,
    revision: u64,
    points: Arc<[GeoPoint]>,
    region: Region,
    params: ClusterParams,
}

/// A complete marker set for one request.
#[derive(Clone, Debug)]
pub struct ClusterResult {
    pub generation: u64,
    /// Revision of the listing set the markers were computed from.
    pub revision: u64,
    pub region: Region,
    pub markers: Vec<Marker>,
}

pub struct ClusterWorker {
    cmd_tx: Option<mpsc::Sender<ClusterRequest>>,
    result_rx: mpsc::Receiver<ClusterResult>,
    latest: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl ClusterWorker {
    /// Spawn the worker thread.
    pub fn spawn() -> Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClusterRequest>();
        let (result_tx, result_rx) = mpsc::channel::<ClusterResult>();
        let latest = Arc::new(AtomicU64::new(0));

        let worker_latest = Arc::clone(&latest);
        let handle = std::thread::Builder::new()
            .name("roam-cluster".into())
            .spawn(move || worker_loop(cmd_rx, result_tx, worker_latest))?;

        Ok(Self {
            cmd_tx: Some(cmd_tx),
            result_rx,
            latest,
            handle: Some(handle),
        })
    }

    /// Queue a clustering pass over revision `revision` of the listing set,
    /// superseding every earlier request. Returns the request's generation.
    pub fn request(
        &self,
        revision: u64,
        points: Arc<[GeoPoint]>,
        region: Region,
        params: ClusterParams,
    ) -> u64 {
        let generation = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        if let Some(tx) = &self.cmd_tx {
            let _ = tx.send(ClusterRequest {
                generation,
                revision,
                points,
                region,
                params,
            });
        }
        generation
    }

    /// Generation of the newest request.
    pub fn latest_generation(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }

    /// Non-blocking: the result for the newest request, if it has arrived.
    /// Older results waiting in the channel are discarded.
    pub fn try_latest(&self) -> Option<ClusterResult> {
        let mut found = None;
        while let Ok(result) = self.result_rx.try_recv() {
            found = self.keep_if_current(result).or(found);
        }
        found
    }

    /// Block up to `timeout` for the result of the newest request.
    pub fn wait_latest(&self, timeout: Duration) -> Option<ClusterResult> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let result = self.result_rx.recv_timeout(remaining).ok()?;
            if let Some(current) = self.keep_if_current(result) {
                return Some(current);
            }
        }
    }

    fn keep_if_current(&self, result: ClusterResult) -> Option<ClusterResult> {
        if result.generation == self.latest_generation() {
            Some(result)
        } else {
            debug!(generation = result.generation, "Discarding stale cluster result");
            None
        }
    }
}

impl Drop for ClusterWorker {
    fn drop(&mut self) {
        // Closing the command channel ends the worker loop.
        self.cmd_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<ClusterRequest>,
    result_tx: mpsc::Sender<ClusterResult>,
    latest: Arc<AtomicU64>,
) {
    while let Ok(mut request) = cmd_rx.recv() {
        while let Ok(newer) = cmd_rx.try_recv() {
            request = newer;
        }
        if request.generation < latest.load(Ordering::Acquire) {
            continue;
        }

        let markers = cluster(&request.points, &request.region, &request.params);

        if request.generation < latest.load(Ordering::Acquire) {
            debug!(generation = request.generation, "Request superseded during clustering");
            continue;
        }
        let result = ClusterResult {
            generation: request.generation,
            revision: request.revision,
            region: request.region,
            markers,
        };
        if result_tx.send(result).is_err() {
            break;
        }
    }
}
