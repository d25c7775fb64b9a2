//! Collaborators the core calls but does not implement.
//!
//! Every method has a no-op default so hosts only implement what they
//! render. [`EventLog`] records every call and backs the tests and the CLI
//! replay command.

use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoamError};
use crate::viewport::{AnimationId, Region};

/// Strength of a haptic feedback pulse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackStyle {
    #[default]
    Light,
    Medium,
    Heavy,
}

pub trait NavigationService {
    /// Open the detail screen of a listing. Fire-and-forget.
    fn navigate_to_listing(&self, _id: &str) {}
}

pub trait FeedbackService {
    /// Best-effort haptic pulse. Callers ignore failures.
    fn pulse(&self, _style: FeedbackStyle) -> Result<()> {
        Ok(())
    }
}

pub trait MapSurface {
    /// Start animating the map to `region`. Completion is reported back
    /// through `ViewportController::on_animation_complete`.
    fn animate_to_region(&self, _region: &Region, _animation: AnimationId) {}
}

pub trait SelectionSink {
    /// Scroll the category strip so that `x` is at its leading edge.
    fn scroll_to_offset(&self, _x: f64) {}

    /// The active category changed; consumed by the listing filter.
    fn category_changed(&self, _label: &str) {}
}

/// Collaborator that ignores every call.
pub struct NoOpServices;

impl NavigationService for NoOpServices {}
impl FeedbackService for NoOpServices {}
impl MapSurface for NoOpServices {}
impl SelectionSink for NoOpServices {}

/// A call received by [`EventLog`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    Navigate { id: String },
    Pulse { style: FeedbackStyle },
    AnimateTo { region: Region, animation: AnimationId },
    ScrollTo { offset: f64 },
    CategoryChanged { label: String },
}

/// Records every collaborator call in order.
#[derive(Default)]
pub struct EventLog {
    events: Mutex<Vec<UiEvent>>,
    fail_feedback: bool,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log whose feedback service always fails (after recording the attempt).
    pub fn with_failing_feedback() -> Self {
        Self {
            events: Mutex::default(),
            fail_feedback: true,
        }
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.lock().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<UiEvent> {
        std::mem::take(&mut *self.lock())
    }

    pub fn count(&self, pred: impl Fn(&UiEvent) -> bool) -> usize {
        self.lock().iter().filter(|e| pred(e)).count()
    }

    fn record(&self, event: UiEvent) {
        self.lock().push(event);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<UiEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NavigationService for EventLog {
    fn navigate_to_listing(&self, id: &str) {
        self.record(UiEvent::Navigate { id: id.to_string() });
    }
}

impl FeedbackService for EventLog {
    fn pulse(&self, style: FeedbackStyle) -> Result<()> {
        self.record(UiEvent::Pulse { style });
        if self.fail_feedback {
            return Err(RoamError::Feedback("haptics unavailable".into()));
        }
        Ok(())
    }
}

impl MapSurface for EventLog {
    fn animate_to_region(&self, region: &Region, animation: AnimationId) {
        self.record(UiEvent::AnimateTo {
            region: *region,
            animation,
        });
    }
}

impl SelectionSink for EventLog {
    fn scroll_to_offset(&self, x: f64) {
        self.record(UiEvent::ScrollTo { offset: x });
    }

    fn category_changed(&self, label: &str) {
        self.record(UiEvent::CategoryChanged {
            label: label.to_string(),
        });
    }
}
