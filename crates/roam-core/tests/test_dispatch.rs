mod common;

use roam_core::dispatch::{Collaborators, DispatchOutcome, Interaction, InteractionDispatcher};
use roam_core::error::RoamError;
use roam_core::selection::{default_categories, ReselectPolicy, SelectionSynchronizer};
use roam_core::services::{EventLog, FeedbackStyle, NoOpServices, UiEvent};
use roam_core::viewport::{Region, ViewportController, ZoomPolicy};

use common::{cluster_of, packed_points, point};

struct Fixture {
    viewport: ViewportController,
    selection: SelectionSynchronizer,
    dispatcher: InteractionDispatcher,
}

fn fixture() -> Fixture {
    Fixture {
        viewport: ViewportController::new(Region::default(), ZoomPolicy::default()).unwrap(),
        selection: SelectionSynchronizer::new(default_categories(), 16.0, ReselectPolicy::Reemit)
            .unwrap(),
        dispatcher: InteractionDispatcher::new(FeedbackStyle::Light),
    }
}

impl Fixture {
    fn dispatch(
        &mut self,
        interaction: Interaction,
        collaborators: Collaborators<'_>,
    ) -> Result<DispatchOutcome, RoamError> {
        self.dispatcher.dispatch(
            &interaction,
            &mut self.viewport,
            &mut self.selection,
            collaborators,
        )
    }
}

fn is_pulse(e: &UiEvent) -> bool {
    matches!(e, UiEvent::Pulse { .. })
}

#[test]
fn test_marker_tap_navigates_once_and_pulses() {
    let mut f = fixture();
    let log = EventLog::new();

    let outcome = f
        .dispatch(
            Interaction::MarkerTap(point("p42", 52.5, 13.4)),
            Collaborators::all(&log),
        )
        .unwrap();

    assert_eq!(outcome, DispatchOutcome::Navigated { id: "p42".into() });
    assert_eq!(
        log.events(),
        vec![
            UiEvent::Navigate { id: "p42".into() },
            UiEvent::Pulse {
                style: FeedbackStyle::Light
            },
        ]
    );
    assert_eq!(*f.viewport.region(), Region::default());
}

#[test]
fn test_cluster_tap_zooms_without_pulse() {
    let mut f = fixture();
    let log = EventLog::new();

    let outcome = f
        .dispatch(
            Interaction::ClusterTap(cluster_of(packed_points())),
            Collaborators::all(&log),
        )
        .unwrap();

    assert!(matches!(outcome, DispatchOutcome::Zoomed(_)));
    assert!(f.viewport.is_animating());
    assert_eq!(log.count(is_pulse), 0);
    assert_eq!(log.count(|e| matches!(e, UiEvent::AnimateTo { .. })), 1);
}

#[test]
fn test_chip_tap_selects_and_pulses() {
    let mut f = fixture();
    let log = EventLog::new();
    f.selection.report_layout(2, 340.0).unwrap();

    let outcome = f
        .dispatch(Interaction::ChipTap(2), Collaborators::all(&log))
        .unwrap();

    let DispatchOutcome::Selected(selected) = outcome else {
        panic!("expected a selection");
    };
    assert_eq!(selected.scrolled_to, Some(324.0));
    assert_eq!(f.selection.active_index(), 2);
    assert_eq!(log.count(is_pulse), 1);
}

#[test]
fn test_failed_pulse_is_ignored() {
    let mut f = fixture();
    let log = EventLog::with_failing_feedback();

    let outcome = f.dispatch(Interaction::ChipTap(1), Collaborators::all(&log));

    assert!(outcome.is_ok());
    assert_eq!(f.selection.active_index(), 1);
    assert_eq!(log.count(is_pulse), 1);
}

#[test]
fn test_out_of_range_chip_fails_without_pulse() {
    let mut f = fixture();
    let log = EventLog::new();

    let result = f.dispatch(Interaction::ChipTap(12), Collaborators::all(&log));

    assert!(matches!(result, Err(RoamError::IndexOutOfRange { .. })));
    assert!(log.events().is_empty());
    assert_eq!(f.selection.active_index(), 0);
}

#[test]
fn test_mixed_collaborators() {
    let mut f = fixture();
    let navigation = EventLog::new();
    let collaborators = Collaborators {
        navigation: &navigation,
        feedback: &NoOpServices,
        map: &NoOpServices,
        selection: &NoOpServices,
    };

    f.dispatch(Interaction::MarkerTap(point("p7", 1.0, 1.0)), collaborators)
        .unwrap();
    f.dispatch(Interaction::ChipTap(3), collaborators).unwrap();

    assert_eq!(navigation.events(), vec![UiEvent::Navigate { id: "p7".into() }]);
}
