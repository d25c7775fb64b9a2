mod common;

use approx::assert_relative_eq;
use roam_core::error::RoamError;
use roam_core::geo::Coordinate;
use roam_core::services::{EventLog, UiEvent};
use roam_core::viewport::{AnimationId, ControllerState, Region, ViewportController, ZoomPolicy};

use common::{cluster_of, packed_points, point, region};

fn controller() -> ViewportController {
    ViewportController::new(Region::default(), ZoomPolicy::default()).unwrap()
}

#[test]
fn test_starts_idle_at_initial_region() {
    let c = controller();
    assert_eq!(c.state(), ControllerState::Idle);
    assert_eq!(*c.region(), Region::default());
}

#[test]
fn test_rejects_invalid_initial_region() {
    let bad = region(10.0, 10.0, 0.0);
    assert!(matches!(
        ViewportController::new(bad, ZoomPolicy::default()),
        Err(RoamError::InvalidRegion(_))
    ));
}

#[test]
fn test_cluster_tap_halves_deltas_around_centroid() {
    let mut c = controller();
    let log = EventLog::new();
    let cluster = cluster_of(packed_points());

    let id = c.on_cluster_tap(&cluster, &log).unwrap();

    let r = c.region();
    assert_relative_eq!(r.latitude_delta, 4.5);
    assert_relative_eq!(r.longitude_delta, 4.5);
    assert_eq!(r.center(), cluster.centroid);
    assert_eq!(
        c.state(),
        ControllerState::Animating {
            animation: id,
            target: *r
        }
    );
    assert_eq!(
        log.events(),
        vec![UiEvent::AnimateTo {
            region: *r,
            animation: id
        }]
    );
}

#[test]
fn test_cluster_tap_zoom_is_monotonic_down_to_floor() {
    let mut c = controller();
    let log = EventLog::new();
    let cluster = cluster_of(packed_points());
    let floor = c.policy().min_delta;

    let mut previous = *c.region();
    for _ in 0..40 {
        c.on_cluster_tap(&cluster, &log).unwrap();
        let current = *c.region();
        if previous.latitude_delta > floor {
            assert!(current.latitude_delta < previous.latitude_delta);
            assert!(current.longitude_delta < previous.longitude_delta);
        } else {
            assert_eq!(current.latitude_delta, previous.latitude_delta);
            assert_eq!(current.longitude_delta, previous.longitude_delta);
        }
        assert!(current.latitude_delta >= floor);
        previous = current;
    }
    assert_relative_eq!(previous.latitude_delta, floor);
}

#[test]
fn test_zoom_policy_never_widens() {
    let policy = ZoomPolicy {
        zoom_factor: 3.0,
        min_delta: 0.01,
    };
    assert!(policy.narrow(1.0) < 1.0);
    assert_eq!(policy.narrow(0.005), 0.005);
    assert_eq!(policy.narrow(0.015), 0.01);
}

#[test]
fn test_marker_tap_navigates_without_moving() {
    let c = controller();
    let log = EventLog::new();
    c.on_marker_tap(&point("p42", 52.5, 13.4), &log);

    assert_eq!(log.events(), vec![UiEvent::Navigate { id: "p42".into() }]);
    assert_eq!(*c.region(), Region::default());
    assert_eq!(c.state(), ControllerState::Idle);
}

#[test]
fn test_animation_completion_returns_to_idle() {
    let mut c = controller();
    let log = EventLog::new();
    let id = c
        .focus_on(Coordinate::new(48.1, 11.5), 1.0, 1.0, &log)
        .unwrap();
    assert!(c.is_animating());
    assert!(c.on_animation_complete(id));
    assert_eq!(c.state(), ControllerState::Idle);
}

#[test]
fn test_newer_request_supersedes_in_flight_animation() {
    let mut c = controller();
    let log = EventLog::new();
    let first = c.recenter(region(48.1, 11.5, 2.0), &log).unwrap();
    let second = c.recenter(region(50.1, 8.6, 2.0), &log).unwrap();
    assert!(second > first);

    // The interrupted animation's completion is dropped.
    assert!(!c.on_animation_complete(first));
    assert!(c.is_animating());
    assert_eq!(c.region().latitude, 50.1);

    assert!(c.on_animation_complete(second));
    assert!(!c.is_animating());
}

#[test]
fn test_completion_while_idle_is_ignored() {
    let mut c = controller();
    assert!(!c.on_animation_complete(AnimationId(7)));
    assert_eq!(c.state(), ControllerState::Idle);
}

#[test]
fn test_user_pan_updates_region_without_state_change() {
    let mut c = controller();
    let panned = region(51.0, 10.0, 3.0);
    c.on_region_change(panned).unwrap();
    assert_eq!(*c.region(), panned);
    assert_eq!(c.state(), ControllerState::Idle);

    let log = EventLog::new();
    let id = c.recenter(region(40.0, 3.0, 1.0), &log).unwrap();
    c.on_region_change(region(45.0, 6.0, 1.5)).unwrap();
    assert_eq!(
        c.state(),
        ControllerState::Animating {
            animation: id,
            target: region(40.0, 3.0, 1.0)
        }
    );
}

#[test]
fn test_region_contains_half_span_around_center() {
    let r = region(50.0, 10.0, 2.0);
    assert!(r.contains(Coordinate::new(50.9, 10.9)));
    assert!(r.contains(Coordinate::new(49.0, 11.0)));
    assert!(!r.contains(Coordinate::new(51.1, 10.0)));
}

#[test]
fn test_invalid_focus_leaves_controller_untouched() {
    let mut c = controller();
    let log = EventLog::new();
    let result = c.focus_on(Coordinate::new(95.0, 0.0), 1.0, 1.0, &log);
    assert!(matches!(result, Err(RoamError::InvalidRegion(_))));
    assert_eq!(c.state(), ControllerState::Idle);
    assert!(log.events().is_empty());
}
