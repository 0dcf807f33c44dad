mod support;

use relay_gate::{Admission, AdmissionGate, Rejection};
use relay_kernel::domain::line::Line;
use std::sync::Arc;
use support::{Capture, CountingState, Device};
use tracing::Level;

fn gate(state: &CountingState) -> AdmissionGate<&CountingState, &CountingState> {
    AdmissionGate::new(state, state)
}

#[test]
fn missing_id_is_rejected_with_one_error() {
    let state = CountingState::default();
    let capture = Capture::default();
    let device = Device { logged_in: true, sim1: true, sim2: true };

    let admitted = capture.run(|| gate(&state).is_admissible(&device, None));

    assert!(!admitted);
    assert_eq!(capture.count(Level::ERROR), 1);
    assert_eq!(capture.count(Level::WARN), 0);
    assert_eq!(capture.records()[0].message, "cannot handle event because the message ID is null");
    assert_eq!(state.session_queries(), 0);
    assert!(state.line_queries().is_empty());
}

#[test]
fn logged_out_user_is_rejected_without_line_queries() {
    let state = CountingState::default();
    let capture = Capture::default();
    let device = Device { logged_in: false, sim1: true, sim2: true };

    let admitted = capture.run(|| gate(&state).is_admissible(&device, Some("abc")));

    assert!(!admitted);
    let records = capture.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::WARN);
    assert_eq!(
        records[0].message,
        "cannot handle message with id [abc] because the user is not logged in"
    );
    assert_eq!(records[0].message_id.as_deref(), Some("abc"));
    assert_eq!(state.session_queries(), 1);
    assert!(state.line_queries().is_empty(), "line registry must not be queried");
}

#[test]
fn first_line_active_is_admitted_silently() {
    let state = CountingState::default();
    let capture = Capture::default();
    let device = Device { logged_in: true, sim1: true, sim2: false };

    let admitted = capture.run(|| gate(&state).is_admissible(&device, Some("abc")));

    assert!(admitted);
    assert!(capture.records().is_empty());
    assert_eq!(state.line_queries(), vec![Line::Sim1]);
}

#[test]
fn second_line_active_is_admitted_silently() {
    let state = CountingState::default();
    let capture = Capture::default();
    let device = Device { logged_in: true, sim1: false, sim2: true };

    let admitted = capture.run(|| gate(&state).is_admissible(&device, Some("abc")));

    assert!(admitted);
    assert!(capture.records().is_empty());
    assert_eq!(state.line_queries(), vec![Line::Sim1, Line::Sim2]);
}

#[test]
fn no_active_line_is_rejected_with_one_warning() {
    let state = CountingState::default();
    let capture = Capture::default();
    let device = Device { logged_in: true, sim1: false, sim2: false };

    let outcome = capture.run(|| gate(&state).evaluate(&device, Some("abc")));

    assert_eq!(outcome, Admission::Rejected(Rejection::NoActiveLine));
    let records = capture.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::WARN);
    assert_eq!(records[0].message, "cannot handle message with id [abc] because the user is not active");
    assert_eq!(records[0].message_id.as_deref(), Some("abc"));
    assert_eq!(state.line_queries(), vec![Line::Sim1, Line::Sim2]);
}

#[test]
fn diagnostic_level_matches_rejection() {
    let state = CountingState::default();
    let cases = [
        (Device::default(), None),
        (Device::default(), Some("abc")),
        (Device { logged_in: true, ..Device::default() }, Some("abc")),
    ];

    for (device, id) in cases {
        let capture = Capture::default();
        let outcome = capture.run(|| gate(&state).evaluate(&device, id));
        let rejection = outcome.rejection().expect("every case is rejected");

        let records = capture.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, rejection.level());
    }
}

#[test]
fn repeated_evaluation_is_identical() {
    let state = CountingState::default();
    let device = Device { logged_in: false, sim1: false, sim2: true };

    let first = Capture::default();
    let second = Capture::default();
    let a = first.run(|| gate(&state).evaluate(&device, Some("xyz")));
    let b = second.run(|| gate(&state).evaluate(&device, Some("xyz")));

    assert_eq!(a, b);
    assert_eq!(first.records(), second.records());
}

#[test]
fn shared_collaborators_serve_many_gates() {
    let state = Arc::new(CountingState::default());
    let device = Device { logged_in: true, sim1: false, sim2: true };

    let left = AdmissionGate::new(Arc::clone(&state), Arc::clone(&state));
    let right = AdmissionGate::new(Box::new(CountingState::default()), Arc::clone(&state));

    assert!(left.is_admissible(&device, Some("1")));
    assert!(right.is_admissible(&device, Some("2")));
    assert_eq!(state.session_queries(), 1);
    assert_eq!(state.line_queries().len(), 4);
}
