use homework_core::{update, Msg, ReportState};

#[test]
fn notify_failure_leaves_state_untouched() {
    let state = ReportState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::NotifyFailed {
            text: "a".into(),
            error: "down".into(),
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn notify_success_requests_no_further_sends() {
    let (state, _) = update(ReportState::new(), Msg::StatusReported("a".into()));
    let (next, effects) = update(state, Msg::NotifySucceeded { text: "a".into() });

    assert_eq!(next.last_sent(), Some("a"));
    assert!(effects.is_empty());
}
