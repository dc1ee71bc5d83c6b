use crate::{Effect, Msg, ReportState};

/// Prefix of the synthetic message reported when a cycle fails.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы: ";

/// Pure update function: applies a message to state and returns any effects.
///
/// Cycle outcomes replace (or, for `NoChanges`, keep) the candidate and ask
/// for a send whenever it differs from what the chat last received. Notify
/// outcomes only touch `last_sent` on success, so a failed send stays
/// pending and is requested again after the next cycle.
pub fn update(mut state: ReportState, msg: Msg) -> (ReportState, Vec<Effect>) {
    let effects = match msg {
        Msg::StatusReported(text) => {
            state.set_candidate(text);
            pending_send(&state)
        }
        Msg::CycleFailed(error) => {
            state.set_candidate(format!("{FAILURE_PREFIX}{error}"));
            pending_send(&state)
        }
        Msg::NoChanges => pending_send(&state),
        Msg::NotifySucceeded { text } => {
            state.mark_sent(text);
            Vec::new()
        }
        Msg::NotifyFailed { .. } => Vec::new(),
    };

    (state, effects)
}

fn pending_send(state: &ReportState) -> Vec<Effect> {
    state
        .pending()
        .map(|text| Effect::SendMessage {
            text: text.to_owned(),
        })
        .into_iter()
        .collect()
}
