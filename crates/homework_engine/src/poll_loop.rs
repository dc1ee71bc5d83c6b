use std::time::Duration;

use bot_logging::{bot_debug, bot_error, bot_info};
use homework_core::{
    format_status, update, validate_response, Effect, Msg, PollCursor, ReportState,
};

use crate::{CycleError, Fetcher, Notifier};

#[derive(Debug, Clone)]
pub struct PollSettings {
    /// Pause between the end of one cycle and the start of the next.
    pub interval: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(600),
        }
    }
}

/// Owns the cursor and report state and runs fetch/notify cycles forever.
pub struct PollLoop<F, N> {
    fetcher: F,
    notifier: N,
    cursor: PollCursor,
    state: ReportState,
    settings: PollSettings,
    cycle: u64,
}

impl<F: Fetcher, N: Notifier> PollLoop<F, N> {
    pub fn new(fetcher: F, notifier: N, cursor: PollCursor, settings: PollSettings) -> Self {
        Self {
            fetcher,
            notifier,
            cursor,
            state: ReportState::new(),
            settings,
            cycle: 0,
        }
    }

    pub fn state(&self) -> &ReportState {
        &self.state
    }

    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    /// Never returns; the process is expected to be stopped externally.
    pub async fn run(mut self) {
        bot_info!(
            "Poll loop started: from_date={} interval={:?}",
            self.cursor.from_date(),
            self.settings.interval
        );
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.settings.interval).await;
        }
    }

    /// One fetch phase followed by one notify phase. Failures in either
    /// phase are logged and absorbed.
    pub async fn run_cycle(&mut self) {
        self.cycle += 1;
        bot_logging::set_cycle(self.cycle);
        bot_info!("Requesting homework statuses from_date={}", self.cursor.from_date());

        let msg = match self.fetch_and_process().await {
            Ok(Some(text)) => Msg::StatusReported(text),
            Ok(None) => {
                bot_debug!("Status unchanged: API returned no homework updates");
                Msg::NoChanges
            }
            Err(err) => {
                bot_error!("Cycle failed: {err} ({err:?})");
                Msg::CycleFailed(err.to_string())
            }
        };

        let effects = self.dispatch(msg);
        if effects.is_empty() {
            bot_debug!("Homework status has not changed yet, waiting for the next cycle");
        }
        for effect in effects {
            self.run_effect(effect).await;
        }
    }

    async fn fetch_and_process(&self) -> Result<Option<String>, CycleError> {
        let payload = self.fetcher.fetch(self.cursor).await?;
        let records = validate_response(&payload)?;
        match records.first() {
            Some(record) => Ok(Some(format_status(record)?)),
            None => Ok(None),
        }
    }

    async fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::SendMessage { text } => {
                bot_info!("Sending message to chat: {}", text);
                let msg = match self.notifier.notify(&text).await {
                    Ok(()) => Msg::NotifySucceeded { text },
                    Err(err) => {
                        bot_error!("Failed to deliver message, will retry next cycle: {}", err);
                        Msg::NotifyFailed {
                            text,
                            error: err.to_string(),
                        }
                    }
                };
                // Notify outcomes only update `last_sent`; any send they asked
                // for here would be lost until the next cycle.
                let follow_up = self.dispatch(msg);
                debug_assert!(follow_up.is_empty(), "unexpected effects: {follow_up:?}");
            }
        }
    }

    fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }
}
