use anyhow::Context;
use chrono::Utc;
use homework_core::PollCursor;
use homework_engine::{
    FetchSettings, NotifySettings, PollLoop, PollSettings, ReqwestFetcher, TelegramNotifier,
};

use crate::config::Credentials;

/// Build the clients and hand control to the poll loop. Only returns on a
/// startup failure.
pub fn run(credentials: Credentials) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let fetcher = ReqwestFetcher::new(FetchSettings::default(), &credentials.practicum_token)
        .context("failed to build homework API client")?;
    let notifier = TelegramNotifier::new(
        NotifySettings::default(),
        &credentials.telegram_token,
        credentials.telegram_chat_id.as_str(),
    )
    .context("failed to build Telegram client")?;

    let cursor = PollCursor::starting_at(Utc::now().timestamp());
    let poll = PollLoop::new(fetcher, notifier, cursor, PollSettings::default());

    runtime.block_on(poll.run());
    Ok(())
}
