//! Homework engine: API fetch, chat delivery and the poll loop that ties
//! them to the core state machine.
mod fetch;
mod notify;
mod poll_loop;
mod types;

pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_ENDPOINT};
pub use notify::{NotifyError, NotifySettings, Notifier, TelegramNotifier, DEFAULT_API_BASE};
pub use poll_loop::{PollLoop, PollSettings};
pub use types::{CycleError, FailureKind, FetchError};
