//! Homework core: payload validation, status formatting and the pure
//! report state machine driven by the poll loop.
mod cursor;
mod effect;
mod format;
mod msg;
mod state;
mod update;
mod validate;
mod verdict;

pub use cursor::PollCursor;
pub use effect::Effect;
pub use format::{format_status, FormatError};
pub use msg::Msg;
pub use state::ReportState;
pub use update::{update, FAILURE_PREFIX};
pub use validate::{validate_response, HomeworkRecord, MalformedResponseError};
pub use verdict::Verdict;
