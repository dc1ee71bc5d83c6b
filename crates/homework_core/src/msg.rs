#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The newest homework record was formatted into a status message.
    StatusReported(String),
    /// The API returned an empty `homeworks` list.
    NoChanges,
    /// Fetching or processing failed; carries the error description.
    CycleFailed(String),
    /// The notifier delivered the message.
    NotifySucceeded { text: String },
    /// The notifier could not deliver the message.
    NotifyFailed { text: String, error: String },
}
