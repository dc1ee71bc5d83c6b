/// Deduplication memory of the poll loop.
///
/// `candidate` is the message computed by the most recent cycle that produced
/// one; `last_sent` is the message the chat actually received.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportState {
    candidate: Option<String>,
    last_sent: Option<String>,
}

impl ReportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidate(&self) -> Option<&str> {
        self.candidate.as_deref()
    }

    pub fn last_sent(&self) -> Option<&str> {
        self.last_sent.as_deref()
    }

    /// The candidate, if the chat has not received it yet.
    pub fn pending(&self) -> Option<&str> {
        match (&self.candidate, &self.last_sent) {
            (Some(candidate), Some(sent)) if candidate == sent => None,
            (candidate, _) => candidate.as_deref(),
        }
    }

    pub(crate) fn set_candidate(&mut self, text: String) {
        self.candidate = Some(text);
    }

    pub(crate) fn mark_sent(&mut self, text: String) {
        self.last_sent = Some(text);
    }
}
