#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver this text to the chat.
    SendMessage { text: String },
}
