use super::types::ChatMessage;
use crate::error::SendError;

/// Events the network worker sends up to the chat view.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// Full message list from the latest successful fetch.
    MessagesSynced {
        messages: Vec<ChatMessage>,
        has_new: bool,
    },
    SendSucceeded,
    SendFailed(SendError),
}
