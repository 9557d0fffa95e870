use thiserror::Error;

/// Failure of one synchronization fetch. Logged only; the next tick retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("malformed message list: {0}")]
    Decode(String),
}

/// Failure of a message submission. Surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("server rejected the message with status {0}")]
    Rejected(u16),
    #[error("network error: {0}")]
    Network(String),
}

impl SendError {
    /// Text of the notification shown for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            SendError::Rejected(_) => "Failed to send message. Please try again.",
            SendError::Network(_) => "Could not reach the chat server. Check your connection.",
        }
    }
}
