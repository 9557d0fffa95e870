use serde::{Deserialize, Serialize};

/// One chat entry as served by the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: i64,
    pub user_id: String,
    pub username: String,
    pub text: String,
    #[serde(default)]
    pub is_creator: bool,
    /// Display string assigned by the server (e.g. `14:05`).
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `GET <endpoint>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Body of `POST <endpoint>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    pub user_id: String,
    pub username: String,
    pub message_text: String,
    pub is_creator: bool,
}

impl OutgoingMessage {
    pub fn new(user_id: &str, username: &str, text: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            username: username.to_string(),
            message_text: text.trim().to_string(),
            is_creator: false,
        }
    }
}

/// Acknowledgement some backends return on a successful POST. Only logged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message_id: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
