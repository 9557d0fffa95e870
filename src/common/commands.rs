/// Commands the chat view sends down to the network worker.
#[derive(Debug, Clone)]
pub enum ChatCommand {
    /// Post a message. Blank text is dropped without touching the network.
    SendMessage(String),
    /// Fetch the message list now instead of waiting for the next tick.
    SyncNow,
    /// Display name to attach to subsequent posts.
    SetUsername(String),
}
