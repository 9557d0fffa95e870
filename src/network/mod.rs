pub mod api;
pub mod client;
#[cfg(test)]
pub(crate) mod fake;
pub mod tracker;

pub use api::{ChatApi, HttpChatApi};
pub use client::ChatClient;

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::common::{ChatCommand, ChatEvent};
use crate::identity::Identity;

/// A running `ChatClient` owned by the chat view. Dropping it stops polling.
pub struct ChatClientHandle {
    command_sender: mpsc::Sender<ChatCommand>,
    event_receiver: mpsc::Receiver<ChatEvent>,
    task: JoinHandle<()>,
}

impl ChatClientHandle {
    pub fn spawn(
        runtime: &Handle,
        api: Arc<dyn ChatApi>,
        identity: &Identity,
        poll_interval: Duration,
    ) -> Self {
        // View -> network
        let (command_sender, command_receiver) = mpsc::channel(100);
        // Network -> view
        let (event_sender, event_receiver) = mpsc::channel(100);

        let client = ChatClient::new(
            api,
            event_sender,
            command_receiver,
            poll_interval,
            identity.user_id.clone(),
            identity.display_name().to_string(),
        );
        let task = runtime.spawn(client.run());

        Self {
            command_sender,
            event_receiver,
            task,
        }
    }

    /// Queue a command for the worker. Returns `false` if it could not be queued.
    pub fn send(&self, command: ChatCommand) -> bool {
        match self.command_sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to send command to chat client: {err}");
                false
            }
        }
    }

    pub fn try_recv(&mut self) -> Option<ChatEvent> {
        self.event_receiver.try_recv().ok()
    }
}

impl Drop for ChatClientHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
