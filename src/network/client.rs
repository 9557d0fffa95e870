use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::common::{ChatCommand, ChatEvent, ChatMessage, OutgoingMessage, PostReceipt};
use crate::error::{FetchError, SendError};

use super::api::ChatApi;
use super::tracker::SyncTracker;

/// Results of requests spawned off the event loop.
enum TaskOutcome {
    Fetched {
        request: u64,
        result: Result<Vec<ChatMessage>, FetchError>,
    },
    Sent(Result<Option<PostReceipt>, SendError>),
}

/// Polls the chat endpoint and submits messages on behalf of the chat view.
pub struct ChatClient {
    api: Arc<dyn ChatApi>,
    event_sender: mpsc::Sender<ChatEvent>,
    command_receiver: mpsc::Receiver<ChatCommand>,
    poll_interval: Duration,
    user_id: String,
    username: String,
    tracker: SyncTracker,
    /// Sequence number of the most recently issued fetch.
    last_issued: u64,
    /// Sequence number of the most recently applied fetch.
    last_applied: u64,
    in_flight: Option<u64>,
    /// A sync was requested while a fetch was outstanding.
    resync_pending: bool,
}

impl ChatClient {
    pub fn new(
        api: Arc<dyn ChatApi>,
        event_sender: mpsc::Sender<ChatEvent>,
        command_receiver: mpsc::Receiver<ChatCommand>,
        poll_interval: Duration,
        user_id: String,
        username: String,
    ) -> Self {
        Self {
            api,
            event_sender,
            command_receiver,
            poll_interval,
            user_id,
            username,
            tracker: SyncTracker::new(),
            last_issued: 0,
            last_applied: 0,
            in_flight: None,
            resync_pending: false,
        }
    }

    /// Runs until the command channel closes. The first tick fires immediately.
    pub async fn run(mut self) {
        let (outcome_sender, mut outcome_receiver) = mpsc::channel(16);
        let mut ticker = time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        log::info!(
            "Chat sync started for {} (every {:?})",
            self.user_id,
            self.poll_interval
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.start_fetch(&outcome_sender);
                }
                command = self.command_receiver.recv() => {
                    match command {
                        Some(command) => self.handle_command(command, &outcome_sender),
                        None => break,
                    }
                }
                Some(outcome) = outcome_receiver.recv() => {
                    self.handle_outcome(outcome, &outcome_sender).await;
                }
            }
        }

        log::info!("Chat sync stopped");
    }

    fn handle_command(&mut self, command: ChatCommand, outcomes: &mpsc::Sender<TaskOutcome>) {
        match command {
            ChatCommand::SendMessage(text) => self.start_send(&text, outcomes),
            ChatCommand::SyncNow => self.request_sync(outcomes),
            ChatCommand::SetUsername(name) => {
                let name = name.trim();
                if !name.is_empty() {
                    self.username = name.to_string();
                }
            }
        }
    }

    async fn handle_outcome(
        &mut self,
        outcome: TaskOutcome,
        outcomes: &mpsc::Sender<TaskOutcome>,
    ) {
        match outcome {
            TaskOutcome::Fetched { request, result } => {
                if self.in_flight == Some(request) {
                    self.in_flight = None;
                }

                if request <= self.last_applied {
                    log::debug!("Discarding superseded sync response #{request}");
                } else {
                    match result {
                        Ok(messages) => {
                            self.last_applied = request;
                            let has_new = self.tracker.observe(messages.len());
                            log::debug!(
                                "Sync #{request}: {} messages (new: {has_new})",
                                self.tracker.previous_count()
                            );
                            self.emit(ChatEvent::MessagesSynced { messages, has_new }).await;
                        }
                        Err(err) => log::warn!("Failed to sync messages: {err}"),
                    }
                }

                if self.resync_pending && self.in_flight.is_none() {
                    self.resync_pending = false;
                    self.start_fetch(outcomes);
                }
            }
            TaskOutcome::Sent(Ok(receipt)) => {
                match receipt {
                    Some(PostReceipt {
                        success,
                        message_id: Some(id),
                        timestamp,
                    }) => log::info!(
                        "Message accepted as #{id} at {} (success: {success})",
                        timestamp.as_deref().unwrap_or("?")
                    ),
                    _ => log::info!("Message accepted"),
                }
                self.emit(ChatEvent::SendSucceeded).await;
                self.request_sync(outcomes);
            }
            TaskOutcome::Sent(Err(err)) => {
                log::warn!("Failed to send message: {err}");
                self.emit(ChatEvent::SendFailed(err)).await;
            }
        }
    }

    /// Issue a fetch unless one is already outstanding.
    fn start_fetch(&mut self, outcomes: &mpsc::Sender<TaskOutcome>) {
        if let Some(request) = self.in_flight {
            log::debug!("Skipping sync tick; request #{request} still in flight");
            return;
        }

        self.last_issued += 1;
        let request = self.last_issued;
        self.in_flight = Some(request);

        let api = Arc::clone(&self.api);
        let outcomes = outcomes.clone();
        tokio::spawn(async move {
            let result = api.fetch_messages().await;
            // The loop may be gone by now; a late result is simply dropped.
            let _ = outcomes.send(TaskOutcome::Fetched { request, result }).await;
        });
    }

    /// Out-of-band sync. Queued behind an outstanding fetch so its result is not stale.
    fn request_sync(&mut self, outcomes: &mpsc::Sender<TaskOutcome>) {
        if self.in_flight.is_some() {
            self.resync_pending = true;
        } else {
            self.start_fetch(outcomes);
        }
    }

    fn start_send(&mut self, text: &str, outcomes: &mpsc::Sender<TaskOutcome>) {
        if text.trim().is_empty() {
            log::debug!("Ignoring blank message");
            return;
        }

        let message = OutgoingMessage::new(&self.user_id, &self.username, text);
        let api = Arc::clone(&self.api);
        let outcomes = outcomes.clone();
        tokio::spawn(async move {
            let result = api.post_message(&message).await;
            let _ = outcomes.send(TaskOutcome::Sent(result)).await;
        });
    }

    async fn emit(&mut self, event: ChatEvent) {
        if let Err(err) = self.event_sender.send(event).await {
            log::debug!("Chat view is gone; dropping event: {err}");
        }
    }
}
