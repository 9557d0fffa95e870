use std::time::{Duration, Instant};

use crate::common::{ChatEvent, ChatMessage};

use super::notice::{NewMessageSignal, ToastKind, Toasts};

/// Local state of the chat view. Rebuilt every time the view is mounted.
pub struct AppState {
    /// Last list the server returned, oldest first.
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
    pub sending: bool,
    pub name_input: String,
    /// Name prompt reopened from the header to change an existing name.
    pub renaming: bool,
    pub new_message: NewMessageSignal,
    pub toasts: Toasts,
    pub scroll_to_bottom: bool,
}

impl AppState {
    pub fn new(new_message_window: Duration) -> Self {
        Self {
            messages: Vec::new(),
            input_text: String::new(),
            sending: false,
            name_input: String::new(),
            renaming: false,
            new_message: NewMessageSignal::new(new_message_window),
            toasts: Toasts::default(),
            scroll_to_bottom: false,
        }
    }

    pub fn can_send(&self) -> bool {
        !self.sending && !self.input_text.trim().is_empty()
    }

    /// Trimmed text to submit, or `None` for blank input. The input itself is
    /// only cleared once the server accepts the message.
    pub fn take_outgoing(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        self.sending = true;
        Some(self.input_text.trim().to_string())
    }

    pub fn apply_event(&mut self, event: ChatEvent, now: Instant) {
        match event {
            ChatEvent::MessagesSynced { messages, has_new } => {
                self.messages = messages;
                if has_new {
                    self.new_message.raise(now);
                }
                self.scroll_to_bottom = true;
            }
            ChatEvent::SendSucceeded => {
                self.sending = false;
                self.input_text.clear();
            }
            ChatEvent::SendFailed(err) => {
                self.sending = false;
                self.toasts.push(ToastKind::Error, err.user_message(), now);
            }
        }
    }

    pub fn name_saved(&mut self, name: &str, now: Instant) {
        self.name_input.clear();
        self.renaming = false;
        self.toasts
            .push(ToastKind::Info, format!("Nice to meet you, {name}!"), now);
    }
}
