//! Scripted in-memory `ChatApi` for worker tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::api::ChatApi;
use crate::common::{ChatMessage, OutgoingMessage, PostReceipt};
use crate::error::{FetchError, SendError};

pub fn message(id: i64, text: &str) -> ChatMessage {
    ChatMessage {
        id,
        user_id: format!("user_{id}"),
        username: "Guest".to_string(),
        text: text.to_string(),
        is_creator: false,
        timestamp: "10:30".to_string(),
        created_at: None,
    }
}

pub fn messages(count: i64) -> Vec<ChatMessage> {
    (1..=count).map(|id| message(id, "hello")).collect()
}

#[derive(Default)]
pub struct FakeApi {
    /// Results handed out in order; once drained the last `Ok` list repeats.
    fetches: Mutex<VecDeque<Result<Vec<ChatMessage>, FetchError>>>,
    last_list: Mutex<Vec<ChatMessage>>,
    fetch_delay: Duration,
    fetch_calls: AtomicUsize,
    posts: Mutex<Vec<OutgoingMessage>>,
    post_failure: Mutex<Option<SendError>>,
}

impl FakeApi {
    pub fn new(fetches: Vec<Result<Vec<ChatMessage>, FetchError>>) -> Self {
        Self {
            fetches: Mutex::new(fetches.into()),
            ..Self::default()
        }
    }

    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    pub fn failing_posts(self, error: SendError) -> Self {
        *self.post_failure.lock().unwrap() = Some(error);
        self
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn posts(&self) -> Vec<OutgoingMessage> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatApi for FakeApi {
    async fn fetch_messages(&self) -> Result<Vec<ChatMessage>, FetchError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }

        let next = self.fetches.lock().unwrap().pop_front();
        match next {
            Some(Ok(list)) => {
                *self.last_list.lock().unwrap() = list.clone();
                Ok(list)
            }
            Some(Err(err)) => Err(err),
            None => Ok(self.last_list.lock().unwrap().clone()),
        }
    }

    async fn post_message(
        &self,
        message: &OutgoingMessage,
    ) -> Result<Option<PostReceipt>, SendError> {
        self.posts.lock().unwrap().push(message.clone());
        match self.post_failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(None),
        }
    }
}
