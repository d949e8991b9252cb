//! Mock [`ChatModel`] for testing.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::port::outbound::llm::{ChatMessage, ChatModel, ModelReply, Role};

/// One recorded call to a [`ScriptedModel`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub candidate: String,
    pub messages: Vec<ChatMessage>,
}

impl RecordedCall {
    /// Content of the user message, or an empty string.
    pub fn user_prompt(&self) -> &str {
        self.messages
            .iter()
            .find(|message| message.role == Role::User)
            .map(|message| message.content.as_str())
            .unwrap_or_default()
    }
}

/// A model with a scripted reply queue.
///
/// Each call pops the next scripted result. Once the queue is empty every
/// call fails with a transport error, so a test that under-scripts a
/// scenario fails loudly instead of hanging.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<ModelReply>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a response with the given status and body.
    pub fn reply(self, status: u16, body: impl Into<String>) -> Self {
        self.replies.lock().push_back(Ok(ModelReply::new(status, body)));
        self
    }

    /// Queue a failure that never produced a response.
    pub fn transport_error(self, reason: &str) -> Self {
        self.replies
            .lock()
            .push_back(Err(Error::Transport(reason.to_string())));
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Number of scripted results not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.lock().len()
    }
}

impl Default for ScriptedModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn call(&self, candidate: &str, messages: &[ChatMessage]) -> Result<ModelReply> {
        self.calls.lock().push(RecordedCall {
            candidate: candidate.to_string(),
            messages: messages.to_vec(),
        });
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transport("no scripted reply left".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_then_fails() {
        let model = ScriptedModel::new().reply(503, "loading").reply(200, "[]");
        let messages = [ChatMessage::user("names")];

        let first = tokio_test::block_on(model.call("a", &messages)).unwrap();
        let second = tokio_test::block_on(model.call("b", &messages)).unwrap();
        let third = tokio_test::block_on(model.call("c", &messages));

        assert!(first.is_unavailable());
        assert_eq!(second.body, "[]");
        assert!(matches!(third, Err(Error::Transport(_))));
        assert_eq!(model.calls()[1].candidate, "b");
        assert_eq!(model.calls()[2].user_prompt(), "names");
    }
}
