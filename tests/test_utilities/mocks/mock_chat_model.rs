use async_trait::async_trait;
use falcon_fix::ports::outbound::{ChatMessage, ChatReply, ToolCall, ToolDefinition};
use falcon_fix::prelude::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock ChatModel replaying a script of replies.
///
/// Every request is recorded. Once the script is exhausted the mock fails,
/// which lets tests exercise the chat-error path.
#[derive(Default, Clone)]
pub struct MockChatModel {
    replies: Arc<Mutex<VecDeque<ChatReply>>>,
    requests: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl MockChatModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_answer(self, content: &str) -> Self {
        self.replies.lock().unwrap().push_back(ChatReply {
            content: Some(content.to_string()),
            tool_calls: Vec::new(),
        });
        self
    }

    pub fn then_call_tool(self, name: &str, arguments: &str) -> Self {
        let mut replies = self.replies.lock().unwrap();
        let id = format!("call_{}", replies.len() + 1);
        replies.push_back(ChatReply {
            content: None,
            tool_calls: vec![ToolCall {
                id,
                name: name.to_string(),
                arguments: arguments.to_string(),
            }],
        });
        drop(replies);
        self
    }

    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _tools: &[ToolDefinition],
    ) -> Result<ChatReply> {
        self.requests.lock().unwrap().push(messages.to_vec());
        match self.replies.lock().unwrap().pop_front() {
            Some(reply) => Ok(reply),
            None => anyhow::bail!("Chat API error (503): service unavailable"),
        }
    }
}
