//! In-process stand-in for the Gemini client, with call counting.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{GenerativeModel, LlmError};

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Fail(String),
}

pub struct ScriptedModel {
    reply: Mutex<Reply>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedModel {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Reply::Text(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Fail(message.into()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply: Mutex::new(reply),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn reply_with(&self, text: impl Into<String>) {
        *self.reply.lock().unwrap() = Reply::Text(text.into());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match self.reply.lock().unwrap().clone() {
            Reply::Text(text) => Ok(text),
            Reply::Fail(message) => Err(LlmError::Api {
                status: 503,
                message,
            }),
        }
    }
}
