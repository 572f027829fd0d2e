//! Test doubles for the two network seams: `EmbeddingProvider` and `ChatModel`.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::embeddings::{Embedding, EmbeddingError, EmbeddingProvider};
use crate::llm_client::{ChatModel, LlmError};

/// Embeds text as keyword counts over a fixed vocabulary, plus a constant
/// bias axis so no vector is all zeros.
pub struct KeywordEmbeddingProvider {
    vocabulary: Vec<&'static str>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl KeywordEmbeddingProvider {
    pub fn new(vocabulary: Vec<&'static str>) -> Self {
        Self {
            vocabulary,
            failing: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Makes every later call fail as if the service were down.
    pub fn go_offline(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn vectorize(&self, text: &str) -> Embedding {
        let mut v: Embedding = self
            .vocabulary
            .iter()
            .map(|word| text.matches(word).count() as f32)
            .collect();
        v.push(0.1);
        v
    }
}

#[async_trait]
impl EmbeddingProvider for KeywordEmbeddingProvider {
    fn model(&self) -> &str {
        "keyword-test"
    }

    async fn embed_batch(&self, texts: &[String]) -> crate::embeddings::Result<Vec<Embedding>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(EmbeddingError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }
}

/// Replays canned replies in order; once exhausted, repeats the last one.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    last: Mutex<Option<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            last: Mutex::new(None),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: &str) -> Self {
        Self::new(vec![Ok(reply.to_string())])
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => {
                *self.last.lock().unwrap() = Some(text.clone());
                Ok(text)
            }
            Some(Err(e)) => Err(e),
            None => Ok(self.last.lock().unwrap().clone().unwrap_or_default()),
        }
    }
}

/// A well-formed five-message reply.
pub fn five_messages_json() -> String {
    let messages: Vec<serde_json::Value> = (1..=5)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "text": format!("테스트선수,\n응원 메시지 {id}")
            })
        })
        .collect();
    serde_json::Value::Array(messages).to_string()
}
