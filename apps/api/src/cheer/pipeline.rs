//! Cheer pipeline — retrieve → assemble → generate → validate, with a bounded
//! retry on schema mismatches.
//!
//! Flow per attempt:
//!   EmbeddingIndex::retrieve(user_information) → assemble_prompt →
//!   ChatModel::complete → parse_generation → AttemptOutcome
//!
//! Upstream failures (embedding or model provider) are returned immediately.
//! Schema mismatches re-run the whole chain, up to `RetryPolicy::max_attempts`.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cheer::assembler::{assemble_prompt, build_user_information};
use crate::cheer::prompts::CHEER_SYSTEM;
use crate::cheer::validator::{parse_generation, SchemaMismatch};
use crate::embeddings::{EmbeddingError, EmbeddingIndex};
use crate::llm_client::{ChatModel, LlmError};
use crate::models::cheer::{GenerationResult, UserRequest};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("retrieval failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("generation failed: {0}")]
    Llm(#[from] LlmError),

    #[error("model output did not match the message schema after {attempts} attempts: {last}")]
    SchemaExhausted { attempts: u32, last: SchemaMismatch },
}

/// Result of one pass through the chain.
#[derive(Debug)]
pub enum AttemptOutcome {
    Success(GenerationResult),
    SchemaMismatch(SchemaMismatch),
    UpstreamFailure(PipelineError),
}

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts including the first. Treated as at least 1.
    pub max_attempts: u32,
    pub backoff_base: Duration,
}

impl RetryPolicy {
    /// Delay before attempt `attempt` (1-based): none, then base, 2×base, 4×base, ...
    pub fn delay_before(&self, attempt: u32) -> Duration {
        if attempt <= 1 {
            return Duration::ZERO;
        }
        let exponent = (attempt - 2).min(16);
        self.backoff_base.saturating_mul(1 << exponent)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: Duration::from_millis(500),
        }
    }
}

/// The request-independent half of the service: index, model and retry policy.
pub struct CheerPipeline {
    index: Arc<EmbeddingIndex>,
    model: Arc<dyn ChatModel>,
    policy: RetryPolicy,
}

impl CheerPipeline {
    pub fn new(index: Arc<EmbeddingIndex>, model: Arc<dyn ChatModel>, policy: RetryPolicy) -> Self {
        Self {
            index,
            model,
            policy,
        }
    }

    pub fn index(&self) -> &EmbeddingIndex {
        &self.index
    }

    /// Runs the chain for one request. Returns five messages or an error, never a partial list.
    pub async fn run(&self, request: &UserRequest) -> Result<GenerationResult, PipelineError> {
        let user_information = build_user_information(request);
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.attempt(&user_information).await {
                AttemptOutcome::Success(messages) => {
                    info!(
                        "Generated {} messages for {} on attempt {attempt}",
                        messages.len(),
                        request.player_name
                    );
                    return Ok(messages);
                }
                AttemptOutcome::UpstreamFailure(e) => return Err(e),
                AttemptOutcome::SchemaMismatch(mismatch) => {
                    if attempt >= max_attempts {
                        warn!("Giving up after {attempt} attempts: {mismatch}");
                        return Err(PipelineError::SchemaExhausted {
                            attempts: attempt,
                            last: mismatch,
                        });
                    }

                    attempt += 1;
                    let delay = self.policy.delay_before(attempt);
                    warn!(
                        "Generation attempt {}/{max_attempts} rejected ({mismatch}), retrying after {}ms",
                        attempt - 1,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// One full pass: retrieve, assemble, generate, validate.
    pub async fn attempt(&self, user_information: &str) -> AttemptOutcome {
        let snippets = match self.index.retrieve(user_information).await {
            Ok(snippets) => snippets,
            Err(e) => return AttemptOutcome::UpstreamFailure(e.into()),
        };

        let prompt = assemble_prompt(&snippets, user_information);
        debug!("Assembled prompt with {} snippets", snippets.len());

        let raw = match self.model.complete(&prompt, CHEER_SYSTEM).await {
            Ok(raw) => raw,
            Err(e) => return AttemptOutcome::UpstreamFailure(e.into()),
        };

        match parse_generation(&raw) {
            Ok(messages) => AttemptOutcome::Success(messages),
            Err(mismatch) => AttemptOutcome::SchemaMismatch(mismatch),
        }
    }
}
