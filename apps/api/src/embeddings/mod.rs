//! Embedding Index — makes the Content Store searchable by semantic similarity.
//!
//! ```text
//! Corpus ──► EmbeddingProvider::embed_batch ──► EmbeddingIndex (normalized vectors)
//!                                                    │
//!  query ──► EmbeddingProvider::embed ──────────────►└─► top-k snippets
//! ```
//!
//! The index is built once in `main` and shared read-only through `AppState`.

pub mod index;
pub mod provider;
pub mod similarity;

use thiserror::Error;

pub use index::EmbeddingIndex;
pub use provider::{EmbeddingProvider, OpenAIEmbeddingProvider};

/// A dense vector embedding.
pub type Embedding = Vec<f32>;

pub type Result<T> = std::result::Result<T, EmbeddingError>;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("embedding API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid embedding response: {0}")]
    InvalidResponse(String),

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("cannot build an index over an empty corpus")]
    EmptyCorpus,
}
