//! In-memory nearest-neighbour index over the corpus.

use std::sync::Arc;

use tracing::{debug, info};

use crate::content::Corpus;
use crate::embeddings::provider::EmbeddingProvider;
use crate::embeddings::similarity::{find_top_k, normalize};
use crate::embeddings::{Embedding, EmbeddingError, Result};

pub const DEFAULT_TOP_K: usize = 4;

/// Snippets and their normalized embeddings, in corpus order.
///
/// Built once at startup and never mutated, so it is shared as `Arc<EmbeddingIndex>`.
pub struct EmbeddingIndex {
    provider: Arc<dyn EmbeddingProvider>,
    snippets: Vec<String>,
    embeddings: Vec<Embedding>,
    dimension: usize,
    top_k: usize,
}

impl EmbeddingIndex {
    /// Embeds every snippet in one batch call and builds the index.
    pub async fn build(
        corpus: &Corpus,
        provider: Arc<dyn EmbeddingProvider>,
        top_k: usize,
    ) -> Result<Self> {
        if corpus.is_empty() {
            return Err(EmbeddingError::EmptyCorpus);
        }

        let snippets = corpus.snippets().to_vec();
        let mut embeddings = provider.embed_batch(&snippets).await?;

        if embeddings.len() != snippets.len() {
            return Err(EmbeddingError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                snippets.len(),
                embeddings.len()
            )));
        }

        let dimension = embeddings[0].len();
        for embedding in &mut embeddings {
            if embedding.len() != dimension {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: dimension,
                    actual: embedding.len(),
                });
            }
            normalize(embedding);
        }

        info!(
            "Built embedding index: {} snippets, dimension {dimension}, model {}",
            snippets.len(),
            provider.model()
        );

        Ok(Self {
            provider,
            snippets,
            embeddings,
            dimension,
            top_k: top_k.max(1),
        })
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Returns the `top_k` snippets most similar to `query`, most similar first.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<String>> {
        let query_embedding = self.provider.embed(query).await?;

        if query_embedding.len() != self.dimension {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimension,
                actual: query_embedding.len(),
            });
        }

        let hits = find_top_k(&query_embedding, &self.embeddings, self.top_k)?;
        debug!("Retrieved {} snippets: {:?}", hits.len(), hits);

        Ok(hits
            .into_iter()
            .map(|(position, _)| self.snippets[position].clone())
            .collect())
    }
}
