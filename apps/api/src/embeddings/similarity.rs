//! Vector math for the index. All functions are pure.

use ordered_float::OrderedFloat;

use crate::embeddings::{Embedding, EmbeddingError, Result};

/// Cosine similarity in [-1.0, 1.0]. Zero-magnitude vectors score 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product / (magnitude_a * magnitude_b))
}

/// Normalize an embedding to unit length in place.
pub fn normalize(embedding: &mut Embedding) {
    let magnitude: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
    if magnitude > 0.0 {
        for x in embedding.iter_mut() {
            *x /= magnitude;
        }
    }
}

/// Returns `(position, score)` of the `k` candidates most similar to `query`,
/// highest score first. Equal scores keep candidate order.
pub fn find_top_k(query: &[f32], candidates: &[Embedding], k: usize) -> Result<Vec<(usize, f32)>> {
    let mut scores: Vec<(usize, OrderedFloat<f32>)> = Vec::with_capacity(candidates.len());

    for (position, embedding) in candidates.iter().enumerate() {
        let score = cosine_similarity(query, embedding)?;
        scores.push((position, OrderedFloat(score)));
    }

    // sort_by is stable, so ties stay in corpus order
    scores.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(scores
        .into_iter()
        .take(k)
        .map(|(position, score)| (position, score.0))
        .collect())
}
