use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Local feature-hashing embedder: each lowercased token adds ±1 to one
/// hashed slot, then the vector is L2-normalized. Deterministic for a given
/// input and dimension, runs fully offline. Default provider when no
/// embedding service is configured, and the test double for the pipelines.
pub struct HashProvider {
    dimension: usize,
}

impl HashProvider {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dimension];
        for token in text.split_whitespace() {
            // DefaultHasher::new() uses fixed keys, so slots are stable
            // across processes.
            let mut hasher = DefaultHasher::new();
            token.to_lowercase().hash(&mut hasher);
            let h = hasher.finish();
            let slot = (h % self.dimension as u64) as usize;
            let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
            vector[slot] += sign;
        }

        let norm = vector
            .iter()
            .map(|x| (*x as f64) * (*x as f64))
            .sum::<f64>()
            .sqrt();
        if norm > 0.0 {
            for x in vector.iter_mut() {
                *x = (*x as f64 / norm) as f32;
            }
        }
        vector
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for HashProvider {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts.iter().map(|t| self.embed_text(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
