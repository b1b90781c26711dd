use crate::domain::entities::fragment::Fragment;
use crate::domain::error::DomainError;
use serde::Serialize;

/// Ephemeral search projection; never persisted. `score` is cosine
/// similarity, nominally in [-1, 1].
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityResult {
    pub source_id: String,
    pub text: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceCount {
    pub source_id: String,
    pub fragments: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub fragments: usize,
    pub dimension: usize,
    pub sources: Vec<SourceCount>,
}

/// Durable storage of fragments plus exact cosine top-k search. Safe for
/// concurrent callers; each operation borrows one pooled connection and
/// returns it on every exit path.
pub trait VectorStore: Send + Sync {
    /// Appends all fragments in one transaction. Any vector whose length
    /// differs from the store dimension rejects the whole batch.
    fn insert_batch(&self, fragments: &[Fragment]) -> Result<(), DomainError>;

    /// Exact search over all stored fragments, descending by similarity,
    /// at most `top_k` results. `top_k == 0` returns an empty vec.
    fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<SimilarityResult>, DomainError>;

    fn stats(&self) -> Result<StoreStats, DomainError>;
}
