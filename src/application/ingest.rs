use crate::domain::chunker;
use crate::domain::entities::document::Document;
use crate::domain::entities::fragment::Fragment;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::chunk_policy::ChunkPolicy;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

pub struct IngestUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStore>,
    policy: ChunkPolicy,
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub documents_seen: usize,
    pub documents_ingested: usize,
    pub documents_skipped: usize,
    pub fragments_inserted: usize,
    pub completed_at: DateTime<Utc>,
}

impl IngestUseCase {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStore>,
        policy: ChunkPolicy,
    ) -> Self {
        Self {
            embedder,
            vector_store,
            policy,
        }
    }

    /// Chunks and embeds every document, then writes the accumulated
    /// fragments in a single batch insert. Documents with no extractable
    /// text are skipped with a warning; embedding and storage failures
    /// propagate because they affect the whole run.
    pub async fn execute(&self, documents: Vec<Document>) -> Result<IngestReport, DomainError> {
        let documents_seen = documents.len();
        let mut documents_ingested = 0;
        let mut documents_skipped = 0;
        let mut all_fragments: Vec<Fragment> = Vec::new();

        for document in &documents {
            let chunks = chunker::chunk(&document.text, &document.source_id, &self.policy);
            if chunks.is_empty() {
                tracing::warn!(source_id = %document.source_id, "no text extracted, skipping document");
                documents_skipped += 1;
                continue;
            }

            let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
            let vectors = self.embedder.embed(&texts).await?;
            if vectors.len() != chunks.len() {
                return Err(DomainError::Embedding(format!(
                    "expected {} vectors, got {}",
                    chunks.len(),
                    vectors.len()
                )));
            }

            tracing::debug!(source_id = %document.source_id, fragments = chunks.len(), "generated fragments");
            for (chunk, vector) in chunks.into_iter().zip(vectors) {
                all_fragments.push(Fragment::new(chunk.source_id, chunk.text, vector));
            }
            documents_ingested += 1;
        }

        let fragments_inserted = all_fragments.len();
        if !all_fragments.is_empty() {
            self.vector_store.insert_batch(&all_fragments)?;
        }

        Ok(IngestReport {
            documents_seen,
            documents_ingested,
            documents_skipped,
            fragments_inserted,
            completed_at: Utc::now(),
        })
    }
}
