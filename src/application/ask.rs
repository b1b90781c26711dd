use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::follow_up_port::FollowUpGenerator;
use crate::domain::ports::vector_store::{SimilarityResult, VectorStore};
use serde::Serialize;
use std::sync::Arc;

pub struct AskUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStore>,
    follow_up: Arc<dyn FollowUpGenerator>,
    relevance_threshold: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub results: Vec<SimilarityResult>,
    /// True when the best score clears the relevance threshold; callers use
    /// this for streak/feedback displays.
    pub strong_match: bool,
    pub follow_up: Option<String>,
}

impl AskUseCase {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStore>,
        follow_up: Arc<dyn FollowUpGenerator>,
        relevance_threshold: f64,
    ) -> Self {
        Self {
            embedder,
            vector_store,
            follow_up,
            relevance_threshold,
        }
    }

    pub async fn execute(&self, question: &str, top_k: usize) -> Result<QueryResponse, DomainError> {
        if question.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "question must not be empty".to_string(),
            ));
        }

        let query_vector = self.embedder.embed_one(question).await?;
        let results = self.vector_store.search(&query_vector, top_k)?;

        if results.is_empty() {
            return Ok(QueryResponse {
                results,
                strong_match: false,
                follow_up: None,
            });
        }

        let strong_match = results[0].score > self.relevance_threshold;
        // The generator never fails; a missing provider answers with its
        // own fallback text.
        let follow_up = self.follow_up.generate_follow_up(&results[0].text).await;

        Ok(QueryResponse {
            results,
            strong_match,
            follow_up: Some(follow_up),
        })
    }
}
