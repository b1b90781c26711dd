pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::ask::{AskUseCase, QueryResponse};
use crate::application::ingest::{IngestReport, IngestUseCase};
use crate::application::stats::StatsUseCase;
use crate::config::Config;
use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::follow_up_port::FollowUpGenerator;
use crate::domain::ports::vector_store::{StoreStats, VectorStore};
use crate::domain::values::chunk_policy::ChunkPolicy;
use crate::infrastructure::embeddings::hash::HashProvider;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::llm::fallback::StaticFollowUp;
use crate::infrastructure::llm::groq::GroqFollowUp;
use crate::infrastructure::sqlite::vector_store::SqliteVectorStore;
use std::sync::Arc;

pub struct KnowledgeQuest {
    ingest_uc: IngestUseCase,
    ask_uc: AskUseCase,
    stats_uc: StatsUseCase,
}

impl KnowledgeQuest {
    /// Wires providers from configuration: embedding backend by name, live
    /// follow-up generation only when a usable key is present. Provider
    /// choice happens once here, never per call.
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let embedder: Arc<dyn EmbeddingProvider> = match config.embedding_provider.as_str() {
            "openai" => Arc::new(OpenAiProvider::new(
                config.embedding_api_key.clone(),
                Some(config.embedding_base_url.clone()),
                Some(config.embedding_model.clone()),
                config.embedding_dimension,
            )),
            _ => Arc::new(HashProvider::new(config.embedding_dimension)),
        };

        let follow_up: Arc<dyn FollowUpGenerator> = match config.groq_api_key.as_deref() {
            Some(key) if !key.is_empty() && key != "your_groq_api_key_here" => Arc::new(
                GroqFollowUp::new(key.to_string(), Some(config.groq_model.clone())),
            ),
            _ => Arc::new(StaticFollowUp),
        };

        Self::with_providers(config, embedder, follow_up)
    }

    pub fn with_providers(
        config: &Config,
        embedder: Arc<dyn EmbeddingProvider>,
        follow_up: Arc<dyn FollowUpGenerator>,
    ) -> Result<Self, DomainError> {
        let dimension = embedder.dimension();
        if dimension == 0 {
            return Err(DomainError::InvalidInput(
                "embedding provider must report a positive dimension".to_string(),
            ));
        }

        let vector_store: Arc<dyn VectorStore> =
            Arc::new(SqliteVectorStore::open(&config.db_path, dimension)?);
        let policy = ChunkPolicy::new(config.chunk_window, config.chunk_overlap)
            .map_err(DomainError::InvalidInput)?;

        Ok(Self {
            ingest_uc: IngestUseCase::new(embedder.clone(), vector_store.clone(), policy),
            ask_uc: AskUseCase::new(
                embedder,
                vector_store.clone(),
                follow_up,
                config.relevance_threshold,
            ),
            stats_uc: StatsUseCase::new(vector_store),
        })
    }

    pub async fn ingest(&self, documents: Vec<Document>) -> Result<IngestReport, DomainError> {
        self.ingest_uc.execute(documents).await
    }

    pub async fn ask(&self, question: &str, top_k: usize) -> Result<QueryResponse, DomainError> {
        self.ask_uc.execute(question, top_k).await
    }

    pub fn stats(&self) -> Result<StoreStats, DomainError> {
        self.stats_uc.execute()
    }
}
