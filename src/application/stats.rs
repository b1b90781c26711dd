use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::{StoreStats, VectorStore};
use std::sync::Arc;

pub struct StatsUseCase {
    vector_store: Arc<dyn VectorStore>,
}

impl StatsUseCase {
    pub fn new(vector_store: Arc<dyn VectorStore>) -> Self {
        Self { vector_store }
    }

    pub fn execute(&self) -> Result<StoreStats, DomainError> {
        self.vector_store.stats()
    }
}
