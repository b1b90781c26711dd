use crate::domain::error::DomainError;

/// Maps text to fixed-dimension vectors. Providers are constructed once per
/// process and shared; `embed` must be deterministic for the same input and
/// return one vector per input text, in order.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError>;

    /// Single-text convenience path used by the query pipeline.
    async fn embed_one(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let mut vectors = self.embed(&[text.to_string()]).await?;
        if vectors.is_empty() {
            return Err(DomainError::Embedding(
                "provider returned no vector".to_string(),
            ));
        }
        Ok(vectors.remove(0))
    }

    fn dimension(&self) -> usize;
}
