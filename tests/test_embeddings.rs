use knowledgequest::domain::ports::embedding_port::EmbeddingProvider;
use knowledgequest::infrastructure::embeddings::hash::HashProvider;

mod common;

#[tokio::test]
async fn embeddings_are_deterministic() {
    let provider = HashProvider::new(common::TEST_DIMENSION);
    let texts = vec!["sourdough fermentation kinetics".to_string()];

    let first = provider.embed(&texts).await.unwrap();
    let second = provider.embed(&texts).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0].len(), common::TEST_DIMENSION);
}

#[tokio::test]
async fn batch_embedding_preserves_order_and_length() {
    let provider = HashProvider::new(common::TEST_DIMENSION);
    let texts: Vec<String> = vec![
        "gluten development".to_string(),
        "butter lamination".to_string(),
        "sugar crystallization".to_string(),
    ];

    let vectors = provider.embed(&texts).await.unwrap();
    assert_eq!(vectors.len(), 3);
    for v in &vectors {
        assert_eq!(v.len(), common::TEST_DIMENSION);
    }

    // The single-text path must agree with the batch path.
    let single = provider.embed_one(&texts[1]).await.unwrap();
    assert_eq!(single, vectors[1]);
}

#[tokio::test]
async fn nonempty_text_embeds_to_a_unit_vector() {
    let provider = HashProvider::new(common::TEST_DIMENSION);
    let v = provider.embed_one("levain hydration ratio").await.unwrap();
    let norm: f64 = v.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt();
    assert!((norm - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn empty_text_embeds_to_the_zero_vector() {
    let provider = HashProvider::new(common::TEST_DIMENSION);
    let v = provider.embed_one("").await.unwrap();
    assert!(v.iter().all(|x| *x == 0.0));
    assert_eq!(v.len(), common::TEST_DIMENSION);
}

#[tokio::test]
async fn different_texts_embed_differently() {
    let provider = HashProvider::new(common::TEST_DIMENSION);
    let a = provider.embed_one("crumb structure").await.unwrap();
    let b = provider.embed_one("crust caramelization").await.unwrap();
    assert_ne!(a, b);
}
