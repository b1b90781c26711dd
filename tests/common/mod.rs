//! Shared test helpers.
#![allow(dead_code)]

use knowledgequest::config::Config;
use knowledgequest::domain::entities::document::Document;
use knowledgequest::infrastructure::embeddings::hash::HashProvider;
use knowledgequest::infrastructure::llm::fallback::StaticFollowUp;
use knowledgequest::KnowledgeQuest;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_DIMENSION: usize = 64;

pub fn test_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.db_path = dir
        .path()
        .join("quest.db")
        .to_string_lossy()
        .into_owned();
    config.embedding_dimension = TEST_DIMENSION;
    config
}

/// KnowledgeQuest over a temp-file database with the offline hashing
/// embedder and the static follow-up generator.
pub fn setup() -> (KnowledgeQuest, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let kq = KnowledgeQuest::with_providers(
        &config,
        Arc::new(HashProvider::new(TEST_DIMENSION)),
        Arc::new(StaticFollowUp),
    )
    .unwrap();
    (kq, dir)
}

pub fn doc(source_id: &str, text: &str) -> Document {
    Document::new(source_id.to_string(), text.to_string())
}

/// "word0 word1 ... word{n-1}"
pub fn words(n: usize) -> String {
    (0..n).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ")
}
