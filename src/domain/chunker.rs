use crate::domain::values::chunk_policy::ChunkPolicy;

/// A fragment-to-be: chunk text already carries the source tag, the vector
/// is attached later by the ingestion pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub source_id: String,
    pub text: String,
}

/// Splits `text` on whitespace into overlapping word-windows. Each window is
/// prefixed with `[Source: {source_id}]` so retrieved fragments stay
/// attributable on their own. Empty or whitespace-only input yields nothing.
pub fn chunk(text: &str, source_id: &str, policy: &ChunkPolicy) -> Vec<Chunk> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let prefix = format!("[Source: {source_id}] ");
    let mut chunks = Vec::new();
    let mut start = 0;
    loop {
        let end = (start + policy.window()).min(words.len());
        let body = words[start..end].join(" ");
        chunks.push(Chunk {
            source_id: source_id.to_string(),
            text: format!("{prefix}{body}"),
        });
        // The window that reaches the end is the last one emitted.
        if start + policy.window() >= words.len() {
            break;
        }
        start += policy.stride();
    }
    chunks
}
