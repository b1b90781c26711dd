use serde::{Deserialize, Serialize};

/// Ingestion input supplied by an external extractor. The core only sees
/// plain text; file formats are somebody else's problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub source_id: String,
    pub text: String,
}

impl Document {
    pub fn new(source_id: String, text: String) -> Self {
        Self { source_id, text }
    }
}
