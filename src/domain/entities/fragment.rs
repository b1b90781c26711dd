use serde::{Deserialize, Serialize};

/// A unit of indexed text: one overlapping word-window of a source document
/// together with its embedding. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    pub source_id: String,
    pub text: String,
    pub vector: Vec<f32>,
}

impl Fragment {
    pub fn new(source_id: String, text: String, vector: Vec<f32>) -> Self {
        Self {
            source_id,
            text,
            vector,
        }
    }
}
