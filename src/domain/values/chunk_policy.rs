use serde::{Deserialize, Serialize};

/// Sliding-window parameters for the chunker. The window advances by
/// `window - overlap` tokens, so the overlap must leave a positive stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkPolicy {
    window: usize,
    overlap: usize,
}

impl ChunkPolicy {
    pub const DEFAULT_WINDOW: usize = 80;
    pub const DEFAULT_OVERLAP: usize = 15;

    pub fn new(window: usize, overlap: usize) -> Result<Self, String> {
        if window == 0 {
            return Err("chunk window must be at least 1 token".to_string());
        }
        if overlap >= window {
            return Err(format!(
                "chunk overlap ({overlap}) must be smaller than the window ({window})"
            ));
        }
        Ok(ChunkPolicy { window, overlap })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    pub fn stride(&self) -> usize {
        self.window - self.overlap
    }
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        ChunkPolicy {
            window: Self::DEFAULT_WINDOW,
            overlap: Self::DEFAULT_OVERLAP,
        }
    }
}
