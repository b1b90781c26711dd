use std::env;

/// Runtime configuration, read from the environment (`.env` files are loaded
/// by the binary before this runs). Every knob has a default so the CLI works
/// out of the box with the offline hashing embedder.
#[derive(Debug, Clone)]
pub struct Config {
    /// KNOWLEDGEQUEST_DB — SQLite database path.
    pub db_path: String,
    /// KNOWLEDGEQUEST_EMBEDDING_PROVIDER — "hash" (offline) or "openai"
    /// (any OpenAI-compatible embeddings endpoint).
    pub embedding_provider: String,
    /// KNOWLEDGEQUEST_EMBEDDING_BASE_URL — endpoint base for the "openai"
    /// provider.
    pub embedding_base_url: String,
    /// KNOWLEDGEQUEST_EMBEDDING_API_KEY
    pub embedding_api_key: String,
    /// KNOWLEDGEQUEST_EMBEDDING_MODEL
    pub embedding_model: String,
    /// KNOWLEDGEQUEST_EMBEDDING_DIMENSION — vector dimension D; must match
    /// the model being served.
    pub embedding_dimension: usize,
    /// GROQ_API_KEY — enables live follow-up questions when set.
    pub groq_api_key: Option<String>,
    /// KNOWLEDGEQUEST_GROQ_MODEL
    pub groq_model: String,
    /// KNOWLEDGEQUEST_RELEVANCE_THRESHOLD — best score above this marks a
    /// query as a strong match.
    pub relevance_threshold: f64,
    /// KNOWLEDGEQUEST_CHUNK_WINDOW — words per fragment.
    pub chunk_window: usize,
    /// KNOWLEDGEQUEST_CHUNK_OVERLAP — words shared between adjacent fragments.
    pub chunk_overlap: usize,
    /// KNOWLEDGEQUEST_TOP_K — default number of results per question.
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "./knowledgequest.db".to_string(),
            embedding_provider: "hash".to_string(),
            embedding_base_url: "https://api.openai.com".to_string(),
            embedding_api_key: String::new(),
            embedding_model: "all-MiniLM-L6-v2".to_string(),
            embedding_dimension: 384,
            groq_api_key: None,
            groq_model: "llama3-8b-8192".to_string(),
            relevance_threshold: 0.70,
            chunk_window: 80,
            chunk_overlap: 15,
            top_k: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Self {
            db_path: env_or("KNOWLEDGEQUEST_DB", defaults.db_path),
            embedding_provider: env_or(
                "KNOWLEDGEQUEST_EMBEDDING_PROVIDER",
                defaults.embedding_provider,
            ),
            embedding_base_url: env_or(
                "KNOWLEDGEQUEST_EMBEDDING_BASE_URL",
                defaults.embedding_base_url,
            ),
            embedding_api_key: env_or(
                "KNOWLEDGEQUEST_EMBEDDING_API_KEY",
                defaults.embedding_api_key,
            ),
            embedding_model: env_or("KNOWLEDGEQUEST_EMBEDDING_MODEL", defaults.embedding_model),
            embedding_dimension: env_parsed(
                "KNOWLEDGEQUEST_EMBEDDING_DIMENSION",
                defaults.embedding_dimension,
            ),
            groq_api_key: env::var("GROQ_API_KEY").ok(),
            groq_model: env_or("KNOWLEDGEQUEST_GROQ_MODEL", defaults.groq_model),
            relevance_threshold: env_parsed(
                "KNOWLEDGEQUEST_RELEVANCE_THRESHOLD",
                defaults.relevance_threshold,
            ),
            chunk_window: env_parsed("KNOWLEDGEQUEST_CHUNK_WINDOW", defaults.chunk_window),
            chunk_overlap: env_parsed("KNOWLEDGEQUEST_CHUNK_OVERLAP", defaults.chunk_overlap),
            top_k: env_parsed("KNOWLEDGEQUEST_TOP_K", defaults.top_k),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
