pub mod fallback;
pub mod groq;
