use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "knowledgequest",
    about = "Technical-sheet question answering over a local vector index"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ingest plain-text documents (.txt/.md) from a directory
    Ingest {
        /// Directory scanned recursively for documents
        dir: PathBuf,
    },
    /// Ask a question against the indexed fragments
    Ask {
        question: String,
        /// Number of fragments to retrieve (default from configuration)
        #[arg(long)]
        top_k: Option<usize>,
    },
    /// Show index statistics
    Stats,
}
