use clap::Parser;
use knowledgequest::cli::commands::{Cli, Commands};
use knowledgequest::config::Config;
use knowledgequest::domain::entities::document::Document;
use knowledgequest::KnowledgeQuest;
use std::path::Path;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let kq = match KnowledgeQuest::new(&config) {
        Ok(kq) => kq,
        Err(e) => {
            eprintln!("Error initializing KnowledgeQuest: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(kq, &config, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(
    kq: KnowledgeQuest,
    config: &Config,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Ingest { dir } => {
            let documents = read_documents(&dir)?;
            let report = kq.ingest(documents).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Ask { question, top_k } => {
            let response = kq.ask(&question, top_k.unwrap_or(config.top_k)).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Stats => {
            let stats = kq.stats()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}

/// Walks `dir` and reads `.txt`/`.md` files as UTF-8. Unreadable files become
/// empty documents so the ingestion report counts them as skipped; richer
/// formats (PDF, DOCX) need an external extractor to produce text first.
fn read_documents(dir: &Path) -> Result<Vec<Document>, Box<dyn std::error::Error>> {
    if !dir.is_dir() {
        return Err(format!("not a directory: {}", dir.display()).into());
    }

    let mut documents = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in std::fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase());
            if !matches!(ext.as_deref(), Some("txt") | Some("md")) {
                continue;
            }
            let source_id = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string();
            match std::fs::read_to_string(&path) {
                Ok(text) => documents.push(Document::new(source_id, text)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to read file");
                    documents.push(Document::new(source_id, String::new()));
                }
            }
        }
    }
    Ok(documents)
}
