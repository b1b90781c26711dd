pub mod ask;
pub mod ingest;
pub mod stats;
