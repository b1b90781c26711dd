pub mod chunk_policy;
