pub mod embedding_port;
pub mod follow_up_port;
pub mod vector_store;
