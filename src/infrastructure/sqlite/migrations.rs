use crate::domain::error::DomainError;
use rusqlite::{params, Connection, OptionalExtension};

/// Idempotent schema setup. Vectors are stored as little-endian f32 blobs;
/// the CHECK constraint pins every row to exactly `dimension` floats, the
/// sqlite equivalent of a typed VECTOR(D) column.
pub fn run_migrations(conn: &Connection, dimension: usize) -> Result<(), DomainError> {
    let vector_bytes = dimension * 4;
    conn.execute_batch(&format!(
        "
        CREATE TABLE IF NOT EXISTS fragments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            source_id TEXT NOT NULL,
            text TEXT NOT NULL,
            vector BLOB NOT NULL CHECK (length(vector) = {vector_bytes}),
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_fragments_source ON fragments(source_id);

        CREATE TABLE IF NOT EXISTS store_meta (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "
    ))
    .map_err(|e| DomainError::Database(format!("Migration failed: {e}")))?;

    // The dimension is recorded on first init; later opens must agree with it.
    let stored: Option<String> = conn
        .query_row(
            "SELECT value FROM store_meta WHERE key = 'dimension'",
            [],
            |r| r.get(0),
        )
        .optional()
        .map_err(|e| DomainError::Database(format!("Migration failed: {e}")))?;

    match stored {
        Some(value) => {
            let stored_dim: usize = value
                .parse()
                .map_err(|_| DomainError::Parse(format!("Bad stored dimension: {value}")))?;
            if stored_dim != dimension {
                return Err(DomainError::Dimension {
                    expected: stored_dim,
                    actual: dimension,
                });
            }
        }
        None => {
            conn.execute(
                "INSERT INTO store_meta (key, value) VALUES ('dimension', ?1)",
                params![dimension.to_string()],
            )
            .map_err(|e| DomainError::Database(format!("Migration failed: {e}")))?;
        }
    }

    Ok(())
}
