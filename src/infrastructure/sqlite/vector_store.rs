use crate::domain::entities::fragment::Fragment;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::{SimilarityResult, SourceCount, StoreStats, VectorStore};
use crate::infrastructure::sqlite::migrations::run_migrations;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use std::time::Duration;

const POOL_MAX_CONNECTIONS: u32 = 10;
const POOL_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct SqliteVectorStore {
    pool: Pool<SqliteConnectionManager>,
    dimension: usize,
}

impl SqliteVectorStore {
    /// Opens the database, builds the connection pool (1..=10 connections,
    /// bounded acquisition timeout) and runs the idempotent schema setup.
    /// Fails if the database is unreachable or was created with a different
    /// vector dimension.
    pub fn open(db_path: &str, dimension: usize) -> Result<Self, DomainError> {
        if dimension == 0 {
            return Err(DomainError::InvalidInput(
                "embedding dimension must be positive".to_string(),
            ));
        }

        // WAL lets readers run alongside the single writer; the busy timeout
        // makes concurrent writers queue instead of failing immediately.
        let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
            conn.pragma_update(None, "journal_mode", "WAL")?;
            conn.busy_timeout(Duration::from_secs(5))
        });
        let pool = Pool::builder()
            .min_idle(Some(1))
            .max_size(POOL_MAX_CONNECTIONS)
            .connection_timeout(POOL_ACQUIRE_TIMEOUT)
            .build(manager)
            .map_err(|e| DomainError::Database(format!("Connection pool error: {e}")))?;

        {
            let conn = pool
                .get()
                .map_err(|e| DomainError::Database(format!("Connection pool error: {e}")))?;
            run_migrations(&conn, dimension)?;
        }

        Ok(Self { pool, dimension })
    }

    fn conn(&self) -> Result<PooledConnection<SqliteConnectionManager>, DomainError> {
        // get() waits at most POOL_ACQUIRE_TIMEOUT, then errors instead of
        // deadlocking on an exhausted pool.
        self.pool
            .get()
            .map_err(|e| DomainError::Database(format!("Connection pool exhausted: {e}")))
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }
        let mut dot = 0.0_f64;
        let mut norm_a = 0.0_f64;
        let mut norm_b = 0.0_f64;
        for (x, y) in a.iter().zip(b.iter()) {
            let x = *x as f64;
            let y = *y as f64;
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        let denom = norm_a.sqrt() * norm_b.sqrt();
        if denom == 0.0 {
            0.0
        } else {
            dot / denom
        }
    }

    fn serialize_vector(v: &[f32]) -> Vec<u8> {
        v.iter().flat_map(|f| f.to_le_bytes()).collect()
    }

    fn deserialize_vector(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect()
    }
}

impl VectorStore for SqliteVectorStore {
    fn insert_batch(&self, fragments: &[Fragment]) -> Result<(), DomainError> {
        if fragments.is_empty() {
            return Ok(());
        }
        // Validate the whole batch up front so a mismatch never leaves
        // orphan rows behind.
        for fragment in fragments {
            if fragment.vector.len() != self.dimension {
                return Err(DomainError::Dimension {
                    expected: self.dimension,
                    actual: fragment.vector.len(),
                });
            }
        }

        let mut conn = self.conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| DomainError::Database(format!("Failed to begin transaction: {e}")))?;
        {
            let mut stmt = tx
                .prepare("INSERT INTO fragments (source_id, text, vector) VALUES (?1, ?2, ?3)")
                .map_err(|e| DomainError::Database(format!("Failed to prepare insert: {e}")))?;
            for fragment in fragments {
                stmt.execute(params![
                    fragment.source_id,
                    fragment.text,
                    Self::serialize_vector(&fragment.vector)
                ])
                .map_err(|e| DomainError::Database(format!("Failed to insert fragment: {e}")))?;
            }
        }
        tx.commit()
            .map_err(|e| DomainError::Database(format!("Failed to commit batch: {e}")))
    }

    fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<SimilarityResult>, DomainError> {
        if top_k == 0 {
            return Ok(Vec::new());
        }
        if query.len() != self.dimension {
            return Err(DomainError::Dimension {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let conn = self.conn()?;
        let mut stmt = conn
            .prepare("SELECT source_id, text, vector FROM fragments")
            .map_err(|e| DomainError::Database(format!("Failed to prepare search: {e}")))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Vec<u8>>(2)?,
                ))
            })
            .map_err(|e| DomainError::Database(format!("Search failed: {e}")))?;

        let mut results = Vec::new();
        for row in rows {
            let (source_id, text, blob) =
                row.map_err(|e| DomainError::Database(format!("Search failed: {e}")))?;
            let stored = Self::deserialize_vector(&blob);
            let score = Self::cosine_similarity(query, &stored);
            results.push(SimilarityResult {
                source_id,
                text,
                score,
            });
        }

        // sort_by is stable, so ties keep their scan order within one query.
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(top_k);
        Ok(results)
    }

    fn stats(&self) -> Result<StoreStats, DomainError> {
        let conn = self.conn()?;
        let fragments: i64 = conn
            .query_row("SELECT COUNT(*) FROM fragments", [], |r| r.get(0))
            .map_err(|e| DomainError::Database(format!("Stats failed: {e}")))?;

        let mut stmt = conn
            .prepare(
                "SELECT source_id, COUNT(*) FROM fragments
                 GROUP BY source_id ORDER BY COUNT(*) DESC, source_id ASC",
            )
            .map_err(|e| DomainError::Database(format!("Stats failed: {e}")))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })
            .map_err(|e| DomainError::Database(format!("Stats failed: {e}")))?;

        let mut sources = Vec::new();
        for row in rows {
            let (source_id, count) =
                row.map_err(|e| DomainError::Database(format!("Stats failed: {e}")))?;
            sources.push(SourceCount {
                source_id,
                fragments: count as usize,
            });
        }

        Ok(StoreStats {
            fragments: fragments as usize,
            dimension: self.dimension,
            sources,
        })
    }
}
