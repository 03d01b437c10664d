//! PostgreSQL query layer for works, scenes, and full-text search.
//!
//! Handlers only see the [`SceneStore`] trait; [`PgSceneStore`] is the
//! production implementation. Every statement binds its inputs as
//! parameters, nothing user-supplied is ever formatted into SQL.
//!
//! Expected relations:
//!
//! ```text
//! works  (workid text primary key, title text)
//! scenes (workid text, act int, scene int, description text, body text, tsv tsvector)
//! ```

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// How long a request waits for a pooled connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum number of search hits returned for one query.
pub const SEARCH_LIMIT: i64 = 100;

/// A play in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Work {
    /// Database-assigned work identifier.
    #[sqlx(rename = "workid")]
    pub work_id: String,
    /// Display title.
    pub title: String,
}

/// A single scene of a work.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Scene {
    /// Short label, e.g. "A room of state in the castle."
    pub description: String,
    /// Plain text; `\n\n` separates paragraphs, `\n` separates lines.
    pub body: String,
}

/// One full-text search hit.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SearchResult {
    /// Work identifier of the matching scene.
    #[sqlx(rename = "workid")]
    pub work_id: String,
    /// Work title.
    pub title: String,
    /// Act number.
    pub act: i32,
    /// Scene number.
    pub scene: i32,
    /// Scene description.
    pub description: String,
    /// Highlighted snippet produced by `ts_headline`.
    pub headline: String,
}

/// Query layer error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database rejected the query or could not be reached.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read-only access to the scene corpus.
///
/// Absent rows are `Ok(None)`; `Err` is reserved for store failures.
#[async_trait]
pub trait SceneStore: Send + Sync {
    /// Resolve a work by id.
    async fn get_work(&self, work_id: &str) -> Result<Option<Work>, StoreError>;

    /// Resolve exactly one scene by its composite key.
    async fn get_scene(
        &self,
        work_id: &str,
        act: i32,
        scene: i32,
    ) -> Result<Option<Scene>, StoreError>;

    /// Full-text search across all scenes, in the store's ranking order.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, StoreError>;
}

/// Create a connection pool from a database URL.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

/// [`SceneStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgSceneStore {
    pool: PgPool,
}

impl PgSceneStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SceneStore for PgSceneStore {
    async fn get_work(&self, work_id: &str) -> Result<Option<Work>, StoreError> {
        let work = sqlx::query_as::<_, Work>(
            "SELECT workid, title \
             FROM works \
             WHERE workid = $1",
        )
        .bind(work_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(work)
    }

    async fn get_scene(
        &self,
        work_id: &str,
        act: i32,
        scene: i32,
    ) -> Result<Option<Scene>, StoreError> {
        let row = sqlx::query_as::<_, Scene>(
            "SELECT description, body \
             FROM scenes \
             WHERE workid = $1 AND act = $2 AND scene = $3",
        )
        .bind(work_id)
        .bind(act)
        .bind(scene)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, StoreError> {
        let rows = sqlx::query_as::<_, SearchResult>(
            "SELECT s.workid, w.title, s.act, s.scene, s.description, \
                    ts_headline('english', s.body, q, \
                        'StartSel=<b>, StopSel=</b>, MaxFragments=3, MinWords=5, MaxWords=12') \
                        AS headline \
             FROM scenes s \
             JOIN works w ON w.workid = s.workid, \
                  websearch_to_tsquery('english', $1) q \
             WHERE s.tsv @@ q \
             ORDER BY ts_rank_cd(s.tsv, q) DESC, s.workid, s.act, s.scene \
             LIMIT $2",
        )
        .bind(query)
        .bind(SEARCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(hits = rows.len(), "search completed");

        Ok(rows)
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    fn hamlet_store() -> MemoryStore {
        MemoryStore {
            works: vec![Work {
                work_id: "hamlet".to_string(),
                title: "Hamlet".to_string(),
            }],
            scenes: vec![(
                "hamlet".to_string(),
                1,
                2,
                Scene {
                    description: "A room of state in the castle.".to_string(),
                    body: "Though yet of Hamlet our dear brother's death".to_string(),
                },
            )],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn memory_store_finds_work() {
        let store = hamlet_store();
        let work = store.get_work("hamlet").await.unwrap();
        assert_eq!(work.map(|w| w.title), Some("Hamlet".to_string()));
    }

    #[tokio::test]
    async fn memory_store_missing_scene_is_none() {
        let store = hamlet_store();
        assert!(store.get_scene("hamlet", 1, 3).await.unwrap().is_none());
        assert!(store.get_scene("hamlet", 1, 2).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn memory_store_failure_is_error() {
        let store = MemoryStore {
            fail: true,
            ..hamlet_store()
        };
        assert!(store.get_work("hamlet").await.is_err());
        assert!(store.search("ghost").await.is_err());
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::Database(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("database error:"));
    }
}
