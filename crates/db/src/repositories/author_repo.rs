//! Repository for the `author` table.

use sqlx::PgPool;

use biograph_core::types::DbId;

use crate::models::author::PendingAuthor;

/// Read and write access to author biography columns.
pub struct AuthorRepo;

impl AuthorRepo {
    /// List all authors whose biography has not been filled in yet.
    ///
    /// Returns `(id, display_name)` projections in store-defined order;
    /// callers must not rely on any particular ordering.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<PendingAuthor>, sqlx::Error> {
        sqlx::query_as::<_, PendingAuthor>(
            "SELECT id, CONCAT(first_name, ' ', last_name) AS display_name
             FROM author
             WHERE bio IS NULL",
        )
        .fetch_all(pool)
        .await
    }

    /// Set the biography for one author and bump `updated_at`.
    ///
    /// Each call is its own implicitly-committed statement. Returns the
    /// number of rows matched (zero when the author no longer exists).
    pub async fn set_biography(pool: &PgPool, id: DbId, bio: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE author
             SET bio = $1, updated_at = NOW()
             WHERE id = $2",
        )
        .bind(bio)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
