//! PostgreSQL adapter for the job's store seams.

use async_trait::async_trait;

use biograph_core::types::DbId;
use biograph_db::models::author::PendingAuthor;
use biograph_db::repositories::AuthorRepo;
use biograph_db::DbPool;

use crate::job::{AuthorSource, BiographySink, StoreError};

/// Author store backed by the shared connection pool.
///
/// Cloning is cheap; the pool itself is reference-counted.
#[derive(Clone)]
pub struct PgAuthorStore {
    pool: DbPool,
}

impl PgAuthorStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorSource for PgAuthorStore {
    async fn fetch_pending(&self) -> Result<Vec<PendingAuthor>, StoreError> {
        Ok(AuthorRepo::list_pending(&self.pool).await?)
    }
}

#[async_trait]
impl BiographySink for PgAuthorStore {
    async fn save_biography(&self, id: DbId, bio: &str) -> Result<(), StoreError> {
        let rows = AuthorRepo::set_biography(&self.pool, id, bio).await?;
        if rows == 0 {
            return Err(StoreError::Missing { id });
        }
        Ok(())
    }
}
