//! Author row projections.
//!
//! The `author` table is owned by the publishing platform; this worker only
//! reads the identifying columns it needs and writes back `bio` plus
//! `updated_at`.

use serde::Serialize;
use sqlx::FromRow;

use biograph_core::types::DbId;

/// An author row whose `bio` column is still NULL.
///
/// `display_name` is computed in SQL from `first_name` and `last_name`;
/// the worker never sees the individual name columns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingAuthor {
    pub id: DbId,
    pub display_name: String,
}
