//! The biography backfill job.
//!
//! [`BackfillJob`] drives one run: fetch every author still missing a
//! biography, generate text for each, and persist whatever came back
//! non-empty. The job talks to its collaborators through the
//! [`AuthorSource`], [`BiographyGenerator`] and [`BiographySink`] seams
//! so the whole loop can be exercised against in-memory fakes.
//!
//! Failure policy: a fetch failure aborts the run (nothing has been
//! processed yet); generation and write failures are contained to the
//! record they occurred on and the loop moves to the next author.

use async_trait::async_trait;

use biograph_core::types::DbId;
use biograph_db::models::author::PendingAuthor;
use biograph_openai::BiographyGenerator;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the store side of the job.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying query or connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An UPDATE matched no row; the author was deleted externally
    /// between fetch and persist.
    #[error("author {id} no longer exists")]
    Missing { id: DbId },
}

// ---------------------------------------------------------------------------
// Collaborator seams
// ---------------------------------------------------------------------------

/// Read access to authors still lacking a biography.
#[async_trait]
pub trait AuthorSource: Send + Sync {
    /// Fetch all pending authors, in store-defined order.
    async fn fetch_pending(&self) -> Result<Vec<PendingAuthor>, StoreError>;
}

/// Write access to persist one biography onto one author row.
#[async_trait]
pub trait BiographySink: Send + Sync {
    /// Set the biography for `id`. Callers only pass non-empty text.
    async fn save_biography(&self, id: DbId, bio: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Run summary
// ---------------------------------------------------------------------------

/// Aggregated outcome of one backfill run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Authors fetched as pending at the start of the run.
    pub fetched: usize,
    /// Biographies generated and written back.
    pub succeeded: usize,
    /// Records skipped after a generation or write failure.
    pub skipped: usize,
}

// ---------------------------------------------------------------------------
// BackfillJob
// ---------------------------------------------------------------------------

/// One-shot orchestrator for the fetch -> generate -> persist loop.
pub struct BackfillJob<S, G, K> {
    source: S,
    generator: G,
    sink: K,
}

impl<S, G, K> BackfillJob<S, G, K>
where
    S: AuthorSource,
    G: BiographyGenerator,
    K: BiographySink,
{
    /// Assemble a job from its three collaborators.
    pub fn new(source: S, generator: G, sink: K) -> Self {
        Self {
            source,
            generator,
            sink,
        }
    }

    /// Execute one full run over all currently pending authors.
    ///
    /// Returns the run summary, or the store error if the initial fetch
    /// failed. Records are processed strictly in sequence; each one is
    /// attempted exactly once.
    pub async fn run(&self) -> Result<RunSummary, StoreError> {
        let pending = self.source.fetch_pending().await?;

        let mut summary = RunSummary {
            fetched: pending.len(),
            ..RunSummary::default()
        };

        if pending.is_empty() {
            tracing::info!("No authors pending a biography");
            return Ok(summary);
        }

        tracing::info!(count = pending.len(), "Fetched authors pending a biography");

        for author in &pending {
            tracing::info!(
                author_id = author.id,
                name = %author.display_name,
                "Generating biography"
            );

            let bio = match self.generator.generate(&author.display_name).await {
                Ok(bio) => bio,
                Err(e) => {
                    tracing::warn!(
                        author_id = author.id,
                        name = %author.display_name,
                        error = %e,
                        "Biography generation failed, skipping"
                    );
                    summary.skipped += 1;
                    continue;
                }
            };

            match self.sink.save_biography(author.id, &bio).await {
                Ok(()) => {
                    tracing::info!(
                        author_id = author.id,
                        name = %author.display_name,
                        "Biography updated"
                    );
                    summary.succeeded += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        author_id = author.id,
                        name = %author.display_name,
                        error = %e,
                        "Biography write failed, skipping"
                    );
                    summary.skipped += 1;
                }
            }
        }

        tracing::info!(
            fetched = summary.fetched,
            succeeded = summary.succeeded,
            skipped = summary.skipped,
            "Backfill run complete"
        );

        Ok(summary)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
