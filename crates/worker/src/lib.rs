//! One-shot batch worker that backfills missing author biographies.
//!
//! The worker fetches every author row whose `bio` column is NULL,
//! requests a generated biography from the completion API for each, and
//! writes the result back. Records are processed strictly sequentially;
//! a failure on one record is logged and never blocks the rest of the
//! batch.

pub mod config;
pub mod job;
pub mod store;
