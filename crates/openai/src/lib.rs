//! Client for the hosted chat-completions API used to generate author
//! biographies.
//!
//! [`OpenAiClient`] wraps the `POST /chat/completions` endpoint with a
//! fixed model and sampling temperature. Callers interact through the
//! [`BiographyGenerator`] trait so the remote call can be faked in tests.

pub mod client;
pub mod messages;

pub use client::{BiographyGenerator, GenerationError, OpenAiClient};
