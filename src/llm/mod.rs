//! Generative model clients.
//!
//! The run loop talks to the model through the [`GenerativeModel`] trait
//! so tests can script replies without a network. The only production
//! implementation is the Gemini API client.

pub mod gemini;

pub use gemini::{GeminiClient, GeminiConfig};

use anyhow::Result;
use async_trait::async_trait;

/// A text-in, text-out generative model.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Model identifier, for logs and banners.
    fn name(&self) -> &str;

    /// Sends one prompt and returns the model's raw text reply.
    ///
    /// Errors are returned to the caller unretried; the run loop turns
    /// them into per-row sentinel records.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
