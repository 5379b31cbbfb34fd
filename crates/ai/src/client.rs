//! Remote text-generation boundary.

use async_trait::async_trait;
use thiserror::Error;

/// A remote text-generation service: one prompt in, one text payload out.
///
/// Implementations own their transport; no retry and no caching happen at
/// this seam. Trait objects are used so callers can swap a scripted fake in
/// tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a single prompt and return the response text (possibly empty).
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Failure of a remote text-generation call.
///
/// The variants carry diagnostics for logging; callers collapse all of them
/// into one generic failure per operation.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The request never produced an HTTP response (DNS, connect, IO).
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be interpreted.
    #[error("malformed response: {0}")]
    Malformed(String),
}
