//! Client error types

use thiserror::Error;

/// Errors surfaced by the generative client.
///
/// The `EmptyResponse` and `VideoDownload` display strings are shown to the
/// user verbatim by the AI-lab panel, so they stay short and fixed.
#[derive(Debug, Error)]
pub enum GenAiError {
    /// No API key in the config or environment.
    #[error("api key not configured")]
    MissingApiKey,

    /// Transport-level failure (connection, TLS, timeout, body decode).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },

    /// A long-running video operation reported a failure.
    #[error("video generation failed: {0}")]
    Operation(String),

    /// The operation never completed within the polling budget.
    #[error("video generation timed out after {attempts} polls")]
    PollTimeout { attempts: u32 },

    /// The call succeeded but the payload the caller asked for is missing.
    #[error("{0}")]
    EmptyResponse(&'static str),

    /// Fetching the finished video bytes failed.
    #[error("Failed to download video")]
    VideoDownload { status: u16 },
}

pub type Result<T> = std::result::Result<T, GenAiError>;
