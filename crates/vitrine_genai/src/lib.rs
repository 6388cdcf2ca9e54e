//! Vitrine GenAI
//!
//! Async client for the generative features behind the AI-lab panel.
//!
//! # Operations
//!
//! - Image generation returning `data:image/png;base64,` URLs
//! - Video generation as a polled long-running operation, with a hard
//!   polling budget
//! - Image/video analysis from attached media
//! - Chat, routed between a fast model and an extended-reasoning model
//! - Speech synthesis returning `data:audio/mp3;base64,` URLs
//!
//! # Example
//!
//! ```ignore
//! use vitrine_genai::{AspectRatio, GenAiClient, ImageSize};
//!
//! let client = GenAiClient::from_env()?;
//! let data_url = client
//!     .generate_image("a cyan nebula", AspectRatio::Wide, ImageSize::OneK)
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod models;
pub mod types;

pub use client::GenAiClient;
pub use config::GenAiConfig;
pub use error::{GenAiError, Result};
pub use models::GenAiModel;
pub use types::{AspectRatio, ChatMode, ImageSize, MediaAttachment};
