//! Model catalog
//!
//! The fixed set of generative models the client talks to, one per
//! capability. Ids are the service's published model names.

use std::fmt::{Display, Formatter};

/// Generative model catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenAiModel {
    /// Image generation.
    ImagePreview,
    /// Fast video generation, long-running operation.
    VideoFast,
    /// Full-strength multimodal model, used for analysis and extended
    /// reasoning.
    ProPreview,
    /// Lightweight fast-chat model.
    FlashLite,
    /// Text-to-speech synthesis.
    SpeechPreview,
}

impl GenAiModel {
    /// Wire-level model id.
    pub fn id(self) -> &'static str {
        match self {
            Self::ImagePreview => "gemini-3-pro-image-preview",
            Self::VideoFast => "veo-3.1-fast-generate-preview",
            Self::ProPreview => "gemini-3.1-pro-preview",
            Self::FlashLite => "gemini-2.5-flash-lite-preview",
            Self::SpeechPreview => "gemini-2.5-flash-preview-tts",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::ImagePreview => "Image Preview",
            Self::VideoFast => "Veo Fast",
            Self::ProPreview => "Pro Preview",
            Self::FlashLite => "Flash Lite",
            Self::SpeechPreview => "Speech Preview",
        }
    }

    pub fn all() -> &'static [GenAiModel] {
        const MODELS: [GenAiModel; 5] = [
            GenAiModel::ImagePreview,
            GenAiModel::VideoFast,
            GenAiModel::ProPreview,
            GenAiModel::FlashLite,
            GenAiModel::SpeechPreview,
        ];
        &MODELS
    }
}

impl Display for GenAiModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
