//! AI-lab panel state machine.
//!
//! Holds the tab, inputs, and last outcome of the experiment panel. The
//! panel owns no client; callers pass a [`GenAiClient`] to the operations
//! that need one.

use vitrine_genai::{AspectRatio, GenAiClient, GenAiError, ImageSize, MediaAttachment};

/// One panel tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabTab {
    #[default]
    Image,
    Video,
    Analyze,
    Chat,
}

impl LabTab {
    pub fn all() -> &'static [LabTab] {
        const TABS: [LabTab; 4] = [LabTab::Image, LabTab::Video, LabTab::Analyze, LabTab::Chat];
        &TABS
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image Gen",
            Self::Video => "Video Gen",
            Self::Analyze => "Analyze",
            Self::Chat => "Chat & Think",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Analyze => "Brain",
            Self::Chat => "Zap",
        }
    }

    /// Prompt placeholder text.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Image => "A futuristic city with flying cars...",
            Self::Video => "A neon hologram of a cat driving...",
            Self::Analyze => "Describe what's happening in this image...",
            Self::Chat => "Ask me anything...",
        }
    }

    /// Aspect ratios offered for this tab. Empty for tabs without an aspect
    /// selector.
    pub fn aspect_options(self) -> &'static [AspectRatio] {
        match self {
            Self::Image => &[
                AspectRatio::Square,
                AspectRatio::Wide,
                AspectRatio::Tall,
                AspectRatio::Classic,
                AspectRatio::Portrait,
            ],
            Self::Video => &[AspectRatio::Wide, AspectRatio::Tall],
            Self::Analyze | Self::Chat => &[],
        }
    }
}

/// Outcome of a successful panel operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabResult {
    /// `data:image/png;base64,` URL.
    Image(String),
    /// Raw video bytes.
    Video(Vec<u8>),
    /// Analysis or chat text.
    Text(String),
}

impl LabResult {
    /// The text payload, when there is one to read aloud.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image(_) | Self::Video(_) => None,
        }
    }
}

/// AI-lab panel state.
///
/// `submit` borrows the panel mutably for the whole round-trip, so overlapping
/// submits from separate tasks serialize on the panel; the last completion
/// wins the displayed state.
#[derive(Debug, Default)]
pub struct LabPanel {
    tab: LabTab,
    busy: bool,
    result: Option<LabResult>,
    error: Option<String>,
    prompt: String,
    aspect_ratio: AspectRatio,
    image_size: ImageSize,
    attachment: Option<MediaAttachment>,
}

impl LabPanel {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== State ==========

    pub fn tab(&self) -> LabTab {
        self.tab
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn result(&self) -> Option<&LabResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    pub fn image_size(&self) -> ImageSize {
        self.image_size
    }

    pub fn attachment(&self) -> Option<&MediaAttachment> {
        self.attachment.as_ref()
    }

    // ========== Inputs ==========

    /// Switch tabs. Clears the previous result and error.
    pub fn select_tab(&mut self, tab: LabTab) {
        self.tab = tab;
        self.result = None;
        self.error = None;
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) {
        self.aspect_ratio = aspect_ratio;
    }

    pub fn set_image_size(&mut self, image_size: ImageSize) {
        self.image_size = image_size;
    }

    pub fn attach(&mut self, media: MediaAttachment) {
        self.attachment = Some(media);
    }

    pub fn clear_attachment(&mut self) {
        self.attachment = None;
    }

    /// Whether the submit button is enabled: something to send, and nothing
    /// in flight.
    pub fn can_submit(&self) -> bool {
        !self.busy && (!self.prompt.is_empty() || self.attachment.is_some())
    }

    // ========== Operations ==========

    /// Run the active tab's operation.
    ///
    /// Clears the previous result and error, dispatches, and stores either
    /// the outcome or the failure message. The busy flag clears either way.
    pub async fn submit(&mut self, client: &GenAiClient) {
        self.busy = true;
        self.error = None;
        self.result = None;

        match self.dispatch(client).await {
            Ok(result) => self.result = Some(result),
            Err(message) => {
                tracing::warn!("lab {} operation failed: {message}", self.tab.label());
                self.error = Some(message);
            }
        }
        self.busy = false;
    }

    async fn dispatch(&self, client: &GenAiClient) -> Result<LabResult, String> {
        match self.tab {
            LabTab::Image => client
                .generate_image(&self.prompt, self.aspect_ratio, self.image_size)
                .await
                .map(LabResult::Image)
                .map_err(describe),
            LabTab::Video => client
                .generate_video(&self.prompt, self.aspect_ratio)
                .await
                .map(LabResult::Video)
                .map_err(describe),
            LabTab::Analyze => {
                let media = self
                    .attachment
                    .as_ref()
                    .ok_or_else(|| "Please upload an image or video".to_string())?;
                let prompt = if self.prompt.is_empty() {
                    "Describe this media"
                } else {
                    self.prompt.as_str()
                };
                let text = client.analyze_media(prompt, media).await.map_err(describe)?;
                Ok(LabResult::Text(or_fallback(text, "No analysis returned")))
            }
            LabTab::Chat => {
                let reply = client.chat(&self.prompt).await.map_err(describe)?;
                Ok(LabResult::Text(or_fallback(reply, "No response")))
            }
        }
    }

    /// Read the current text result aloud. Returns the synthesized audio URL,
    /// or `None` when there is nothing to speak or synthesis failed; a
    /// synthesis failure is logged, never surfaced as a panel error.
    pub async fn speak_result(&self, client: &GenAiClient) -> Option<String> {
        if matches!(self.tab, LabTab::Image | LabTab::Video) {
            return None;
        }
        let text = self.result.as_ref()?.as_text()?;
        match client.generate_speech(text).await {
            Ok(audio) => Some(audio),
            Err(err) => {
                tracing::warn!("speech synthesis failed: {err}");
                None
            }
        }
    }
}

fn describe(err: GenAiError) -> String {
    let message = err.to_string();
    if message.is_empty() {
        "Something went wrong".to_string()
    } else {
        message
    }
}

fn or_fallback(text: String, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_string()
    } else {
        text
    }
}
