//! Generative client
//!
//! One client, five operations: image generation, video generation with
//! bounded polling, media analysis, routed chat, and speech synthesis. All
//! operations authenticate with the `x-goog-api-key` header and speak the
//! service's camelCase JSON from [`crate::types`].

use crate::config::GenAiConfig;
use crate::error::{GenAiError, Result};
use crate::models::GenAiModel;
use crate::types::{
    AspectRatio, ChatMode, Content, GenerateContentRequest, GenerateContentResponse,
    GenerateVideosRequest, GenerationConfig, ImageConfig, ImageSize, MediaAttachment, Part,
    PrebuiltVoiceConfig, SpeechConfig, ThinkingConfig, VideoInstance, VideoOperation,
    VideoParameters, VoiceConfig,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Async client over the generative-language service.
pub struct GenAiClient {
    http: reqwest::Client,
    config: GenAiConfig,
}

impl GenAiClient {
    pub fn new(config: GenAiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Client configured from defaults plus environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(GenAiConfig::from_env())
    }

    pub fn config(&self) -> &GenAiConfig {
        &self.config
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(GenAiError::MissingApiKey)
    }

    fn model_url(&self, model: GenAiModel, verb: &str) -> String {
        format!(
            "{}/v1beta/models/{}:{}",
            self.config.base_url,
            model.id(),
            verb
        )
    }

    async fn generate_content(
        &self,
        model: GenAiModel,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let key = self.api_key()?;
        debug!(model = model.id(), "generate_content request");
        let response = self
            .http
            .post(self.model_url(model, "generateContent"))
            .header(API_KEY_HEADER, key)
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(GenAiError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.json().await?)
    }

    // ========== Image generation ==========

    /// Generates an image and returns it as a `data:image/png;base64,` URL.
    pub async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        image_size: ImageSize,
    ) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(prompt)],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: aspect_ratio.as_str().to_string(),
                    image_size: image_size.as_str().to_string(),
                }),
                ..GenerationConfig::default()
            }),
        };
        let response = self
            .generate_content(GenAiModel::ImagePreview, &request)
            .await?;
        extract_image(&response)
    }

    // ========== Video generation ==========

    /// Generates a short video and returns the raw bytes.
    ///
    /// The service runs this as a long-running operation; the client polls
    /// every `poll_interval_secs` up to `max_poll_attempts` times and then
    /// gives up, so a stuck job cannot spin forever.
    pub async fn generate_video(&self, prompt: &str, aspect_ratio: AspectRatio) -> Result<Vec<u8>> {
        let key = self.api_key()?;
        let request = GenerateVideosRequest {
            instances: vec![VideoInstance {
                prompt: prompt.to_string(),
            }],
            parameters: VideoParameters {
                sample_count: 1,
                resolution: "720p".to_string(),
                aspect_ratio: aspect_ratio.as_str().to_string(),
            },
        };
        debug!(model = GenAiModel::VideoFast.id(), "starting video operation");
        let response = self
            .http
            .post(self.model_url(GenAiModel::VideoFast, "predictLongRunning"))
            .header(API_KEY_HEADER, key)
            .json(&request)
            .send()
            .await?;
        let operation: VideoOperation = Self::decode(response).await?;
        let operation = self.poll_until_done(operation).await?;
        let uri = resolve_video_uri(&operation)?;

        debug!(uri = uri.as_str(), "downloading generated video");
        let download = self
            .http
            .get(&uri)
            .header(API_KEY_HEADER, key)
            .send()
            .await?;
        if !download.status().is_success() {
            return Err(GenAiError::VideoDownload {
                status: download.status().as_u16(),
            });
        }
        Ok(download.bytes().await?.to_vec())
    }

    async fn poll_until_done(&self, mut operation: VideoOperation) -> Result<VideoOperation> {
        let mut attempts = 0u32;
        while !operation.done {
            if attempts >= self.config.max_poll_attempts {
                return Err(GenAiError::PollTimeout { attempts });
            }
            attempts += 1;
            tokio::time::sleep(Duration::from_secs(self.config.poll_interval_secs)).await;
            debug!(
                name = operation.name.as_str(),
                attempt = attempts,
                "polling video operation"
            );
            operation = self.fetch_operation(&operation.name).await?;
        }
        Ok(operation)
    }

    async fn fetch_operation(&self, name: &str) -> Result<VideoOperation> {
        let key = self.api_key()?;
        let response = self
            .http
            .get(format!("{}/v1beta/{}", self.config.base_url, name))
            .header(API_KEY_HEADER, key)
            .send()
            .await?;
        Self::decode(response).await
    }

    // ========== Media analysis ==========

    /// Describes or answers questions about an attached image or video.
    /// Returns the model's text, which may be empty.
    pub async fn analyze_media(&self, prompt: &str, media: &MediaAttachment) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::inline(media.mime_type.clone(), BASE64.encode(&media.bytes)),
                    Part::text(prompt),
                ],
            }],
            generation_config: None,
        };
        let response = self
            .generate_content(GenAiModel::ProPreview, &request)
            .await?;
        Ok(response.text().unwrap_or_default())
    }

    // ========== Chat ==========

    /// Routes the prompt through [`ChatMode::for_prompt`] and answers with
    /// the chosen model.
    pub async fn chat(&self, prompt: &str) -> Result<String> {
        match ChatMode::for_prompt(prompt) {
            ChatMode::Fast => self.chat_fast(prompt).await,
            ChatMode::Thinking => self.chat_thinking(prompt).await,
        }
    }

    pub async fn chat_fast(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(prompt)],
            generation_config: None,
        };
        let response = self
            .generate_content(GenAiModel::FlashLite, &request)
            .await?;
        Ok(response.text().unwrap_or_default())
    }

    pub async fn chat_thinking(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(prompt)],
            generation_config: Some(GenerationConfig {
                thinking_config: Some(ThinkingConfig {
                    thinking_level: "HIGH".to_string(),
                }),
                ..GenerationConfig::default()
            }),
        };
        let response = self
            .generate_content(GenAiModel::ProPreview, &request)
            .await?;
        Ok(response.text().unwrap_or_default())
    }

    // ========== Speech synthesis ==========

    /// Synthesizes speech for a text and returns it as a
    /// `data:audio/mp3;base64,` URL.
    pub async fn generate_speech(&self, text: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(text)],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: "Kore".to_string(),
                        },
                    },
                }),
                ..GenerationConfig::default()
            }),
        };
        let response = self
            .generate_content(GenAiModel::SpeechPreview, &request)
            .await?;
        extract_speech(&response)
    }
}

fn extract_image(response: &GenerateContentResponse) -> Result<String> {
    let data = response
        .first_inline_data()
        .ok_or(GenAiError::EmptyResponse("No image generated"))?;
    Ok(format!("data:image/png;base64,{}", data.data))
}

fn extract_speech(response: &GenerateContentResponse) -> Result<String> {
    let data = response
        .first_inline_data()
        .ok_or(GenAiError::EmptyResponse("No audio generated"))?;
    Ok(format!("data:audio/mp3;base64,{}", data.data))
}

fn resolve_video_uri(operation: &VideoOperation) -> Result<String> {
    if let Some(err) = &operation.error {
        return Err(GenAiError::Operation(err.message.clone()));
    }
    operation
        .response
        .as_ref()
        .and_then(|r| r.generated_videos.first())
        .and_then(|v| v.video.as_ref())
        .map(|v| v.uri.clone())
        .filter(|uri| !uri.is_empty())
        .ok_or(GenAiError::EmptyResponse("No video generated"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client(max_poll_attempts: u32) -> GenAiClient {
        GenAiClient::new(GenAiConfig {
            api_key: Some("test-key".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
            poll_interval_secs: 0,
            max_poll_attempts,
            request_timeout_secs: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_missing_api_key_is_rejected_before_any_request() {
        let client = GenAiClient::new(GenAiConfig::default()).unwrap();
        assert!(matches!(client.api_key(), Err(GenAiError::MissingApiKey)));

        let blank = GenAiClient::new(GenAiConfig {
            api_key: Some(String::new()),
            ..GenAiConfig::default()
        })
        .unwrap();
        assert!(matches!(blank.api_key(), Err(GenAiError::MissingApiKey)));
    }

    #[test]
    fn test_model_urls() {
        let client = offline_client(0);
        assert_eq!(
            client.model_url(GenAiModel::ImagePreview, "generateContent"),
            "http://127.0.0.1:9/v1beta/models/gemini-3-pro-image-preview:generateContent"
        );
        assert_eq!(
            client.model_url(GenAiModel::VideoFast, "predictLongRunning"),
            "http://127.0.0.1:9/v1beta/models/veo-3.1-fast-generate-preview:predictLongRunning"
        );
    }

    #[tokio::test]
    async fn test_poll_budget_exhausts_without_touching_the_network() {
        let client = offline_client(0);
        let pending: VideoOperation = serde_json::from_value(serde_json::json!({
            "name": "operations/abc",
            "done": false
        }))
        .unwrap();
        match client.poll_until_done(pending).await {
            Err(GenAiError::PollTimeout { attempts }) => assert_eq!(attempts, 0),
            other => panic!("expected poll timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_completed_operation_skips_polling() {
        let client = offline_client(0);
        let done: VideoOperation = serde_json::from_value(serde_json::json!({
            "name": "operations/abc",
            "done": true,
            "response": { "generatedVideos": [{ "video": { "uri": "https://host/video.mp4" } }] }
        }))
        .unwrap();
        let finished = client.poll_until_done(done).await.unwrap();
        assert_eq!(resolve_video_uri(&finished).unwrap(), "https://host/video.mp4");
    }

    #[test]
    fn test_extract_image_data_url() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "aGk=" } }] }
            }]
        }))
        .unwrap();
        assert_eq!(
            extract_image(&response).unwrap(),
            "data:image/png;base64,aGk="
        );
    }

    #[test]
    fn test_extract_image_without_payload_fails_verbatim() {
        let empty: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "candidates": [] })).unwrap();
        let err = extract_image(&empty).unwrap_err();
        assert_eq!(err.to_string(), "No image generated");
    }

    #[test]
    fn test_extract_speech_data_url() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "inlineData": { "mimeType": "audio/wav", "data": "b2s=" } }] }
            }]
        }))
        .unwrap();
        assert_eq!(
            extract_speech(&response).unwrap(),
            "data:audio/mp3;base64,b2s="
        );
        let silent: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(
            extract_speech(&silent).unwrap_err().to_string(),
            "No audio generated"
        );
    }

    #[test]
    fn test_resolve_video_uri_cases() {
        let missing: VideoOperation =
            serde_json::from_value(serde_json::json!({ "done": true })).unwrap();
        assert_eq!(
            resolve_video_uri(&missing).unwrap_err().to_string(),
            "No video generated"
        );

        let failed: VideoOperation = serde_json::from_value(serde_json::json!({
            "done": true,
            "error": { "code": 8, "message": "quota exhausted" }
        }))
        .unwrap();
        assert!(matches!(
            resolve_video_uri(&failed),
            Err(GenAiError::Operation(message)) if message == "quota exhausted"
        ));
    }
}
