//! Wire payload shapes, pinned against the service's JSON. A field rename
//! here breaks the API contract, so all shapes are asserted verbatim.

use serde_json::json;
use vitrine_genai::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerateVideosRequest,
    GenerationConfig, ImageConfig, Part, PrebuiltVoiceConfig, SpeechConfig, ThinkingConfig,
    VideoInstance, VideoOperation, VideoParameters, VoiceConfig,
};

#[test]
fn test_image_generation_request() {
    let request = GenerateContentRequest {
        contents: vec![Content::text("a fox at dawn")],
        generation_config: Some(GenerationConfig {
            image_config: Some(ImageConfig {
                aspect_ratio: "16:9".to_string(),
                image_size: "2K".to_string(),
            }),
            ..GenerationConfig::default()
        }),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "contents": [{ "parts": [{ "text": "a fox at dawn" }] }],
            "generationConfig": {
                "imageConfig": { "aspectRatio": "16:9", "imageSize": "2K" }
            }
        })
    );
}

#[test]
fn test_analysis_request_orders_media_before_prompt() {
    let request = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part::inline("image/png", "QUJD"),
                Part::text("Describe this media"),
            ],
        }],
        generation_config: None,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": "image/png", "data": "QUJD" } },
                    { "text": "Describe this media" }
                ]
            }]
        })
    );
}

#[test]
fn test_thinking_chat_request() {
    let request = GenerateContentRequest {
        contents: vec![Content::text("think hard about ducks")],
        generation_config: Some(GenerationConfig {
            thinking_config: Some(ThinkingConfig {
                thinking_level: "HIGH".to_string(),
            }),
            ..GenerationConfig::default()
        }),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "contents": [{ "parts": [{ "text": "think hard about ducks" }] }],
            "generationConfig": { "thinkingConfig": { "thinkingLevel": "HIGH" } }
        })
    );
}

#[test]
fn test_speech_request() {
    let request = GenerateContentRequest {
        contents: vec![Content::text("Hello")],
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
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "contents": [{ "parts": [{ "text": "Hello" }] }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": {
                        "prebuiltVoiceConfig": { "voiceName": "Kore" }
                    }
                }
            }
        })
    );
}

#[test]
fn test_video_generation_request() {
    let request = GenerateVideosRequest {
        instances: vec![VideoInstance {
            prompt: "waves on a black beach".to_string(),
        }],
        parameters: VideoParameters {
            sample_count: 1,
            resolution: "720p".to_string(),
            aspect_ratio: "16:9".to_string(),
        },
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "instances": [{ "prompt": "waves on a black beach" }],
            "parameters": {
                "sampleCount": 1,
                "resolution": "720p",
                "aspectRatio": "16:9"
            }
        })
    );
}

#[test]
fn test_pending_and_finished_operations_parse() {
    let pending: VideoOperation = serde_json::from_value(json!({
        "name": "operations/vid-123",
        "done": false
    }))
    .unwrap();
    assert!(!pending.done);
    assert_eq!(pending.name, "operations/vid-123");
    assert!(pending.response.is_none());

    let finished: VideoOperation = serde_json::from_value(json!({
        "name": "operations/vid-123",
        "done": true,
        "response": {
            "generatedVideos": [{ "video": { "uri": "https://host/v.mp4" } }]
        }
    }))
    .unwrap();
    assert!(finished.done);
    let response = finished.response.unwrap();
    let uri = &response.generated_videos[0]
        .video
        .as_ref()
        .unwrap()
        .uri;
    assert_eq!(uri, "https://host/v.mp4");
}

#[test]
fn test_content_response_with_mixed_parts() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "text": "Here is your image." },
                    { "inlineData": { "mimeType": "image/png", "data": "UE5H" } }
                ]
            }
        }]
    }))
    .unwrap();
    assert_eq!(response.text().as_deref(), Some("Here is your image."));
    assert_eq!(response.first_inline_data().unwrap().data, "UE5H");
}
