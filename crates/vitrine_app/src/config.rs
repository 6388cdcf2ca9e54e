//! Vitrine configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vitrine_genai::GenAiConfig;

use crate::runtime::HeadlessRunConfig;

/// Top-level Vitrine configuration (vitrine.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VitrineConfig {
    #[serde(default)]
    pub genai: GenAiConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Preview binary configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct PreviewConfig {
    /// Render target width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Render target height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
    /// Frames to run
    #[serde(default = "default_max_frames")]
    pub max_frames: u32,
    /// Logical milliseconds per frame
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Scroll applied per frame, in page units
    #[serde(default)]
    pub scroll_per_frame: f32,
    /// Accent id to start on (cyan, emerald, purple, ember)
    #[serde(default = "default_accent")]
    pub accent: String,
    /// Mode id to start on (dark, light)
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

fn default_max_frames() -> u32 {
    120
}

fn default_tick_ms() -> u64 {
    16
}

fn default_accent() -> String {
    "cyan".to_string()
}

fn default_mode() -> String {
    "dark".to_string()
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            max_frames: default_max_frames(),
            tick_ms: default_tick_ms(),
            scroll_per_frame: 0.0,
            accent: default_accent(),
            mode: default_mode(),
        }
    }
}

impl PreviewConfig {
    /// The headless run this preview section describes.
    pub fn run_config(&self) -> HeadlessRunConfig {
        HeadlessRunConfig {
            width: self.width,
            height: self.height,
            max_frames: self.max_frames,
            tick_ms: self.tick_ms,
            scroll_per_frame: self.scroll_per_frame,
        }
    }
}

impl VitrineConfig {
    /// Load configuration from a path (a vitrine.toml file, or a directory
    /// holding one). A missing file yields pure defaults; a malformed file is
    /// an error.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join("vitrine.toml")
        };

        if !config_path.exists() {
            tracing::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: VitrineConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
