//! Vitrine preview - headless portfolio driver
//!
//! Runs the portfolio core for a fixed frame budget, scrolling the page and
//! animating the active section's scene. With a GPU adapter present the
//! frames are rendered offscreen and the final one can be saved as a PNG;
//! without one the run still exercises the full CPU path.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use vitrine_app::{HeadlessRuntime, LabPanel, LabTab, PortfolioApp, VitrineConfig};
use vitrine_genai::{GenAiClient, GenAiConfig};
use vitrine_gpu::{RendererConfig, SceneRenderer};
use vitrine_theme::{Accent, Mode};

/// Headless preview of the Vitrine portfolio core
#[derive(Parser, Debug)]
#[command(name = "vitrine-preview")]
#[command(about = "Headless preview of the Vitrine portfolio core")]
#[command(version)]
struct Args {
    /// Config file, or a directory holding vitrine.toml
    #[arg(short, long, default_value = ".")]
    config: PathBuf,

    /// Frames to run (overrides the config)
    #[arg(long)]
    frames: Option<u32>,

    /// Scroll per frame in page units (overrides the config)
    #[arg(long)]
    scroll: Option<f32>,

    /// Accent to start on: cyan, emerald, purple, ember
    #[arg(long)]
    accent: Option<String>,

    /// Mode to start on: dark, light
    #[arg(long)]
    mode: Option<String>,

    /// Write the final frame to this PNG path (needs a GPU adapter)
    #[arg(long)]
    screenshot: Option<PathBuf>,

    /// Send one prompt through the AI-lab chat instead of rendering
    #[arg(long)]
    chat: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("VITRINE_LOG")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = VitrineConfig::load(&args.config)?;

    if let Some(prompt) = args.chat.as_deref() {
        return run_chat(config.genai, prompt);
    }

    let mut run_cfg = config.preview.run_config();
    if let Some(frames) = args.frames {
        run_cfg.max_frames = frames;
    }
    if let Some(scroll) = args.scroll {
        run_cfg.scroll_per_frame = scroll;
    }

    let accent = parse_accent(args.accent.as_deref().unwrap_or(&config.preview.accent))?;
    let mode = parse_mode(args.mode.as_deref().unwrap_or(&config.preview.mode))?;

    let mut app = PortfolioApp::new(run_cfg.height as f32);
    app.store().set_accent(accent);
    if app.store().mode() != mode {
        app.store().toggle_mode();
    }

    let mut renderer = match SceneRenderer::new_blocking(RendererConfig {
        width: run_cfg.width,
        height: run_cfg.height,
        ..RendererConfig::default()
    }) {
        Ok(renderer) => Some(renderer),
        Err(err) => {
            warn!("renderer unavailable, running CPU-only: {err}");
            None
        }
    };

    info!(
        frames = run_cfg.max_frames,
        width = run_cfg.width,
        height = run_cfg.height,
        accent = accent.id(),
        mode = mode.id(),
        "starting preview run"
    );

    let mut last_section = app.store().active_section();
    HeadlessRuntime::run(run_cfg, &mut app, |ctx, app| {
        let section = app.store().active_section();
        if section != last_section {
            debug!(
                frame = ctx.frame_index,
                "entered section {}",
                section.id()
            );
            last_section = section;
        }
        if let (Some(renderer), Some(backdrop)) = (renderer.as_mut(), app.switcher().backdrop()) {
            renderer.render(&backdrop, app.switcher().frame().as_ref());
        }
    })?;

    info!(
        final_section = app.store().active_section().id(),
        scroll = app.scroll_y(),
        "preview run finished"
    );

    if let Some(path) = args.screenshot {
        let Some(renderer) = renderer.as_ref() else {
            bail!("cannot save a screenshot without a GPU adapter");
        };
        let frame = renderer
            .capture()
            .context("Failed to capture the final frame")?;
        image::save_buffer(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

/// One-shot AI-lab chat. The environment key wins over the config file.
fn run_chat(mut genai: GenAiConfig, prompt: &str) -> Result<()> {
    if let Some(key) = GenAiConfig::from_env().api_key {
        genai.api_key = Some(key);
    }
    let client = GenAiClient::new(genai)?;
    let mut panel = LabPanel::new();
    panel.select_tab(LabTab::Chat);
    panel.set_prompt(prompt);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(panel.submit(&client));

    if let Some(error) = panel.error() {
        bail!("chat failed: {error}");
    }
    if let Some(text) = panel.result().and_then(|r| r.as_text()) {
        println!("{text}");
    }
    Ok(())
}

fn parse_accent(id: &str) -> Result<Accent> {
    Accent::all()
        .iter()
        .copied()
        .find(|accent| accent.id() == id)
        .with_context(|| format!("unknown accent '{id}' (expected cyan, emerald, purple, ember)"))
}

fn parse_mode(id: &str) -> Result<Mode> {
    Mode::all()
        .iter()
        .copied()
        .find(|mode| mode.id() == id)
        .with_context(|| format!("unknown mode '{id}' (expected dark or light)"))
}
