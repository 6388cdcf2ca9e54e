//! Headless runtime primitives for deterministic frame execution.

use anyhow::{bail, Result};

use crate::app::PortfolioApp;

/// Configuration for a fixed-budget headless run.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Logical viewport width used by the headless run.
    pub width: u32,
    /// Logical viewport height used by the headless run.
    pub height: u32,
    /// Number of frames to execute.
    pub max_frames: u32,
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
    /// Scroll applied before each frame after the first, in page units.
    pub scroll_per_frame: f32,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            max_frames: 120,
            tick_ms: 16,
            scroll_per_frame: 0.0,
        }
    }
}

/// Frame context passed to headless frame probes.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub frame_index: u32,
    pub width: u32,
    pub height: u32,
    pub elapsed_ms: u64,
}

/// Deterministic headless frame loop.
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run a fixed frame budget against `app`, invoking `probe` once per
    /// frame after the frame's scroll and animation updates.
    ///
    /// Elapsed time is synthesized, not measured: frame `n` reports
    /// `n * tick_ms`, so a run's observations are reproducible.
    pub fn run<F>(cfg: HeadlessRunConfig, app: &mut PortfolioApp, mut probe: F) -> Result<()>
    where
        F: FnMut(&FrameContext, &PortfolioApp),
    {
        if cfg.width == 0 || cfg.height == 0 {
            bail!("headless dimensions must be non-zero");
        }
        if cfg.max_frames == 0 {
            bail!("headless max_frames must be > 0");
        }
        if cfg.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }

        let dt = cfg.tick_ms as f32 / 1000.0;
        for frame in 0..cfg.max_frames {
            if frame > 0 && cfg.scroll_per_frame != 0.0 {
                app.scroll_by(cfg.scroll_per_frame);
            }
            app.advance(dt);

            let elapsed_ms = cfg.tick_ms.saturating_mul(frame as u64);
            probe(
                &FrameContext {
                    frame_index: frame,
                    width: cfg.width,
                    height: cfg.height,
                    elapsed_ms,
                },
                app,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use vitrine_theme::{backdrop, Accent, Mode, Section};

    fn app_for(cfg: &HeadlessRunConfig) -> PortfolioApp {
        PortfolioApp::with_rng(cfg.height as f32, StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let cfg = HeadlessRunConfig {
            width: 0,
            ..Default::default()
        };
        let mut app = app_for(&HeadlessRunConfig::default());
        let err = HeadlessRuntime::run(cfg, &mut app, |_, _| {}).unwrap_err();
        assert!(err.to_string().contains("dimensions"));
    }

    #[test]
    fn test_rejects_zero_frame_budget() {
        let cfg = HeadlessRunConfig {
            max_frames: 0,
            ..Default::default()
        };
        let mut app = app_for(&HeadlessRunConfig::default());
        assert!(HeadlessRuntime::run(cfg, &mut app, |_, _| {}).is_err());
    }

    #[test]
    fn test_rejects_zero_tick() {
        let cfg = HeadlessRunConfig {
            tick_ms: 0,
            ..Default::default()
        };
        let mut app = app_for(&HeadlessRunConfig::default());
        assert!(HeadlessRuntime::run(cfg, &mut app, |_, _| {}).is_err());
    }

    #[test]
    fn test_runs_exact_frame_budget_with_synthetic_clock() {
        let cfg = HeadlessRunConfig {
            max_frames: 10,
            tick_ms: 16,
            ..Default::default()
        };
        let mut app = app_for(&cfg);
        let mut seen = Vec::new();
        HeadlessRuntime::run(cfg, &mut app, |ctx, _| {
            seen.push((ctx.frame_index, ctx.elapsed_ms));
        })
        .unwrap();

        assert_eq!(seen.len(), 10);
        for (frame, elapsed) in seen {
            assert_eq!(elapsed, frame as u64 * 16);
        }
    }

    #[test]
    fn test_first_frame_shows_hero_over_cyan_dark() {
        let cfg = HeadlessRunConfig {
            max_frames: 1,
            ..Default::default()
        };
        let mut app = app_for(&cfg);
        HeadlessRuntime::run(cfg, &mut app, |_, app| {
            assert_eq!(app.store().snapshot().section, Section::Hero);
            assert_eq!(
                app.switcher().backdrop(),
                Some(backdrop(Accent::Cyan, Mode::Dark))
            );
            assert!(app.switcher().frame().is_some());
        })
        .unwrap();
    }

    #[test]
    fn test_scroll_per_frame_walks_the_page() {
        let cfg = HeadlessRunConfig {
            height: 900,
            max_frames: 30,
            scroll_per_frame: 225.0,
            ..Default::default()
        };
        let mut app = app_for(&cfg);
        let mut sections = Vec::new();
        HeadlessRuntime::run(cfg, &mut app, |_, app| {
            let section = app.store().active_section();
            if sections.last() != Some(&section) {
                sections.push(section);
            }
        })
        .unwrap();

        // A quarter viewport per frame sweeps every section in page order.
        assert_eq!(sections, Section::all());
        assert_eq!(app.scroll_y(), app.max_scroll());
    }

    #[test]
    fn test_scene_clock_tracks_synthetic_time() {
        let cfg = HeadlessRunConfig {
            max_frames: 20,
            tick_ms: 50,
            ..Default::default()
        };
        let mut app = app_for(&cfg);
        HeadlessRuntime::run(cfg, &mut app, |_, _| {}).unwrap();

        // Mounted on the first frame at zero, advanced once per frame after.
        let elapsed = app.switcher().instance().unwrap().elapsed();
        assert!((elapsed - 19.0 * 0.05).abs() < 1e-4);
    }
}
