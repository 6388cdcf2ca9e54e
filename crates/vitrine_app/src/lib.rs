//! Vitrine application layer
//!
//! Wires the theme store, section tracker, and scene switcher into a
//! runnable portfolio core, adds the AI-lab panel state machine on top, and
//! provides a deterministic headless frame loop for driving the whole thing
//! without a window.
//!
//! ```ignore
//! use vitrine_app::{HeadlessRunConfig, HeadlessRuntime, PortfolioApp};
//!
//! let cfg = HeadlessRunConfig::default();
//! let mut app = PortfolioApp::new(cfg.height as f32);
//! HeadlessRuntime::run(cfg, &mut app, |ctx, app| {
//!     println!("frame {} -> {}", ctx.frame_index, app.store().active_section());
//! })?;
//! ```

pub mod app;
pub mod config;
pub mod content;
pub mod panel;
pub mod runtime;
pub mod tracker;

pub use app::PortfolioApp;
pub use config::{PreviewConfig, VitrineConfig};
pub use content::{ExperienceEntry, NavItem, Project, Skill, EXPERIENCE, NAV_ITEMS, PROJECTS, SKILLS};
pub use panel::{LabPanel, LabResult, LabTab};
pub use runtime::{FrameContext, HeadlessRunConfig, HeadlessRuntime};
pub use tracker::{SectionLayout, SectionTracker, ACTIVATION_THRESHOLD};
