//! Application assembly.

use rand::rngs::StdRng;
use vitrine_scene::SceneSwitcher;
use vitrine_theme::{Section, ThemeStore};

use crate::tracker::{SectionLayout, SectionTracker};

/// The wired portfolio core: theme store, section tracker, and scene
/// switcher, driven by scroll input and frame ticks.
///
/// The store is owned here and passed by reference to the collaborators that
/// mutate or read it; nothing reaches for a global.
pub struct PortfolioApp {
    store: ThemeStore,
    tracker: SectionTracker,
    switcher: SceneSwitcher,
    scroll_y: f32,
}

impl PortfolioApp {
    /// App over a stacked layout, one `viewport_height` per section, with
    /// OS-seeded scene generation.
    pub fn new(viewport_height: f32) -> Self {
        Self::assemble(viewport_height, SceneSwitcher::new())
    }

    /// App with a caller-controlled RNG for deterministic scene layouts.
    pub fn with_rng(viewport_height: f32, rng: StdRng) -> Self {
        Self::assemble(viewport_height, SceneSwitcher::with_rng(rng))
    }

    fn assemble(viewport_height: f32, switcher: SceneSwitcher) -> Self {
        let store = ThemeStore::with_defaults();
        let mut tracker = SectionTracker::new(SectionLayout::stacked(viewport_height), &store);
        // The page starts at the top, which activates the hero section.
        tracker.on_scroll(0.0, &store);
        Self {
            store,
            tracker,
            switcher,
            scroll_y: 0.0,
        }
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    pub fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    pub fn switcher(&self) -> &SceneSwitcher {
        &self.switcher
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Largest valid scroll position.
    pub fn max_scroll(&self) -> f32 {
        let layout = self.tracker.layout();
        (layout.total_height() - layout.viewport_height()).max(0.0)
    }

    /// Scroll to an absolute position, clamped to the page bounds.
    pub fn scroll_to(&mut self, y: f32) {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
        self.tracker.on_scroll(self.scroll_y, &self.store);
    }

    /// Scroll by a delta, clamped to the page bounds.
    pub fn scroll_by(&mut self, dy: f32) {
        self.scroll_to(self.scroll_y + dy);
    }

    /// Jump straight to a section's anchor, the nav-click path.
    pub fn jump_to_section(&mut self, section: Section) {
        self.scroll_to(self.tracker.layout().top(section));
    }

    /// Advance the animation clock by `dt` seconds against the current theme
    /// snapshot.
    pub fn advance(&mut self, dt: f32) {
        let snapshot = self.store.snapshot();
        self.switcher.update(&snapshot, dt);
    }
}
