//! Scroll-driven section activation.
//!
//! Mirrors an intersection observer with a 50% visibility threshold: each
//! section activates when its visible fraction of the viewport crosses from
//! below one half to at or above it. Edges are re-evaluated on every scroll
//! change, not once.

use vitrine_core::Signal;
use vitrine_theme::{Section, ThemeStore};

/// Fraction of a section that must be visible before it activates.
pub const ACTIVATION_THRESHOLD: f32 = 0.5;

/// Vertical intervals for the page sections.
#[derive(Debug, Clone, Copy)]
pub struct SectionLayout {
    viewport_height: f32,
    tops: [f32; 7],
    heights: [f32; 7],
}

impl SectionLayout {
    /// Stack the sections in page order, one viewport height each.
    pub fn stacked(viewport_height: f32) -> Self {
        Self::with_heights(viewport_height, [viewport_height; 7])
    }

    /// Stack the sections in page order with per-section heights.
    pub fn with_heights(viewport_height: f32, heights: [f32; 7]) -> Self {
        let mut tops = [0.0; 7];
        let mut cursor = 0.0;
        for (top, height) in tops.iter_mut().zip(heights.iter()) {
            *top = cursor;
            cursor += height;
        }
        Self {
            viewport_height,
            tops,
            heights,
        }
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Top of the section's interval, in page coordinates.
    pub fn top(&self, section: Section) -> f32 {
        self.tops[section.page_index()]
    }

    pub fn height(&self, section: Section) -> f32 {
        self.heights[section.page_index()]
    }

    /// Total scrollable page height.
    pub fn total_height(&self) -> f32 {
        self.tops[6] + self.heights[6]
    }

    /// Fraction of the section inside the viewport at `scroll_y`, in `[0, 1]`.
    pub fn visibility_ratio(&self, section: Section, scroll_y: f32) -> f32 {
        let top = self.top(section);
        let height = self.height(section);
        if height <= 0.0 {
            return 0.0;
        }
        let overlap_top = top.max(scroll_y);
        let overlap_bottom = (top + height).min(scroll_y + self.viewport_height);
        ((overlap_bottom - overlap_top) / height).clamp(0.0, 1.0)
    }
}

/// Watches scroll position and activates sections on the store.
///
/// When a single scroll step raises several sections past the threshold at
/// once, their edges fire in page order, so the last section in page order
/// ends up active. That tie-break is part of the contract.
pub struct SectionTracker {
    layout: SectionLayout,
    visible: [bool; 7],
    scroll: Signal<f32>,
}

impl SectionTracker {
    /// Create a tracker over `layout`, recording scroll position on the
    /// store's reactive graph.
    pub fn new(layout: SectionLayout, store: &ThemeStore) -> Self {
        let scroll = store.graph().lock().unwrap().create_signal(0.0f32);
        Self {
            layout,
            visible: [false; 7],
            scroll,
        }
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    /// Signal holding the latest scroll position.
    pub fn scroll_signal(&self) -> Signal<f32> {
        self.scroll
    }

    /// Whether the section was at or above the threshold on the last scroll
    /// update.
    pub fn is_visible(&self, section: Section) -> bool {
        self.visible[section.page_index()]
    }

    /// Process a scroll position change.
    ///
    /// Records `scroll_y` on the reactive graph, then fires an activation for
    /// every section whose visibility ratio rose past the threshold since the
    /// previous call, in page order.
    pub fn on_scroll(&mut self, scroll_y: f32, store: &ThemeStore) {
        store.graph().lock().unwrap().set(self.scroll, scroll_y);

        for section in Section::all() {
            let ratio = self.layout.visibility_ratio(*section, scroll_y);
            let above = ratio >= ACTIVATION_THRESHOLD;
            let was_above = self.visible[section.page_index()];
            if above && !was_above {
                tracing::debug!(
                    "SectionTracker - {} crossed threshold (ratio {ratio:.2})",
                    section.id()
                );
                store.set_active_section(*section);
            }
            self.visible[section.page_index()] = above;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const VIEWPORT: f32 = 900.0;

    fn tracker_with_store() -> (SectionTracker, ThemeStore) {
        let store = ThemeStore::with_defaults();
        let tracker = SectionTracker::new(SectionLayout::stacked(VIEWPORT), &store);
        (tracker, store)
    }

    #[test]
    fn test_stacked_layout_intervals() {
        let layout = SectionLayout::stacked(VIEWPORT);
        for (i, section) in Section::all().iter().enumerate() {
            assert_eq!(layout.top(*section), VIEWPORT * i as f32);
            assert_eq!(layout.height(*section), VIEWPORT);
        }
        assert_eq!(layout.total_height(), VIEWPORT * 7.0);
    }

    #[test]
    fn test_visibility_ratio_bounds() {
        let layout = SectionLayout::stacked(VIEWPORT);
        assert_eq!(layout.visibility_ratio(Section::Hero, 0.0), 1.0);
        assert_eq!(layout.visibility_ratio(Section::Contact, 0.0), 0.0);
        let half = layout.visibility_ratio(Section::About, VIEWPORT * 0.5);
        assert!((half - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_initial_scroll_activates_hero() {
        let (mut tracker, store) = tracker_with_store();
        tracker.on_scroll(0.0, &store);
        assert!(tracker.is_visible(Section::Hero));
        assert_eq!(store.active_section(), Section::Hero);
    }

    #[test]
    fn test_scrolling_to_a_section_activates_it() {
        let (mut tracker, store) = tracker_with_store();
        tracker.on_scroll(0.0, &store);
        tracker.on_scroll(VIEWPORT, &store);
        assert_eq!(store.active_section(), Section::About);
        tracker.on_scroll(VIEWPORT * 3.0, &store);
        assert_eq!(store.active_section(), Section::AiLab);
    }

    #[test]
    fn test_edge_fires_only_on_rising_crossing() {
        let (mut tracker, store) = tracker_with_store();
        let edges = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&edges);
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tracker.on_scroll(VIEWPORT, &store);
        let after_first = edges.load(Ordering::SeqCst);
        assert!(after_first >= 1);

        // Holding position keeps the section above threshold: no new edge.
        tracker.on_scroll(VIEWPORT, &store);
        tracker.on_scroll(VIEWPORT + 10.0, &store);
        assert_eq!(edges.load(Ordering::SeqCst), after_first);
    }

    #[test]
    fn test_reentering_a_section_reactivates_it() {
        let (mut tracker, store) = tracker_with_store();
        tracker.on_scroll(0.0, &store);
        tracker.on_scroll(VIEWPORT, &store);
        assert_eq!(store.active_section(), Section::About);
        tracker.on_scroll(0.0, &store);
        assert_eq!(store.active_section(), Section::Hero);
        tracker.on_scroll(VIEWPORT, &store);
        assert_eq!(store.active_section(), Section::About);
    }

    #[test]
    fn test_multi_section_jump_lands_on_last_in_page_order() {
        let (mut tracker, store) = tracker_with_store();
        tracker.on_scroll(0.0, &store);
        // Both experience and contact sit at exactly half visibility here, so
        // one step produces two rising edges; the later section wins.
        tracker.on_scroll(VIEWPORT * 5.5, &store);
        assert!(tracker.is_visible(Section::Experience));
        assert!(tracker.is_visible(Section::Contact));
        assert_eq!(store.active_section(), Section::Contact);
    }

    #[test]
    fn test_scroll_signal_records_latest_position() {
        let (mut tracker, store) = tracker_with_store();
        tracker.on_scroll(123.0, &store);
        tracker.on_scroll(456.0, &store);
        let recorded = store
            .graph()
            .lock()
            .unwrap()
            .get(tracker.scroll_signal());
        assert_eq!(recorded, Some(456.0));
    }
}
