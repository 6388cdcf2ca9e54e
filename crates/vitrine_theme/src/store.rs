//! Theme store
//!
//! The single shared state container behind the page: accent, mode, and the
//! currently active section, held as signals on a reactive graph. The store is
//! dependency-injected — embedders construct one and pass references to the
//! section tracker, the scene switcher, and the UI; nothing here is a global.
//!
//! All three mutators are last-write-wins over closed enum domains and notify
//! every subscriber synchronously with the post-write snapshot. Setting a
//! field to its current value is a no-op. Subscriber callbacks run after the
//! internal locks are released and must not mutate the store from within the
//! callback.

use crate::accent::{Accent, Mode};
use crate::backdrop::{backdrop, Backdrop};
use crate::section::Section;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex};
use vitrine_core::reactive::{Derived, ReactiveGraph, SharedReactiveGraph, Signal};
use vitrine_core::FrameDirty;

new_key_type! {
    /// Key identifying a store subscription
    pub struct SubscriberKey;
}

type SubscriberFn = Arc<dyn Fn(&ThemeSnapshot) + Send + Sync>;

/// Consistent view of the store at one logical point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub accent: Accent,
    pub mode: Mode,
    pub section: Section,
}

/// Reactive theme/section state container.
pub struct ThemeStore {
    graph: SharedReactiveGraph,
    dirty: FrameDirty,
    accent: Signal<Accent>,
    mode: Signal<Mode>,
    section: Signal<Section>,
    backdrop: Derived<Backdrop>,
    subscribers: Mutex<SlotMap<SubscriberKey, SubscriberFn>>,
}

impl ThemeStore {
    /// Create a store on an existing graph.
    ///
    /// Initial state is `{cyan, dark, hero}`. Every committed write on the
    /// graph marks `dirty`, so the frame loop redraws on any state change.
    pub fn new(graph: SharedReactiveGraph, dirty: FrameDirty) -> Self {
        let (accent, mode, section, backdrop_derived) = {
            let mut g = graph.lock().unwrap();
            let accent = g.create_signal(Accent::Cyan);
            let mode = g.create_signal(Mode::Dark);
            let section = g.create_signal(Section::Hero);
            let backdrop_derived = g.create_derived(move |g| {
                backdrop(
                    g.get(accent).unwrap_or_default(),
                    g.get(mode).unwrap_or_default(),
                )
            });
            let flag = dirty.clone();
            g.create_effect(move |_| flag.mark());
            (accent, mode, section, backdrop_derived)
        };

        Self {
            graph,
            dirty,
            accent,
            mode,
            section,
            backdrop: backdrop_derived,
            subscribers: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Create a store with a fresh graph and dirty flag.
    pub fn with_defaults() -> Self {
        Self::new(ReactiveGraph::shared(), FrameDirty::new())
    }

    // ========== Reads ==========

    pub fn accent(&self) -> Accent {
        let g = self.graph.lock().unwrap();
        g.get(self.accent).unwrap_or_default()
    }

    pub fn mode(&self) -> Mode {
        let g = self.graph.lock().unwrap();
        g.get(self.mode).unwrap_or_default()
    }

    pub fn active_section(&self) -> Section {
        let g = self.graph.lock().unwrap();
        g.get(self.section).unwrap_or_default()
    }

    /// Consistent snapshot of all three fields.
    pub fn snapshot(&self) -> ThemeSnapshot {
        let g = self.graph.lock().unwrap();
        Self::snapshot_locked(&g, self.accent, self.mode, self.section)
    }

    /// Current backdrop spec, cached on the graph until the next write.
    pub fn backdrop(&self) -> Backdrop {
        let g = self.graph.lock().unwrap();
        g.get_derived(self.backdrop)
            .unwrap_or_else(|| backdrop(Accent::Cyan, Mode::Dark))
    }

    /// The shared graph this store lives on.
    pub fn graph(&self) -> &SharedReactiveGraph {
        &self.graph
    }

    /// The redraw flag wired to this store's graph.
    pub fn dirty(&self) -> &FrameDirty {
        &self.dirty
    }

    // ========== Mutators ==========

    /// Replace the accent. No-op when unchanged.
    pub fn set_accent(&self, accent: Accent) {
        let snapshot = {
            let mut g = self.graph.lock().unwrap();
            let current = g.get(self.accent).unwrap_or_default();
            if current == accent {
                return;
            }
            tracing::debug!("ThemeStore::set_accent - switching from {current:?} to {accent:?}");
            g.set(self.accent, accent);
            Self::snapshot_locked(&g, self.accent, self.mode, self.section)
        };
        self.notify(&snapshot);
    }

    /// Flip between dark and light.
    pub fn toggle_mode(&self) {
        let snapshot = {
            let mut g = self.graph.lock().unwrap();
            let next = g.get(self.mode).unwrap_or_default().toggled();
            tracing::debug!("ThemeStore::toggle_mode - switching to {next:?}");
            g.set(self.mode, next);
            Self::snapshot_locked(&g, self.accent, self.mode, self.section)
        };
        self.notify(&snapshot);
    }

    /// Replace the active section. No-op when unchanged.
    pub fn set_active_section(&self, section: Section) {
        let snapshot = {
            let mut g = self.graph.lock().unwrap();
            let current = g.get(self.section).unwrap_or_default();
            if current == section {
                return;
            }
            tracing::debug!(
                "ThemeStore::set_active_section - switching from {current:?} to {section:?}"
            );
            g.set(self.section, section);
            Self::snapshot_locked(&g, self.accent, self.mode, self.section)
        };
        self.notify(&snapshot);
    }

    // ========== Subscriptions ==========

    /// Register a callback invoked synchronously after every change.
    pub fn subscribe<F>(&self, callback: F) -> SubscriberKey
    where
        F: Fn(&ThemeSnapshot) + Send + Sync + 'static,
    {
        self.subscribers
            .lock()
            .unwrap()
            .insert(Arc::new(callback))
    }

    /// Remove a subscription; returns whether it existed.
    pub fn unsubscribe(&self, key: SubscriberKey) -> bool {
        self.subscribers.lock().unwrap().remove(key).is_some()
    }

    fn notify(&self, snapshot: &ThemeSnapshot) {
        let callbacks: Vec<SubscriberFn> = {
            let subs = self.subscribers.lock().unwrap();
            subs.values().cloned().collect()
        };
        for cb in callbacks {
            cb(snapshot);
        }
    }

    fn snapshot_locked(
        g: &ReactiveGraph,
        accent: Signal<Accent>,
        mode: Signal<Mode>,
        section: Signal<Section>,
    ) -> ThemeSnapshot {
        ThemeSnapshot {
            accent: g.get(accent).unwrap_or_default(),
            mode: g.get(mode).unwrap_or_default(),
            section: g.get(section).unwrap_or_default(),
        }
    }
}
