//! Reactive signal graph
//!
//! A small fine-grained state container: typed [`Signal`] handles over a
//! slotmap-backed node store, pull-based [`Derived`] values cached against the
//! graph version, and effects that run synchronously after every committed
//! write.
//!
//! The graph itself is single-owner (`&mut` for writes); embedders that need
//! to share it across components wrap it in [`SharedReactiveGraph`] and lock
//! per operation. Effect callbacks receive `&ReactiveGraph`, so they can read
//! signals and derived values but cannot write — writes belong to the event
//! handlers that triggered the effect in the first place.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::any::Any;
use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Key identifying a signal node
    pub struct SignalKey;
    /// Key identifying a derived node
    pub struct DerivedKey;
    /// Key identifying an effect node
    pub struct EffectKey;
}

/// Typed handle to a signal stored in a [`ReactiveGraph`]
///
/// Handles are plain keys: `Copy`, cheap, and only meaningful together with
/// the graph that created them.
pub struct Signal<T> {
    key: SignalKey,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Signal<T> {
    /// The underlying slotmap key
    pub fn key(&self) -> SignalKey {
        self.key
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Signal").field(&self.key).finish()
    }
}

/// Typed handle to a derived (computed) value
pub struct Derived<T> {
    key: DerivedKey,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Derived<T> {}

impl<T> std::fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Derived").field(&self.key).finish()
    }
}

/// Handle to a registered effect, used to remove it again
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectId(EffectKey);

type EffectFn = Arc<dyn Fn(&ReactiveGraph) + Send + Sync>;
type DerivedCompute = Box<dyn Fn(&ReactiveGraph) -> Box<dyn Any + Send> + Send>;

struct SignalNode {
    value: Box<dyn Any + Send>,
    version: u64,
}

struct CachedValue {
    graph_version: u64,
    value: Box<dyn Any + Send>,
}

struct DerivedNode {
    compute: DerivedCompute,
    cache: RefCell<Option<CachedValue>>,
}

struct EffectNode {
    callback: EffectFn,
}

/// Shared reactive graph for cross-component access
pub type SharedReactiveGraph = Arc<Mutex<ReactiveGraph>>;

/// The signal graph: signals, derived values, and effects
pub struct ReactiveGraph {
    signals: SlotMap<SignalKey, SignalNode>,
    deriveds: SlotMap<DerivedKey, DerivedNode>,
    effects: SlotMap<EffectKey, EffectNode>,
    /// Bumped on every committed write; derived caches key off this.
    version: u64,
}

impl Default for ReactiveGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactiveGraph {
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
            deriveds: SlotMap::with_key(),
            effects: SlotMap::with_key(),
            version: 0,
        }
    }

    /// Convenience constructor for the shared form
    pub fn shared() -> SharedReactiveGraph {
        Arc::new(Mutex::new(Self::new()))
    }

    // ========== Signals ==========

    /// Create a new signal with an initial value
    pub fn create_signal<T: Send + 'static>(&mut self, initial: T) -> Signal<T> {
        let key = self.signals.insert(SignalNode {
            value: Box::new(initial),
            version: 0,
        });
        Signal {
            key,
            _marker: PhantomData,
        }
    }

    /// Current value of a signal (cloned), or `None` if the handle is stale
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        self.signals
            .get(signal.key)?
            .value
            .downcast_ref::<T>()
            .cloned()
    }

    /// Replace a signal's value and run all effects
    ///
    /// Writes are last-write-wins; there is no batching. Effects run
    /// synchronously on the caller's thread, in registration order, after the
    /// value is committed.
    pub fn set<T: Send + 'static>(&mut self, signal: Signal<T>, value: T) {
        let Some(node) = self.signals.get_mut(signal.key) else {
            return;
        };
        node.value = Box::new(value);
        node.version += 1;
        self.version += 1;
        self.run_effects();
    }

    /// Update a signal through a function of its current value
    pub fn update<T: Clone + Send + 'static, F: FnOnce(T) -> T>(&mut self, signal: Signal<T>, f: F) {
        if let Some(current) = self.get(signal) {
            self.set(signal, f(current));
        }
    }

    /// Per-signal write counter, `None` for stale handles
    pub fn signal_version<T>(&self, signal: Signal<T>) -> Option<u64> {
        self.signals.get(signal.key).map(|n| n.version)
    }

    /// Graph-wide write counter
    pub fn version(&self) -> u64 {
        self.version
    }

    // ========== Derived values ==========

    /// Create a derived value computed from other graph state
    ///
    /// The computation is pull-based: it runs on first read and again whenever
    /// the graph version has advanced past the cached one.
    pub fn create_derived<T, F>(&mut self, compute: F) -> Derived<T>
    where
        T: Clone + Send + 'static,
        F: Fn(&ReactiveGraph) -> T + Send + 'static,
    {
        let key = self.deriveds.insert(DerivedNode {
            compute: Box::new(move |g| Box::new(compute(g)) as Box<dyn Any + Send>),
            cache: RefCell::new(None),
        });
        Derived {
            key,
            _marker: PhantomData,
        }
    }

    /// Current value of a derived, recomputing if the graph has changed
    pub fn get_derived<T: Clone + 'static>(&self, derived: Derived<T>) -> Option<T> {
        let node = self.deriveds.get(derived.key)?;
        {
            let cache = node.cache.borrow();
            if let Some(cached) = cache.as_ref() {
                if cached.graph_version == self.version {
                    return cached.value.downcast_ref::<T>().cloned();
                }
            }
        }
        let fresh = (node.compute)(self);
        let result = fresh.downcast_ref::<T>().cloned();
        *node.cache.borrow_mut() = Some(CachedValue {
            graph_version: self.version,
            value: fresh,
        });
        result
    }

    // ========== Effects ==========

    /// Register an effect that runs after every committed write
    ///
    /// The effect also runs once immediately, so it observes the state that
    /// existed at registration time.
    pub fn create_effect<F>(&mut self, callback: F) -> EffectId
    where
        F: Fn(&ReactiveGraph) + Send + Sync + 'static,
    {
        let key = self.effects.insert(EffectNode {
            callback: Arc::new(callback),
        });
        let cb = self.effects[key].callback.clone();
        cb(&*self);
        EffectId(key)
    }

    /// Remove a previously registered effect; returns whether it existed
    pub fn remove_effect(&mut self, id: EffectId) -> bool {
        self.effects.remove(id.0).is_some()
    }

    fn run_effects(&self) {
        let callbacks: SmallVec<[EffectFn; 4]> =
            self.effects.values().map(|e| e.callback.clone()).collect();
        tracing::trace!(effects = callbacks.len(), version = self.version, "running effects");
        for cb in callbacks {
            cb(self);
        }
    }
}
