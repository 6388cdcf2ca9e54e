//! Vitrine Core Runtime
//!
//! This crate provides the foundational primitives for the Vitrine engine:
//!
//! - **Reactive Signals**: a small signal graph with pull-based derived values
//! - **Frame Dirty Tracking**: a shared flag the frame loop drains once per frame
//! - **Color**: f32 RGBA color math with CSS hex parsing
//!
//! # Example
//!
//! ```rust
//! use vitrine_core::reactive::ReactiveGraph;
//!
//! let mut graph = ReactiveGraph::new();
//!
//! // Create a signal
//! let count = graph.create_signal(0i32);
//!
//! // Create a derived value
//! let doubled = graph.create_derived(move |g| {
//!     g.get(count).unwrap_or(0) * 2
//! });
//!
//! // Update the signal
//! graph.set(count, 5);
//! assert_eq!(graph.get_derived(doubled), Some(10));
//! ```

pub mod color;
pub mod dirty;
pub mod reactive;

pub use color::{Color, ColorParseError};
pub use dirty::FrameDirty;
pub use reactive::{Derived, EffectId, ReactiveGraph, SharedReactiveGraph, Signal};
