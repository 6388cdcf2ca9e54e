//! Vitrine theming system
//!
//! Everything the page's visual state is made of:
//!
//! - **Accents**: the four named color families (cyan, emerald, purple, ember)
//! - **Modes**: the light/dark variant, independent of accent
//! - **Sections**: the seven scrollable page regions
//! - **ThemeStore**: the dependency-injected reactive container holding
//!   `(accent, mode, section)` with synchronous subscriber fan-out
//! - **Backdrop**: the pure `(accent, mode) -> radial gradient` lookup layered
//!   beneath the 3D canvas
//!
//! The store is built over [`vitrine_core::reactive`]; there is no ambient
//! singleton — embedders construct one store and hand references to the
//! tracker, the scene switcher, and the UI.

pub mod accent;
pub mod backdrop;
pub mod section;
pub mod store;

pub use accent::{Accent, Mode};
pub use backdrop::{backdrop, Backdrop};
pub use section::Section;
pub use store::{SubscriberKey, ThemeSnapshot, ThemeStore};
