//! Vitrine scene system
//!
//! Seven procedural 3D scenes, one per page section, rendered behind the page
//! content and switched as the user scrolls:
//!
//! - **Registry**: fixed compile-time `Section -> SceneDescriptor` mapping
//! - **Generators**: point/line/quad layouts built once per mount from a
//!   caller-supplied RNG
//! - **Motion**: pure pose and bobbing laws of elapsed time
//! - **Color law**: per-frame lerp of the scene tint toward the theme target
//! - **Cross-fade**: eased transition between backdrop gradient specs
//! - **Switcher**: the mounted-scene lifecycle driven by the frame loop
//!
//! Exactly one scene is mounted at a time; sections that are not active cost
//! nothing. Scene poses are deterministic functions of elapsed time, so a
//! frame at time T can be reproduced without replaying the frames before it.

pub mod color_law;
pub mod descriptor;
pub mod easing;
pub mod fade;
pub mod geometry;
pub mod motion;
pub mod scenes;
pub mod switcher;

pub use color_law::SceneColor;
pub use descriptor::{descriptor, scene_tint, SceneDescriptor};
pub use easing::Easing;
pub use fade::BackdropFade;
pub use geometry::{
    LayerOpacity, LayerTint, LineBatch, LineLayer, LineSegment, OrientedQuad, PointBatch,
    PointLayer, QuadLayer, SceneFrame, SceneGeometry, TriangleBatch,
};
pub use motion::{float_offset, float_tilt, spin, FloatMotion, FloatPhase};
pub use switcher::{SceneInstance, SceneSwitcher};
