//! Vitrine GPU Renderer
//!
//! Headless point-cloud rendering via wgpu. Draws one scene frame plus its
//! radial backdrop gradient into an offscreen RGBA target that can be read
//! back to the CPU for inspection or encoding.

pub mod capture;
pub mod primitives;
pub mod renderer;
pub mod shaders;

pub use capture::CapturedFrame;
pub use renderer::{RenderError, RendererConfig, SceneRenderer};
