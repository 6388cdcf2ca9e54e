//! GPU primitive batching
//!
//! Defines GPU-ready data structures that match the shader storage-buffer
//! layouts. All structures use `#[repr(C)]` and implement `bytemuck::Pod`
//! for safe GPU buffer copies.

use vitrine_scene::SceneFrame;

/// Per-frame shader globals (matches shader `Globals` struct)
///
/// Memory layout:
/// - proj: `mat4x4<f32>`           (64 bytes)
/// - view_model: `mat4x4<f32>`     (64 bytes)
/// - viewport: `vec2<f32>`         (8 bytes)
/// - _pad: `vec2<f32>`             (8 bytes)
/// - backdrop_inner: `vec4<f32>`   (16 bytes)
/// - backdrop_outer: `vec4<f32>`   (16 bytes)
///   Total: 176 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Globals {
    /// Perspective projection
    pub proj: [[f32; 4]; 4],
    /// Camera view combined with the whole-scene model transform
    pub view_model: [[f32; 4]; 4],
    /// Target size in pixels
    pub viewport: [f32; 2],
    pub _pad: [f32; 2],
    /// Backdrop gradient color at the viewport center
    pub backdrop_inner: [f32; 4],
    /// Backdrop gradient color at the farthest corner
    pub backdrop_outer: [f32; 4],
}

/// One billboarded point sprite (matches shader `ScenePoint` struct, 32 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuScenePoint {
    /// Scene-space center
    pub center: [f32; 3],
    /// World-space sprite side length
    pub size: f32,
    /// Straight (non-premultiplied) RGBA
    pub color: [f32; 4],
}

/// One screen-space-expanded line segment (matches shader `SceneSegment`, 48 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuSceneSegment {
    pub start: [f32; 3],
    /// Line width in pixels
    pub width: f32,
    pub end: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 4],
}

/// One triangle-list vertex (matches shader `SceneVertex`, 32 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuSceneVertex {
    pub position: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 4],
}

/// Flatten every point batch in a frame into one sprite array.
pub fn collect_points(frame: &SceneFrame) -> Vec<GpuScenePoint> {
    let mut out = Vec::with_capacity(frame.total_points());
    for batch in &frame.points {
        let color = batch.color.to_array();
        for position in &batch.positions {
            out.push(GpuScenePoint {
                center: position.to_array(),
                size: batch.size,
                color,
            });
        }
    }
    out
}

/// Flatten every line batch in a frame into one segment array.
pub fn collect_segments(frame: &SceneFrame) -> Vec<GpuSceneSegment> {
    let mut out = Vec::with_capacity(frame.total_segments());
    for batch in &frame.lines {
        let color = batch.color.to_array();
        for segment in &batch.segments {
            out.push(GpuSceneSegment {
                start: segment.start.to_array(),
                width: batch.width,
                end: segment.end.to_array(),
                _pad: 0.0,
                color,
            });
        }
    }
    out
}

/// Flatten every triangle batch in a frame into one vertex array.
pub fn collect_vertices(frame: &SceneFrame) -> Vec<GpuSceneVertex> {
    let mut out = Vec::with_capacity(frame.total_triangles() * 3);
    for batch in &frame.triangles {
        let color = batch.color.to_array();
        for vertex in &batch.vertices {
            out.push(GpuSceneVertex {
                position: vertex.to_array(),
                _pad: 0.0,
                color,
            });
        }
    }
    out
}
