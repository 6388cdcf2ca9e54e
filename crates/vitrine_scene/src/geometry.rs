//! Scene geometry layers and the per-frame resolved form
//!
//! Geometry is built once per mount (positions fixed at creation); the frame
//! loop resolves it every frame into batches with bobbing offsets applied and
//! tint/opacity collapsed into a single RGBA color per batch.

use crate::motion::FloatMotion;
use glam::{Mat4, Quat, Vec2, Vec3};
use vitrine_core::Color;
use vitrine_theme::Mode;

/// How a layer picks its color at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerTint {
    /// Follows the animated scene color (accent, lerped on theme change).
    Scene,
    /// Maximum-contrast foreground for the mode; swaps instantly.
    Contrast,
}

/// Per-mode layer opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerOpacity {
    pub dark: f32,
    pub light: f32,
}

impl LayerOpacity {
    pub const fn uniform(value: f32) -> Self {
        Self {
            dark: value,
            light: value,
        }
    }

    pub const fn by_mode(dark: f32, light: f32) -> Self {
        Self { dark, light }
    }

    pub fn resolve(&self, mode: Mode) -> f32 {
        match mode {
            Mode::Dark => self.dark,
            Mode::Light => self.light,
        }
    }
}

/// A line between two points, in scene space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl LineSegment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }
}

/// A flat rectangle oriented by a z rotation around its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedQuad {
    pub center: Vec3,
    pub angle: f32,
    pub size: Vec2,
}

/// A batch of same-styled points.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLayer {
    pub positions: Vec<Vec3>,
    pub size: f32,
    pub opacity: LayerOpacity,
    pub tint: LayerTint,
    pub float: Option<FloatMotion>,
}

impl PointLayer {
    pub fn sample(&self, elapsed: f32, color: Color) -> PointBatch {
        let positions = match &self.float {
            None => self.positions.clone(),
            Some(float) => self
                .positions
                .iter()
                .enumerate()
                .map(|(i, p)| *p + Vec3::Y * float.offset_at(elapsed, i))
                .collect(),
        };
        PointBatch {
            positions,
            size: self.size,
            color,
        }
    }
}

/// A batch of same-styled line segments.
///
/// When bobbing with a shared phase, the whole layer moves rigidly about
/// `pivot`; with per-element phases each segment bobs independently.
#[derive(Clone, Debug, PartialEq)]
pub struct LineLayer {
    pub segments: Vec<LineSegment>,
    pub width: f32,
    pub opacity: LayerOpacity,
    pub tint: LayerTint,
    pub float: Option<FloatMotion>,
    pub pivot: Vec3,
}

impl LineLayer {
    pub fn sample(&self, elapsed: f32, color: Color) -> LineBatch {
        let segments = match &self.float {
            None => self.segments.clone(),
            Some(float) => self
                .segments
                .iter()
                .enumerate()
                .map(|(i, seg)| {
                    let offset = Vec3::Y * float.offset_at(elapsed, i);
                    let tilt = float.tilt_at(elapsed, i);
                    let rot = Quat::from_euler(glam::EulerRot::XYZ, tilt.x, tilt.y, tilt.z);
                    let map = |v: Vec3| self.pivot + rot * (v - self.pivot) + offset;
                    LineSegment::new(map(seg.start), map(seg.end))
                })
                .collect(),
        };
        LineBatch {
            segments,
            width: self.width,
            color,
        }
    }
}

/// A batch of same-styled quads, resolved to triangles each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadLayer {
    pub quads: Vec<OrientedQuad>,
    pub opacity: LayerOpacity,
    pub tint: LayerTint,
    pub float: Option<FloatMotion>,
}

impl QuadLayer {
    pub fn sample(&self, elapsed: f32, color: Color) -> TriangleBatch {
        let mut vertices = Vec::with_capacity(self.quads.len() * 6);
        for (i, quad) in self.quads.iter().enumerate() {
            let (offset, wobble) = match &self.float {
                None => (Vec3::ZERO, 0.0),
                Some(float) => (
                    Vec3::Y * float.offset_at(elapsed, i),
                    float.tilt_at(elapsed, i).z,
                ),
            };
            let rot = Quat::from_rotation_z(quad.angle + wobble);
            let half = quad.size * 0.5;
            let corners = [
                Vec3::new(-half.x, -half.y, 0.0),
                Vec3::new(half.x, -half.y, 0.0),
                Vec3::new(half.x, half.y, 0.0),
                Vec3::new(-half.x, half.y, 0.0),
            ];
            let world = corners.map(|c| quad.center + offset + rot * c);
            // Two triangles per quad
            vertices.extend_from_slice(&[world[0], world[1], world[2]]);
            vertices.extend_from_slice(&[world[0], world[2], world[3]]);
        }
        TriangleBatch { vertices, color }
    }
}

/// Everything a mounted scene renders, positions fixed at build time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneGeometry {
    /// Static rotation applied around the whole scene, before the spin law.
    pub base_rotation: Vec3,
    pub points: Vec<PointLayer>,
    pub lines: Vec<LineLayer>,
    pub quads: Vec<QuadLayer>,
}

impl SceneGeometry {
    pub fn new(base_rotation: Vec3) -> Self {
        Self {
            base_rotation,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty() && self.quads.is_empty()
    }
}

// ========== Resolved frame data ==========

#[derive(Clone, Debug)]
pub struct PointBatch {
    pub positions: Vec<Vec3>,
    pub size: f32,
    pub color: Color,
}

#[derive(Clone, Debug)]
pub struct LineBatch {
    pub segments: Vec<LineSegment>,
    pub width: f32,
    pub color: Color,
}

#[derive(Clone, Debug)]
pub struct TriangleBatch {
    pub vertices: Vec<Vec3>,
    pub color: Color,
}

/// One frame's worth of renderable scene content.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    /// Scene-space to world-space transform (base rotation + spin).
    pub model: Mat4,
    pub points: Vec<PointBatch>,
    pub lines: Vec<LineBatch>,
    pub triangles: Vec<TriangleBatch>,
}

impl SceneFrame {
    pub fn total_points(&self) -> usize {
        self.points.iter().map(|b| b.positions.len()).sum()
    }

    pub fn total_segments(&self) -> usize {
        self.lines.iter().map(|b| b.segments.len()).sum()
    }

    pub fn total_triangles(&self) -> usize {
        self.triangles.iter().map(|b| b.vertices.len() / 3).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_resolution() {
        let op = LayerOpacity::by_mode(0.15, 0.3);
        assert_eq!(op.resolve(Mode::Dark), 0.15);
        assert_eq!(op.resolve(Mode::Light), 0.3);
        assert_eq!(LayerOpacity::uniform(0.6).resolve(Mode::Light), 0.6);
    }

    #[test]
    fn test_static_point_layer_sample_keeps_positions() {
        let layer = PointLayer {
            positions: vec![Vec3::ONE, Vec3::new(1.0, 2.0, 3.0)],
            size: 0.05,
            opacity: LayerOpacity::uniform(0.6),
            tint: LayerTint::Scene,
            float: None,
        };
        let batch = layer.sample(12.5, Color::WHITE);
        assert_eq!(batch.positions, layer.positions);
    }

    #[test]
    fn test_quad_sample_emits_two_triangles_per_quad() {
        let layer = QuadLayer {
            quads: vec![OrientedQuad {
                center: Vec3::ZERO,
                angle: 0.0,
                size: Vec2::new(2.0, 4.0),
            }],
            opacity: LayerOpacity::uniform(0.3),
            tint: LayerTint::Scene,
            float: None,
        };
        let batch = layer.sample(0.0, Color::WHITE);
        assert_eq!(batch.vertices.len(), 6);
        // Corners land at half-extents
        assert!(batch.vertices.contains(&Vec3::new(-1.0, -2.0, 0.0)));
        assert!(batch.vertices.contains(&Vec3::new(1.0, 2.0, 0.0)));
    }
}
