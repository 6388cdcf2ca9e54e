//! Procedural layout generators, one per section
//!
//! Each generator builds a [`SceneGeometry`] once per mount from a
//! caller-supplied RNG. Production mounts seed from entropy, so every visit
//! looks slightly different; tests pass a seeded RNG and get the exact same
//! layout back.

use crate::geometry::{
    LayerOpacity, LayerTint, LineLayer, LineSegment, OrientedQuad, PointLayer, QuadLayer,
    SceneGeometry,
};
use crate::motion::{FloatMotion, FloatPhase};
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::{FRAC_PI_4, FRAC_PI_6, TAU};
use vitrine_theme::Section;

/// Range float phases are drawn from, in seconds of time offset.
const PHASE_RANGE: std::ops::Range<f32> = 0.0..100.0;

/// Builds the layout for `section`, consuming randomness from `rng`.
pub fn generate<R: Rng + ?Sized>(section: Section, rng: &mut R) -> SceneGeometry {
    match section {
        Section::Hero => hero(rng),
        Section::About => about(rng),
        Section::Skills => skills(rng),
        Section::AiLab => ai_lab(rng),
        Section::Projects => projects(rng),
        Section::Experience => experience(rng),
        Section::Contact => contact(rng),
    }
}

fn phases<R: Rng + ?Sized>(rng: &mut R, count: usize) -> FloatPhase {
    FloatPhase::PerElement((0..count).map(|_| rng.random_range(PHASE_RANGE)).collect())
}

fn random_in_box<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, depth: f32) -> Vec3 {
    Vec3::new(
        rng.random_range(-width / 2.0..width / 2.0),
        rng.random_range(-height / 2.0..height / 2.0),
        rng.random_range(-depth / 2.0..depth / 2.0),
    )
}

fn polyline(points: &[Vec3], width: f32, opacity: f32, tint: LayerTint, float: FloatMotion) -> LineLayer {
    LineLayer {
        segments: points
            .windows(2)
            .map(|pair| LineSegment::new(pair[0], pair[1]))
            .collect(),
        width,
        opacity: LayerOpacity::uniform(opacity),
        tint,
        float: Some(float),
        pivot: Vec3::ZERO,
    }
}

// ========== Hero ==========

/// Particle sphere: 2000 points uniform on a radius-10 shell, tilted 45°.
fn hero<R: Rng + ?Sized>(rng: &mut R) -> SceneGeometry {
    let mut scene = SceneGeometry::new(Vec3::new(0.0, 0.0, FRAC_PI_4));
    let radius = 10.0;
    let positions = (0..2000)
        .map(|_| {
            let theta = TAU * rng.random::<f32>();
            let phi = (2.0 * rng.random::<f32>() - 1.0).acos();
            Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            )
        })
        .collect();
    scene.points.push(PointLayer {
        positions,
        size: 0.04,
        opacity: LayerOpacity::by_mode(0.8, 0.4),
        tint: LayerTint::Scene,
        float: None,
    });
    scene
}

// ========== About ==========

/// Ordered 10x10 grid of small cubes, each bobbing out of step.
fn about<R: Rng + ?Sized>(rng: &mut R) -> SceneGeometry {
    let mut scene = SceneGeometry::new(Vec3::new(FRAC_PI_6, FRAC_PI_6, 0.0));
    let count = 10;
    let separation = 1.5;
    let mut positions = Vec::with_capacity(count * count);
    for i in 0..count {
        for j in 0..count {
            positions.push(Vec3::new(
                (i as f32 - count as f32 / 2.0) * separation,
                (j as f32 - count as f32 / 2.0) * separation,
                0.0,
            ));
        }
    }
    let float = FloatMotion::new(2.0, 0.5, 0.5, phases(rng, positions.len()));
    scene.points.push(PointLayer {
        positions,
        size: 0.1,
        opacity: LayerOpacity::uniform(0.4),
        tint: LayerTint::Scene,
        float: Some(float),
    });
    scene
}

// ========== Skills ==========

/// Network graph: 30 random segments plus a bobbing marker at each start.
fn skills<R: Rng + ?Sized>(rng: &mut R) -> SceneGeometry {
    let mut scene = SceneGeometry::default();
    let segments: Vec<LineSegment> = (0..30)
        .map(|_| {
            LineSegment::new(
                random_in_box(rng, 15.0, 15.0, 5.0),
                random_in_box(rng, 15.0, 15.0, 5.0),
            )
        })
        .collect();
    let starts: Vec<Vec3> = segments.iter().map(|seg| seg.start).collect();
    scene.lines.push(LineLayer {
        segments,
        width: 1.0,
        opacity: LayerOpacity::uniform(0.2),
        tint: LayerTint::Scene,
        float: None,
        pivot: Vec3::ZERO,
    });
    // 0.05-radius node markers
    let float = FloatMotion::new(1.0, 1.0, 1.0, phases(rng, starts.len()));
    scene.points.push(PointLayer {
        positions: starts,
        size: 0.1,
        opacity: LayerOpacity::uniform(1.0),
        tint: LayerTint::Scene,
        float: Some(float),
    });
    scene
}

// ========== AI lab ==========

/// Data swarm: 200 points and two polyline runs, all floating as one body.
fn ai_lab<R: Rng + ?Sized>(rng: &mut R) -> SceneGeometry {
    let mut scene = SceneGeometry::default();
    let float = FloatMotion::new(5.0, 2.0, 2.0, FloatPhase::Shared(rng.random_range(PHASE_RANGE)));
    let positions = (0..200)
        .map(|_| random_in_box(rng, 10.0, 10.0, 10.0))
        .collect();
    scene.points.push(PointLayer {
        positions,
        size: 0.1,
        opacity: LayerOpacity::uniform(0.8),
        tint: LayerTint::Scene,
        float: Some(float.clone()),
    });
    let pulse = [
        Vec3::ZERO,
        Vec3::new(2.0, 2.0, 2.0),
        Vec3::new(-2.0, -2.0, -2.0),
        Vec3::new(2.0, -2.0, 2.0),
        Vec3::new(-2.0, 2.0, -2.0),
    ];
    scene
        .lines
        .push(polyline(&pulse, 1.0, 0.5, LayerTint::Scene, float.clone()));
    let axes = [
        Vec3::new(-2.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(0.0, -2.0, 0.0),
    ];
    scene
        .lines
        .push(polyline(&axes, 0.5, 0.2, LayerTint::Contrast, float));
    scene
}

// ========== Projects ==========

/// 15 wireframe cubes scattered through the volume, each tumbling on its
/// own speed.
fn projects<R: Rng + ?Sized>(rng: &mut R) -> SceneGeometry {
    let mut scene = SceneGeometry::default();
    for _ in 0..15 {
        let center = random_in_box(rng, 15.0, 15.0, 10.0);
        let float = FloatMotion::new(
            1.0 + rng.random::<f32>(),
            2.0,
            2.0,
            FloatPhase::Shared(rng.random_range(PHASE_RANGE)),
        );
        scene.lines.push(wireframe_cube(center, 0.5, float));
    }
    scene
}

fn wireframe_cube(center: Vec3, size: f32, float: FloatMotion) -> LineLayer {
    let half = size / 2.0;
    let corners = [
        center + Vec3::new(-half, -half, -half),
        center + Vec3::new(half, -half, -half),
        center + Vec3::new(half, half, -half),
        center + Vec3::new(-half, half, -half),
        center + Vec3::new(-half, -half, half),
        center + Vec3::new(half, -half, half),
        center + Vec3::new(half, half, half),
        center + Vec3::new(-half, half, half),
    ];
    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    LineLayer {
        segments: EDGES
            .iter()
            .map(|&(a, b)| LineSegment::new(corners[a], corners[b]))
            .collect(),
        width: 1.0,
        opacity: LayerOpacity::by_mode(0.15, 0.3),
        tint: LayerTint::Scene,
        float: Some(float),
        pivot: center,
    }
}

// ========== Experience ==========

/// Flowing ring: 40 thin quads on a radius-6 circle, z jittered, spun as a
/// group by the experience rotation law.
fn experience<R: Rng + ?Sized>(rng: &mut R) -> SceneGeometry {
    let mut scene = SceneGeometry::default();
    let count = 40;
    let radius = 6.0;
    let quads = (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            OrientedQuad {
                center: Vec3::new(
                    angle.cos() * radius,
                    angle.sin() * radius,
                    rng.random_range(-10.0..10.0),
                ),
                angle,
                size: Vec2::new(0.1, 2.0),
            }
        })
        .collect();
    let float = FloatMotion::new(3.0, 1.0, 1.0, phases(rng, count));
    scene.quads.push(QuadLayer {
        quads,
        opacity: LayerOpacity::uniform(0.3),
        tint: LayerTint::Scene,
        float: Some(float),
    });
    scene
}

// ========== Contact ==========

/// Calm starfield: 1000 points in a ±10 cube, slow whole-scene yaw.
fn contact<R: Rng + ?Sized>(rng: &mut R) -> SceneGeometry {
    let mut scene = SceneGeometry::default();
    let positions = (0..1000)
        .map(|_| random_in_box(rng, 20.0, 20.0, 20.0))
        .collect();
    scene.points.push(PointLayer {
        positions,
        size: 0.05,
        opacity: LayerOpacity::uniform(0.6),
        tint: LayerTint::Scene,
        float: None,
    });
    scene
}
