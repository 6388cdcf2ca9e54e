//! Continuous motion laws
//!
//! All motion is a pure function of elapsed seconds since mount, so a frame
//! can be re-derived for any point in time. Two families:
//!
//! - **Spin**: a slow whole-group rotation, fixed per section.
//! - **Float**: a gentle sinusoidal bob and tilt applied per layer or per
//!   element, decorrelated by a random time offset chosen at build time.

use glam::Vec3;
use vitrine_theme::Section;

/// Group spin angles (radians) for a section's scene at `elapsed` seconds.
///
/// Sections without a spin law return [`Vec3::ZERO`] and rely on float
/// motion alone.
pub fn spin(section: Section, elapsed: f32) -> Vec3 {
    match section {
        Section::Hero => Vec3::new(elapsed / 15.0, elapsed / 10.0, 0.0),
        Section::Experience => Vec3::new(0.0, 0.0, elapsed / 5.0),
        Section::Contact => Vec3::new(0.0, elapsed * 0.05, 0.0),
        Section::About | Section::Skills | Section::AiLab | Section::Projects => Vec3::ZERO,
    }
}

/// Vertical bob in scene units. Amplitude is `0.1 * float_intensity`, with
/// `phase` acting as a time offset so elements drift out of step.
pub fn float_offset(elapsed: f32, speed: f32, float_intensity: f32, phase: f32) -> f32 {
    let t = (elapsed + phase) * speed * 0.25;
    t.sin() * 0.1 * float_intensity
}

/// Tilt wobble (radians per axis) paired with [`float_offset`]. The z axis
/// swings noticeably less than x and y.
pub fn float_tilt(elapsed: f32, speed: f32, rotation_intensity: f32, phase: f32) -> Vec3 {
    let t = (elapsed + phase) * speed * 0.25;
    Vec3::new(t.cos() / 8.0, t.sin() / 8.0, t.sin() / 20.0) * rotation_intensity
}

/// Where a layer's float phase comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum FloatPhase {
    /// Every element bobs in lockstep (rigid layer motion).
    Shared(f32),
    /// Element `i` uses phase `phases[i]`; indexes past the end fall back
    /// to zero.
    PerElement(Vec<f32>),
}

impl FloatPhase {
    pub fn at(&self, index: usize) -> f32 {
        match self {
            FloatPhase::Shared(phase) => *phase,
            FloatPhase::PerElement(phases) => phases.get(index).copied().unwrap_or(0.0),
        }
    }
}

/// Float parameters for one layer.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    pub phase: FloatPhase,
}

impl FloatMotion {
    pub fn new(speed: f32, rotation_intensity: f32, float_intensity: f32, phase: FloatPhase) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
            phase,
        }
    }

    pub fn offset_at(&self, elapsed: f32, index: usize) -> f32 {
        float_offset(elapsed, self.speed, self.float_intensity, self.phase.at(index))
    }

    pub fn tilt_at(&self, elapsed: f32, index: usize) -> Vec3 {
        float_tilt(elapsed, self.speed, self.rotation_intensity, self.phase.at(index))
    }
}
