//! Backdrop gradients
//!
//! The page layers a two-stop radial gradient beneath the 3D canvas. The
//! lookup is pure and total over the 4 accents × 2 modes; smoothing between
//! specs on theme change belongs to the rendering layer, not here.

use crate::accent::{Accent, Mode};
use vitrine_core::Color;

/// A two-stop radial gradient centered on the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Backdrop {
    /// Color at the center (0% stop).
    pub inner: Color,
    /// Color at the edge (100% stop).
    pub outer: Color,
}

impl Backdrop {
    pub const fn new(inner: Color, outer: Color) -> Self {
        Self { inner, outer }
    }

    /// Render as the page's CSS background value.
    pub fn to_css(&self) -> String {
        format!(
            "radial-gradient(circle at 50% 50%, {} 0%, {} 100%)",
            self.inner.to_hex_string(),
            self.outer.to_hex_string()
        )
    }

    /// Linear interpolation between two backdrops
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            inner: Color::lerp(&from.inner, &to.inner, t),
            outer: Color::lerp(&from.outer, &to.outer, t),
        }
    }
}

/// Backdrop for an accent/mode pair.
pub fn backdrop(accent: Accent, mode: Mode) -> Backdrop {
    match mode {
        Mode::Light => match accent {
            Accent::Cyan => Backdrop::new(Color::from_hex(0xE0F2FE), Color::from_hex(0xF0F9FF)),
            Accent::Emerald => Backdrop::new(Color::from_hex(0xDCFCE7), Color::from_hex(0xF0FDF4)),
            Accent::Purple => Backdrop::new(Color::from_hex(0xF3E8FF), Color::from_hex(0xFAF5FF)),
            Accent::Ember => Backdrop::new(Color::from_hex(0xFFEDD5), Color::from_hex(0xFFF7ED)),
        },
        Mode::Dark => match accent {
            Accent::Cyan => Backdrop::new(Color::from_hex(0x0C1214), Color::from_hex(0x000000)),
            Accent::Emerald => Backdrop::new(Color::from_hex(0x05100A), Color::from_hex(0x000000)),
            Accent::Purple => Backdrop::new(Color::from_hex(0x100510), Color::from_hex(0x000000)),
            Accent::Ember => Backdrop::new(Color::from_hex(0x100A05), Color::from_hex(0x000000)),
        },
    }
}
