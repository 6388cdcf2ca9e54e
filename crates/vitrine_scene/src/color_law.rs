//! Per-frame scene tint convergence.

use vitrine_core::Color;

/// Fraction of the remaining distance to the target covered each frame.
pub const LERP_PER_FRAME: f32 = 0.05;

/// The animated scene tint.
///
/// A freshly built scene starts exactly at its target; when the theme hands
/// it a new target the color eases toward it by [`LERP_PER_FRAME`] per frame
/// and is never snapped. The target itself may move again mid-flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneColor {
    current: Color,
    target: Color,
}

impl SceneColor {
    pub fn new(initial: Color) -> Self {
        Self {
            current: initial,
            target: initial,
        }
    }

    pub fn set_target(&mut self, target: Color) {
        self.target = target;
    }

    pub fn current(&self) -> Color {
        self.current
    }

    pub fn target(&self) -> Color {
        self.target
    }

    /// Advances one frame and returns the new current color.
    pub fn advance(&mut self) -> Color {
        self.current = Color::lerp(&self.current, &self.target, LERP_PER_FRAME);
        self.current
    }

    /// True once every channel is within `epsilon` of the target.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.current.r - self.target.r).abs() <= epsilon
            && (self.current.g - self.target.g).abs() <= epsilon
            && (self.current.b - self.target.b).abs() <= epsilon
            && (self.current.a - self.target.a).abs() <= epsilon
    }
}
