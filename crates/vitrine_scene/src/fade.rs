//! Backdrop cross-fade
//!
//! The gradient lookup itself is pure; this type is the renderer-side state
//! that eases the displayed gradient from one `(accent, mode)` pair's spec to
//! the next instead of cutting hard.

use crate::easing::Easing;
use vitrine_theme::{backdrop, Accent, Backdrop, Mode};

/// Cross-fade length in seconds.
pub const FADE_DURATION_SECS: f32 = 1.0;

/// Eases the displayed backdrop between gradient specs.
#[derive(Clone, Debug)]
pub struct BackdropFade {
    from: Backdrop,
    to: Backdrop,
    /// Seconds into the active fade; at or past the duration means settled.
    progress: f32,
    target: (Accent, Mode),
}

impl BackdropFade {
    /// Starts settled on the pair's gradient.
    pub fn new(accent: Accent, mode: Mode) -> Self {
        let spec = backdrop(accent, mode);
        Self {
            from: spec,
            to: spec,
            progress: FADE_DURATION_SECS,
            target: (accent, mode),
        }
    }

    /// Points the fade at a new pair. A retarget mid-fade starts from the
    /// currently displayed gradient, not from the old endpoint. Same pair is
    /// a no-op.
    pub fn retarget(&mut self, accent: Accent, mode: Mode) {
        if self.target == (accent, mode) {
            return;
        }
        self.from = self.current();
        self.to = backdrop(accent, mode);
        self.progress = 0.0;
        self.target = (accent, mode);
    }

    /// Advances by `dt` seconds and returns the gradient to display.
    pub fn advance(&mut self, dt: f32) -> Backdrop {
        self.progress = (self.progress + dt).min(FADE_DURATION_SECS);
        self.current()
    }

    /// The gradient currently on screen.
    pub fn current(&self) -> Backdrop {
        if self.is_settled() {
            return self.to;
        }
        let t = Easing::CSS_EASE.apply(self.progress / FADE_DURATION_SECS);
        Backdrop::lerp(&self.from, &self.to, t)
    }

    pub fn is_settled(&self) -> bool {
        self.progress >= FADE_DURATION_SECS
    }

    pub fn target(&self) -> (Accent, Mode) {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_settled() {
        let fade = BackdropFade::new(Accent::Cyan, Mode::Dark);
        assert!(fade.is_settled());
        assert_eq!(fade.current(), backdrop(Accent::Cyan, Mode::Dark));
    }

    #[test]
    fn test_retarget_unsettles_and_converges() {
        let mut fade = BackdropFade::new(Accent::Cyan, Mode::Dark);
        fade.retarget(Accent::Purple, Mode::Dark);
        assert!(!fade.is_settled());

        let mid = fade.advance(0.5);
        assert_ne!(mid, backdrop(Accent::Cyan, Mode::Dark));
        assert_ne!(mid, backdrop(Accent::Purple, Mode::Dark));

        let done = fade.advance(0.6);
        assert!(fade.is_settled());
        assert_eq!(done, backdrop(Accent::Purple, Mode::Dark));
    }

    #[test]
    fn test_same_pair_retarget_is_a_noop() {
        let mut fade = BackdropFade::new(Accent::Cyan, Mode::Dark);
        fade.advance(2.0);
        fade.retarget(Accent::Cyan, Mode::Dark);
        assert!(fade.is_settled());
    }

    #[test]
    fn test_mid_fade_retarget_starts_from_displayed_gradient() {
        let mut fade = BackdropFade::new(Accent::Cyan, Mode::Dark);
        fade.retarget(Accent::Purple, Mode::Dark);
        fade.advance(0.3);
        let displayed = fade.current();
        fade.retarget(Accent::Ember, Mode::Light);
        assert_eq!(fade.current(), displayed);
        assert_eq!(fade.target(), (Accent::Ember, Mode::Light));
    }
}
