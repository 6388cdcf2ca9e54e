//! Mounted-scene lifecycle
//!
//! [`SceneSwitcher`] owns at most one [`SceneInstance`] and swaps it when the
//! active section changes: the old instance is dropped and the new section's
//! layout is generated fresh, with its clock reset and its color starting
//! exactly on the theme target. Accent and mode changes never remount; they
//! retarget the running instance's color law and the backdrop fade.

use crate::color_law::SceneColor;
use crate::descriptor::{descriptor, scene_tint, SceneDescriptor};
use crate::fade::BackdropFade;
use crate::geometry::{LayerOpacity, LayerTint, SceneFrame, SceneGeometry};
use crate::motion::spin;
use glam::{EulerRot, Mat4};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;
use vitrine_core::Color;
use vitrine_theme::{Accent, Backdrop, Mode, Section, ThemeSnapshot};

/// One mounted scene: fixed layout, a clock, and an animated tint.
pub struct SceneInstance {
    descriptor: &'static SceneDescriptor,
    geometry: SceneGeometry,
    elapsed: f32,
    color: SceneColor,
}

impl SceneInstance {
    /// Builds the section's layout from `rng` with the clock at zero and the
    /// tint already settled on the theme target.
    pub fn mount(section: Section, accent: Accent, mode: Mode, rng: &mut dyn RngCore) -> Self {
        let desc = descriptor(section);
        let geometry = (desc.build)(rng);
        debug!(section = section.id(), scene = desc.name, "mounted scene");
        Self {
            descriptor: desc,
            geometry,
            elapsed: 0.0,
            color: SceneColor::new(scene_tint(section, accent, mode)),
        }
    }

    pub fn section(&self) -> Section {
        self.descriptor.section
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn color(&self) -> &SceneColor {
        &self.color
    }

    /// Advances the clock and steps the tint toward the current theme target.
    pub fn advance(&mut self, dt: f32, accent: Accent, mode: Mode) {
        self.elapsed += dt;
        self.color
            .set_target(scene_tint(self.section(), accent, mode));
        self.color.advance();
    }

    /// Resolves the instance into renderable batches at its current clock.
    pub fn frame(&self, mode: Mode) -> SceneFrame {
        let base = self.geometry.base_rotation;
        let turn = spin(self.section(), self.elapsed);
        let model = Mat4::from_euler(EulerRot::XYZ, base.x, base.y, base.z)
            * Mat4::from_euler(EulerRot::XYZ, turn.x, turn.y, turn.z);
        let resolve = |tint: LayerTint, opacity: &LayerOpacity| -> Color {
            let fill = match tint {
                LayerTint::Scene => self.color.current(),
                LayerTint::Contrast => mode.contrast_color(),
            };
            fill.with_alpha(opacity.resolve(mode))
        };
        SceneFrame {
            model,
            points: self
                .geometry
                .points
                .iter()
                .map(|layer| layer.sample(self.elapsed, resolve(layer.tint, &layer.opacity)))
                .collect(),
            lines: self
                .geometry
                .lines
                .iter()
                .map(|layer| layer.sample(self.elapsed, resolve(layer.tint, &layer.opacity)))
                .collect(),
            triangles: self
                .geometry
                .quads
                .iter()
                .map(|layer| layer.sample(self.elapsed, resolve(layer.tint, &layer.opacity)))
                .collect(),
        }
    }
}

/// Drives scene mounting and the backdrop fade from theme snapshots.
pub struct SceneSwitcher {
    instance: Option<SceneInstance>,
    fade: Option<BackdropFade>,
    rng: StdRng,
}

impl SceneSwitcher {
    /// Production switcher, seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Switcher with a caller-controlled RNG, for deterministic layouts.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            instance: None,
            fade: None,
            rng,
        }
    }

    /// Advances one frame against the given snapshot.
    ///
    /// A section change drops the old instance and mounts the new section in
    /// this same call; accent and mode changes retarget the running color law
    /// and the backdrop fade without remounting.
    pub fn update(&mut self, snapshot: &ThemeSnapshot, dt: f32) {
        let fade = self
            .fade
            .get_or_insert_with(|| BackdropFade::new(snapshot.accent, snapshot.mode));
        fade.retarget(snapshot.accent, snapshot.mode);
        fade.advance(dt);

        let stale = self
            .instance
            .as_ref()
            .map(|i| i.section() != snapshot.section)
            .unwrap_or(true);
        if stale {
            self.instance = Some(SceneInstance::mount(
                snapshot.section,
                snapshot.accent,
                snapshot.mode,
                &mut self.rng,
            ));
        } else if let Some(instance) = self.instance.as_mut() {
            instance.advance(dt, snapshot.accent, snapshot.mode);
        }
    }

    /// Renderable batches for the mounted scene; `None` before the first
    /// update.
    pub fn frame(&self) -> Option<SceneFrame> {
        let mode = self.fade.as_ref()?.target().1;
        self.instance.as_ref().map(|i| i.frame(mode))
    }

    /// The backdrop gradient to display; `None` before the first update.
    pub fn backdrop(&self) -> Option<Backdrop> {
        self.fade.as_ref().map(|f| f.current())
    }

    pub fn instance(&self) -> Option<&SceneInstance> {
        self.instance.as_ref()
    }
}

impl Default for SceneSwitcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switcher() -> SceneSwitcher {
        SceneSwitcher::with_rng(StdRng::seed_from_u64(1))
    }

    fn snapshot(accent: Accent, mode: Mode, section: Section) -> ThemeSnapshot {
        ThemeSnapshot {
            accent,
            mode,
            section,
        }
    }

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_empty_until_first_update() {
        let sw = switcher();
        assert!(sw.frame().is_none());
        assert!(sw.backdrop().is_none());
    }

    #[test]
    fn test_first_update_mounts_active_section() {
        let mut sw = switcher();
        sw.update(&ThemeSnapshot::default(), DT);
        let instance = sw.instance().expect("mounted");
        assert_eq!(instance.section(), Section::Hero);
        assert_eq!(instance.elapsed(), 0.0);
        assert!(sw.frame().is_some());
    }

    #[test]
    fn test_section_change_swaps_within_one_update() {
        let mut sw = switcher();
        let hero = snapshot(Accent::Cyan, Mode::Dark, Section::Hero);
        sw.update(&hero, DT);
        for _ in 0..10 {
            sw.update(&hero, DT);
        }
        assert!(sw.instance().unwrap().elapsed() > 0.0);

        let projects = snapshot(Accent::Cyan, Mode::Dark, Section::Projects);
        sw.update(&projects, DT);
        let instance = sw.instance().unwrap();
        assert_eq!(instance.section(), Section::Projects);
        assert_eq!(instance.elapsed(), 0.0, "clock resets on remount");
    }

    #[test]
    fn test_accent_change_lerps_without_remount() {
        let mut sw = switcher();
        let cyan = snapshot(Accent::Cyan, Mode::Dark, Section::Skills);
        sw.update(&cyan, DT);
        let before = sw.instance().unwrap().color().current();
        assert_eq!(before, Accent::Cyan.color());

        let purple = snapshot(Accent::Purple, Mode::Dark, Section::Skills);
        sw.update(&purple, DT);
        let one = sw.instance().unwrap().color().current();
        assert_ne!(one, Accent::Cyan.color(), "color moved");
        assert_ne!(one, Accent::Purple.color(), "but did not snap");

        sw.update(&purple, DT);
        let two = sw.instance().unwrap().color().current();
        assert_ne!(two, one);
        assert_ne!(two, Accent::Purple.color(), "still easing after two frames");
        assert_eq!(sw.instance().unwrap().section(), Section::Skills);
    }

    #[test]
    fn test_mount_starts_on_target_color() {
        let mut sw = switcher();
        sw.update(&snapshot(Accent::Ember, Mode::Dark, Section::Contact), DT);
        let color = sw.instance().unwrap().color();
        assert_eq!(color.current(), Accent::Ember.color());
        assert!(color.is_settled(0.0));
    }

    #[test]
    fn test_mode_toggle_retargets_fade() {
        let mut sw = switcher();
        let dark = snapshot(Accent::Cyan, Mode::Dark, Section::Hero);
        sw.update(&dark, DT);
        let settled = sw.backdrop().unwrap();
        assert_eq!(settled, vitrine_theme::backdrop(Accent::Cyan, Mode::Dark));

        let light = snapshot(Accent::Cyan, Mode::Light, Section::Hero);
        sw.update(&light, DT);
        let fading = sw.backdrop().unwrap();
        assert_ne!(fading, vitrine_theme::backdrop(Accent::Cyan, Mode::Dark));
        assert_ne!(fading, vitrine_theme::backdrop(Accent::Cyan, Mode::Light));
    }

    #[test]
    fn test_frame_pose_is_deterministic_at_a_clock_reading() {
        let mut sw = switcher();
        let snap = snapshot(Accent::Cyan, Mode::Dark, Section::Experience);
        sw.update(&snap, DT);
        for _ in 0..30 {
            sw.update(&snap, DT);
        }
        let a = sw.frame().unwrap();
        let b = sw.frame().unwrap();
        assert_eq!(a.model, b.model);
        assert_eq!(a.total_triangles(), b.total_triangles());
    }
}
