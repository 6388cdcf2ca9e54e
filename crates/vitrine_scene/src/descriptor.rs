//! Fixed scene registry
//!
//! Every section owns exactly one scene, known at compile time. The registry
//! is a static 7-entry table; lookup is total and never allocates.

use crate::geometry::SceneGeometry;
use crate::scenes;
use rand::RngCore;
use vitrine_core::Color;
use vitrine_theme::{Accent, Mode, Section};

/// Static description of one section's scene.
pub struct SceneDescriptor {
    pub section: Section,
    /// Human-readable scene name, used in logs and the preview overlay.
    pub name: &'static str,
    /// Builds the mount-time layout, consuming randomness from `rng`.
    pub build: fn(&mut dyn RngCore) -> SceneGeometry,
}

static REGISTRY: [SceneDescriptor; 7] = [
    SceneDescriptor {
        section: Section::Hero,
        name: "particle sphere",
        build: |rng| scenes::generate(Section::Hero, rng),
    },
    SceneDescriptor {
        section: Section::About,
        name: "logic grid",
        build: |rng| scenes::generate(Section::About, rng),
    },
    SceneDescriptor {
        section: Section::Skills,
        name: "skill network",
        build: |rng| scenes::generate(Section::Skills, rng),
    },
    SceneDescriptor {
        section: Section::AiLab,
        name: "data swarm",
        build: |rng| scenes::generate(Section::AiLab, rng),
    },
    SceneDescriptor {
        section: Section::Projects,
        name: "building blocks",
        build: |rng| scenes::generate(Section::Projects, rng),
    },
    SceneDescriptor {
        section: Section::Experience,
        name: "flow ring",
        build: |rng| scenes::generate(Section::Experience, rng),
    },
    SceneDescriptor {
        section: Section::Contact,
        name: "starfield",
        build: |rng| scenes::generate(Section::Contact, rng),
    },
];

/// Looks up the scene for a section. Total over all sections.
pub fn descriptor(section: Section) -> &'static SceneDescriptor {
    &REGISTRY[section.page_index()]
}

/// Target tint for a mounted scene.
///
/// The hero sphere dims to slate in light mode so it stays visible on a pale
/// backdrop; every other scene follows the accent in both modes.
pub fn scene_tint(section: Section, accent: Accent, mode: Mode) -> Color {
    match (section, mode) {
        (Section::Hero, Mode::Light) => Color::from_hex(0x334155),
        _ => accent.color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_registry_is_total_and_aligned() {
        for &section in Section::all() {
            let desc = descriptor(section);
            assert_eq!(desc.section, section);
            assert!(!desc.name.is_empty());
        }
    }

    #[test]
    fn test_registry_builders_produce_geometry() {
        let mut rng = StdRng::seed_from_u64(7);
        for &section in Section::all() {
            let scene = (descriptor(section).build)(&mut rng);
            assert!(!scene.is_empty(), "{} built empty geometry", section.id());
        }
    }

    #[test]
    fn test_scene_tint_is_total() {
        for &section in Section::all() {
            for &accent in Accent::all() {
                for &mode in Mode::all() {
                    let _ = scene_tint(section, accent, mode);
                }
            }
        }
    }

    #[test]
    fn test_hero_dims_to_slate_in_light_mode() {
        let slate = Color::from_hex(0x334155);
        assert_eq!(scene_tint(Section::Hero, Accent::Cyan, Mode::Light), slate);
        assert_eq!(
            scene_tint(Section::Hero, Accent::Ember, Mode::Dark),
            Accent::Ember.color()
        );
        assert_eq!(
            scene_tint(Section::Contact, Accent::Purple, Mode::Light),
            Accent::Purple.color()
        );
    }
}
