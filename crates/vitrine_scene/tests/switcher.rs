//! Store-driven scene switching, exercised end to end: theme writes flow
//! through snapshots into mounts, color easing, and backdrop fades.

use rand::rngs::StdRng;
use rand::SeedableRng;
use vitrine_scene::SceneSwitcher;
use vitrine_theme::{backdrop, Accent, Mode, Section, ThemeStore};

const DT: f32 = 1.0 / 60.0;

fn seeded_switcher() -> SceneSwitcher {
    SceneSwitcher::with_rng(StdRng::seed_from_u64(99))
}

#[test]
fn test_landing_mounts_hero_over_dark_cyan() {
    let store = ThemeStore::with_defaults();
    let mut switcher = seeded_switcher();
    switcher.update(&store.snapshot(), DT);

    let instance = switcher.instance().expect("scene mounted on first update");
    assert_eq!(instance.section(), Section::Hero);
    assert_eq!(instance.color().current(), Accent::Cyan.color());
    assert_eq!(
        switcher.backdrop().unwrap(),
        backdrop(Accent::Cyan, Mode::Dark)
    );

    let frame = switcher.frame().expect("frame after first update");
    assert_eq!(frame.total_points(), 2000, "hero particle sphere");
    assert_eq!(frame.points[0].color.a, 0.8, "hero dark-mode opacity");
}

#[test]
fn test_scroll_to_projects_swaps_scene_in_one_update() {
    let store = ThemeStore::with_defaults();
    let mut switcher = seeded_switcher();
    switcher.update(&store.snapshot(), DT);

    store.set_active_section(Section::About);
    switcher.update(&store.snapshot(), DT);
    assert_eq!(switcher.instance().unwrap().section(), Section::About);

    store.set_active_section(Section::Projects);
    switcher.update(&store.snapshot(), DT);
    let instance = switcher.instance().unwrap();
    assert_eq!(instance.section(), Section::Projects);
    assert_eq!(instance.elapsed(), 0.0, "fresh clock on remount");
    // 15 wireframe cubes, 12 edges each
    assert_eq!(switcher.frame().unwrap().total_segments(), 180);
}

#[test]
fn test_accent_switch_mid_scene_eases_over_frames() {
    let store = ThemeStore::with_defaults();
    store.set_active_section(Section::Skills);
    let mut switcher = seeded_switcher();
    switcher.update(&store.snapshot(), DT);

    store.set_accent(Accent::Emerald);
    let target = Accent::Emerald.color();
    let mut distances = Vec::new();
    for _ in 0..120 {
        switcher.update(&store.snapshot(), DT);
        let c = switcher.instance().unwrap().color().current();
        let d = ((c.r - target.r).powi(2) + (c.g - target.g).powi(2) + (c.b - target.b).powi(2))
            .sqrt();
        distances.push(d);
    }

    assert!(distances[0] > 0.0, "one frame in, still off target");
    assert!(distances[1] < distances[0], "approach is gradual, not a snap");
    assert!(
        *distances.last().unwrap() < 0.01,
        "settles near the target, got {}",
        distances.last().unwrap()
    );
}

#[test]
fn test_mode_toggle_keeps_scene_but_restyles() {
    let store = ThemeStore::with_defaults();
    store.set_active_section(Section::Projects);
    let mut switcher = seeded_switcher();
    switcher.update(&store.snapshot(), DT);
    let dark_alpha = switcher.frame().unwrap().lines[0].color.a;

    store.toggle_mode();
    switcher.update(&store.snapshot(), DT);
    assert_eq!(
        switcher.instance().unwrap().section(),
        Section::Projects,
        "mode toggle must not remount"
    );
    let light_alpha = switcher.frame().unwrap().lines[0].color.a;
    assert_eq!(dark_alpha, 0.15);
    assert_eq!(light_alpha, 0.3);
}

#[test]
fn test_every_section_mounts_through_the_store() {
    let store = ThemeStore::with_defaults();
    let mut switcher = seeded_switcher();
    for &section in Section::all() {
        store.set_active_section(section);
        switcher.update(&store.snapshot(), DT);
        assert_eq!(switcher.instance().unwrap().section(), section);

        let frame = switcher.frame().unwrap();
        let drawn = frame.total_points() + frame.total_segments() + frame.total_triangles();
        assert!(drawn > 0, "{} renders nothing", section.id());
    }
}
