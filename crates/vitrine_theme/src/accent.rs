//! Accent color families and the light/dark mode

use std::fmt::{Display, Formatter};
use vitrine_core::Color;

/// Built-in accent catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Accent {
    /// Electric cyan, the landing default.
    #[default]
    Cyan,
    /// Emerald green.
    Emerald,
    /// Violet purple.
    Purple,
    /// Warm ember orange.
    Ember,
}

impl Accent {
    /// Stable accent id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Emerald => "emerald",
            Self::Purple => "purple",
            Self::Ember => "ember",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Cyan => "Cyan",
            Self::Emerald => "Emerald",
            Self::Purple => "Purple",
            Self::Ember => "Ember",
        }
    }

    /// Full accent list, in switcher order.
    pub fn all() -> &'static [Accent] {
        const ACCENTS: [Accent; 4] = [Accent::Cyan, Accent::Emerald, Accent::Purple, Accent::Ember];
        &ACCENTS
    }

    /// The accent's signature color.
    pub fn color(self) -> Color {
        match self {
            Self::Cyan => Color::from_hex(0x00F2FF),
            Self::Emerald => Color::from_hex(0x10B981),
            Self::Purple => Color::from_hex(0xA855F7),
            Self::Ember => Color::from_hex(0xF97316),
        }
    }
}

impl Display for Accent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Light/dark visual variant, independent of accent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    pub fn id(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Maximum-contrast foreground for this mode (white on dark, black on
    /// light).
    pub fn contrast_color(self) -> Color {
        match self {
            Self::Dark => Color::WHITE,
            Self::Light => Color::BLACK,
        }
    }

    pub fn all() -> &'static [Mode] {
        const MODES: [Mode; 2] = [Mode::Dark, Mode::Light];
        &MODES
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_catalog() {
        assert_eq!(Accent::all().len(), 4);
        for accent in Accent::all() {
            assert!(!accent.id().is_empty());
            assert!(!accent.display_name().is_empty());
        }
    }

    #[test]
    fn test_accent_colors() {
        assert_eq!(Accent::Cyan.color().to_hex_string(), "#00f2ff");
        assert_eq!(Accent::Emerald.color().to_hex_string(), "#10b981");
        assert_eq!(Accent::Purple.color().to_hex_string(), "#a855f7");
        assert_eq!(Accent::Ember.color().to_hex_string(), "#f97316");
    }

    #[test]
    fn test_mode_toggled_is_involution() {
        for mode in Mode::all() {
            assert_eq!(mode.toggled().toggled(), *mode);
        }
    }
}
