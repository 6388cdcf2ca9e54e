//! Page sections

use std::fmt::{Display, Formatter};

/// One scrollable content region of the page, in page order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Skills,
    AiLab,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// Stable anchor id, matching the page's element ids.
    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::AiLab => "ai-lab",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::AiLab => "AI Lab",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }

    /// Full section list, in page order.
    pub fn all() -> &'static [Section] {
        const SECTIONS: [Section; 7] = [
            Section::Hero,
            Section::About,
            Section::Skills,
            Section::AiLab,
            Section::Projects,
            Section::Experience,
            Section::Contact,
        ];
        &SECTIONS
    }

    /// Zero-based position in page order.
    pub fn page_index(self) -> usize {
        match self {
            Self::Hero => 0,
            Self::About => 1,
            Self::Skills => 2,
            Self::AiLab => 3,
            Self::Projects => 4,
            Self::Experience => 5,
            Self::Contact => 6,
        }
    }

    /// Whether the section appears in the navigation bar (hero is the logo
    /// anchor instead).
    pub fn in_nav(self) -> bool {
        !matches!(self, Self::Hero)
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let all = Section::all();
        assert_eq!(all.len(), 7);
        for (i, section) in all.iter().enumerate() {
            assert_eq!(section.page_index(), i);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let all = Section::all();
        for a in all {
            for b in all {
                if a != b {
                    assert_ne!(a.id(), b.id());
                }
            }
        }
    }

    #[test]
    fn test_nav_membership() {
        assert!(!Section::Hero.in_nav());
        assert_eq!(Section::all().iter().filter(|s| s.in_nav()).count(), 6);
    }
}
