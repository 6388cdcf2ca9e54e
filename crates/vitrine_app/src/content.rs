//! Static portfolio content mirrored from the page.

use vitrine_theme::Section;

/// One project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
    pub details: &'static str,
}

/// One skill meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0-100.
    pub level: u8,
    pub icon: &'static str,
}

/// One timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// One navigation bar entry. The hero section is the logo anchor and has no
/// nav item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub anchor: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Aetheria Cloud",
        description: "A decentralized cloud computing platform built on Ethereum, featuring real-time resource allocation and zero-knowledge proofs.",
        image: "https://picsum.photos/seed/aetheria/800/600",
        tags: &["React", "Three.js", "Solidity", "Node.js"],
        link: "#",
        details: "This project involved creating a highly scalable infrastructure for decentralized applications. We implemented a custom consensus algorithm and a high-performance networking layer.",
    },
    Project {
        id: 2,
        title: "Nebula OS",
        description: "A futuristic web-based operating system with a focus on spatial computing and seamless multi-device synchronization.",
        image: "https://picsum.photos/seed/nebula/800/600",
        tags: &["TypeScript", "WebAssembly", "Rust", "Canvas"],
        link: "#",
        details: "Nebula OS redefines how we interact with the web. It uses a custom window management system and a powerful plugin architecture.",
    },
    Project {
        id: 3,
        title: "Zenith Analytics",
        description: "AI-powered data visualization dashboard for enterprise-level logistics tracking and predictive maintenance.",
        image: "https://picsum.photos/seed/zenith/800/600",
        tags: &["Next.js", "D3.js", "Python", "TensorFlow"],
        link: "#",
        details: "Zenith provides real-time insights into complex supply chains. The AI model predicts potential failures before they occur, saving millions in operational costs.",
    },
    Project {
        id: 4,
        title: "Lumina VR",
        description: "An immersive virtual reality art gallery where users can create and trade generative 3D sculptures as NFTs.",
        image: "https://picsum.photos/seed/lumina/800/600",
        tags: &["Unity", "C#", "WebXR", "IPFS"],
        link: "#",
        details: "Lumina bridges the gap between digital art and physical presence. Users can explore galleries in VR and interact with dynamic, evolving sculptures.",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "React / Next.js", level: 95, icon: "Code2" },
    Skill { name: "TypeScript", level: 90, icon: "FileJson" },
    Skill { name: "Three.js / WebGL", level: 85, icon: "Box" },
    Skill { name: "Node.js / Express", level: 88, icon: "Server" },
    Skill { name: "Tailwind CSS", level: 98, icon: "Palette" },
    Skill { name: "Framer Motion", level: 92, icon: "Zap" },
    Skill { name: "PostgreSQL / Prisma", level: 80, icon: "Database" },
    Skill { name: "Docker / AWS", level: 75, icon: "Cloud" },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "Future Labs",
        role: "Senior Creative Developer",
        period: "2023 - Present",
        description: "Leading the frontend team in building immersive web experiences for Fortune 500 clients. Specialized in high-performance 3D visualizations.",
    },
    ExperienceEntry {
        company: "Nova Interactive",
        role: "Full Stack Engineer",
        period: "2021 - 2023",
        description: "Developed scalable SaaS platforms and integrated complex AI models into user-facing dashboards.",
    },
    ExperienceEntry {
        company: "Pixel Perfect",
        role: "Frontend Developer",
        period: "2019 - 2021",
        description: "Crafted pixel-perfect landing pages and interactive marketing campaigns for global brands.",
    },
];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { section: Section::About, anchor: "about", label: "About", icon: "User" },
    NavItem { section: Section::Skills, anchor: "skills", label: "Skills", icon: "Cpu" },
    NavItem { section: Section::AiLab, anchor: "ai-lab", label: "AI Lab", icon: "Brain" },
    NavItem { section: Section::Projects, anchor: "projects", label: "Projects", icon: "Briefcase" },
    NavItem { section: Section::Experience, anchor: "experience", label: "Experience", icon: "TrendingUp" },
    NavItem { section: Section::Contact, anchor: "contact", label: "Contact", icon: "Mail" },
];

/// Nav item for a section, if it has one.
pub fn nav_item(section: Section) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.section == section)
}
