// Hand-authored content of the page.

pub const SITE_TITLE: &str = "Alexandro Cardona | Software Architect";
pub const GITHUB_PROFILE: &str = "https://github.com/alexcamzzz";
pub const CONTACT_EMAIL: &str = "alexandrocamz@gmail.com";
pub const LOCATION: &str = "Mexico";

pub struct JourneyEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const JOURNEY: &[JourneyEntry] = &[
    JourneyEntry {
        year: "2021",
        title: "Early Beginnings",
        description: "Started development journey at university",
        achievements: &[
            "First production app: Library Management System",
            "Learned C# and WinForms fundamentals",
            "Foundation in strongly-typed OOP",
        ],
        technologies: &["C#", "WinForms", ".NET"],
    },
    JourneyEntry {
        year: "2022-2023",
        title: "Desktop Architecture",
        description: "Deep dive into enterprise desktop applications",
        achievements: &[
            "Migrated from WinForms to WPF/MVVM",
            "Built Prometheus Suite for logistics",
            "Deployed across 16+ branches",
            "Eliminated 100% Excel dependencies",
        ],
        technologies: &["WPF", "MVVM", "SQL Server", "C#"],
    },
    JourneyEntry {
        year: "2024",
        title: "Full Stack Expansion",
        description: "Multi-platform development and recognition",
        achievements: &[
            "2nd Place - Proyéctate 2024",
            "Top 30 - DETONAFEST 2024",
            "Principal Consultant at TURBOPAQ",
            "Built mobile, web, and desktop platforms",
        ],
        technologies: &["Flutter", "Vue 3", "Laravel", "Python", "Docker"],
    },
    JourneyEntry {
        year: "2025",
        title: "Cross-Platform & Cloud",
        description: "Modern stack and enterprise automation",
        achievements: &[
            "Innovation Intern at KOSTAL Group",
            "Built FluentFlare (EdTech platform)",
            "Migrated to Avalonia for cross-platform",
            "Deployed cloud-native architectures",
        ],
        technologies: &["Avalonia", "Nuxt 3", "MongoDB", "AWS", "RPA"],
    },
    JourneyEntry {
        year: "Future",
        title: "What's Next?",
        description: "Expanding technical horizons",
        achievements: &[
            "Advanced cloud architectures",
            "Scaling enterprise solutions",
            "Open source contributions",
            "Building the next generation of tools",
        ],
        technologies: &["???"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Desktop,
    WebFrontend,
    Backend,
    Database,
    CloudTools,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Desktop,
        Self::WebFrontend,
        Self::Backend,
        Self::Database,
        Self::CloudTools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::WebFrontend => "Web Frontend",
            Self::Backend => "Backend",
            Self::Database => "Database",
            Self::CloudTools => "Cloud & Tools",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Desktop => "#DC2626",
            Self::WebFrontend => "#3B82F6",
            Self::Backend => "#10B981",
            Self::Database => "#8B5CF6",
            Self::CloudTools => "#F59E0B",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Proficiency {
    Expert,
    Advanced,
    Proficient,
}

impl Proficiency {
    pub fn label(self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Advanced => "Advanced",
            Self::Proficient => "Proficient",
        }
    }

    /// Width of the proficiency bar, in percent.
    pub fn bar_width(self) -> u8 {
        match self {
            Self::Expert => 100,
            Self::Advanced => 75,
            Self::Proficient => 50,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub years: u8,
    pub category: Category,
    pub proficiency: Proficiency,
}

const fn tech(
    name: &'static str,
    years: u8,
    category: Category,
    proficiency: Proficiency,
) -> Technology {
    Technology {
        name,
        years,
        category,
        proficiency,
    }
}

use Category::*;
use Proficiency::*;

pub const TECHNOLOGIES: &[Technology] = &[
    tech("C# & .NET 8", 5, Desktop, Expert),
    tech("WPF/MVVM", 4, Desktop, Expert),
    tech("Avalonia UI", 2, Desktop, Advanced),
    tech("WinForms", 4, Desktop, Advanced),
    tech("Vue.js 3", 3, WebFrontend, Expert),
    tech("Nuxt 3", 3, WebFrontend, Expert),
    tech("TypeScript", 3, WebFrontend, Advanced),
    tech("Tailwind CSS", 3, WebFrontend, Advanced),
    tech("React", 2, WebFrontend, Proficient),
    tech("ASP.NET Core", 3, Backend, Advanced),
    tech("Node.js", 2, Backend, Proficient),
    tech("Laravel/PHP", 1, Backend, Proficient),
    tech("Python", 2, Backend, Advanced),
    tech("SQL Server", 4, Database, Expert),
    tech("MongoDB", 2, Database, Advanced),
    tech("AWS", 2, CloudTools, Proficient),
    tech("Docker", 2, CloudTools, Proficient),
    tech("Git", 5, CloudTools, Advanced),
    tech("Power Automate", 1, CloudTools, Proficient),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StackFilter {
    #[default]
    All,
    Only(Category),
}

impl StackFilter {
    pub fn options() -> impl Iterator<Item = StackFilter> {
        std::iter::once(Self::All).chain(Category::ALL.into_iter().map(Self::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn admits(self, technology: &Technology) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => technology.category == category,
        }
    }

    pub fn apply(self, technologies: &[Technology]) -> Vec<&Technology> {
        technologies.iter().filter(|t| self.admits(t)).collect()
    }
}

/// Counters shown above the skills grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackStats {
    pub total: usize,
    pub experience: u8,
    pub expertise: usize,
    pub active: usize,
}

impl StackStats {
    pub const ACTIVE_YEARS: u8 = 2;

    pub fn of(technologies: &[Technology]) -> Self {
        Self {
            total: technologies.len(),
            experience: technologies.iter().map(|t| t.years).max().unwrap_or(0),
            expertise: technologies
                .iter()
                .filter(|t| t.proficiency == Expert)
                .count(),
            active: technologies
                .iter()
                .filter(|t| t.years >= Self::ACTIVE_YEARS)
                .count(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub year: &'static str,
    pub category: &'static str,
    pub technologies: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub links: ProjectLinks,
}

#[derive(Debug, PartialEq, Eq, Default)]
pub struct ProjectLinks {
    pub live: Option<&'static str>,
    pub github: Option<&'static str>,
    pub case_study: Option<&'static str>,
}

const NO_LINKS: ProjectLinks = ProjectLinks {
    live: None,
    github: None,
    case_study: None,
};

pub const PROJECTS: &[Project] = &[
    Project {
        id: "turbopaq",
        title: "TURBOPAQ",
        tagline: "Complete Logistics Ecosystem",
        description: "A comprehensive multi-platform logistics system featuring a C# Desktop ERP, Flutter mobile app for branch managers, Vue 3 web admin panel, and AI-powered sales forecasting using Python and Docker deployed on AWS.",
        year: "2024",
        category: "Full-Stack Ecosystem",
        technologies: &["C#", "Flutter", "Vue 3", "Python", "MongoDB", "AWS", "Docker"],
        achievements: &[
            "2nd Place - Proyéctate 2024 Competition",
            "Top 30 Finalist - DETONAFEST 2024",
            "AI-powered sales forecasting module",
            "Unified system across desktop, mobile, and web",
        ],
        links: NO_LINKS,
    },
    Project {
        id: "fluentflare",
        title: "FluentFlare",
        tagline: "EdTech Learning Platform",
        description: "Full-stack English learning platform built with Laravel backend and MongoDB, coupled with a Vue.js + Inertia frontend. Designed for scalable, interactive language education.",
        year: "2025",
        category: "EdTech",
        technologies: &["Laravel", "MongoDB", "Vue.js", "Inertia.js", "Tailwind CSS"],
        achievements: &[
            "Currently in active development",
            "Modern EdTech architecture",
            "Interactive learning modules",
        ],
        links: NO_LINKS,
    },
    Project {
        id: "promethean-cloud",
        title: "Promethean Cloud",
        tagline: "Secure File Distribution",
        description: "A secure file distribution system using Nuxt 3 and AWS Lambda, allowing clients to access data via one-time secure codes. Built for Promethean Tech consultancy.",
        year: "2025",
        category: "Cloud Infrastructure",
        technologies: &["Nuxt 3", "AWS Lambda", "AWS S3", "TypeScript"],
        achievements: &[
            "One-time secure access codes",
            "Serverless architecture",
            "Client data security focused",
        ],
        links: NO_LINKS,
    },
    Project {
        id: "prometheus-suite",
        title: "Prometheus Suite",
        tagline: "Desktop Logistics & Sales Management",
        description: "Core desktop application for logistics tracking and sales management. Started as WPF, now migrating to Avalonia UI for cross-platform capabilities (Windows/Linux/macOS). Foundation of the TURBOPAQ ecosystem.",
        year: "2022-2025",
        category: "Desktop Application",
        technologies: &["WPF", "Avalonia UI", "C#", ".NET", "MVVM"],
        achievements: &[
            "Powers TURBOPAQ logistics",
            "Cross-platform migration in progress",
            "Sophisticated cash flow algorithms",
            "Package tracking system",
        ],
        links: NO_LINKS,
    },
];

pub fn project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/alexandrocardona",
    },
    SocialLink {
        name: "Email",
        url: "mailto:alexandrocamz@gmail.com",
    },
    SocialLink {
        name: "GitHub",
        url: GITHUB_PROFILE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_filter_keeps_everything() {
        assert_eq!(StackFilter::All.apply(TECHNOLOGIES).len(), TECHNOLOGIES.len());
    }

    #[test]
    fn category_filter_keeps_only_that_category() {
        let databases = StackFilter::Only(Database).apply(TECHNOLOGIES);
        let names: Vec<_> = databases.iter().map(|t| t.name).collect();
        assert_eq!(names, ["SQL Server", "MongoDB"]);

        let per_category: usize = Category::ALL
            .iter()
            .map(|c| StackFilter::Only(*c).apply(TECHNOLOGIES).len())
            .sum();
        assert_eq!(per_category, TECHNOLOGIES.len());
    }

    #[test]
    fn filter_options_start_with_all() {
        let labels: Vec<_> = StackFilter::options().map(StackFilter::label).collect();
        assert_eq!(
            labels,
            ["All", "Desktop", "Web Frontend", "Backend", "Database", "Cloud & Tools"]
        );
    }

    #[test]
    fn stats_summarize_the_stack() {
        assert_eq!(
            StackStats::of(TECHNOLOGIES),
            StackStats {
                total: 19,
                experience: 5,
                expertise: 5,
                active: 17,
            }
        );
    }

    #[test]
    fn stats_of_nothing_are_zero() {
        assert_eq!(
            StackStats::of(&[]),
            StackStats {
                total: 0,
                experience: 0,
                expertise: 0,
                active: 0,
            }
        );
    }

    #[test]
    fn proficiency_bar_widths() {
        assert_eq!(Expert.bar_width(), 100);
        assert_eq!(Advanced.bar_width(), 75);
        assert_eq!(Proficient.bar_width(), 50);
    }

    #[test]
    fn ids_are_unique_and_resolvable() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
        assert_eq!(project("fluentflare").map(|p| p.title), Some("FluentFlare"));
        assert!(project("missing").is_none());
    }

    #[test]
    fn technology_names_are_unique() {
        let names: HashSet<_> = TECHNOLOGIES.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), TECHNOLOGIES.len());
    }
}
