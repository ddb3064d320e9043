//! Static site content compiled into the binary.
//!
//! All records are `'static` and immutable; hosts serialize them for rendering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::SectionId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Academic,
    Personal,
    Hackathon,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 3] = [
        ProjectKind::Academic,
        ProjectKind::Personal,
        ProjectKind::Hackathon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectKind::Academic => "academic",
            ProjectKind::Personal => "personal",
            ProjectKind::Hackathon => "hackathon",
        }
    }

    /// Filter tab label.
    pub fn tab_label(self) -> &'static str {
        match self {
            ProjectKind::Academic => "Academic",
            ProjectKind::Personal => "Personal",
            ProjectKind::Hackathon => "Hackathons",
        }
    }
}

/// Project grid filter. `All` is the initial selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    #[default]
    All,
    Kind(ProjectKind),
}

impl ProjectFilter {
    pub fn matches(self, project: &ProjectRecord) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Kind(kind) => project.kind == kind,
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Kind(kind) => kind.tab_label(),
        }
    }

    /// Tabs in display order.
    pub fn tabs() -> impl Iterator<Item = ProjectFilter> {
        std::iter::once(ProjectFilter::All)
            .chain(ProjectKind::ALL.into_iter().map(ProjectFilter::Kind))
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectFilter::All => f.write_str("all"),
            ProjectFilter::Kind(kind) => f.write_str(kind.as_str()),
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(ProjectFilter::All);
        }
        ProjectKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .map(ProjectFilter::Kind)
            .ok_or_else(|| format!("unknown project filter `{s}`"))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub featured: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
    /// Gradient stops of the category badge.
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EducationRecord {
    pub id: u32,
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub gpa: Option<&'static str>,
}

/// Services-section card ("What I Do").
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Interest {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AboutFact {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub section: SectionId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const OWNER_NAME: &str = "Jay Machhi";
pub const RESUME_PATH: &str = "/Jay_Machhi_Resume.pdf";
pub const GITHUB_PROFILE: &str = "https://github.com/Jay007mach";

pub const HERO_INTRO: &str = "An Information Technology undergraduate with a strong focus on \
cracking the GATE exam, driven by deep conceptual understanding and rigorous problem-solving. \
With a sports background, I bring discipline, consistency, and teamwork into my technical journey.";

pub const FOOTER_BLURB: &str = "An IT undergraduate focused on GATE preparation and building \
strong CS fundamentals. Discipline from sports, passion for problem-solving.";

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "Image Caption Generator",
        description: "An AI-based system that automatically generates meaningful captions for \
images using deep learning. Implements CNN-based feature extraction combined with LSTM sequence \
models for natural language generation.",
        image: "/images/project-1.jpg",
        tags: &["Python", "TensorFlow", "Keras", "CNN", "LSTM", "NumPy"],
        github_url: GITHUB_PROFILE,
        live_url: None,
        kind: ProjectKind::Academic,
        featured: true,
    },
    ProjectRecord {
        id: 2,
        title: "Gamified Expense Manager",
        description: "A gamified personal expense management application built using the Spring \
Framework. Designed with MVC architecture and database integration to encourage better financial \
habits through rewards.",
        image: "/images/project-2.jpg",
        tags: &["Java", "Spring Framework", "PostgreSQL", "MVC", "Advanced Java"],
        github_url: GITHUB_PROFILE,
        live_url: None,
        kind: ProjectKind::Personal,
        featured: true,
    },
];

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages",
        skills: &["C", "C++", "Java", "Python"],
        color: "from-blue-500 to-cyan-500",
    },
    SkillCategory {
        title: "Web Development",
        skills: &["HTML5", "CSS3", "JavaScript", "PHP", "React", "Node.js"],
        color: "from-green-500 to-emerald-500",
    },
    SkillCategory {
        title: "Databases & Backend & Tools",
        skills: &[
            "MySQL",
            "PostgreSQL",
            "MongoDB",
            "Apache Tomcat",
            "Git",
            "Selenium",
            "GitHub",
        ],
        color: "from-orange-500 to-red-500",
    },
    SkillCategory {
        title: "ML/AI",
        skills: &[
            "TensorFlow",
            "PyTorch",
            "Keras",
            "NumPy",
            "Pandas",
            "Scikit-learn",
            "Scipy",
        ],
        color: "from-purple-500 to-pink-500",
    },
];

pub static CURRENTLY_EXPLORING: &[&str] = &["Cloud Computing", "UI/UX"];

pub static INTERESTS: &[Interest] = &[
    Interest {
        title: "Cloud Computing",
        description: "Understanding cloud fundamentals and service models through hands-on labs \
and introductory deployments.",
        technologies: &["AWS Basics", "Virtual Machines", "Google Cloud", "Cloud Storage"],
        color: "from-blue-500 to-cyan-500",
    },
    Interest {
        title: "UI/UX Design",
        description: "Creating user-friendly interfaces with clean aesthetics. Learning design \
principles and prototyping tools.",
        technologies: &["Figma", "Tailwind CSS", "Adobe XD"],
        color: "from-pink-500 to-rose-500",
    },
    Interest {
        title: "Data Mining",
        description: "Learning data mining concepts including data preprocessing, pattern \
discovery, and knowledge extraction from large datasets.",
        technologies: &["Data Preprocessing", "Pattern Discovery", "Knowledge Extraction"],
        color: "from-green-500 to-emerald-500",
    },
    Interest {
        title: "Problem Solving",
        description: "Passionate about algorithms and data structures. Regularly practice on \
coding platforms.",
        technologies: &["Python", "C++", "Java"],
        color: "from-purple-500 to-violet-500",
    },
];

pub static EDUCATION: &[EducationRecord] = &[
    EducationRecord {
        id: 1,
        degree: "Bachelor of Technology in Information Technology",
        institution: "G H Patel College of Engineering and Technology",
        location: "Anand, Gujarat",
        duration: "2023 - 2027 (Expected)",
        description: "Currently in my third year, focusing on GATE preparation, database \
systems, and web technologies.",
        achievements: &["Branch Topper - 1, 2, 3, 4, 5 Semester"],
        gpa: Some("9.73/10"),
    },
    EducationRecord {
        id: 2,
        degree: "Higher Secondary Education (Science)",
        institution: "Atul Vidyalaya",
        location: "Atul, Gujarat",
        duration: "2008 - 2023",
        description: "Completed higher secondary education with Physics, Chemistry, Mathematics \
as major subjects.",
        achievements: &[
            "School Topper in Physical Education",
            "Represented school in State Level Football, Swimming, Basketball, Cricket Tournament",
            "Represented Maharashtra in National Level Javelin Throw",
        ],
        gpa: None,
    },
];

pub static ABOUT_FACTS: &[AboutFact] = &[
    AboutFact {
        label: "Degree",
        value: "B.Tech IT",
    },
    AboutFact {
        label: "Expected Graduation",
        value: "2027",
    },
    AboutFact {
        label: "Focus",
        value: "GATE",
    },
    AboutFact {
        label: "Projects Built",
        value: "2+",
    },
];

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        section: SectionId::Home,
    },
    NavLink {
        label: "About",
        section: SectionId::About,
    },
    NavLink {
        label: "Skills",
        section: SectionId::Skills,
    },
    NavLink {
        label: "Projects",
        section: SectionId::Projects,
    },
    NavLink {
        label: "Education",
        section: SectionId::Education,
    },
    NavLink {
        label: "Contact",
        section: SectionId::Contact,
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: GITHUB_PROFILE,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/jaymach17",
    },
    SocialLink {
        label: "Instagram",
        href: "https://instagram.com/jaymach_17",
    },
    SocialLink {
        label: "Email",
        href: "mailto:jayvmachhi2005@gmail.com",
    },
];

/// Projects matching `filter`, in their declared order.
pub fn filter_projects(filter: ProjectFilter) -> Vec<&'static ProjectRecord> {
    filter_records(PROJECTS, filter)
}

/// Same as [`filter_projects`] over an arbitrary slice.
pub fn filter_records(projects: &[ProjectRecord], filter: ProjectFilter) -> Vec<&ProjectRecord> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Card tag row: the first `max` tags and how many were left out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagPreview<'a> {
    pub shown: &'a [&'a str],
    pub overflow: usize,
}

impl TagPreview<'_> {
    /// `+N` badge text, if anything was hidden.
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }
}

pub fn tag_preview<'a>(tags: &'a [&'a str], max: usize) -> TagPreview<'a> {
    let n = tags.len().min(max);
    TagPreview {
        shown: &tags[..n],
        overflow: tags.len() - n,
    }
}

/// Everything a host needs to render the page, in one serializable value.
#[derive(Clone, Debug, Serialize)]
pub struct SiteContent {
    pub owner: &'static str,
    pub resume: &'static str,
    pub hero_intro: &'static str,
    pub footer_blurb: &'static str,
    pub projects: &'static [ProjectRecord],
    pub skills: &'static [SkillCategory],
    pub exploring: &'static [&'static str],
    pub interests: &'static [Interest],
    pub education: &'static [EducationRecord],
    pub about: &'static [AboutFact],
    pub nav: &'static [NavLink],
    pub social: &'static [SocialLink],
}

pub fn site_content() -> SiteContent {
    SiteContent {
        owner: OWNER_NAME,
        resume: RESUME_PATH,
        hero_intro: HERO_INTRO,
        footer_blurb: FOOTER_BLURB,
        projects: PROJECTS,
        skills: SKILL_CATEGORIES,
        exploring: CURRENTLY_EXPLORING,
        interests: INTERESTS,
        education: EDUCATION,
        about: ABOUT_FACTS,
        nav: NAV_LINKS,
        social: SOCIAL_LINKS,
    }
}
