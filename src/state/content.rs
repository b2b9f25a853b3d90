//! Site copy and the project catalog
//!
//! Ships with built-in content; a `content.json` next to the config file
//! replaces any of the top-level sections it names.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Filter labels shown above the project grid, in display order
pub const PROJECT_FILTERS: &[&str] = &[
    "All",
    "UI Design",
    "UX/UI Design",
    "Website Design",
    "Creative Design",
    "Dashboard",
];

/// Filter value that matches every project
pub const FILTER_ALL: &str = "all";

/// A portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub tags: Vec<String>,
    pub description: String,
    pub image_url: String,
    pub categories: Vec<String>,
}

impl Project {
    /// Case-insensitive category match
    pub fn in_category(&self, category: &str) -> bool {
        let wanted = category.to_lowercase();
        self.categories.iter().any(|c| c.to_lowercase() == wanted)
    }
}

/// Projects visible under `filter`; `"all"` (any case) keeps everything
pub fn filter_projects<'a>(projects: &'a [Project], filter: &str) -> Vec<&'a Project> {
    if filter.eq_ignore_ascii_case(FILTER_ALL) {
        return projects.iter().collect();
    }
    projects.iter().filter(|p| p.in_category(filter)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub percentage: String,
}

impl Tool {
    /// Short badge used when no logo is available
    pub fn badge(&self) -> String {
        self.name.chars().take(3).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub years: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetail {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Everything the pages display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub owner: String,
    pub greeting: String,
    pub hero: String,
    pub bio: String,
    pub vision: String,
    pub mission: String,
    pub stats: Vec<Stat>,
    pub tools: Vec<Tool>,
    pub skills: Vec<Skill>,
    pub education: Vec<TimelineEntry>,
    pub experience: Vec<TimelineEntry>,
    pub projects: Vec<Project>,
    pub contact: Vec<ContactDetail>,
    pub socials: Vec<SocialLink>,
    pub marquee: Vec<String>,
}

impl SiteContent {
    /// Load content overrides from `path`, falling back to the built-in copy
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(path)?;
                let parsed: SiteContent = serde_json::from_str(&content)?;
                return Ok(parsed);
            }
        }
        Ok(Self::default())
    }

    /// Value of the contact entry titled "Email Me", if any
    pub fn email(&self) -> Option<&str> {
        self.contact
            .iter()
            .find(|c| c.title.eq_ignore_ascii_case("email me"))
            .map(|c| c.value.as_str())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(title: &str, tags: &[&str], description: &str, image_url: &str, categories: &[&str]) -> Project {
    Project {
        title: title.to_string(),
        tags: strings(tags),
        description: description.to_string(),
        image_url: image_url.to_string(),
        categories: strings(categories),
    }
}

fn entry(years: &str, title: &str, subtitle: &str) -> TimelineEntry {
    TimelineEntry {
        years: years.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            owner: "Rashini".to_string(),
            greeting: "✦ Hello There! ✦".to_string(),
            hero: "I design digital experiences and analyze data to turn ideas into solutions."
                .to_string(),
            bio: "My profession lies in both analytics and UI/UX design, and data has become my \
                  passion. Currently working as a data analyst and growing my skills every day."
                .to_string(),
            vision: "To become a skilled data analyst and creative designer who connects data and \
                     design, creating useful and beautiful solutions that make a positive impact."
                .to_string(),
            mission: "To turn data and design into meaningful insights and experiences, presenting \
                      information through creative, user-friendly designs that help people make \
                      better decisions."
                .to_string(),
            stats: vec![
                Stat {
                    number: "02+".to_string(),
                    label: "Years of Experience".to_string(),
                },
                Stat {
                    number: "01+".to_string(),
                    label: "Design Companies".to_string(),
                },
                Stat {
                    number: "10+".to_string(),
                    label: "Projects Completed".to_string(),
                },
            ],
            tools: [
                ("Jira", "98%"),
                ("Power BI", "92%"),
                ("Figma", "85%"),
                ("Canva", "85%"),
                ("VS Code", "85%"),
                ("Tableau", "85%"),
            ]
            .iter()
            .map(|(name, percentage)| Tool {
                name: name.to_string(),
                percentage: percentage.to_string(),
            })
            .collect(),
            skills: [
                ("UI Design", "Creating intuitive and visually appealing user interfaces that enhance user experience."),
                ("UX Research", "Conducting user research to understand needs and behaviors for better design decisions."),
                ("Data Analysis", "Analyzing and interpreting complex data sets to extract meaningful insights."),
                ("Dashboard Design", "Creating intuitive data visualization interfaces that make complex information accessible."),
                ("Prototyping", "Building interactive prototypes to test and refine user experiences before development."),
                ("Data Visualization", "Transforming complex data into clear, compelling visual representations."),
            ]
            .iter()
            .map(|(title, description)| Skill {
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
            education: vec![
                entry("2024-2026", "Easton Campus", "BIT"),
                entry("2023-2024", "University of Colombo", "Foundation"),
            ],
            experience: vec![
                entry("2026-Now", "GSS Colombo", "Data Analyst"),
                entry("2025", "GSS Colombo", "Trainee Data Analyst"),
                entry("2024", "GSS Colombo", "QAT"),
            ],
            projects: vec![
                project(
                    "Restaurant Website Design",
                    &["UI Design", "Website Design", "Prototype"],
                    "A modern, responsive restaurant website showcasing the menu, featured dishes, \
                     and online reservations for a smooth dining experience.",
                    "https://ext.same-assets.com/2414015930/3899793190.jpeg",
                    &["UI Design", "Website Design"],
                ),
                project(
                    "Modern Furniture Website",
                    &["Website Design", "UX/UI Design", "Prototype"],
                    "A stylish and responsive furniture website featuring modern designs, product \
                     showcases, and easy navigation for a smooth shopping experience.",
                    "https://ext.same-assets.com/2414015930/648400395.jpeg",
                    &["UX/UI Design", "Website Design"],
                ),
                project(
                    "Analytics Dashboard",
                    &["Dashboard", "UI Design", "Data Visualization"],
                    "An intuitive analytics dashboard for business intelligence, presenting complex \
                     data in an easily digestible format with interactive charts and filters.",
                    "https://ext.same-assets.com/2414015930/1916382938.png",
                    &["Dashboard", "UI Design"],
                ),
                project(
                    "Corporate Website",
                    &["Website Design", "UX/UI Design", "Brand Identity"],
                    "A modern corporate website focused on brand consistency and user engagement, \
                     responsive and optimized for performance and accessibility.",
                    "https://ext.same-assets.com/2414015930/207030036.png",
                    &["Website Design", "UX/UI Design"],
                ),
            ],
            contact: [
                ("Call Me", "+00 00 000 0000"),
                ("Email Me", "hello@example.com"),
                ("LinkedIn", "your-handle"),
                ("Location", "Negombo, Sri Lanka"),
            ]
            .iter()
            .map(|(title, value)| ContactDetail {
                title: title.to_string(),
                value: value.to_string(),
            })
            .collect(),
            socials: vec![
                SocialLink {
                    name: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/".to_string(),
                },
                SocialLink {
                    name: "GitHub".to_string(),
                    url: "https://github.com/".to_string(),
                },
            ],
            marquee: strings(&[
                "App Design",
                "Website Design",
                "Dashboard",
                "Wireframe",
                "Prototype",
                "Analytics",
            ]),
        }
    }
}
