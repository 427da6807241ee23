//! Project catalog.
//!
//! A fixed list of project records, loaded once from the JSON bundled into
//! the binary, with category filtering and card view models.

use std::fmt;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Bundled project records.
const PROJECTS_JSON: &str = include_str!("../data/projects.json");

/// Project category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
    Ai,
    Tools,
    /// Anything not listed above; shown with the default icon.
    #[serde(other)]
    Other,
}

impl Category {
    /// Terminal glyph for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Category::Web => "◎",
            Category::Mobile => "▯",
            Category::Ai => "◈",
            Category::Tools => "⚒",
            Category::Other => "</>",
        }
    }

    /// Lowercase name, as used in filter buttons.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
            Category::Ai => "ai",
            Category::Tools => "tools",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tech: Vec<String>,
    pub stars: u32,
    pub forks: u32,
    /// Completion, 0..=100.
    pub progress: u8,
}

/// Catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Only(Category),
}

impl Filter {
    /// Filter buttons, in display order.
    pub const BUTTONS: [Filter; 5] = [
        Filter::All,
        Filter::Only(Category::Web),
        Filter::Only(Category::Mobile),
        Filter::Only(Category::Ai),
        Filter::Only(Category::Tools),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(Category::Web) => "Web",
            Filter::Only(Category::Mobile) => "Mobile",
            Filter::Only(Category::Ai) => "AI",
            Filter::Only(Category::Tools) => "Tools",
            Filter::Only(Category::Other) => "Other",
        }
    }

    /// Next/previous button, wrapping around.
    pub fn cycle(self, forward: bool) -> Self {
        let buttons = Self::BUTTONS;
        let index = buttons.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (index + 1) % buttons.len()
        } else {
            (index + buttons.len() - 1) % buttons.len()
        };
        buttons[next]
    }
}

/// The project list.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Loads the projects bundled with the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(PROJECTS_JSON).context("Failed to parse bundled project data")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Ok(Self::new(projects))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects matching `filter`, in catalog order.
    pub fn filter(&self, filter: Filter) -> Vec<&Project> {
        match filter {
            Filter::All => self.projects.iter().collect(),
            Filter::Only(category) => self
                .projects
                .iter()
                .filter(|p| p.category == category)
                .collect(),
        }
    }
}

/// What a rendered project card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: u32,
    pub badge: String,
    pub icon: &'static str,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub stars: u32,
    pub forks: u32,
    pub progress: u8,
    pub progress_label: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        let progress = project.progress.min(100);
        Self {
            id: project.id,
            badge: project.category.as_str().to_uppercase(),
            icon: project.category.glyph(),
            title: project.title.clone(),
            description: project.description.clone(),
            tech: project.tech.clone(),
            stars: project.stars,
            forks: project.forks,
            progress,
            progress_label: format!("{progress}% complete"),
        }
    }
}

/// Message for the "view project" card action.
pub fn view_project_message(id: u32) -> String {
    format!(
        "Viewing project {id} details - This would open a project modal or page \
         in a real implementation"
    )
}

/// Message for the "view code" card action.
pub fn view_code_message(id: u32) -> String {
    format!(
        "Viewing code for project {id} - This would link to GitHub repository \
         in a real implementation"
    )
}
