//! Site configuration (_config.yml)

use anyhow::Result;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // Home page
    /// Main heading on the home page
    pub headline: String,
    /// Introductory paragraphs
    pub intro: Vec<String>,
    /// Embedded video URL shown next to the intro
    pub video: Option<String>,
    /// Image references for the photo strip
    pub photos: Vec<String>,
    /// Work experience, most recent first
    pub resume: Vec<Role>,
    /// How many projects the home page lists
    pub home_projects: usize,

    // Projects page
    pub projects_title: String,
    pub projects_intro: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub index_name: String,
    pub static_dir: String,
    pub public_dir: String,

    // Writing
    /// Moment.js-style pattern for displayed dates
    pub date_format: String,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            headline: String::new(),
            intro: Vec::new(),
            video: None,
            photos: Vec::new(),
            resume: Vec::new(),
            home_projects: 5,

            projects_title: "My projects".to_string(),
            projects_intro: "Some of my most recent development projects.".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "projects".to_string(),
            index_name: "page.mdx".to_string(),
            static_dir: "static".to_string(),
            public_dir: "public".to_string(),

            date_format: "MMMM D, YYYY".to_string(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from YAML text
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }
}

/// Syntax highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// syntect theme name
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// A position held, shown in the resume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub start: RoleDate,
    pub end: RoleDate,
}

/// Start or end of a role: a bare label, or a label with a machine-readable date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleDate {
    Label(String),
    Detailed { label: String, datetime: String },
}

impl RoleDate {
    /// Text shown to readers
    pub fn label(&self) -> String {
        match self {
            RoleDate::Label(label) if label.eq_ignore_ascii_case("present") => {
                "Present".to_string()
            }
            RoleDate::Label(label) => label.clone(),
            RoleDate::Detailed { label, .. } => label.clone(),
        }
    }

    /// Value for the `datetime` attribute; `present` resolves to the current year
    pub fn datetime(&self) -> String {
        match self {
            RoleDate::Label(label) if label.eq_ignore_ascii_case("present") => {
                chrono::Local::now().year().to_string()
            }
            RoleDate::Label(label) => label.clone(),
            RoleDate::Detailed { datetime, .. } => datetime.clone(),
        }
    }
}
