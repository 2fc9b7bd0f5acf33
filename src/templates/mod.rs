//! Built-in site templates using the Tera template engine
//!
//! All templates are embedded in the binary; a site needs no theme
//! directory of its own.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers;

/// Stylesheet written to `css/style.css`
pub const STYLESHEET: &str = include_str!("site/style.css");

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Bodies are pre-rendered HTML; text fields are escaped in the templates
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("home.html", include_str!("site/home.html")),
            ("projects.html", include_str!("site/projects.html")),
            ("project.html", include_str!("site/project.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("site/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
            (
                "partials/macros.html",
                include_str!("site/partials/macros.html"),
            ),
        ])?;

        tera.register_filter("truncate_chars", truncate_chars_filter);
        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => " .....".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!(
            "{}{}",
            truncated.trim_end(),
            omission
        )))
    }
}

/// Tera filter: format an ISO date string
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "MMMM D, YYYY".to_string(),
    };

    Ok(tera::Value::String(helpers::display_date(&s, &format)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,
    pub root: String,
    pub css_url: String,
    pub home_url: String,
    pub projects_url: String,
    pub date_format: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeData {
    pub headline: String,
    pub intro: Vec<String>,
    pub video: Option<String>,
    pub photos: Vec<PhotoData>,
    pub resume: Vec<RoleData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhotoData {
    pub src: String,
    /// CSS class tilting the photo
    pub tilt: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleData {
    pub company: String,
    pub title: String,
    pub logo: Option<String>,
    pub start_label: String,
    pub start_datetime: String,
    pub end_label: String,
    pub end_datetime: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectData {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub url: String,
    pub date: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavProject {
    pub title: String,
    pub url: String,
}
