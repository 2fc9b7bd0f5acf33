//! Generator module - writes the static site using the built-in Tera templates

use anyhow::{Context as _, Result};
use chrono::Datelike;
use std::fs;
use std::path::Path;

use tera::Context;
use walkdir::WalkDir;

use crate::config::Role;
use crate::content::{MarkdownRenderer, ProjectEntry, ProjectPage, Thumbnail};
use crate::helpers::Helpers;
use crate::templates::{
    ConfigData, HomeData, NavProject, PhotoData, ProjectData, RoleData, TemplateRenderer,
    STYLESHEET,
};
use crate::Folio;

/// Tilt applied to photos in the home page strip, cycled
const PHOTO_TILTS: [&str; 5] = [
    "tilt-right",
    "tilt-left",
    "tilt-right",
    "tilt-right",
    "tilt-left",
];

/// Static site generator using Tera templates
pub struct Generator {
    folio: Folio,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
    helpers: Helpers,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        let markdown = MarkdownRenderer::with_options(
            &folio.config.highlight.theme,
            folio.config.highlight.line_number,
        );

        Ok(Self {
            folio: folio.clone(),
            renderer,
            markdown,
            helpers: Helpers::new(folio.config.clone()),
        })
    }

    /// Generate the entire site from pages in catalog order
    pub fn generate(&self, pages: &[ProjectPage]) -> Result<()> {
        fs::create_dir_all(&self.folio.public_dir)?;

        self.write_stylesheet()?;
        self.copy_static_assets()?;
        self.copy_project_assets()?;

        let config_data = self.build_config_data();
        let entries: Vec<&ProjectEntry> = pages.iter().map(|p| &p.entry).collect();

        self.generate_home_page(&entries, &config_data)?;
        self.generate_projects_page(&entries, &config_data)?;
        self.generate_project_pages(pages, &config_data)?;
        self.generate_project_feed(&entries)?;

        Ok(())
    }

    /// Build config data for templates
    fn build_config_data(&self) -> ConfigData {
        let config = &self.folio.config;
        ConfigData {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            url: config.url.clone(),
            root: config.root.clone(),
            css_url: self.helpers.url_for("css/style.css"),
            home_url: self.helpers.url_for("/"),
            projects_url: self.helpers.url_for("projects/"),
            date_format: config.date_format.clone(),
            year: chrono::Local::now().year().to_string(),
        }
    }

    fn build_home_data(&self) -> HomeData {
        let config = &self.folio.config;

        let photos = config
            .photos
            .iter()
            .enumerate()
            .map(|(i, photo)| PhotoData {
                src: self.helpers.asset_url(photo),
                tilt: PHOTO_TILTS[i % PHOTO_TILTS.len()],
            })
            .collect();

        HomeData {
            headline: config.headline.clone(),
            intro: config.intro.clone(),
            video: config.video.clone(),
            photos,
            resume: config.resume.iter().map(|r| self.role_data(r)).collect(),
        }
    }

    fn role_data(&self, role: &Role) -> RoleData {
        RoleData {
            company: role.company.clone(),
            title: role.title.clone(),
            logo: role.logo.as_deref().map(|logo| self.helpers.asset_url(logo)),
            start_label: role.start.label(),
            start_datetime: role.start.datetime(),
            end_label: role.end.label(),
            end_datetime: role.end.datetime(),
        }
    }

    fn project_data(&self, entry: &ProjectEntry) -> ProjectData {
        ProjectData {
            slug: entry.slug.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            author: entry.author.clone(),
            url: self.helpers.project_url(&entry.slug),
            date: entry.date.clone(),
            thumbnail: entry.thumbnail.as_ref().map(|t| match t {
                Thumbnail::Remote(url) => url.clone(),
                Thumbnail::Asset(path) => self.helpers.project_asset_url(&entry.slug, path),
            }),
        }
    }

    /// Create a base context with common variables
    fn create_base_context(&self, config_data: &ConfigData, current_path: &str) -> Context {
        let mut context = Context::new();
        context.insert("config", config_data);
        context.insert("current_path", current_path);
        context
    }

    /// Home page: intro, photos, resume and the top projects
    fn generate_home_page(&self, entries: &[&ProjectEntry], config_data: &ConfigData) -> Result<()> {
        let limit = self.folio.config.home_projects;
        let projects: Vec<ProjectData> = entries
            .iter()
            .take(limit)
            .map(|e| self.project_data(e))
            .collect();

        let mut context = self.create_base_context(config_data, "/");
        context.insert("home", &self.build_home_data());
        context.insert("projects", &projects);

        let html = self.renderer.render("home.html", &context)?;
        self.write_page(Path::new("index.html"), &html)?;
        tracing::info!("Generated home page with {} projects", projects.len());

        Ok(())
    }

    /// Listing of every project
    fn generate_projects_page(
        &self,
        entries: &[&ProjectEntry],
        config_data: &ConfigData,
    ) -> Result<()> {
        let projects: Vec<ProjectData> = entries.iter().map(|e| self.project_data(e)).collect();

        let mut context = self.create_base_context(config_data, "/projects/");
        context.insert("page_title", &self.folio.config.projects_title);
        context.insert("page_intro", &self.folio.config.projects_intro);
        context.insert("projects", &projects);

        let html = self.renderer.render("projects.html", &context)?;
        self.write_page(Path::new("projects/index.html"), &html)?;

        Ok(())
    }

    /// One page per project with its rendered body
    fn generate_project_pages(&self, pages: &[ProjectPage], config_data: &ConfigData) -> Result<()> {
        for (i, page) in pages.iter().enumerate() {
            let nav = |p: &ProjectPage| NavProject {
                title: p.entry.title.clone(),
                url: self.helpers.project_url(&p.entry.slug),
            };
            let prev_project = i.checked_sub(1).map(|j| nav(&pages[j]));
            let next_project = pages.get(i + 1).map(nav);

            let content = self
                .markdown
                .render(&page.body)
                .with_context(|| format!("Failed to render {}", page.source))?;

            let project = self.project_data(&page.entry);
            let mut context = self.create_base_context(config_data, "/projects/");
            context.insert("project", &project);
            context.insert("page_content", &content);
            if let Some(ref prev) = prev_project {
                context.insert("prev_project", prev);
            }
            if let Some(ref next) = next_project {
                context.insert("next_project", next);
            }

            let html = self.renderer.render("project.html", &context)?;
            let output = Path::new("projects")
                .join(&page.entry.slug)
                .join("index.html");
            self.write_page(&output, &html)?;
        }

        tracing::info!("Generated {} project pages", pages.len());
        Ok(())
    }

    /// Machine-readable listing at `projects.json`
    fn generate_project_feed(&self, entries: &[&ProjectEntry]) -> Result<()> {
        let feed: Vec<serde_json::Value> = entries
            .iter()
            .map(|e| -> Result<serde_json::Value, serde_json::Error> {
                let mut value = serde_json::to_value(e)?;
                let url = self.helpers.full_url_for(&self.helpers.project_url(&e.slug));
                value["url"] = url.into();
                Ok(value)
            })
            .collect::<Result<_, serde_json::Error>>()?;

        let json = serde_json::to_string_pretty(&feed)?;
        self.write_page(Path::new("projects.json"), &json)?;
        tracing::debug!("Generated projects.json");

        Ok(())
    }

    fn write_stylesheet(&self) -> Result<()> {
        self.write_page(Path::new("css/style.css"), STYLESHEET)
    }

    /// Write a file relative to the public directory
    fn write_page(&self, relative: &Path, content: &str) -> Result<()> {
        let output_path = self.folio.public_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {:?}", parent))?;
        }
        fs::write(&output_path, content)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Copy the static directory to the public root
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.folio.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        copy_tree(static_dir, &self.folio.public_dir, |_| true)
    }

    /// Copy files living next to project documents (images, downloads)
    fn copy_project_assets(&self) -> Result<()> {
        let content_dir = &self.folio.content_dir;
        if !content_dir.exists() {
            return Ok(());
        }

        let index_name = self.folio.config.index_name.as_str();
        copy_tree(
            content_dir,
            &self.folio.public_dir.join("projects"),
            |path| path.file_name().and_then(|n| n.to_str()) != Some(index_name),
        )
    }
}

/// Copy every regular file under `from` into `to`, keeping relative paths
fn copy_tree(from: &Path, to: &Path, include: impl Fn(&Path) -> bool) -> Result<()> {
    for entry in WalkDir::new(from)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !include(path) {
            continue;
        }

        let relative = path.strip_prefix(from)?;
        if relative
            .components()
            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
        {
            continue;
        }

        let dest = to.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ProjectCatalog;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
title: Jane Doe
author: Jane Doe
headline: Full-Stack Developer
home_projects: 2
intro:
  - I build things for the web.
photos:
  - /images/one.jpg
  - https://cdn.example.com/two.jpg
resume:
  - company: Acme
    title: Senior Developer
    start: "2022"
    end: present
"#;

    fn write_project(base: &Path, dir: &str, title: &str, ranking: i64, body: &str) {
        let project_dir = base.join("projects").join(dir);
        fs::create_dir_all(&project_dir).unwrap();
        fs::write(
            project_dir.join("page.mdx"),
            format!(
                "---\ntitle: {}\ndescription: About {}\nauthor: Jane\nranking: {}\ndate: 2024-01-05\n---\n{}",
                title, title, ranking, body
            ),
        )
        .unwrap();
    }

    async fn generate_site(base: &Path) -> Vec<ProjectPage> {
        fs::write(base.join("_config.yml"), CONFIG).unwrap();
        let folio = Folio::new(base).unwrap();
        let pages = ProjectCatalog::from_dir(&folio.content_dir, &folio.config.index_name)
            .unwrap()
            .list_all_pages()
            .await
            .unwrap();
        Generator::new(&folio).unwrap().generate(&pages).unwrap();
        pages
    }

    #[tokio::test]
    async fn test_generates_all_pages() {
        let dir = TempDir::new().unwrap();
        let base = dir.path();
        write_project(base, "shop", "Shop", 2, "# Shop\n\nAn online store.");
        write_project(base, "weather", "Weather", 1, "Forecasts.");
        write_project(base, "chat", "Chat", 3, "Messaging.");
        fs::write(base.join("projects/shop/cover.png"), b"png").unwrap();
        fs::create_dir_all(base.join("static/images")).unwrap();
        fs::write(base.join("static/images/one.jpg"), b"jpg").unwrap();

        generate_site(base).await;
        let public = base.join("public");

        let home = fs::read_to_string(public.join("index.html")).unwrap();
        assert!(home.contains("Full-Stack Developer"));
        assert!(home.contains("Acme"));
        assert!(home.contains("Present"));
        assert!(home.contains(r#"src="https://cdn.example.com/two.jpg""#));
        // Only the top two projects, in ranking order
        let weather = home.find("/projects/weather/").unwrap();
        let shop = home.find("/projects/shop/").unwrap();
        assert!(weather < shop);
        assert!(!home.contains("/projects/chat/"));

        let listing = fs::read_to_string(public.join("projects/index.html")).unwrap();
        assert!(listing.contains("/projects/chat/"));
        assert!(listing.contains("January 5, 2024"));

        let shop_page = fs::read_to_string(public.join("projects/shop/index.html")).unwrap();
        assert!(shop_page.contains("<h1>Shop</h1>"));
        assert!(shop_page.contains("<p>An online store.</p>"));
        assert!(shop_page.contains(r#"class="prev" href="/projects/weather/""#));
        assert!(shop_page.contains(r#"class="next" href="/projects/chat/""#));

        assert!(public.join("css/style.css").exists());
        assert!(public.join("images/one.jpg").exists());
        assert!(public.join("projects/shop/cover.png").exists());
        assert!(!public.join("projects/shop/page.mdx").exists());
    }

    #[tokio::test]
    async fn test_colocated_thumbnail_links_into_project_dir() {
        let dir = TempDir::new().unwrap();
        let base = dir.path();
        let project_dir = base.join("projects/shop");
        fs::create_dir_all(&project_dir).unwrap();
        fs::write(
            project_dir.join("page.mdx"),
            "---\ntitle: Shop\ndescription: Store\nauthor: Jane\nthumbnail: cover.png\n---\nBody",
        )
        .unwrap();
        fs::write(project_dir.join("cover.png"), b"png").unwrap();
        fs::create_dir_all(base.join("projects/chat")).unwrap();
        fs::write(
            base.join("projects/chat/page.mdx"),
            "---\ntitle: Chat\ndescription: Talk\nauthor: Jane\nthumbnail: /images/chat.png\n---\nBody",
        )
        .unwrap();

        generate_site(base).await;
        let public = base.join("public");

        let home = fs::read_to_string(public.join("index.html")).unwrap();
        assert!(home.contains(r#"src="/projects/shop/cover.png""#));
        assert!(!home.contains(r#"src="/cover.png""#));
        assert!(home.contains(r#"src="/images/chat.png""#));
        assert!(public.join("projects/shop/cover.png").exists());
    }

    #[tokio::test]
    async fn test_project_feed() {
        let dir = TempDir::new().unwrap();
        let base = dir.path();
        write_project(base, "shop", "Shop", 0, "Body");

        generate_site(base).await;

        let json = fs::read_to_string(base.join("public/projects.json")).unwrap();
        let feed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(feed[0]["slug"], "shop");
        assert_eq!(feed[0]["title"], "Shop");
        assert_eq!(feed[0]["url"], "http://example.com/projects/shop/");
    }

    #[tokio::test]
    async fn test_empty_content_dir() {
        let dir = TempDir::new().unwrap();
        let base = dir.path();
        fs::create_dir_all(base.join("projects")).unwrap();

        let pages = generate_site(base).await;
        assert!(pages.is_empty());

        let home = fs::read_to_string(base.join("public/index.html")).unwrap();
        assert!(home.contains("No projects yet."));
    }
}
