//! Scaffold a new project

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Folio;

/// Create `<content_dir>/<slug>/<index_name>` with front matter filled in
///
/// The slug defaults to the slugified title. Existing documents are never
/// overwritten.
pub fn create_project(
    folio: &Folio,
    title: &str,
    ranking: Option<i64>,
    slug: Option<&str>,
) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => slug::slugify(s),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from {:?}", title);
    }

    let project_dir = folio.content_dir.join(&slug);
    let file_path = project_dir.join(&folio.config.index_name);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let mut content = String::from("---\n");
    content.push_str(&format!("title: {}\n", yaml_string(title)));
    content.push_str("description: ''\n");
    content.push_str(&format!("author: {}\n", yaml_string(&folio.config.author)));
    if let Some(ranking) = ranking {
        content.push_str(&format!("ranking: {}\n", ranking));
    }
    content.push_str(&format!(
        "date: {}\n",
        chrono::Local::now().format("%Y-%m-%d")
    ));
    content.push_str("---\n");

    fs::create_dir_all(&project_dir)?;
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Quote a scalar so titles like `Q&A: notes` stay valid YAML
fn yaml_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
