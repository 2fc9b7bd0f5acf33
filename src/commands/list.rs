//! List projects in display order

use anyhow::Result;
use std::fmt::Write as _;

use crate::content::ProjectEntry;
use crate::Folio;

/// Print every project, or only the first `top` ones
pub async fn run(folio: &Folio, top: Option<usize>) -> Result<()> {
    let catalog = folio.catalog()?;
    let projects = match top {
        Some(n) => catalog.list_top_projects(n).await?,
        None => catalog.list_all_projects().await?,
    };

    println!("Projects in {:?} ({}):", catalog.root(), projects.len());
    print!("{}", format_projects(&projects));

    Ok(())
}

/// One line per project: ranking, slug, title and date
fn format_projects(projects: &[ProjectEntry]) -> String {
    let mut out = String::new();
    for project in projects {
        let ranking = project
            .ranking
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "  {:>4}  {} - {} [{}]",
            ranking,
            project.slug,
            project.title,
            project.date.as_deref().unwrap_or("undated"),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ProjectMetadata;
    use std::fs;
    use tempfile::TempDir;

    fn entry(slug: &str, ranking: Option<i64>, date: Option<&str>) -> ProjectEntry {
        ProjectEntry::new(
            slug.to_string(),
            ProjectMetadata {
                title: slug.to_uppercase(),
                description: String::new(),
                author: "Jane".to_string(),
                ranking,
                date: date.map(str::to_string),
                thumbnail: None,
            },
        )
    }

    #[test]
    fn test_format_projects() {
        let out = format_projects(&[
            entry("shop", Some(2), Some("2024-01-05")),
            entry("chat", None, None),
        ]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "     2  shop - SHOP [2024-01-05]");
        assert_eq!(lines[1], "     -  chat - CHAT [undated]");
    }

    #[tokio::test]
    async fn test_run_with_missing_content_dir() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert!(run(&folio, None).await.is_err());

        fs::create_dir_all(&folio.content_dir).unwrap();
        assert!(run(&folio, Some(3)).await.is_ok());
    }
}
