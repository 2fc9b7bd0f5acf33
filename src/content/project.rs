//! Project models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path of a content entry relative to the content root, `/`-separated
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ContentRef(String);

impl ContentRef {
    /// Create a reference, normalizing platform separators to `/`
    pub fn new(path: impl Into<String>) -> Self {
        let path: String = path.into();
        Self(path.replace('\\', "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Image shown next to a project in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Thumbnail {
    /// Absolute URL hosted elsewhere
    Remote(String),
    /// Path to an asset served by the site itself
    Asset(String),
}

impl From<String> for Thumbnail {
    fn from(value: String) -> Self {
        if is_remote_url(&value) {
            Thumbnail::Remote(value)
        } else {
            Thumbnail::Asset(value)
        }
    }
}

impl From<Thumbnail> for String {
    fn from(value: Thumbnail) -> Self {
        match value {
            Thumbnail::Remote(url) => url,
            Thumbnail::Asset(path) => path,
        }
    }
}

/// Whether a reference points outside the site
pub fn is_remote_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://") || value.starts_with("//")
}

/// Metadata authored in the front matter of every project document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub title: String,
    pub description: String,
    pub author: String,
    /// Lower values are listed first; absent counts as 0
    pub ranking: Option<i64>,
    /// ISO-8601 date, display only
    pub date: Option<String>,
    pub thumbnail: Option<Thumbnail>,
}

impl ProjectMetadata {
    /// Check constraints serde cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        Ok(())
    }
}

/// A project as handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEntry {
    /// URL identifier derived from the content path
    pub slug: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub ranking: Option<i64>,
    pub date: Option<String>,
    pub thumbnail: Option<Thumbnail>,
}

impl ProjectEntry {
    /// Merge a derived slug with loaded metadata
    pub fn new(slug: String, metadata: ProjectMetadata) -> Self {
        let ProjectMetadata {
            title,
            description,
            author,
            ranking,
            date,
            thumbnail,
        } = metadata;

        Self {
            slug,
            title,
            description,
            author,
            ranking,
            date,
            thumbnail,
        }
    }

    /// Key used to order the catalog
    pub fn sort_key(&self) -> i64 {
        self.ranking.unwrap_or(0)
    }
}

/// A project entry together with its unrendered body
#[derive(Debug, Clone)]
pub struct ProjectPage {
    pub entry: ProjectEntry,
    /// Raw document body (front matter removed)
    pub body: String,
    /// Where the entry was discovered
    pub source: ContentRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(title: &str) -> ProjectMetadata {
        ProjectMetadata {
            title: title.to_string(),
            description: "desc".to_string(),
            author: "Ada".to_string(),
            ranking: None,
            date: None,
            thumbnail: None,
        }
    }

    #[test]
    fn test_thumbnail_kind() {
        assert!(matches!(
            Thumbnail::from("https://cdn.example.com/a.png".to_string()),
            Thumbnail::Remote(_)
        ));
        assert!(matches!(
            Thumbnail::from("//cdn.example.com/a.png".to_string()),
            Thumbnail::Remote(_)
        ));
        assert_eq!(
            Thumbnail::from("/images/a.png".to_string()),
            Thumbnail::Asset("/images/a.png".to_string())
        );
    }

    #[test]
    fn test_entry_flattens_metadata() {
        let mut meta = metadata("Shop");
        meta.ranking = Some(3);
        meta.date = Some("2024-02-01".to_string());

        let entry = ProjectEntry::new("shop".to_string(), meta);
        assert_eq!(entry.slug, "shop");
        assert_eq!(entry.title, "Shop");
        assert_eq!(entry.sort_key(), 3);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["slug"], "shop");
        assert_eq!(json["ranking"], 3);
        assert_eq!(json["date"], "2024-02-01");
    }

    #[test]
    fn test_missing_ranking_sorts_as_zero() {
        let entry = ProjectEntry::new("a".to_string(), metadata("A"));
        assert_eq!(entry.sort_key(), 0);
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        assert!(metadata("  ").validate().is_err());
        assert!(metadata("Ok").validate().is_ok());
    }

    #[test]
    fn test_content_ref_normalizes_separators() {
        assert_eq!(ContentRef::new("foo\\page.mdx").as_str(), "foo/page.mdx");
    }
}
