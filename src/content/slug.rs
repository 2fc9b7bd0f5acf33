//! Slug derivation from content paths

use regex::Regex;

use super::ContentRef;
use crate::error::{CatalogError, CatalogResult};

/// Strips the index document segment and the format extension from a path.
///
/// With the index document `page.mdx`, both `foo/page.mdx` and `foo.mdx`
/// become `foo`.
#[derive(Debug, Clone)]
pub struct SlugRule {
    index_name: String,
    suffix: Regex,
}

impl SlugRule {
    pub fn new(index_name: &str) -> CatalogResult<Self> {
        if index_name.is_empty() || index_name.contains(['/', '\\']) {
            return Err(CatalogError::InvalidIndexName {
                name: index_name.to_string(),
            });
        }

        let (stem, extension) = match index_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
            _ => (index_name, None),
        };

        let pattern = match extension {
            Some(ext) => format!(r"(/{})?\.{}$", regex::escape(stem), regex::escape(ext)),
            None => format!(r"/{}$", regex::escape(stem)),
        };

        let suffix = Regex::new(&pattern).map_err(|_| CatalogError::InvalidIndexName {
            name: index_name.to_string(),
        })?;

        Ok(Self {
            index_name: index_name.to_string(),
            suffix,
        })
    }

    /// Glob pattern matching one index document per project directory
    pub fn discovery_pattern(&self) -> String {
        format!("*/{}", self.index_name)
    }

    /// Derive the slug for a discovered reference
    pub fn derive(&self, reference: &ContentRef) -> String {
        self.suffix.replace(reference.as_str(), "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_index_document() {
        let rule = SlugRule::new("page.mdx").unwrap();
        assert_eq!(rule.derive(&"foo/page.mdx".into()), "foo");
        assert_eq!(rule.derive(&"bar/page.mdx".into()), "bar");
    }

    #[test]
    fn test_strips_bare_extension() {
        let rule = SlugRule::new("page.mdx").unwrap();
        assert_eq!(rule.derive(&"standalone.mdx".into()), "standalone");
    }

    #[test]
    fn test_only_trailing_suffix_is_removed() {
        let rule = SlugRule::new("page.mdx").unwrap();
        assert_eq!(rule.derive(&"page.mdx-notes/page.mdx".into()), "page.mdx-notes");
        assert_eq!(rule.derive(&"landing-page/page.mdx".into()), "landing-page");
    }

    #[test]
    fn test_extension_dot_is_literal() {
        let rule = SlugRule::new("index.md").unwrap();
        assert_eq!(rule.derive(&"blog/index.md".into()), "blog");
        assert_eq!(rule.derive(&"blog/indexxmd".into()), "blog/indexxmd");
    }

    #[test]
    fn test_index_without_extension() {
        let rule = SlugRule::new("README").unwrap();
        assert_eq!(rule.derive(&"tool/README".into()), "tool");
        assert_eq!(rule.discovery_pattern(), "*/README");
    }

    #[test]
    fn test_rejects_nested_index_name() {
        assert!(matches!(
            SlugRule::new("docs/page.mdx"),
            Err(CatalogError::InvalidIndexName { .. })
        ));
        assert!(SlugRule::new("").is_err());
    }
}
