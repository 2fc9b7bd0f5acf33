//! Content discovery - lists content entries under a root directory

use std::fs;
use std::path::Path;

use super::ContentRef;
use crate::error::{CatalogError, CatalogResult};

/// Lists content entries matching a glob-style pattern under a root
pub trait FileDiscovery: Send + Sync {
    /// Return the root-relative paths matching `pattern`, in no particular order
    fn discover(&self, root: &Path, pattern: &str) -> CatalogResult<Vec<ContentRef>>;
}

/// Glob options shared by every discovery: `*` never crosses a `/` and never
/// matches a leading dot, so hidden project directories are skipped
pub(crate) fn match_options() -> glob::MatchOptions {
    glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    }
}

/// Filesystem discovery backed by the `glob` crate
#[derive(Debug, Clone, Default)]
pub struct GlobDiscovery;

impl FileDiscovery for GlobDiscovery {
    fn discover(&self, root: &Path, pattern: &str) -> CatalogResult<Vec<ContentRef>> {
        // Surface a missing or unreadable root; glob would silently match nothing
        let metadata = fs::metadata(root).map_err(|e| CatalogError::discovery(root, e))?;
        if !metadata.is_dir() {
            return Err(CatalogError::discovery(root, "not a directory"));
        }
        fs::read_dir(root).map_err(|e| CatalogError::discovery(root, e))?;

        let root_str = root
            .to_str()
            .ok_or_else(|| CatalogError::discovery(root, "path is not valid UTF-8"))?;
        let full_pattern = format!(
            "{}/{}",
            glob::Pattern::escape(root_str.trim_end_matches(['/', '\\'])),
            pattern
        );

        let paths = glob::glob_with(&full_pattern, match_options())
            .map_err(|e| CatalogError::discovery(root, e))?;

        let mut references = Vec::new();
        for path in paths {
            let path = path.map_err(|e| CatalogError::discovery(root, e))?;
            if !path.is_file() {
                continue;
            }

            let relative = path
                .strip_prefix(root)
                .map_err(|e| CatalogError::discovery(root, e))?;
            references.push(ContentRef::new(relative.to_string_lossy()));
        }

        tracing::debug!(
            "Discovered {} entries matching {:?} under {:?}",
            references.len(),
            pattern,
            root
        );

        Ok(references)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_discovers_one_level_of_index_documents() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "foo/page.mdx");
        touch(dir.path(), "bar/page.mdx");
        touch(dir.path(), "bar/thumb.png");
        touch(dir.path(), "page.mdx");
        touch(dir.path(), "deep/nested/page.mdx");

        let mut found = GlobDiscovery.discover(dir.path(), "*/page.mdx").unwrap();
        found.sort();
        assert_eq!(
            found,
            vec![ContentRef::new("bar/page.mdx"), ContentRef::new("foo/page.mdx")]
        );
    }

    #[test]
    fn test_skips_hidden_project_directories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".draft/page.mdx");
        touch(dir.path(), "visible/page.mdx");

        let found = GlobDiscovery.discover(dir.path(), "*/page.mdx").unwrap();
        assert_eq!(found, vec![ContentRef::new("visible/page.mdx")]);
    }

    #[test]
    fn test_skips_directories_named_like_the_index() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("odd/page.mdx")).unwrap();

        let found = GlobDiscovery.discover(dir.path(), "*/page.mdx").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_root_with_glob_characters() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("[projects]");
        touch(&root, "foo/page.mdx");

        let found = GlobDiscovery.discover(&root, "*/page.mdx").unwrap();
        assert_eq!(found, vec![ContentRef::new("foo/page.mdx")]);
    }

    #[test]
    fn test_missing_root_is_a_discovery_failure() {
        let dir = TempDir::new().unwrap();
        let err = GlobDiscovery
            .discover(&dir.path().join("missing"), "*/page.mdx")
            .unwrap_err();
        assert!(matches!(err, CatalogError::Discovery { .. }));
    }

    #[test]
    fn test_file_root_is_a_discovery_failure() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "file");
        let err = GlobDiscovery
            .discover(&dir.path().join("file"), "*/page.mdx")
            .unwrap_err();
        assert!(matches!(err, CatalogError::Discovery { .. }));
    }
}
