//! Content stores - resolve a content reference to its metadata and body

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{discovery, frontmatter, ContentRef, FileDiscovery, ProjectMetadata};
use crate::error::{CatalogError, CatalogResult};

/// A loaded content entry
#[derive(Debug, Clone)]
pub struct LoadedContent {
    /// Renderable body with the front matter removed
    pub body: String,
    pub metadata: ProjectMetadata,
}

/// Resolves content references to their metadata and body
pub trait ContentStore: Send + Sync {
    fn load(&self, reference: &ContentRef) -> CatalogResult<LoadedContent>;
}

/// Parse a raw project document
fn parse_document(reference: &ContentRef, raw: &str) -> CatalogResult<LoadedContent> {
    let (metadata, body): (ProjectMetadata, &str) =
        frontmatter::parse(raw).map_err(|e| CatalogError::load(reference.as_str(), e))?;
    metadata
        .validate()
        .map_err(|reason| CatalogError::load(reference.as_str(), reason))?;

    Ok(LoadedContent {
        body: body.to_string(),
        metadata,
    })
}

/// Reads project documents from a directory tree
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ContentStore for FsContentStore {
    fn load(&self, reference: &ContentRef) -> CatalogResult<LoadedContent> {
        let path = self.root.join(reference.as_str());
        let raw = fs::read_to_string(&path).map_err(|e| CatalogError::load(reference.as_str(), e))?;
        parse_document(reference, &raw)
    }
}

/// In-memory documents keyed by reference
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    documents: HashMap<ContentRef, String>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw document, replacing any previous one at the same reference
    pub fn insert(&mut self, reference: impl Into<ContentRef>, document: impl Into<String>) {
        self.documents.insert(reference.into(), document.into());
    }

    /// Registered references, sorted
    pub fn references(&self) -> Vec<ContentRef> {
        let mut references: Vec<_> = self.documents.keys().cloned().collect();
        references.sort();
        references
    }
}

impl ContentStore for ContentRegistry {
    fn load(&self, reference: &ContentRef) -> CatalogResult<LoadedContent> {
        let raw = self
            .documents
            .get(reference)
            .ok_or_else(|| CatalogError::load(reference.as_str(), "no such entry"))?;
        parse_document(reference, raw)
    }
}

/// Registries list their own references, so they double as discovery
impl FileDiscovery for ContentRegistry {
    fn discover(&self, root: &Path, pattern: &str) -> CatalogResult<Vec<ContentRef>> {
        let matcher = glob::Pattern::new(pattern).map_err(|e| CatalogError::discovery(root, e))?;
        let options = discovery::match_options();

        Ok(self
            .references()
            .into_iter()
            .filter(|reference| matcher.matches_with(reference.as_str(), options))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOC: &str = "---\ntitle: Weather\ndescription: Forecasts\nauthor: Ada\n---\n# Weather\n";

    #[test]
    fn test_fs_store_loads_document() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("weather")).unwrap();
        fs::write(dir.path().join("weather/page.mdx"), DOC).unwrap();

        let store = FsContentStore::new(dir.path());
        let loaded = store.load(&"weather/page.mdx".into()).unwrap();
        assert_eq!(loaded.metadata.title, "Weather");
        assert_eq!(loaded.body, "# Weather\n");
    }

    #[test]
    fn test_fs_store_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = FsContentStore::new(dir.path());
        let err = store.load(&"nope/page.mdx".into()).unwrap_err();
        assert!(matches!(err, CatalogError::Load { ref reference, .. } if reference == "nope/page.mdx"));
    }

    #[test]
    fn test_registry_rejects_blank_title() {
        let mut registry = ContentRegistry::new();
        registry.insert(
            "blank/page.mdx",
            "---\ntitle: ''\ndescription: d\nauthor: a\n---\n",
        );
        let err = registry.load(&"blank/page.mdx".into()).unwrap_err();
        assert!(err.to_string().contains("title must not be empty"));
    }

    #[test]
    fn test_registry_unknown_reference() {
        let registry = ContentRegistry::new();
        assert!(registry.load(&"x/page.mdx".into()).is_err());
    }

    #[test]
    fn test_registry_discovery_matches_one_level() {
        let mut registry = ContentRegistry::new();
        registry.insert("a/page.mdx", DOC);
        registry.insert("a/b/page.mdx", DOC);
        registry.insert("page.mdx", DOC);
        registry.insert(".draft/page.mdx", DOC);

        let found = registry.discover(Path::new("projects"), "*/page.mdx").unwrap();
        assert_eq!(found, vec![ContentRef::new("a/page.mdx")]);
    }

    #[test]
    fn test_registry_references_sorted() {
        let mut registry = ContentRegistry::new();
        registry.insert("b/page.mdx", DOC);
        registry.insert("a/page.mdx", DOC);
        assert_eq!(
            registry.references(),
            vec![ContentRef::new("a/page.mdx"), ContentRef::new("b/page.mdx")]
        );
    }
}
