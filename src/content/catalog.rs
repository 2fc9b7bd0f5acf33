//! Project catalog - discovers, loads and orders project entries

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{
    ContentRef, ContentStore, FileDiscovery, FsContentStore, GlobDiscovery, LoadedContent,
    ProjectEntry, ProjectPage, SlugRule,
};
use crate::error::{CatalogError, CatalogResult};

/// Produces the ordered list of projects available for display.
///
/// Every query starts from scratch: entries are discovered, loaded in
/// parallel and sorted again. Nothing is cached between calls.
#[derive(Clone)]
pub struct ProjectCatalog {
    root: PathBuf,
    slugs: SlugRule,
    discovery: Arc<dyn FileDiscovery>,
    store: Arc<dyn ContentStore>,
}

impl ProjectCatalog {
    /// Create a catalog over `root` using the given collaborators
    pub fn new<P: AsRef<Path>>(
        root: P,
        index_name: &str,
        discovery: Arc<dyn FileDiscovery>,
        store: Arc<dyn ContentStore>,
    ) -> CatalogResult<Self> {
        Ok(Self {
            root: root.as_ref().to_path_buf(),
            slugs: SlugRule::new(index_name)?,
            discovery,
            store,
        })
    }

    /// Create a catalog reading project documents from a directory
    pub fn from_dir<P: AsRef<Path>>(root: P, index_name: &str) -> CatalogResult<Self> {
        let root = root.as_ref();
        Self::new(
            root,
            index_name,
            Arc::new(GlobDiscovery),
            Arc::new(FsContentStore::new(root)),
        )
    }

    /// Content root this catalog is scoped to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All projects, ordered by ascending ranking
    pub async fn list_all_projects(&self) -> CatalogResult<Vec<ProjectEntry>> {
        let pages = self.list_all_pages().await?;
        Ok(pages.into_iter().map(|page| page.entry).collect())
    }

    /// The first `n` projects of [`list_all_projects`](Self::list_all_projects)
    pub async fn list_top_projects(&self, n: usize) -> CatalogResult<Vec<ProjectEntry>> {
        let mut projects = self.list_all_projects().await?;
        projects.truncate(n);
        Ok(projects)
    }

    /// All projects with their bodies, in catalog order
    pub async fn list_all_pages(&self) -> CatalogResult<Vec<ProjectPage>> {
        let pattern = self.slugs.discovery_pattern();
        let mut references = self.discovery.discover(&self.root, &pattern)?;
        // Discovery order is arbitrary; fix it so equal rankings keep a stable order
        references.sort();
        references.dedup();

        let loaded = self.load_all(references).await?;

        let mut seen: HashMap<String, ContentRef> = HashMap::with_capacity(loaded.len());
        let mut pages = Vec::with_capacity(loaded.len());
        for (reference, content) in loaded {
            let slug = self.slugs.derive(&reference);
            if let Some(first) = seen.get(&slug) {
                return Err(CatalogError::DuplicateSlug {
                    slug,
                    first: first.to_string(),
                    second: reference.to_string(),
                });
            }
            seen.insert(slug.clone(), reference.clone());

            pages.push(ProjectPage {
                entry: ProjectEntry::new(slug, content.metadata),
                body: content.body,
                source: reference,
            });
        }

        // Stable: ties keep reference order
        pages.sort_by_key(|page| page.entry.sort_key());

        tracing::debug!("Catalog query returned {} projects", pages.len());
        Ok(pages)
    }

    /// Load every reference on the blocking pool and wait for all of them
    async fn load_all(
        &self,
        references: Vec<ContentRef>,
    ) -> CatalogResult<Vec<(ContentRef, LoadedContent)>> {
        let handles: Vec<_> = references
            .into_iter()
            .map(|reference| {
                let store = Arc::clone(&self.store);
                let task = tokio::task::spawn_blocking({
                    let reference = reference.clone();
                    move || store.load(&reference)
                });
                (reference, task)
            })
            .collect();

        let mut settled = Vec::with_capacity(handles.len());
        for (reference, task) in handles {
            settled.push((reference, task.await));
        }

        // Every load has settled; only now decide the outcome
        settled
            .into_iter()
            .map(|(reference, joined)| -> CatalogResult<(ContentRef, LoadedContent)> {
                let content = joined.map_err(|e| CatalogError::load(reference.as_str(), e))??;
                Ok((reference, content))
            })
            .collect()
    }
}
