//! Content module - project documents, discovery and the project catalog

mod catalog;
mod discovery;
pub mod frontmatter;
mod markdown;
mod project;
mod slug;
mod store;

pub use catalog::ProjectCatalog;
pub use discovery::{FileDiscovery, GlobDiscovery};
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use project::{
    is_remote_url, ContentRef, ProjectEntry, ProjectMetadata, ProjectPage, Thumbnail,
};
pub use slug::SlugRule;
pub use store::{ContentRegistry, ContentStore, FsContentStore, LoadedContent};
