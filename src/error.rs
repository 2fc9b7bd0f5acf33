//! Error types for the project catalog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures surfaced by a catalog query.
///
/// Every variant aborts the whole query: there is no partial listing.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The content root could not be listed
    #[error("failed to discover content under {root}: {reason}")]
    Discovery { root: PathBuf, reason: String },

    /// A single content entry could not be resolved to valid metadata
    #[error("failed to load content entry '{reference}': {reason}")]
    Load { reference: String, reason: String },

    /// Two content entries derive the same slug
    #[error("duplicate slug '{slug}' derived from '{first}' and '{second}'")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    /// The configured index document name cannot be used to match entries
    #[error("invalid index document name '{name}'")]
    InvalidIndexName { name: String },
}

impl CatalogError {
    pub(crate) fn load(reference: impl Into<String>, reason: impl ToString) -> Self {
        CatalogError::Load {
            reference: reference.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn discovery(root: impl Into<PathBuf>, reason: impl ToString) -> Self {
        CatalogError::Discovery {
            root: root.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_message() {
        let err = CatalogError::load("foo/page.mdx", "missing field `title`");
        assert_eq!(
            err.to_string(),
            "failed to load content entry 'foo/page.mdx': missing field `title`"
        );
    }

    #[test]
    fn test_duplicate_slug_message() {
        let err = CatalogError::DuplicateSlug {
            slug: "foo".to_string(),
            first: "foo/page.mdx".to_string(),
            second: "foo.mdx".to_string(),
        };
        assert!(err.to_string().contains("'foo'"));
        assert!(err.to_string().contains("foo.mdx"));
    }
}
