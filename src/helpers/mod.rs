//! Helper functions for templates
//!
//! URL generation and date formatting shared by the generator and the
//! template filters.

mod date;
mod url;

pub use date::*;
pub use url::*;

use crate::config::SiteConfig;

/// Helpers bound to a site configuration
#[derive(Debug, Clone)]
pub struct Helpers {
    config: SiteConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Get url_for helper
    pub fn url_for(&self, path: &str) -> String {
        url_for(&self.config, path)
    }

    /// Get full_url_for helper
    pub fn full_url_for(&self, path: &str) -> String {
        full_url_for(&self.config, path)
    }

    /// Link to a project page
    pub fn project_url(&self, slug: &str) -> String {
        project_url(&self.config, slug)
    }

    /// Link to a file stored next to a project document
    pub fn project_asset_url(&self, slug: &str, reference: &str) -> String {
        project_asset_url(&self.config, slug, reference)
    }

    /// Link to an image or other asset
    pub fn asset_url(&self, reference: &str) -> String {
        asset_url(&self.config, reference)
    }
}
