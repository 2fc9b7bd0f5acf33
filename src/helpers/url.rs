//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;
use crate::content::is_remote_url;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// URL of a project's detail page
///
/// # Examples
/// ```ignore
/// project_url(&config, "my app") // -> "/projects/my%20app/"
/// ```
pub fn project_url(config: &SiteConfig, slug: &str) -> String {
    let encoded = slug
        .split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/");
    url_for(config, &format!("projects/{}/", encoded))
}

/// URL of a file colocated with a project document
///
/// Root-relative (`/images/a.png`) and remote references are left alone;
/// anything else lives next to the project's index document.
///
/// # Examples
/// ```ignore
/// project_asset_url(&config, "shop", "cover.png") // -> "/projects/shop/cover.png"
/// ```
pub fn project_asset_url(config: &SiteConfig, slug: &str, reference: &str) -> String {
    if is_remote_url(reference) || reference.starts_with('/') {
        return asset_url(config, reference);
    }
    format!(
        "{}{}",
        project_url(config, slug),
        reference.trim_start_matches("./")
    )
}

/// URL of an image or other asset; remote URLs pass through unchanged
pub fn asset_url(config: &SiteConfig, reference: &str) -> String {
    if is_remote_url(reference) {
        reference.to_string()
    } else {
        url_for(config, reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(root: &str) -> SiteConfig {
        SiteConfig {
            root: root.to_string(),
            url: "https://example.com/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_url_for() {
        assert_eq!(url_for(&config("/"), "/css/style.css"), "/css/style.css");
        assert_eq!(url_for(&config("/site/"), "css/style.css"), "/site/css/style.css");
        assert_eq!(url_for(&config("/site/"), ""), "/site/");
    }

    #[test]
    fn test_full_url_for() {
        assert_eq!(
            full_url_for(&config("/"), "projects/"),
            "https://example.com/projects/"
        );
    }

    #[test]
    fn test_project_url_encodes_segments() {
        assert_eq!(project_url(&config("/"), "weather-app"), "/projects/weather-app/");
        assert_eq!(project_url(&config("/"), "my app"), "/projects/my%20app/");
        assert_eq!(project_url(&config("/site"), "café"), "/site/projects/caf%C3%A9/");
    }

    #[test]
    fn test_project_asset_url() {
        let config = config("/site/");
        assert_eq!(
            project_asset_url(&config, "shop", "cover.png"),
            "/site/projects/shop/cover.png"
        );
        assert_eq!(
            project_asset_url(&config, "shop", "./img/cover.png"),
            "/site/projects/shop/img/cover.png"
        );
        assert_eq!(
            project_asset_url(&config, "shop", "/images/cover.png"),
            "/site/images/cover.png"
        );
        assert_eq!(
            project_asset_url(&config, "shop", "https://cdn.example.com/c.png"),
            "https://cdn.example.com/c.png"
        );
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(
            asset_url(&config("/site/"), "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(asset_url(&config("/site/"), "images/a.png"), "/site/images/a.png");
    }
}
