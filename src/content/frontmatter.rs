//! Front-matter parsing

use anyhow::{anyhow, bail, Result};
use serde::de::DeserializeOwned;

/// Raw front-matter block found at the top of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatter<'a> {
    /// Block delimited by `---` lines
    Yaml(&'a str),
    /// Block delimited by `;;;` or a bare JSON object
    Json(&'a str),
}

impl<'a> FrontMatter<'a> {
    /// Split a document into its front-matter block and the remaining body
    pub fn split(content: &'a str) -> Result<(Self, &'a str)> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        if content.starts_with("---") {
            return Self::split_yaml(content);
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::split_json(content);
        }

        bail!("no front-matter found, document must start with '---'")
    }

    fn split_yaml(content: &'a str) -> Result<(Self, &'a str)> {
        let rest = &content[3..];
        let rest = rest.trim_start_matches([' ', '\t']);
        let rest = rest.trim_start_matches(['\n', '\r']);

        // `---` immediately followed by `---`
        if let Some(after) = rest.strip_prefix("---") {
            let remaining = after.trim_start_matches(['\n', '\r']);
            return Ok((FrontMatter::Yaml(""), remaining));
        }

        let end_pos = rest
            .find("\n---")
            .ok_or_else(|| anyhow!("unclosed front-matter, missing closing '---'"))?;

        let yaml = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        Ok((FrontMatter::Yaml(yaml), remaining))
    }

    fn split_json(content: &'a str) -> Result<(Self, &'a str)> {
        if let Some(rest) = content.strip_prefix(";;;") {
            let end_pos = rest
                .find(";;;")
                .ok_or_else(|| anyhow!("unclosed front-matter, missing closing ';;;'"))?;
            let json = &rest[..end_pos];
            let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);
            return Ok((FrontMatter::Json(json), remaining));
        }

        // Find the brace closing the leading object, ignoring braces inside strings
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;
        for (i, c) in content.char_indices() {
            if in_string {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '"' => in_string = true,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let json = &content[..i + 1];
                        let remaining = content[i + 1..].trim_start_matches(['\n', '\r']);
                        return Ok((FrontMatter::Json(json), remaining));
                    }
                }
                _ => {}
            }
        }

        Err(anyhow!("invalid JSON front-matter"))
    }

    /// Deserialize the block into a typed value
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        match self {
            FrontMatter::Yaml(yaml) => {
                let yaml = if yaml.trim().is_empty() { "{}" } else { yaml };
                serde_yaml::from_str(yaml)
                    .map_err(|e| anyhow!("failed to parse YAML front-matter: {}", e))
            }
            FrontMatter::Json(json) => serde_json::from_str(json)
                .map_err(|e| anyhow!("failed to parse JSON front-matter: {}", e)),
        }
    }
}

/// Parse a document into typed front-matter and its body
pub fn parse<T: DeserializeOwned>(content: &str) -> Result<(T, &str)> {
    let (front_matter, body) = FrontMatter::split(content)?;
    Ok((front_matter.deserialize()?, body))
}
