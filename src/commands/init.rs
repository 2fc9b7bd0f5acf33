//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# Site
title: My Portfolio
description: Projects, writing and a short resume
author: Jane Doe
language: en

# Home page
headline: Software developer, designer and amateur photographer.
intro:
  - I build things for the web and occasionally write about it.
photos: []
resume:
  - company: Acme
    title: Software Engineer
    start: "2020"
    end: present
home_projects: 5

# Projects listing
projects_title: Things I've made trying to put my dent in the universe.
projects_intro: A selection of projects I've worked on over the years.

# URL
url: http://example.com
root: /

# Directory
content_dir: projects
index_name: page.mdx
static_dir: static
public_dir: public

# Writing
date_format: MMMM D, YYYY
highlight:
  theme: base16-ocean.dark
  line_number: false
"#;

const SAMPLE_PROJECT: &str = r#"---
title: Hello World
description: The first project in this portfolio.
author: Jane Doe
ranking: 1
date: {date}
---

Welcome to your portfolio! Every directory under `projects/` with a
`page.mdx` file becomes a project page.

## Quick Start

```bash
$ folio new "My Next Project" --ranking 2
$ folio server
```

Lower rankings are listed first; projects without one rank as 0.
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    fs::create_dir_all(target_dir.join("projects/hello-world"))?;
    fs::create_dir_all(target_dir.join("static"))?;

    fs::write(&config_path, DEFAULT_CONFIG)?;

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    fs::write(
        target_dir.join("projects/hello-world/page.mdx"),
        SAMPLE_PROJECT.replace("{date}", &today),
    )?;

    tracing::debug!("Wrote {:?}", config_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Folio;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_site_is_listable() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.config.resume.len(), 1);
        assert!(folio.static_dir.is_dir());

        let projects = folio.catalog().unwrap().list_all_projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].slug, "hello-world");
        assert_eq!(projects[0].ranking, Some(1));
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
