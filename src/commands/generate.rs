//! Generate static files

use anyhow::Result;
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, Debouncer};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::generator::Generator;
use crate::Folio;

/// Quiet period before a burst of file events triggers a rebuild
const DEBOUNCE_TIMEOUT: Duration = Duration::from_millis(500);

/// Generate the static site from a single catalog query
pub async fn run(folio: &Folio) -> Result<()> {
    let start = Instant::now();

    let pages = folio.catalog()?.list_all_pages().await?;
    tracing::info!("Loaded {} projects", pages.len());

    Generator::new(folio)?.generate(&pages)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Reload the configuration and regenerate
pub async fn rebuild(folio: &Folio) -> Result<Folio> {
    let reloaded = Folio::new(&folio.base_dir)?;
    run(&reloaded).await?;
    Ok(reloaded)
}

/// Watch for file changes and regenerate
pub async fn watch(folio: &Folio) -> Result<()> {
    let mut watcher = SiteWatcher::new(folio)?;
    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut current = folio.clone();
    while let Some(changed) = watcher.next_change().await {
        for path in &changed {
            tracing::debug!("Changed: {:?}", path);
        }

        tracing::info!("File changed, regenerating...");
        match rebuild(&current).await {
            Ok(reloaded) => current = reloaded,
            Err(e) => tracing::error!("Generation failed: {:#}", e),
        }
    }

    Ok(())
}

/// Debounced change notifications for a site's sources
///
/// Covers the content directory, the static directory and the config file.
/// Events keep queueing while a rebuild runs, so a change made mid-rebuild
/// triggers another one instead of being lost.
pub(crate) struct SiteWatcher {
    _debouncer: Debouncer<RecommendedWatcher>,
    rx: mpsc::UnboundedReceiver<DebounceEventResult>,
}

impl SiteWatcher {
    pub(crate) fn new(folio: &Folio) -> Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut debouncer = new_debouncer(DEBOUNCE_TIMEOUT, move |res: DebounceEventResult| {
            let _ = tx.send(res);
        })?;

        for dir in [&folio.content_dir, &folio.static_dir] {
            if dir.exists() {
                debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
                tracing::debug!("Watching: {:?}", dir);
            }
        }

        let config_path = folio.config_path();
        if config_path.exists() {
            debouncer
                .watcher()
                .watch(&config_path, RecursiveMode::NonRecursive)?;
            tracing::debug!("Watching: {:?}", config_path);
        }

        Ok(Self {
            _debouncer: debouncer,
            rx,
        })
    }

    /// Next batch of relevant changed paths, or `None` once the watcher stops
    pub(crate) async fn next_change(&mut self) -> Option<Vec<PathBuf>> {
        while let Some(res) = self.rx.recv().await {
            let events = match res {
                Ok(events) => events,
                Err(e) => {
                    tracing::error!("Watch error: {:?}", e);
                    continue;
                }
            };

            let changed: Vec<PathBuf> = events
                .into_iter()
                .map(|e| e.path)
                .filter(|p| is_relevant_change(p))
                .collect();
            if !changed.is_empty() {
                return Some(changed);
            }
        }

        None
    }
}

/// Editor swap files and VCS metadata never trigger a rebuild
fn is_relevant_change(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path_str.contains(".git")
        && !path_str.contains(".DS_Store")
        && !path_str.ends_with('~')
        && !path_str.ends_with(".swp")
}
