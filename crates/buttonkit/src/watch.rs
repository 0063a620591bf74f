//! Live-regenerate support.
//!
//! Watches the loaded config file's directory and rewrites the output
//! stylesheet whenever `config.toml` or the sibling `style.css` changes.
//! A config that fails to reload logs the error and leaves the last good
//! output in place.

use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use notify_debouncer_mini::{DebounceEventResult, new_debouncer, notify::RecursiveMode};
use tracing::{debug, error, info, warn};

use buttonkit_core::Config;

use crate::css;

/// Debounce interval (in ms) for file change events. Editors often trigger
/// multiple events for a single save; this batches them into one reload.
const FILE_CHANGE_DEBOUNCE_MS: u64 = 300;

/// Watch `config_path` and regenerate `output` on every change.
///
/// Blocks until the watcher dies. The initial generation has already
/// happened by the time this is called.
pub fn run(config_path: &Path, output: &Path) -> anyhow::Result<()> {
    // Canonicalize so paths compare equal with the absolute paths notify
    // reports
    let config_path = config_path
        .canonicalize()
        .context("failed to canonicalize config path")?;
    let style_css_path = config_path.parent().map(|p| p.join("style.css"));

    let (tx, rx) = mpsc::channel();
    let path_for_handler = config_path.clone();

    let mut debouncer = new_debouncer(
        Duration::from_millis(FILE_CHANGE_DEBOUNCE_MS),
        move |res: DebounceEventResult| match res {
            Ok(events) => {
                let relevant = events.iter().any(|e| {
                    e.path == path_for_handler
                        || style_css_path.as_ref().is_some_and(|s| e.path == *s)
                });
                if relevant {
                    debug!("Config change detected");
                    let _ = tx.send(());
                }
            }
            Err(err) => error!("File watcher error: {}", err),
        },
    )
    .context("failed to create file watcher")?;

    // Watch the config file's parent directory (more reliable than watching
    // the file directly)
    let watch_dir = config_path.parent().unwrap_or(&config_path);
    debouncer
        .watcher()
        .watch(watch_dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", watch_dir.display()))?;

    info!("Watching {} for changes", watch_dir.display());

    for () in rx {
        if let Err(e) = regenerate(&config_path, output) {
            error!("Reload failed, keeping last stylesheet: {}", e);
        }
    }

    Ok(())
}

fn regenerate(config_path: &Path, output: &Path) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    config.validate()?;
    for warning in config.warnings() {
        warn!("{}", warning);
    }

    let stylesheet = css::render(&config, Some(config_path));
    std::fs::write(output, &stylesheet)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!("Regenerated {} ({} bytes)", output.display(), stylesheet.len());
    Ok(())
}
