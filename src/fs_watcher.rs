//! File system watching for project tree updates
//!
//! Uses the `notify` crate with debouncing to detect changes under the
//! project root, so the panel can re-partition when a configuration file is
//! created or deleted.

use notify_debouncer_mini::{new_debouncer, DebouncedEventKind, Debouncer};
use std::path::{Component, Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crate::model::ProjectTree;

/// Debounce window for coalescing bursts (package installs, git checkouts)
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounced watcher over a project directory
pub struct ProjectWatcher {
    /// The debouncer handles watching and event coalescing
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    rx: Receiver<Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>>,
    root: PathBuf,
}

impl ProjectWatcher {
    /// Start watching `root` recursively
    pub fn new(root: PathBuf) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();

        let mut debouncer = new_debouncer(DEBOUNCE, tx)?;
        debouncer
            .watcher()
            .watch(&root, notify::RecursiveMode::Recursive)?;

        tracing::info!("Watching project at {}", root.display());

        Ok(Self {
            _debouncer: debouncer,
            rx,
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Drain pending events without blocking
    ///
    /// Returns the distinct changed paths, skipping ignored directories.
    pub fn poll_changes(&self) -> Vec<PathBuf> {
        let mut changed: Vec<PathBuf> = Vec::new();

        while let Ok(result) = self.rx.try_recv() {
            self.collect(result, &mut changed);
        }

        if !changed.is_empty() {
            tracing::debug!("Project watcher detected {} changes", changed.len());
        }
        changed
    }

    /// Block until at least one relevant change arrives or `timeout` passes
    pub fn wait_changes(&self, timeout: Duration) -> Vec<PathBuf> {
        let mut changed = Vec::new();
        if let Ok(result) = self.rx.recv_timeout(timeout) {
            self.collect(result, &mut changed);
        }
        changed.extend(self.poll_changes());
        changed.sort();
        changed.dedup();
        changed
    }

    fn collect(
        &self,
        result: Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>,
        changed: &mut Vec<PathBuf>,
    ) {
        match result {
            Ok(events) => {
                for event in events {
                    // Continuous events fire while a change is still in progress
                    if matches!(event.kind, DebouncedEventKind::AnyContinuous) {
                        continue;
                    }
                    if self.should_ignore(&event.path) || changed.contains(&event.path) {
                        continue;
                    }
                    changed.push(event.path);
                }
            }
            Err(e) => {
                tracing::warn!("Project watcher error: {:?}", e);
            }
        }
    }

    /// Check every component below the root against the scan ignore list
    fn should_ignore(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);

        relative.components().any(|component| match component {
            Component::Normal(name) => ProjectTree::should_ignore(Path::new(name)),
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use tempfile::tempdir;

    #[test]
    fn test_should_ignore_vcs_and_dependencies() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path().to_path_buf();
        let Ok(watcher) = ProjectWatcher::new(root.clone()) else {
            return; // Skip if the platform can't watch
        };

        assert!(watcher.should_ignore(&root.join(".git/objects")));
        assert!(watcher.should_ignore(&root.join("node_modules/react/package.json")));
        assert!(watcher.should_ignore(&root.join("target/debug")));
    }

    #[test]
    fn test_should_not_ignore_config_dotfiles() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path().to_path_buf();
        let Ok(watcher) = ProjectWatcher::new(root.clone()) else {
            return;
        };

        assert!(!watcher.should_ignore(&root.join(".prettierrc")));
        assert!(!watcher.should_ignore(&root.join(".babelrc")));
        assert!(!watcher.should_ignore(&root.join("package.json")));
        assert!(!watcher.should_ignore(&root.join("src/index.js")));
    }

    #[test]
    fn test_poll_empty_on_no_changes() {
        let dir = tempdir().expect("Failed to create temp dir");
        if let Ok(watcher) = ProjectWatcher::new(dir.path().to_path_buf()) {
            assert!(watcher.poll_changes().is_empty());
            assert_eq!(watcher.root(), dir.path());
        }
    }

    #[test]
    #[ignore] // Flaky in CI - file system event timing varies by platform
    fn test_detects_new_config_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let watcher =
            ProjectWatcher::new(dir.path().to_path_buf()).expect("Failed to create watcher");

        fs::write(dir.path().join("netlify.toml"), "[build]\n").expect("Failed to write file");
        thread::sleep(Duration::from_millis(800));

        let changes = watcher.poll_changes();
        assert!(changes.iter().any(|p| p.ends_with("netlify.toml")));
    }
}
