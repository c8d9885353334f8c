//! Artifact cleanup functionality
//!
//! Removes build output, tool caches, and coverage files under the
//! project root. Cleanup is best-effort: absent targets are already
//! clean, and removal failures are logged and skipped rather than
//! failing the task.

use crate::{config::Config, error::Result, utils::fs::FileSystemUtils};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Removes known build and cache artifacts from the project tree
pub struct ArtifactCleaner {
    config: Config,
    fs_utils: FileSystemUtils,
}

impl ArtifactCleaner {
    /// Create a new artifact cleaner
    pub fn new(config: Config) -> Self {
        Self {
            fs_utils: FileSystemUtils::new(),
            config,
        }
    }

    /// Remove all matching artifacts; idempotent and always succeeds
    #[instrument(skip(self))]
    pub fn clean(&self) -> Result<()> {
        info!(
            "Removing build artifacts and caches under {}",
            self.config.root.display()
        );

        // Top-level patterns, resolved directly under the project root
        for pattern in &self.config.clean.patterns {
            self.remove_matches(pattern);
        }

        // The coverage database at the root, if present
        self.remove_best_effort(&self.config.root.join(&self.config.clean.coverage_file));

        // Cache directories anywhere in the tree
        self.remove_cache_dirs();

        info!("Clean completed");
        Ok(())
    }

    /// Remove everything matching a glob pattern under the project root
    fn remove_matches(&self, pattern: &str) {
        let full_pattern = self.root_pattern(pattern);
        debug!("Removing matches for pattern: {}", full_pattern);

        match glob::glob(&full_pattern) {
            Ok(paths) => {
                for path in paths.flatten() {
                    self.remove_best_effort(&path);
                }
            }
            Err(e) => warn!("Invalid glob pattern {}: {}", full_pattern, e),
        }
    }

    /// Remove every directory with the configured cache name, at any depth
    fn remove_cache_dirs(&self) {
        let full_pattern = self.root_pattern(&format!("**/{}", self.config.clean.cache_dir_name));
        debug!("Removing cache directories: {}", full_pattern);

        match glob::glob(&full_pattern) {
            Ok(paths) => {
                for path in paths.flatten() {
                    // Only directories count; a nested match that went
                    // with an already-removed parent is skipped here
                    if path.is_dir() {
                        self.remove_best_effort(&path);
                    }
                }
            }
            Err(e) => warn!("Invalid glob pattern {}: {}", full_pattern, e),
        }
    }

    /// Join a pattern onto the project root
    fn root_pattern(&self, pattern: &str) -> String {
        self.config
            .root
            .join(pattern)
            .to_string_lossy()
            .into_owned()
    }

    /// Remove one path, logging failures instead of propagating them
    fn remove_best_effort(&self, path: &Path) {
        match self.fs_utils.remove_path_if_exists(path) {
            Ok(true) => debug!("Removed: {}", path.display()),
            Ok(false) => debug!("Already clean: {}", path.display()),
            Err(e) => warn!("Failed to remove {}: {}", path.display(), e),
        }
    }
}
