//! File system utility functions
//!
//! Provides safe file operations with proper error handling.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Remove a file if it exists
    #[instrument(skip(self))]
    pub fn remove_file_if_exists<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
    ) -> io::Result<bool> {
        let path = path.as_ref();

        match fs::remove_file(path) {
            Ok(()) => {
                debug!("Removed file: {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("File does not exist: {}", path.display());
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Remove a directory and all its contents if it exists
    #[instrument(skip(self))]
    pub fn remove_dir_all_if_exists<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
    ) -> io::Result<bool> {
        let path = path.as_ref();

        match fs::remove_dir_all(path) {
            Ok(()) => {
                debug!("Removed directory: {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Directory does not exist: {}", path.display());
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Remove whatever sits at the path: symlinks and regular files are
    /// unlinked, directories are removed recursively
    ///
    /// Symlinks are checked first so a link to a directory is unlinked
    /// rather than followed.
    #[instrument(skip(self))]
    pub fn remove_path_if_exists<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
    ) -> io::Result<bool> {
        let path = path.as_ref();

        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Path does not exist: {}", path.display());
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        if metadata.file_type().is_dir() {
            self.remove_dir_all_if_exists(path)
        } else {
            self.remove_file_if_exists(path)
        }
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_remove_file_if_exists() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("test.txt");

        // File doesn't exist
        let removed = fs_utils.remove_file_if_exists(&file_path).unwrap();
        assert!(!removed);

        // Create file and remove it
        fs::write(&file_path, "content").unwrap();
        let removed = fs_utils.remove_file_if_exists(&file_path).unwrap();
        assert!(removed);
        assert!(!file_path.exists());
    }

    #[test]
    fn test_remove_dir_all_if_exists() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let dir_path = temp_dir.path().join("nested");

        let removed = fs_utils.remove_dir_all_if_exists(&dir_path).unwrap();
        assert!(!removed);

        fs::create_dir_all(dir_path.join("a").join("b")).unwrap();
        fs::write(dir_path.join("a").join("file.txt"), "x").unwrap();

        let removed = fs_utils.remove_dir_all_if_exists(&dir_path).unwrap();
        assert!(removed);
        assert!(!dir_path.exists());
    }

    #[test]
    fn test_remove_path_dispatches_on_type() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("file.txt");
        let dir_path = temp_dir.path().join("dir");
        fs::write(&file_path, "content").unwrap();
        fs::create_dir_all(dir_path.join("inner")).unwrap();

        assert!(fs_utils.remove_path_if_exists(&file_path).unwrap());
        assert!(fs_utils.remove_path_if_exists(&dir_path).unwrap());
        assert!(!file_path.exists());
        assert!(!dir_path.exists());

        // Already gone: not an error, just a no-op
        assert!(!fs_utils.remove_path_if_exists(&file_path).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_path_unlinks_symlink_without_following() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let target_dir = temp_dir.path().join("target");
        fs::create_dir(&target_dir).unwrap();
        fs::write(target_dir.join("keep.txt"), "x").unwrap();

        let link_path = temp_dir.path().join("link");
        std::os::unix::fs::symlink(&target_dir, &link_path).unwrap();

        assert!(fs_utils.remove_path_if_exists(&link_path).unwrap());
        assert!(!link_path.exists());
        // The link target is untouched
        assert!(target_dir.join("keep.txt").exists());
    }

}
