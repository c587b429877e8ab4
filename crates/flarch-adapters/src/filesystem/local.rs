//! Local filesystem adapter using std::fs.

use std::fs::{self, DirBuilder};
use std::io;
use std::path::Path;

use flarch_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::DirMode,
    error::FlarchResult,
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path, mode: DirMode) -> FlarchResult<()> {
        trace!(path = %path.display(), %mode, "create_dir_all");

        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode.bits());
        }
        #[cfg(not(unix))]
        {
            let _ = mode;
        }

        builder.create(path).map_err(|e| {
            ApplicationError::DirectoryCreationFailure {
                path: path.to_path_buf(),
                reason: describe(&e),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> FlarchResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");

        fs::write(path, content).map_err(|e| {
            ApplicationError::FileWriteFailure {
                path: path.to_path_buf(),
                reason: describe(&e),
            }
            .into()
        })
    }
}

fn describe(e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::NotFound => format!("parent directory does not exist ({e})"),
        io::ErrorKind::PermissionDenied => format!("permission denied ({e})"),
        _ => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flarch_core::error::FlarchError;
    use tempfile::TempDir;

    #[test]
    fn creates_nested_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a/b/c");

        LocalFilesystem::new()
            .create_dir_all(&path, DirMode::STANDARD)
            .unwrap();

        assert!(path.is_dir());
    }

    #[test]
    fn existing_directory_is_fine() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        fs.create_dir_all(tmp.path(), DirMode::STANDARD).unwrap();
        fs.create_dir_all(tmp.path(), DirMode::STANDARD).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn applies_mode_to_new_directory() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("restricted");

        LocalFilesystem::new()
            .create_dir_all(&path, DirMode::new(0o700))
            .unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn write_overwrites_existing_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("main.dart");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "old content that is longer").unwrap();
        fs.write_file(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_into_missing_parent_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing/main.dart");

        let err = LocalFilesystem::new().write_file(&path, "x").unwrap_err();

        assert!(matches!(
            err,
            FlarchError::Application(ApplicationError::FileWriteFailure { .. })
        ));
    }

    #[test]
    fn directory_over_regular_file_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("lib");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = LocalFilesystem::new()
            .create_dir_all(&blocker.join("bloc"), DirMode::STANDARD)
            .unwrap_err();

        assert!(matches!(
            err,
            FlarchError::Application(ApplicationError::DirectoryCreationFailure { .. })
        ));
    }
}
