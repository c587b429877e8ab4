//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use flarch_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::DirMode,
    error::FlarchResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service. Paths registered with [`MemoryFilesystem::fail_on`] reject any
/// write or directory creation.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeMap<PathBuf, DirMode>,
    failing: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation on `path` fail.
    pub fn fail_on(&self, path: impl Into<PathBuf>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.insert(path.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Mode a directory was created with, if it exists.
    pub fn dir_mode(&self, path: &Path) -> Option<DirMode> {
        let inner = self.inner.read().ok()?;
        inner.directories.get(path).copied()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.dir_mode(path).is_some()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> BTreeSet<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> FlarchResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| {
            ApplicationError::AdapterUnavailable {
                name: "memory filesystem",
            }
            .into()
        })
    }

    fn write(&self) -> FlarchResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| {
            ApplicationError::AdapterUnavailable {
                name: "memory filesystem",
            }
            .into()
        })
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path, mode: DirMode) -> FlarchResult<()> {
        let blocked = {
            let inner = self.read()?;
            if inner.failing.contains(path) {
                Some("injected failure")
            } else if inner.files.contains_key(path) {
                Some("a file exists at this path")
            } else {
                None
            }
        };
        if let Some(reason) = blocked {
            return Err(ApplicationError::DirectoryCreationFailure {
                path: path.to_path_buf(),
                reason: reason.into(),
            }
            .into());
        }

        let mut inner = self.write()?;
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.entry(current.clone()).or_insert(mode);
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> FlarchResult<()> {
        let mut inner = self.write()?;

        if inner.failing.contains(path) {
            return Err(ApplicationError::FileWriteFailure {
                path: path.to_path_buf(),
                reason: "injected failure".into(),
            }
            .into());
        }

        // Ensure parent exists
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        if parent.is_some_and(|p| !inner.directories.contains_key(p)) {
            return Err(ApplicationError::FileWriteFailure {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
