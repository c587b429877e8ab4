use std::fmt;
use std::path::{Component, Path, PathBuf};

use super::DomainError;

/// A template path that stays inside the project root once joined to it.
///
/// Absolute paths and `..` components are rejected at construction, so
/// [`RelativePath::under`] can never point outside `root`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let contained = path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        if path.as_os_str().is_empty() || !contained {
            return Err(DomainError::PathEscapesRoot {
                path: path.display().to_string(),
            });
        }
        Ok(Self(path))
    }

    /// Join onto a project root.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
