//! Application layer errors.
//!
//! These errors represent failures at the filesystem / process boundary, not
//! registry logic. Registry errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while applying a manifest.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A directory could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreationFailure { path: PathBuf, reason: String },

    /// A file could not be created or written.
    #[error("Failed to write file {path}: {reason}")]
    FileWriteFailure { path: PathBuf, reason: String },

    /// An external command could not start or exited non-zero.
    #[error("Command `{command}` failed: {reason}")]
    ExternalCommandFailure { command: String, reason: String },

    /// The base project could not be created.
    #[error("Could not create base project '{project}': {reason}")]
    BootstrapFailed { project: String, reason: String },

    /// Adapter state is unusable (lock poisoned, etc.).
    #[error("Adapter state is unavailable: {name}")]
    AdapterUnavailable { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryCreationFailure { path, .. } | Self::FileWriteFailure { path, .. } => {
                vec![
                    format!("Failed to access: {}", path.display()),
                    "Check that you have write permissions".into(),
                    "Make sure no regular file sits where a directory is expected".into(),
                ]
            }
            Self::ExternalCommandFailure { command, .. } => vec![
                format!("External command failed: {}", command),
                "Ensure the Flutter SDK is installed and `flutter` is in your PATH".into(),
                "Check the command output above for details".into(),
            ],
            Self::BootstrapFailed { project, .. } => vec![
                format!("`flutter create {}` did not succeed", project),
                "Check that the project name is a valid Dart package name".into(),
                "Use --no-bootstrap to apply the architecture to an existing project".into(),
            ],
            Self::AdapterUnavailable { .. } => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryCreationFailure { .. }
            | Self::FileWriteFailure { .. }
            | Self::ExternalCommandFailure { .. }
            | Self::BootstrapFailed { .. }
            | Self::AdapterUnavailable { .. } => ErrorCategory::Internal,
        }
    }
}
