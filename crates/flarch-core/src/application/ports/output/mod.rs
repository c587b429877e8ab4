//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `flarch-adapters` crate provides implementations.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::{CommandSpec, DirMode};
use crate::error::FlarchResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `flarch_adapters::filesystem::LocalFilesystem` (production)
/// - `flarch_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Only ever creates and overwrites; nothing is read, appended or deleted
/// - Errors are `DirectoryCreationFailure` / `FileWriteFailure`
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing is fine.
    fn create_dir_all(&self, path: &Path, mode: DirMode) -> FlarchResult<()>;

    /// Create or truncate `path` and write `content` in full.
    fn write_file(&self, path: &Path, content: &str) -> FlarchResult<()>;
}

/// Port for running external programs.
///
/// Implemented by:
/// - `flarch_adapters::process::SystemCommandRunner` (production)
/// - `flarch_adapters::process::RecordingCommandRunner` (testing)
#[cfg_attr(test, automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion.
    ///
    /// Output streams go straight to the user. Fails with
    /// `ExternalCommandFailure` if the program cannot start or exits
    /// non-zero.
    fn run(&self, command: &CommandSpec) -> FlarchResult<()>;
}
