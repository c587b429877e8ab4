use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::DirMode};

/// Ordered list of operations that scaffold one architecture.
///
/// This is the output of the template registry and the only input of the
/// orchestrator. It contains no behaviour beyond structural checks; order is
/// significant and preserved exactly as built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub(crate) root: PathBuf,
    pub(crate) operations: Vec<Operation>,
}

impl Manifest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            operations: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>, mode: DirMode) {
        self.operations.push(Operation::CreateDirectory {
            path: path.into(),
            mode,
        });
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.operations.push(Operation::WriteFile {
            path: path.into(),
            content: content.into(),
        });
    }

    pub fn add_command(&mut self, command: CommandSpec) {
        self.operations.push(Operation::RunCommand(command));
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>, mode: DirMode) -> Self {
        self.add_directory(path, mode);
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_command(mut self, command: CommandSpec) -> Self {
        self.add_command(command);
        self
    }

    /// Check the structural invariants:
    ///
    /// - the manifest is not empty
    /// - no file is written twice
    /// - every written file's parent is the root, or a preceding
    ///   `CreateDirectory` creates that parent (directly or as an
    ///   intermediate of a deeper path)
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.operations.is_empty() {
            return Err(DomainError::EmptyManifest {
                root: self.root.display().to_string(),
            });
        }

        let mut created: Vec<&Path> = Vec::new();
        let mut written = HashSet::new();

        for op in &self.operations {
            match op {
                Operation::CreateDirectory { path, .. } => created.push(path),
                Operation::WriteFile { path, .. } => {
                    if !written.insert(path) {
                        return Err(DomainError::DuplicatePath {
                            path: path.display().to_string(),
                        });
                    }

                    let covered = match path.parent() {
                        Some(parent) => {
                            parent == self.root.as_path() || created.iter().any(|d| d.starts_with(parent))
                        }
                        None => false,
                    };
                    if !covered {
                        return Err(DomainError::UncoveredParent {
                            path: path.display().to_string(),
                        });
                    }
                }
                Operation::RunCommand(_) => {}
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }

    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.operations.iter().filter_map(|op| match op {
            Operation::WriteFile { path, content } => Some((path.as_path(), content.as_str())),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.operations.iter().filter_map(|op| match op {
            Operation::CreateDirectory { path, .. } => Some(path.as_path()),
            _ => None,
        })
    }

    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.operations.iter().filter_map(|op| match op {
            Operation::RunCommand(cmd) => Some(cmd),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// A single scaffolding step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Create a directory and any missing parents. Succeeds if it exists.
    CreateDirectory { path: PathBuf, mode: DirMode },
    /// Create or truncate a file with exactly `content`.
    WriteFile { path: PathBuf, content: String },
    /// Run an external program and wait for it.
    RunCommand(CommandSpec),
}

impl Operation {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CreateDirectory { .. } => "create_directory",
            Self::WriteFile { .. } => "write_file",
            Self::RunCommand(_) => "run_command",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDirectory { path, mode } => {
                write!(f, "mkdir  {} ({mode})", path.display())
            }
            Self::WriteFile { path, content } => {
                write!(f, "write  {} ({} bytes)", path.display(), content.len())
            }
            Self::RunCommand(cmd) => write!(f, "run    {cmd} (in {})", cmd.working_dir.display()),
        }
    }
}

/// An external program invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I, working_dir: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: working_dir.into(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
