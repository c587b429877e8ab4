//! Execution Orchestrator - applies a manifest, best-effort.
//!
//! Operations run strictly in order, one at a time. A failing operation is
//! logged where it happens and recorded, and the next operation still runs:
//! generated files are mostly independent, so a partial scaffold is more
//! useful than none. Nothing is retried or rolled back.

use tracing::{debug, error, info, instrument, warn};

use crate::{
    application::ports::{CommandRunner, Filesystem},
    domain::{Manifest, Operation},
    error::{FlarchError, FlarchResult},
};

/// What happened to one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationOutcome {
    /// Position in the manifest, zero-based.
    pub index: usize,
    pub operation: Operation,
    pub result: Result<(), FlarchError>,
}

impl OperationOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&FlarchError> {
        self.result.as_ref().err()
    }
}

/// Aggregate result of applying a manifest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionReport {
    outcomes: Vec<OperationOutcome>,
}

impl ExecutionReport {
    pub fn outcomes(&self) -> &[OperationOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &OperationOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.len() - self.failure_count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// `true` when every operation succeeded.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(OperationOutcome::is_ok)
    }
}

/// Applies manifests through the filesystem and process ports.
pub struct Orchestrator<'a> {
    filesystem: &'a dyn Filesystem,
    runner: &'a dyn CommandRunner,
}

impl<'a> Orchestrator<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, runner: &'a dyn CommandRunner) -> Self {
        Self { filesystem, runner }
    }

    /// Apply every operation in `manifest`, in order.
    ///
    /// Never short-circuits: the report holds one outcome per operation.
    #[instrument(
        skip_all,
        fields(root = %manifest.root().display(), operations = manifest.len())
    )]
    pub fn apply(&self, manifest: Manifest) -> ExecutionReport {
        let total = manifest.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, operation) in manifest.into_operations().into_iter().enumerate() {
            let step = index + 1;
            debug!(step, total, %operation, "Applying operation");

            let result = self.apply_one(&operation);
            if let Err(e) = &result {
                error!(step, total, kind = operation.kind(), error = %e, "Operation failed, continuing");
            }

            outcomes.push(OperationOutcome {
                index,
                operation,
                result,
            });
        }

        let report = ExecutionReport { outcomes };
        if report.is_complete() {
            info!(total, "All operations applied");
        } else {
            warn!(
                failed = report.failure_count(),
                total, "Manifest applied with failures"
            );
        }
        report
    }

    fn apply_one(&self, operation: &Operation) -> FlarchResult<()> {
        match operation {
            Operation::CreateDirectory { path, mode } => self.filesystem.create_dir_all(path, *mode),
            Operation::WriteFile { path, content } => self.filesystem.write_file(path, content),
            Operation::RunCommand(command) => self.runner.run(command),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockCommandRunner, MockFilesystem},
    };
    use crate::domain::{CommandSpec, DirMode};

    fn root() -> PathBuf {
        PathBuf::from("demo")
    }

    fn write_failure(path: &Path) -> FlarchError {
        ApplicationError::FileWriteFailure {
            path: path.to_path_buf(),
            reason: "read-only".into(),
        }
        .into()
    }

    fn sample_manifest() -> Manifest {
        Manifest::new(root())
            .with_command(CommandSpec::new("flutter", ["pub", "add", "provider"], root()))
            .with_directory(root().join("lib"), DirMode::STANDARD)
            .with_file(root().join("lib/main.dart"), "main")
            .with_file(root().join("lib/other.dart"), "other")
    }

    #[test]
    fn applies_operations_in_manifest_order() {
        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();
        let mut runner = MockCommandRunner::new();

        runner
            .expect_run()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all()
            .with(eq(root().join("lib")), eq(DirMode::STANDARD))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .with(eq(root().join("lib/main.dart")), eq("main"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .with(eq(root().join("lib/other.dart")), eq("other"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let report = Orchestrator::new(&fs, &runner).apply(sample_manifest());

        assert!(report.is_complete());
        assert_eq!(report.total(), 4);
        assert_eq!(report.succeeded(), 4);
    }

    #[test]
    fn first_write_failure_does_not_stop_later_operations() {
        let mut fs = MockFilesystem::new();
        let mut runner = MockCommandRunner::new();

        runner.expect_run().times(1).returning(|_| Ok(()));
        fs.expect_create_dir_all().times(1).returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, _| p.ends_with("main.dart"))
            .times(1)
            .returning(|p, _| Err(write_failure(p)));
        fs.expect_write_file()
            .withf(|p, _| p.ends_with("other.dart"))
            .times(1)
            .returning(|_, _| Ok(()));

        let report = Orchestrator::new(&fs, &runner).apply(sample_manifest());

        assert!(!report.is_complete());
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.succeeded(), 3);

        let failed = report.failures().next().unwrap();
        assert_eq!(failed.index, 2);
        assert!(matches!(
            failed.error(),
            Some(FlarchError::Application(ApplicationError::FileWriteFailure { .. }))
        ));
    }

    #[test]
    fn failing_command_is_reported_and_files_still_written() {
        let mut fs = MockFilesystem::new();
        let mut runner = MockCommandRunner::new();

        runner.expect_run().times(1).returning(|cmd| {
            Err(ApplicationError::ExternalCommandFailure {
                command: cmd.to_string(),
                reason: "program not found".into(),
            }
            .into())
        });
        fs.expect_create_dir_all().times(1).returning(|_, _| Ok(()));
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let report = Orchestrator::new(&fs, &runner).apply(sample_manifest());

        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failures().next().unwrap().operation.kind(), "run_command");
    }

    #[test]
    fn every_operation_failing_still_yields_full_report() {
        let mut fs = MockFilesystem::new();
        let mut runner = MockCommandRunner::new();

        runner.expect_run().returning(|cmd| {
            Err(ApplicationError::ExternalCommandFailure {
                command: cmd.to_string(),
                reason: "exit status 1".into(),
            }
            .into())
        });
        fs.expect_create_dir_all().returning(|p, _| {
            Err(ApplicationError::DirectoryCreationFailure {
                path: p.to_path_buf(),
                reason: "denied".into(),
            }
            .into())
        });
        fs.expect_write_file().returning(|p, _| Err(write_failure(p)));

        let report = Orchestrator::new(&fs, &runner).apply(sample_manifest());

        assert_eq!(report.total(), 4);
        assert_eq!(report.failure_count(), 4);
        let indices: Vec<_> = report.failures().map(|o| o.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_manifest_is_trivially_complete() {
        let fs = MockFilesystem::new();
        let runner = MockCommandRunner::new();

        let report = Orchestrator::new(&fs, &runner).apply(Manifest::new(root()));

        assert!(report.is_complete());
        assert_eq!(report.total(), 0);
    }
}
