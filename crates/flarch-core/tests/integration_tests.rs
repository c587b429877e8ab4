//! Integration tests for flarch-core's public API.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use flarch_core::domain::{DomainValidator, build_manifest_for};
use flarch_core::prelude::*;

/// Port implementation that only logs what it was asked to do.
#[derive(Default)]
struct Journal {
    entries: Mutex<Vec<String>>,
}

impl Journal {
    fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl Filesystem for Journal {
    fn create_dir_all(&self, path: &Path, mode: DirMode) -> FlarchResult<()> {
        self.entries
            .lock()
            .unwrap()
            .push(format!("mkdir {} {mode}", path.display()));
        Ok(())
    }

    fn write_file(&self, path: &Path, _content: &str) -> FlarchResult<()> {
        self.entries
            .lock()
            .unwrap()
            .push(format!("write {}", path.display()));
        Ok(())
    }
}

struct SharedJournal(std::sync::Arc<Journal>);

impl Filesystem for SharedJournal {
    fn create_dir_all(&self, path: &Path, mode: DirMode) -> FlarchResult<()> {
        self.0.create_dir_all(path, mode)
    }

    fn write_file(&self, path: &Path, content: &str) -> FlarchResult<()> {
        self.0.write_file(path, content)
    }
}

impl CommandRunner for SharedJournal {
    fn run(&self, command: &CommandSpec) -> FlarchResult<()> {
        self.0.entries.lock().unwrap().push(format!("run {command}"));
        Ok(())
    }
}

#[test]
fn test_full_scaffold_workflow() {
    let journal = std::sync::Arc::new(Journal::default());
    let service = ScaffoldService::new(
        Box::new(SharedJournal(journal.clone())),
        Box::new(SharedJournal(journal.clone())),
    );

    let request = ScaffoldRequest::new(Architecture::Cubit, "counter", "/work");
    let report = service.scaffold(&request).unwrap();

    assert!(report.is_complete());
    assert_eq!(report.project_root, PathBuf::from("/work/counter"));
    assert_eq!(
        journal.entries(),
        vec![
            "run flutter create counter",
            "run flutter pub add flutter_bloc bloc",
            "mkdir /work/counter/lib 0755",
            "mkdir /work/counter/lib/cubit 0755",
            "write /work/counter/lib/main.dart",
            "write /work/counter/lib/cubit/counter_cubit.dart",
        ]
    );
}

#[test]
fn test_every_architecture_plans_a_valid_manifest() {
    let service = ScaffoldService::new(
        Box::new(Journal::default()),
        Box::new(SharedJournal(Default::default())),
    );

    for arch in Architecture::ALL {
        let manifest = service
            .plan(&ScaffoldRequest::new(arch, "app", "/tmp"))
            .unwrap();
        assert!(manifest.files().count() >= 1, "{arch} has no files");
        assert!(DomainValidator::validate_manifest(&manifest).is_ok());
    }
}

#[test]
fn test_unknown_architecture_is_a_validation_error() {
    let err: FlarchError = build_manifest_for("flux", Path::new("/tmp/app"))
        .unwrap_err()
        .into();

    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(err.to_string().contains("flux"));
    assert!(err.suggestions().iter().any(|s| s.contains("bloc")));
}

#[test]
fn test_catalog_matches_registry_order() {
    let slugs: Vec<_> = architectures().into_iter().map(|a| a.slug).collect();
    let expected: Vec<_> = Architecture::ALL.iter().map(|a| a.slug()).collect();
    assert_eq!(slugs, expected);
}
