// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for flarch.
//!
//! This module contains pure logic with no I/O. Turning an architecture into
//! real directories, files and processes is handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Manifests are built, never applied, here
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod registry;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    manifest::{CommandSpec, Manifest, Operation},
};

pub use error::{DomainError, ErrorCategory};

pub use registry::{TEMPLATE_REGISTRY, TemplateDef, build_manifest, build_manifest_for};

pub use value_objects::{Architecture, DirMode};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn architecture_parses_slugs() {
        for arch in Architecture::ALL {
            assert_eq!(Architecture::from_str(arch.slug()).unwrap(), arch);
        }
    }

    #[test]
    fn architecture_parses_labels_and_short_names() {
        for arch in Architecture::ALL {
            assert_eq!(Architecture::from_str(arch.label()).unwrap(), arch);
        }
        assert_eq!(Architecture::from_str("BLoC").unwrap(), Architecture::Bloc);
        assert_eq!(Architecture::from_str("MVVM").unwrap(), Architecture::Mvvm);
        assert_eq!(
            Architecture::from_str("states_rebuilder").unwrap(),
            Architecture::StatesRebuilder
        );
        assert_eq!(
            Architecture::from_str("  Clean Architecture ").unwrap(),
            Architecture::Clean
        );
    }

    #[test]
    fn architecture_rejects_unknown() {
        assert!(matches!(
            Architecture::from_str("vuex"),
            Err(DomainError::UnsupportedArchitecture { name }) if name == "vuex"
        ));
        assert!(Architecture::from_str("").is_err());
    }

    #[test]
    fn architecture_display_uses_label() {
        assert_eq!(Architecture::MobX.to_string(), "MobX");
        assert_eq!(
            Architecture::Mvc.to_string(),
            "MVC (Model-View-Controller)"
        );
    }

    #[test]
    fn supported_list_names_every_slug() {
        let list = Architecture::supported_list();
        for arch in Architecture::ALL {
            assert!(list.contains(arch.slug()));
        }
    }

    #[test]
    fn dir_mode_defaults_to_755() {
        assert_eq!(DirMode::default().bits(), 0o755);
        assert_eq!(DirMode::default().to_string(), "0755");
        assert_eq!(DirMode::new(0o100_700).bits(), 0o700);
    }

    // ========================================================================
    // Manifest Tests
    // ========================================================================

    fn root() -> PathBuf {
        PathBuf::from("/tmp/demo")
    }

    #[test]
    fn manifest_builds_in_order() {
        let manifest = Manifest::new(root())
            .with_command(CommandSpec::new("flutter", ["pub", "add", "x"], root()))
            .with_directory(root().join("lib"), DirMode::STANDARD)
            .with_file(root().join("lib/main.dart"), "void main() {}");

        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest.operations()[0].kind(), "run_command");
        assert_eq!(manifest.operations()[1].kind(), "create_directory");
        assert_eq!(manifest.operations()[2].kind(), "write_file");
        assert_eq!(manifest.files().count(), 1);
        assert_eq!(manifest.directories().count(), 1);
        assert_eq!(manifest.commands().count(), 1);
    }

    #[test]
    fn manifest_allows_files_at_root() {
        let manifest = Manifest::new(root()).with_file(root().join("README.md"), "");
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn manifest_accepts_parent_created_as_intermediate() {
        let manifest = Manifest::new(root())
            .with_directory(root().join("lib/a/b"), DirMode::STANDARD)
            .with_file(root().join("lib/a/x.dart"), "");
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn manifest_rejects_uncovered_parent() {
        let manifest = Manifest::new(root()).with_file(root().join("lib/main.dart"), "");
        assert!(matches!(
            manifest.validate(),
            Err(DomainError::UncoveredParent { .. })
        ));
    }

    #[test]
    fn manifest_rejects_directory_created_after_file() {
        let manifest = Manifest::new(root())
            .with_file(root().join("lib/main.dart"), "")
            .with_directory(root().join("lib"), DirMode::STANDARD);
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn manifest_rejects_duplicate_files() {
        let manifest = Manifest::new(root())
            .with_file(root().join("a.txt"), "1")
            .with_file(root().join("a.txt"), "2");
        assert!(matches!(
            manifest.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn manifest_rejects_empty() {
        assert!(matches!(
            Manifest::new(root()).validate(),
            Err(DomainError::EmptyManifest { .. })
        ));
    }

    #[test]
    fn command_spec_display() {
        let cmd = CommandSpec::new("flutter", ["pub", "add", "bloc"], Path::new("demo"));
        assert_eq!(cmd.to_string(), "flutter pub add bloc");
    }

    #[test]
    fn relative_path_rejects_absolute() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
        assert!(RelativePath::try_new("../outside.dart").is_err());
        assert!(RelativePath::try_new("").is_err());
        assert_eq!(
            RelativePath::try_new("lib/main.dart").unwrap().under(Path::new("demo")),
            PathBuf::from("demo/lib/main.dart")
        );
    }

    #[test]
    fn unsupported_suggestions_list_architectures() {
        let err = DomainError::UnsupportedArchitecture {
            name: "flux".into(),
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("mobx")));
        assert!(suggestions.iter().any(|s| s.contains("flarch list")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
