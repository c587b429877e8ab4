use std::path::Path;

use crate::domain::{
    entities::{Manifest, common::RelativePath},
    error::DomainError,
    registry::{TEMPLATE_REGISTRY, build_manifest},
};

/// Structural checks on manifests and on the registry they are built from.
pub struct DomainValidator;

impl DomainValidator {
    /// See [`Manifest::validate`].
    pub fn validate_manifest(manifest: &Manifest) -> Result<(), DomainError> {
        manifest.validate()
    }

    /// Every registry path stays under the project root and every entry
    /// expands to a manifest that passes [`Self::validate_manifest`].
    pub fn validate_registry() -> Result<(), DomainError> {
        let probe = Path::new("probe");

        for def in TEMPLATE_REGISTRY {
            for dir in def.directories {
                RelativePath::try_new(*dir)?;
            }
            for file in def.files {
                RelativePath::try_new(file.path)?;
            }
            Self::validate_manifest(&build_manifest(def.architecture, probe))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn builtin_registry_is_valid() {
        assert_eq!(DomainValidator::validate_registry(), Ok(()));
    }

    #[test]
    fn file_outside_created_directories_is_rejected() {
        let root = PathBuf::from("demo");
        let mut manifest = Manifest::new(&root);
        manifest.add_file(root.join("lib/models/user.dart"), "class User {}");

        assert!(matches!(
            DomainValidator::validate_manifest(&manifest),
            Err(DomainError::UncoveredParent { .. })
        ));
    }
}
