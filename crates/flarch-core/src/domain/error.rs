// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::Architecture;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep them after the fact)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("architecture '{name}' is not supported")]
    UnsupportedArchitecture { name: String },

    #[error("Manifest for {root} contains no operations")]
    EmptyManifest { root: String },

    #[error("Duplicate file in manifest: {path}")]
    DuplicatePath { path: String },

    #[error("Template path '{path}' would leave the project root")]
    PathEscapesRoot { path: String },

    // ========================================================================
    // Structural Violations
    // ========================================================================
    #[error("File '{path}' is written before its parent directory is created")]
    UncoveredParent { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedArchitecture { name } => {
                let mut out = vec![
                    format!("'{}' is not one of the built-in architectures", name),
                    "Supported architectures:".into(),
                ];
                out.extend(
                    Architecture::ALL
                        .iter()
                        .map(|a| format!("  • {:<17} {}", a.slug(), a.label())),
                );
                out.push("Try: flarch list".into());
                out
            }
            Self::UncoveredParent { path } | Self::DuplicatePath { path } => vec![
                format!("Template data for '{}' is inconsistent", path),
                "This is a bug in the built-in registry, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedArchitecture { .. } => ErrorCategory::Validation,
            Self::EmptyManifest { .. }
            | Self::DuplicatePath { .. }
            | Self::PathEscapesRoot { .. }
            | Self::UncoveredParent { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
