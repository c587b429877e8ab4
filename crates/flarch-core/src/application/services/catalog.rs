//! Architecture catalog - read-only view of the registry for listings.

use serde::Serialize;

use crate::domain::{Architecture, TEMPLATE_REGISTRY};

/// DTO describing one supported architecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchitectureInfo {
    pub slug: &'static str,
    pub label: &'static str,
    pub packages: Vec<&'static str>,
    pub codegen: bool,
    pub directories: Vec<&'static str>,
    pub files: Vec<&'static str>,
}

impl ArchitectureInfo {
    pub fn architecture(&self) -> Option<Architecture> {
        self.slug.parse().ok()
    }
}

/// Every supported architecture, in registry order.
pub fn architectures() -> Vec<ArchitectureInfo> {
    TEMPLATE_REGISTRY
        .iter()
        .map(|def| ArchitectureInfo {
            slug: def.architecture.slug(),
            label: def.architecture.label(),
            packages: def.packages.to_vec(),
            codegen: def.codegen,
            directories: def.directories.to_vec(),
            files: def.files.iter().map(|f| f.path).collect(),
        })
        .collect()
}
