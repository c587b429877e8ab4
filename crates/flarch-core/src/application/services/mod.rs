//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "list architectures".

pub mod bootstrap;
pub mod catalog;
pub mod orchestrator;
pub mod scaffold_service;

pub use bootstrap::ProjectBootstrapper;
pub use catalog::{ArchitectureInfo, architectures};
pub use orchestrator::{ExecutionReport, OperationOutcome, Orchestrator};
pub use scaffold_service::{BootstrapOutcome, ScaffoldReport, ScaffoldRequest, ScaffoldService};
