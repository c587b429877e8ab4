//! Application layer for flarch.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, Orchestrator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Registry rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ArchitectureInfo, // DTO for listings
    BootstrapOutcome,
    ExecutionReport,
    OperationOutcome,
    Orchestrator,
    ProjectBootstrapper,
    ScaffoldReport,
    ScaffoldRequest,
    ScaffoldService,
    architectures,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem};

pub use error::ApplicationError;
