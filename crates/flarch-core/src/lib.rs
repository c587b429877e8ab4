//! Flarch Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the flarch
//! Flutter architecture scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           flarch-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, Orchestrator)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, CommandRunner)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      flarch-adapters (Infrastructure)   │
//! │ (LocalFilesystem, SystemCommandRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Architecture, Manifest, Registry)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flarch_core::{
//!     application::{ScaffoldRequest, ScaffoldService},
//!     domain::Architecture,
//! };
//!
//! // 1. Describe what to build
//! let request = ScaffoldRequest::new(Architecture::Bloc, "my_app", ".");
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, runner);
//! let report = service.scaffold(&request).unwrap();
//! assert!(report.is_complete());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArchitectureInfo, BootstrapOutcome, ExecutionReport, ScaffoldReport, ScaffoldRequest,
        ScaffoldService, architectures,
        ports::{CommandRunner, Filesystem},
    };
    pub use crate::domain::{Architecture, CommandSpec, DirMode, Manifest, Operation};
    pub use crate::error::{ErrorCategory, FlarchError, FlarchResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
