//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Build and validate the manifest for the chosen architecture
//! 2. Bootstrap the base project (`flutter create`)
//! 3. Apply the manifest through the orchestrator
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ports::{CommandRunner, Filesystem},
        services::{
            bootstrap::ProjectBootstrapper,
            orchestrator::{ExecutionReport, Orchestrator},
        },
    },
    domain::{Architecture, DomainValidator as validator, Manifest, build_manifest},
    error::{FlarchError, FlarchResult},
};

/// What the user asked to scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub architecture: Architecture,
    pub project_name: String,
    /// Directory the project is created in.
    pub parent: PathBuf,
    /// Run `flutter create` first.
    pub bootstrap: bool,
}

impl ScaffoldRequest {
    pub fn new(
        architecture: Architecture,
        project_name: impl Into<String>,
        parent: impl Into<PathBuf>,
    ) -> Self {
        Self {
            architecture,
            project_name: project_name.into(),
            parent: parent.into(),
            bootstrap: true,
        }
    }

    /// Apply the architecture to an existing project.
    pub fn without_bootstrap(mut self) -> Self {
        self.bootstrap = false;
        self
    }

    /// Directory the manifest is rooted at.
    pub fn project_root(&self) -> PathBuf {
        self.parent.join(&self.project_name)
    }
}

/// Result of the bootstrap step.
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapOutcome {
    Skipped,
    Succeeded,
    Failed(FlarchError),
}

impl BootstrapOutcome {
    pub fn error(&self) -> Option<&FlarchError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Everything that happened during one scaffold run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldReport {
    pub run_id: Uuid,
    pub architecture: Architecture,
    pub project_root: PathBuf,
    pub bootstrap: BootstrapOutcome,
    /// `None` when the manifest was not applied at all.
    pub execution: Option<ExecutionReport>,
}

impl ScaffoldReport {
    /// `true` only if bootstrap (when run) and every operation succeeded.
    pub fn is_complete(&self) -> bool {
        self.bootstrap.error().is_none()
            && self
                .execution
                .as_ref()
                .is_some_and(ExecutionReport::is_complete)
    }

    /// Every error collected during the run, in the order it occurred.
    pub fn errors(&self) -> Vec<&FlarchError> {
        let mut errors: Vec<&FlarchError> = self.bootstrap.error().into_iter().collect();
        if let Some(execution) = &self.execution {
            errors.extend(execution.failures().filter_map(|o| o.error()));
        }
        errors
    }

    /// Number of steps attempted, bootstrap included.
    pub fn attempted(&self) -> usize {
        let bootstrap = usize::from(self.bootstrap != BootstrapOutcome::Skipped);
        bootstrap + self.execution.as_ref().map_or(0, ExecutionReport::total)
    }
}

/// Main scaffolding service.
///
/// Orchestrates the manifest construction, bootstrap and apply workflow.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    abort_on_bootstrap_failure: bool,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use flarch_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     runner,     // impl CommandRunner
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            filesystem,
            runner,
            abort_on_bootstrap_failure: false,
        }
    }

    /// Skip the manifest when `flutter create` fails, instead of applying it
    /// to whatever exists at the project path.
    pub fn abort_on_bootstrap_failure(mut self, abort: bool) -> Self {
        self.abort_on_bootstrap_failure = abort;
        self
    }

    /// The manifest `request` would apply. No side effects.
    pub fn plan(&self, request: &ScaffoldRequest) -> FlarchResult<Manifest> {
        let manifest = build_manifest(request.architecture, &request.project_root());
        validator::validate_manifest(&manifest)?;
        Ok(manifest)
    }

    /// Scaffold a new project.
    ///
    /// Only returns `Err` when the manifest itself is invalid, in which case
    /// nothing has been touched. Failures while applying are collected in
    /// the report.
    #[instrument(
        skip_all,
        fields(
            architecture = request.architecture.slug(),
            project = %request.project_name,
            parent = %request.parent.display()
        )
    )]
    pub fn scaffold(&self, request: &ScaffoldRequest) -> FlarchResult<ScaffoldReport> {
        let run_id = Uuid::new_v4();
        info!(%run_id, "Scaffolding {} project", request.architecture);

        // 1. Build the manifest before touching anything
        let manifest = self.plan(request)?;

        // 2. Bootstrap
        let bootstrap = if request.bootstrap {
            self.bootstrap(&request.project_name, &request.parent)
        } else {
            BootstrapOutcome::Skipped
        };

        let mut report = ScaffoldReport {
            run_id,
            architecture: request.architecture,
            project_root: manifest.root().to_path_buf(),
            bootstrap,
            execution: None,
        };

        if report.bootstrap.error().is_some() && self.abort_on_bootstrap_failure {
            warn!("Base project creation failed; architecture not applied");
            return Ok(report);
        }

        // 3. Apply
        let orchestrator = Orchestrator::new(self.filesystem.as_ref(), self.runner.as_ref());
        report.execution = Some(orchestrator.apply(manifest));

        if report.is_complete() {
            info!(%run_id, "Scaffold completed successfully");
        } else {
            warn!(%run_id, failed = report.errors().len(), "Scaffold completed with failures");
        }
        Ok(report)
    }

    fn bootstrap(&self, project_name: &str, parent: &Path) -> BootstrapOutcome {
        match ProjectBootstrapper::new(self.runner.as_ref()).create_base_project(project_name, parent)
        {
            Ok(()) => BootstrapOutcome::Succeeded,
            Err(e) => {
                error!(error = %e, "Base project creation failed");
                BootstrapOutcome::Failed(e)
            }
        }
    }
}
