//! Project Bootstrapper - `flutter create` before any architecture is applied.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::CommandRunner},
    domain::registry,
    error::FlarchResult,
};

/// Creates the base Flutter project a manifest is later applied to.
pub struct ProjectBootstrapper<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> ProjectBootstrapper<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Run `flutter create <project_name>` inside `parent`.
    #[instrument(skip(self), fields(parent = %parent.display()))]
    pub fn create_base_project(&self, project_name: &str, parent: &Path) -> FlarchResult<()> {
        let command = registry::create_project(project_name, parent);
        info!(%command, "Creating base project");

        self.runner.run(&command).map_err(|e| {
            ApplicationError::BootstrapFailed {
                project: project_name.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
