//! Command runner that records instead of executing.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use flarch_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::CommandSpec,
    error::FlarchResult,
};
use tracing::debug;

/// Records every command it is asked to run.
///
/// Commands whose program is registered with [`fail_program`] fail after
/// being recorded. Clones share state.
///
/// [`fail_program`]: RecordingCommandRunner::fail_program
#[derive(Debug, Clone, Default)]
pub struct RecordingCommandRunner {
    inner: Arc<Mutex<Recorded>>,
}

#[derive(Debug, Default)]
struct Recorded {
    invocations: Vec<CommandSpec>,
    failing_programs: HashSet<String>,
}

impl RecordingCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every later command running `program` fails.
    pub fn fail_program(&self, program: impl Into<String>) -> &Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.failing_programs.insert(program.into());
        }
        self
    }

    /// Commands seen so far, in call order.
    pub fn invocations(&self) -> Vec<CommandSpec> {
        self.inner
            .lock()
            .map(|inner| inner.invocations.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for RecordingCommandRunner {
    fn run(&self, command: &CommandSpec) -> FlarchResult<()> {
        let mut inner = self.inner.lock().map_err(|_| ApplicationError::AdapterUnavailable {
            name: "recording command runner",
        })?;

        debug!(%command, "Recording command");
        inner.invocations.push(command.clone());

        if inner.failing_programs.contains(&command.program) {
            return Err(ApplicationError::ExternalCommandFailure {
                command: command.to_string(),
                reason: "configured to fail".into(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let runner = RecordingCommandRunner::new();
        runner
            .run(&CommandSpec::new("flutter", ["create", "app"], "."))
            .unwrap();
        runner
            .run(&CommandSpec::new("flutter", ["pub", "add", "provider"], "app"))
            .unwrap();

        let seen: Vec<String> = runner.invocations().iter().map(|c| c.to_string()).collect();
        assert_eq!(seen, vec!["flutter create app", "flutter pub add provider"]);
    }

    #[test]
    fn failing_program_is_still_recorded() {
        let runner = RecordingCommandRunner::new();
        runner.fail_program("flutter");

        assert!(runner.run(&CommandSpec::new("flutter", ["create", "app"], ".")).is_err());
        assert_eq!(runner.invocations().len(), 1);
    }
}
