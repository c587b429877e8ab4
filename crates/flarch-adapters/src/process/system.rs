//! External process adapter using std::process.

use std::io;
use std::process::{Command, ExitStatus, Stdio};

use flarch_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::CommandSpec,
    error::FlarchResult,
};
use tracing::{debug, instrument};

/// Runs commands as child processes and waits for them.
///
/// The child inherits stdout and stderr, so tool output (`flutter pub add`
/// progress, compiler errors) reaches the user unchanged. Stdin is closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner {
    stdout_to_stderr: bool,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stream the child's stdout to our stderr, keeping our stdout free for
    /// machine-readable results.
    pub fn with_stdout_to_stderr() -> Self {
        Self {
            stdout_to_stderr: true,
        }
    }

    fn child_stdout(&self) -> Stdio {
        if self.stdout_to_stderr {
            Stdio::from(io::stderr())
        } else {
            Stdio::inherit()
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %command, cwd = %command.working_dir.display()))]
    fn run(&self, command: &CommandSpec) -> FlarchResult<()> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.working_dir)
            .stdin(Stdio::null())
            .stdout(self.child_stdout())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| failure(command, spawn_reason(command, &e)))?;

        debug!(%status, "Command finished");
        check_status(command, status)
    }
}

fn check_status(command: &CommandSpec, status: ExitStatus) -> FlarchResult<()> {
    if status.success() {
        return Ok(());
    }
    let reason = match status.code() {
        Some(code) => format!("exited with status {code}"),
        None => "terminated by signal".to_string(),
    };
    Err(failure(command, reason))
}

fn spawn_reason(command: &CommandSpec, e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::NotFound if !command.working_dir.is_dir() => format!(
            "working directory {} does not exist",
            command.working_dir.display()
        ),
        io::ErrorKind::NotFound => format!("`{}` not found in PATH", command.program),
        _ => format!("could not start: {e}"),
    }
}

fn failure(command: &CommandSpec, reason: String) -> flarch_core::error::FlarchError {
    ApplicationError::ExternalCommandFailure {
        command: command.to_string(),
        reason,
    }
    .into()
}
