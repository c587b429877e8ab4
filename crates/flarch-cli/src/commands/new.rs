//! Implementation of the `flarch new` command.
//!
//! Responsibility: collect architecture, name and path (flags, then config,
//! then prompts), call the core scaffold service, and display results. No
//! business logic lives here.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info, instrument};

use flarch_adapters::{LocalFilesystem, SystemCommandRunner};
use flarch_core::{
    application::{ScaffoldRequest, ScaffoldService},
    domain::{Architecture, Manifest},
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt,
    report::RunSummary,
};

/// Execute the `flarch new` command.
///
/// Dispatch sequence:
/// 1. Resolve architecture, project name and parent directory
/// 2. Early-exit with the planned operations if `--dry-run`
/// 3. Confirm with user unless `--yes`, `--quiet` or non-interactive
/// 4. Bootstrap and apply via `ScaffoldService`
/// 5. Report every failure and map an incomplete run to exit code 5
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let interactive = prompt::is_interactive();

    // 1. Inputs
    let architecture = resolve_architecture(args.architecture.as_deref(), &config, interactive)?;
    let name = match args.name {
        Some(name) => name,
        None if interactive => prompt::project_name()?,
        None => {
            return Err(CliError::MissingInput {
                what: "project name",
                flag: "the NAME argument",
            });
        }
    };
    let base = resolve_base_path(args.path, &config, interactive)?;
    let (project_name, parent) = resolve_project_path(&name, &base)?;
    validate_project_name(&project_name)?;

    debug!(
        architecture = architecture.slug(),
        project = %project_name,
        parent = %parent.display(),
        "Inputs resolved"
    );

    let mut request = ScaffoldRequest::new(architecture, project_name.as_str(), parent);
    if args.no_bootstrap {
        request = request.without_bootstrap();
    }

    // JSON on stdout must not be interleaved with `flutter` output.
    let runner = if output.is_json() {
        SystemCommandRunner::with_stdout_to_stderr()
    } else {
        SystemCommandRunner::new()
    };
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(runner))
    .abort_on_bootstrap_failure(config.scaffold.abort_on_bootstrap_failure);

    // 2. Dry run: describe but do not touch anything.
    if args.dry_run {
        let manifest = service
            .plan(&request)
            .with_cli_context(|| "planning scaffold")?;
        return show_plan(&request, &manifest, &output);
    }

    // 3. Confirm
    if interactive && !output.is_quiet() && !args.yes && !output.is_json() {
        show_configuration(&request, &output)?;
        if !prompt::confirm("Continue?")? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Scaffold
    output.header(&format!(
        "Initializing project {} using {} architecture in {}...",
        request.project_name,
        architecture,
        request.parent.display()
    ))?;
    info!(project = %request.project_name, "Scaffold started");

    let started_at = Utc::now();
    let report = service.scaffold(&request)?;
    let summary = RunSummary::new(&report, started_at, Utc::now());

    // 5. Results
    if output.is_json() {
        output.json(&summary)?;
    } else {
        summary.render(&output)?;
    }

    if !report.is_complete() {
        return Err(CliError::ScaffoldIncomplete {
            failed: summary.failures.len(),
            total: report.attempted(),
            project: report.project_root,
        });
    }

    output.success(&format!(
        "Project {} initialized successfully with {} architecture",
        request.project_name, architecture
    ))?;

    if !output.is_quiet() && !output.is_json() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", report.project_root.display()))?;
        output.print("  flutter run")?;
    }

    Ok(())
}

// ── Input resolution ──────────────────────────────────────────────────────────

/// Flag, then `defaults.architecture`, then a prompt.
fn resolve_architecture(
    flag: Option<&str>,
    config: &AppConfig,
    interactive: bool,
) -> CliResult<Architecture> {
    if let Some(name) = flag.or(config.defaults.architecture.as_deref()) {
        return name.parse::<Architecture>().map_err(|e| CliError::Core(e.into()));
    }
    if interactive {
        return prompt::select_architecture();
    }
    Err(CliError::MissingInput {
        what: "architecture",
        flag: "--arch",
    })
}

/// Flag, then `defaults.path`, then a prompt, then `.`.
fn resolve_base_path(
    flag: Option<PathBuf>,
    config: &AppConfig,
    interactive: bool,
) -> CliResult<PathBuf> {
    match flag.or_else(|| config.defaults.path.clone()) {
        Some(path) => Ok(prompt::normalize_path(&path.to_string_lossy())),
        None if interactive => prompt::parent_path(),
        None => Ok(PathBuf::from(".")),
    }
}

/// Split `name` (joined onto `base`) into the project's leaf name and the
/// directory `flutter create` runs in.
///
/// The leaf always comes from `name` itself, never from `base`.
pub fn resolve_project_path(name: &str, base: &Path) -> CliResult<(String, PathBuf)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }

    let project_name = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidProjectName {
            name: name.into(),
            reason: "cannot extract valid project name".into(),
        })?
        .to_string();

    let full = base.join(name);
    let parent = full
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    Ok((project_name, parent))
}

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    if name.chars().any(char::is_whitespace) {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain whitespace".into(),
        });
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(request: &ScaffoldRequest, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:      {}", request.project_name))?;
    out.print(&format!("  Architecture: {}", request.architecture))?;
    out.print(&format!("  Location:     {}", request.project_root().display()))?;
    out.print(&format!(
        "  Bootstrap:    {}",
        if request.bootstrap { "flutter create" } else { "skipped" }
    ))?;
    out.print("")?;
    Ok(())
}

fn show_plan(request: &ScaffoldRequest, manifest: &Manifest, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(manifest)?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create '{}' at {}",
        request.project_name,
        request.project_root().display()
    ))?;
    if request.bootstrap {
        out.print(&format!(
            "  run    flutter create {} (in {})",
            request.project_name,
            request.parent.display()
        ))?;
    }
    for operation in manifest.operations() {
        out.print(&format!("  {operation}"))?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
