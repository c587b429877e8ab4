//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "flarch",
    bin_name = "flarch",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Flutter architecture scaffolding",
    long_about = "flarch creates a Flutter project and lays out one of twelve \
                  state-management architectures on top of it.",
    after_help = "EXAMPLES:\n\
        \x20 flarch new my_app --arch bloc\n\
        \x20 flarch new my_app --arch mobx --path ~/projects\n\
        \x20 flarch new          # interactive\n\
        \x20 flarch list\n\
        \x20 flarch completions bash > /usr/share/bash-completion/completions/flarch",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Flutter project with an architecture applied.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 flarch new counter --arch provider\n\
            \x20 flarch new counter --arch \"Clean Architecture\" --path ../apps\n\
            \x20 flarch new counter --arch riverpod --no-bootstrap   # existing project\n\
            \x20 flarch new counter --arch mobx --dry-run"
    )]
    New(NewArgs),

    /// List supported architectures.
    #[command(
        visible_alias = "ls",
        about = "List supported architectures",
        after_help = "EXAMPLES:\n\
            \x20 flarch list\n\
            \x20 flarch list --format json"
    )]
    List(ListArgs),

    /// Initialise a flarch configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 flarch init           # user config directory\n\
            \x20 flarch init --local   # .flarch.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 flarch completions bash > ~/.local/share/bash-completion/completions/flarch\n\
            \x20 flarch completions zsh  > ~/.zfunc/_flarch\n\
            \x20 flarch completions fish > ~/.config/fish/completions/flarch.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the flarch configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 flarch config get defaults.architecture\n\
            \x20 flarch config set defaults.architecture bloc\n\
            \x20 flarch config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `flarch new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name. A path like `../foo` places the project one level up.
    /// Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Architecture, by slug or label (`bloc`, `scoped-model`, `MVVM`...).
    ///
    /// Parsed by flarch itself rather than clap so that labels and unknown
    /// names get the same error and suggestions as the config default.
    #[arg(
        short = 'a',
        long = "arch",
        value_name = "ARCH",
        help = "Architecture to apply (see `flarch list`)"
    )]
    pub architecture: Option<String>,

    /// Directory the project is created in.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub path: Option<PathBuf>,

    /// Do not run `flutter create`.
    #[arg(
        long = "no-bootstrap",
        help = "Apply the architecture to an existing project"
    )]
    pub no_bootstrap: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without touching anything.
    #[arg(long = "dry-run", help = "Show the operations without running them")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `flarch list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One slug per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `flarch init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.flarch.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `flarch completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `flarch config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.architecture`.
        key: String,
    },
    /// Set a configuration key in the config file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
        /// Write to `.flarch.toml` in the current directory.
        #[arg(long = "local")]
        local: bool,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
