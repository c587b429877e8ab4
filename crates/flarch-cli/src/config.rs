//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `FLARCH_<SECTION>__<KEY>`, e.g.
//!    `FLARCH_DEFAULTS__ARCHITECTURE=bloc`
//! 3. The file given with `--config` (must exist)
//! 4. `.flarch.toml` in the current directory
//! 5. The user config file (see [`AppConfig::config_path`])
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// File name of the per-directory config.
pub const LOCAL_CONFIG_FILE: &str = ".flarch.toml";

const ENV_PREFIX: &str = "FLARCH";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Scaffolding behaviour.
    pub scaffold: ScaffoldConfig,
}

/// Used by `flarch new` when the matching flag is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Architecture slug or label. Unset means prompt.
    pub architecture: Option<String>,
    /// Parent directory for new projects. Unset means prompt, then `.`.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Leave the architecture unapplied when `flutter create` fails.
    pub abort_on_bootstrap_failure: bool,
}

impl AppConfig {
    /// Load configuration from every source, lowest priority first.
    ///
    /// `config_file` is the path the user passed via `--config`; unlike the
    /// implicit locations it is required to exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("encoding built-in defaults")?)
            .add_source(
                File::from(Self::config_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                File::from(Path::new(LOCAL_CONFIG_FILE))
                    .format(FileFormat::Toml)
                    .required(false),
            );

        if let Some(path) = config_file {
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("reading configuration sources")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.flarch.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "flarch", "flarch")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Path `flarch init` and `flarch config set` write to.
    pub fn target_path(local: bool, explicit: Option<&PathBuf>) -> PathBuf {
        match (local, explicit) {
            (true, _) => PathBuf::from(LOCAL_CONFIG_FILE),
            (false, Some(path)) => path.clone(),
            (false, None) => Self::config_path(),
        }
    }

    /// Render as TOML, the format every config file uses.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_leave_architecture_unset() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.architecture.is_none());
        assert!(!cfg.scaffold.abort_on_bootstrap_failure);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[defaults]\narchitecture = \"cubit\"\n\n[scaffold]\nabort_on_bootstrap_failure = true"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();

        assert_eq!(cfg.defaults.architecture.as_deref(), Some("cubit"));
        assert!(cfg.scaffold.abort_on_bootstrap_failure);
        // untouched sections keep their defaults
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/flarch.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn toml_round_trips_partial_file() {
        let cfg: AppConfig = toml::from_str("[output]\nno_color = true\n").unwrap();
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn target_path_prefers_local_flag() {
        let explicit = PathBuf::from("custom.toml");
        assert_eq!(
            AppConfig::target_path(true, Some(&explicit)),
            PathBuf::from(LOCAL_CONFIG_FILE)
        );
        assert_eq!(AppConfig::target_path(false, Some(&explicit)), explicit);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
