//! `flarch config`: read and write configuration values.

use std::path::{Path, PathBuf};

use flarch_core::domain::Architecture;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Every key `config get` / `config set` accept, with how `set` parses it.
const KEYS: &[(&str, ValueKind)] = &[
    ("defaults.architecture", ValueKind::Architecture),
    ("defaults.path", ValueKind::Text),
    ("output.no_color", ValueKind::Bool),
    ("output.format", ValueKind::Format),
    ("scaffold.abort_on_bootstrap_failure", ValueKind::Bool),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Architecture,
    Text,
    Bool,
    Format,
}

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::Set { key, value, local } => {
            let path = AppConfig::target_path(local, config_file.as_ref());
            set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            let path = AppConfig::target_path(false, config_file.as_ref());
            println!("{}", path.display());
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn lookup(key: &str) -> CliResult<ValueKind> {
    KEYS.iter()
        .find(|(known, _)| *known == key)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| CliError::ConfigError {
            message: format!(
                "Unknown config key: '{key}' (known keys: {})",
                KEYS.iter().map(|(k, _)| *k).collect::<Vec<_>>().join(", ")
            ),
            source: None,
        })
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    lookup(key)?;

    let tree = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: "Failed to inspect configuration".into(),
        source: Some(Box::new(e)),
    })?;
    let pointer = format!("/{}", key.replace('.', "/"));

    Ok(match tree.pointer(&pointer) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => "(unset)".to_string(),
        Some(other) => other.to_string(),
    })
}

fn parse_value(key: &str, kind: ValueKind, raw: &str) -> CliResult<toml::Value> {
    let invalid = |expected: &str| CliError::ConfigError {
        message: format!("Invalid value '{raw}' for {key}: expected {expected}"),
        source: None,
    };

    match kind {
        ValueKind::Bool => raw
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .map_err(|_| invalid("true or false")),
        ValueKind::Format => match raw {
            "auto" | "human" | "plain" | "json" => Ok(toml::Value::String(raw.into())),
            _ => Err(invalid("auto, human, plain or json")),
        },
        ValueKind::Architecture => raw
            .parse::<Architecture>()
            .map(|arch| toml::Value::String(arch.slug().into()))
            .map_err(|e| CliError::Core(e.into())),
        ValueKind::Text => Ok(toml::Value::String(raw.into())),
    }
}

fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let kind = lookup(key)?;
    let value = parse_value(key, kind, raw)?;
    let (section, field) = key.split_once('.').unwrap_or((key, ""));

    let mut document: toml::Table = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read config '{}'", path.display()))?;
        toml::from_str::<toml::Table>(&text).map_err(|e| CliError::ConfigError {
            message: format!("'{}' is not valid TOML", path.display()),
            source: Some(Box::new(e)),
        })?
    } else {
        toml::Table::new()
    };

    let table = document
        .entry(section)
        .or_insert(toml::Value::Table(toml::Table::new()));
    let Some(table) = table.as_table_mut() else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        });
    };
    table.insert(field.to_string(), value);

    let rendered = toml::to_string_pretty(&document).map_err(|e| CliError::ConfigError {
        message: "Failed to serialise config".into(),
        source: Some(Box::new(e)),
    })?;

    // Refuse to leave behind a file the loader would reject.
    toml::from_str::<AppConfig>(&rendered).map_err(|e| CliError::ConfigError {
        message: format!("'{}' would no longer be a valid config", path.display()),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, rendered)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_unset_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "defaults.architecture").unwrap(),
            "(unset)"
        );
    }

    #[test]
    fn get_bool_and_string() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "auto");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn set_creates_file_and_normalises_architecture() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/config.toml");

        set_config_value(&path, "defaults.architecture", "Scoped Model").unwrap();
        set_config_value(&path, "scaffold.abort_on_bootstrap_failure", "true").unwrap();

        let cfg: AppConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(cfg.defaults.architecture.as_deref(), Some("scoped-model"));
        assert!(cfg.scaffold.abort_on_bootstrap_failure);
    }

    #[test]
    fn set_keeps_other_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[output]\nno_color = true\n").unwrap();

        set_config_value(&path, "output.format", "json").unwrap();

        let cfg: AppConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, "json");
    }

    #[test]
    fn set_rejects_bad_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");

        assert!(set_config_value(&path, "output.no_color", "maybe").is_err());
        assert!(set_config_value(&path, "defaults.architecture", "vuex").is_err());
        assert!(set_config_value(&path, "output.colour", "true").is_err());
        assert!(!path.exists());
    }
}
