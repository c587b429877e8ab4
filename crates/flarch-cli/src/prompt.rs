//! Interactive prompts for values not given on the command line.
//!
//! Compiled against `dialoguer` with the `interactive` feature (on by
//! default). Without it every prompt fails with `FeatureNotAvailable`.

use std::io::IsTerminal;
use std::path::PathBuf;

use flarch_core::domain::Architecture;

use crate::error::{CliError, CliResult};

/// `true` when both ends of the conversation are a terminal.
pub fn is_interactive() -> bool {
    cfg!(feature = "interactive") && std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Blank path input means the current directory.
pub fn normalize_path(input: &str) -> PathBuf {
    match input.trim() {
        "" => PathBuf::from("."),
        trimmed => PathBuf::from(trimmed),
    }
}

#[cfg(feature = "interactive")]
mod imp {
    use super::*;
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

    pub fn select_architecture() -> CliResult<Architecture> {
        let labels: Vec<&str> = Architecture::ALL.iter().map(|a| a.label()).collect();

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose the architecture you want to use for your Flutter project")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        choice
            .map(|index| Architecture::ALL[index])
            .ok_or(CliError::Cancelled)
    }

    pub fn project_name() -> CliResult<String> {
        Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter the project name")
            .interact_text()?)
    }

    pub fn parent_path() -> CliResult<PathBuf> {
        let input = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter the path to initialize the project (press Enter for current directory)")
            .allow_empty(true)
            .interact_text()?;
        Ok(normalize_path(&input))
    }

    pub fn confirm(message: &str) -> CliResult<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(true)
            .interact_opt()?;
        Ok(answer.unwrap_or(false))
    }
}

#[cfg(not(feature = "interactive"))]
mod imp {
    use super::*;

    fn unavailable() -> CliError {
        CliError::FeatureNotAvailable {
            feature: "interactive",
        }
    }

    pub fn select_architecture() -> CliResult<Architecture> {
        Err(unavailable())
    }

    pub fn project_name() -> CliResult<String> {
        Err(unavailable())
    }

    pub fn parent_path() -> CliResult<PathBuf> {
        Err(unavailable())
    }

    pub fn confirm(_message: &str) -> CliResult<bool> {
        Err(unavailable())
    }
}

pub use imp::{confirm, parent_path, project_name, select_architecture};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_path_is_current_directory() {
        assert_eq!(normalize_path(""), PathBuf::from("."));
        assert_eq!(normalize_path("   "), PathBuf::from("."));
    }

    #[test]
    fn path_is_trimmed() {
        assert_eq!(normalize_path("  ../apps "), PathBuf::from("../apps"));
    }
}
