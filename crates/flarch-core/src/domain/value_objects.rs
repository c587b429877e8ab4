//! Domain value objects: Architecture and DirMode.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO template data. Everything an architecture generates lives in
//! `registry.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here and to [`Architecture::ALL`]
//! 2. Add the `slug` / `label` arms here
//! 3. Add a `TemplateDef` entry in `registry.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Architecture ─────────────────────────────────────────────────────────────

/// A supported Flutter state-management / architecture pattern.
///
/// The set is closed: there is no runtime registration. To add one, add a
/// variant here, then add a `TemplateDef` in `registry.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Architecture {
    Bloc,
    Provider,
    Redux,
    ScopedModel,
    Mvvm,
    Mvc,
    Cubit,
    Riverpod,
    GetX,
    MobX,
    StatesRebuilder,
    Clean,
}

impl Architecture {
    /// Every variant, in menu order.
    pub const ALL: [Architecture; 12] = [
        Self::Bloc,
        Self::Provider,
        Self::Redux,
        Self::ScopedModel,
        Self::Mvvm,
        Self::Mvc,
        Self::Cubit,
        Self::Riverpod,
        Self::GetX,
        Self::MobX,
        Self::StatesRebuilder,
        Self::Clean,
    ];

    /// Stable machine identifier, used on the command line and in config.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Bloc => "bloc",
            Self::Provider => "provider",
            Self::Redux => "redux",
            Self::ScopedModel => "scoped-model",
            Self::Mvvm => "mvvm",
            Self::Mvc => "mvc",
            Self::Cubit => "cubit",
            Self::Riverpod => "riverpod",
            Self::GetX => "getx",
            Self::MobX => "mobx",
            Self::StatesRebuilder => "states-rebuilder",
            Self::Clean => "clean",
        }
    }

    /// Human-readable name shown in menus and summaries.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bloc => "BLoC (Business Logic Component)",
            Self::Provider => "Provider",
            Self::Redux => "Redux",
            Self::ScopedModel => "Scoped Model",
            Self::Mvvm => "MVVM (Model-View-ViewModel)",
            Self::Mvc => "MVC (Model-View-Controller)",
            Self::Cubit => "Cubit",
            Self::Riverpod => "Riverpod",
            Self::GetX => "GetX",
            Self::MobX => "MobX",
            Self::StatesRebuilder => "States Rebuilder",
            Self::Clean => "Clean Architecture",
        }
    }

    /// Comma-separated list of slugs, for error messages and help text.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|a| a.slug())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Architecture {
    type Err = DomainError;

    /// Accepts the slug, the full label, or the label's leading word
    /// (`BLoC`, `MVVM`, ...). Case-insensitive; `_` and spaces are treated
    /// like `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);

        Self::ALL
            .into_iter()
            .find(|arch| {
                let label = arch.label();
                let short = label.split(" (").next().unwrap_or(label);
                wanted == arch.slug() || wanted == normalize(label) || wanted == normalize(short)
            })
            .ok_or_else(|| DomainError::UnsupportedArchitecture {
                name: s.trim().to_string(),
            })
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

// ── DirMode ───────────────────────────────────────────────────────────────────

/// Unix permission bits applied to a created directory.
///
/// Ignored on platforms without Unix permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirMode(u32);

impl DirMode {
    /// `rwxr-xr-x`, suitable for source directories.
    pub const STANDARD: DirMode = DirMode(0o755);

    pub const fn new(bits: u32) -> Self {
        Self(bits & 0o7777)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }
}

impl Default for DirMode {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for DirMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}
