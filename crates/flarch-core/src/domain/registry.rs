//! Architecture template registry.
//!
//! Each supported [`Architecture`] is described exactly once by a
//! [`TemplateDef`] in [`TEMPLATE_REGISTRY`]: the packages it registers, the
//! directories and files it generates, and whether it needs a code-generation
//! pass. Generated Dart sources are co-located assets under `templates/`,
//! embedded at compile time.
//!
//! Building a manifest is pure: nothing here touches the filesystem or
//! spawns a process. The orchestrator does that later.
//!
//! # Adding a New Architecture
//!
//! 1. Add a variant to `Architecture` in `value_objects.rs`
//! 2. Drop its Dart sources under `templates/<slug>/`
//! 3. Add one [`TemplateDef`] entry to [`TEMPLATE_REGISTRY`]
//! 4. Run the registry integrity tests

use std::path::Path;

use crate::domain::{
    entities::{CommandSpec, Manifest},
    error::DomainError,
    value_objects::{Architecture, DirMode},
};

/// The Flutter tool every command in a manifest invokes.
pub const FLUTTER: &str = "flutter";

/// Directory every template writes into; created first so manifests also
/// apply cleanly to a root that was never bootstrapped.
const LIB_DIR: &str = "lib";

// ── Template definitions ─────────────────────────────────────────────────────

/// A generated file: path relative to the project root plus its content.
#[derive(Debug, Clone, Copy)]
pub struct FileDef {
    pub path: &'static str,
    pub content: &'static str,
}

/// Everything the registry needs to know about one architecture.
#[derive(Debug, Clone, Copy)]
pub struct TemplateDef {
    /// The architecture this entry describes.
    pub architecture: Architecture,

    /// Packages registered with `flutter pub add`, in order.
    ///
    /// Empty means no registration command is emitted.
    pub packages: &'static [&'static str],

    /// Whether `build_runner` must run after registration.
    pub codegen: bool,

    /// Directories to create, relative to the project root, parents first.
    pub directories: &'static [&'static str],

    /// Files to write, relative to the project root.
    pub files: &'static [FileDef],
}

macro_rules! asset {
    ($slug:literal, $path:literal) => {
        FileDef {
            path: $path,
            content: include_str!(concat!("../../templates/", $slug, "/", $path)),
        }
    };
}

/// Single source of truth for all architectures.
///
/// Ordering matches [`Architecture::ALL`]; lookup is by variant, so order is
/// only cosmetic.
pub static TEMPLATE_REGISTRY: &[TemplateDef] = &[
    TemplateDef {
        architecture: Architecture::Bloc,
        packages: &["flutter_bloc", "bloc"],
        codegen: false,
        directories: &["lib/bloc"],
        files: &[
            asset!("bloc", "lib/main.dart"),
            asset!("bloc", "lib/bloc/counter_bloc.dart"),
        ],
    },
    TemplateDef {
        architecture: Architecture::Provider,
        packages: &["provider"],
        codegen: false,
        directories: &["lib/provider"],
        files: &[
            asset!("provider", "lib/main.dart"),
            asset!("provider", "lib/provider/counter_provider.dart"),
        ],
    },
    TemplateDef {
        architecture: Architecture::Redux,
        packages: &["redux", "flutter_redux"],
        codegen: false,
        directories: &["lib/redux"],
        files: &[
            asset!("redux", "lib/main.dart"),
            asset!("redux", "lib/redux/counter_reducer.dart"),
        ],
    },
    TemplateDef {
        architecture: Architecture::ScopedModel,
        packages: &["scoped_model"],
        codegen: false,
        directories: &["lib/scoped_model"],
        files: &[
            asset!("scoped-model", "lib/main.dart"),
            asset!("scoped-model", "lib/scoped_model/counter_model.dart"),
        ],
    },
    TemplateDef {
        architecture: Architecture::Mvvm,
        packages: &[],
        codegen: false,
        directories: &["lib/viewmodel"],
        files: &[
            asset!("mvvm", "lib/main.dart"),
            asset!("mvvm", "lib/viewmodel/counter_viewmodel.dart"),
        ],
    },
    TemplateDef {
        architecture: Architecture::Mvc,
        packages: &["mvc_pattern"],
        codegen: false,
        directories: &["lib/controller"],
        files: &[
            asset!("mvc", "lib/main.dart"),
            asset!("mvc", "lib/controller/counter_controller.dart"),
        ],
    },
    TemplateDef {
        architecture: Architecture::Cubit,
        packages: &["flutter_bloc", "bloc"],
        codegen: false,
        directories: &["lib/cubit"],
        files: &[
            asset!("cubit", "lib/main.dart"),
            asset!("cubit", "lib/cubit/counter_cubit.dart"),
        ],
    },
    TemplateDef {
        architecture: Architecture::Riverpod,
        packages: &["flutter_riverpod"],
        codegen: false,
        directories: &[],
        files: &[asset!("riverpod", "lib/main.dart")],
    },
    TemplateDef {
        architecture: Architecture::GetX,
        packages: &["get"],
        codegen: false,
        directories: &["lib/controller"],
        files: &[
            asset!("getx", "lib/main.dart"),
            asset!("getx", "lib/controller/counter_controller.dart"),
        ],
    },
    TemplateDef {
        architecture: Architecture::MobX,
        packages: &["flutter_mobx", "mobx", "provider"],
        codegen: true,
        directories: &["lib/store"],
        files: &[
            asset!("mobx", "lib/main.dart"),
            asset!("mobx", "lib/store/counter_store.dart"),
            asset!("mobx", "lib/store/counter_store.g.dart"),
        ],
    },
    TemplateDef {
        architecture: Architecture::StatesRebuilder,
        packages: &["states_rebuilder"],
        codegen: false,
        directories: &[],
        files: &[asset!("states-rebuilder", "lib/main.dart")],
    },
    TemplateDef {
        architecture: Architecture::Clean,
        packages: &[],
        codegen: false,
        directories: &[
            "lib/features/counter/presentation/pages",
            "lib/features/counter/presentation/provider",
        ],
        files: &[
            asset!("clean", "lib/main.dart"),
            asset!("clean", "lib/injection_container.dart"),
            asset!("clean", "lib/features/counter/presentation/pages/counter_page.dart"),
            asset!(
                "clean",
                "lib/features/counter/presentation/provider/counter_provider.dart"
            ),
        ],
    },
];

// ── Lookup ───────────────────────────────────────────────────────────────────

/// Find the registry entry for an architecture.
///
/// Every variant has an entry; the `registry_covers_every_architecture` test
/// guards that, so `None` here is a registry bug.
pub fn find_template(architecture: Architecture) -> Option<&'static TemplateDef> {
    TEMPLATE_REGISTRY
        .iter()
        .find(|def| def.architecture == architecture)
}

// ── Manifest construction ────────────────────────────────────────────────────

/// Build the manifest for `architecture`, rooted at `root`.
///
/// Layout: dependency registration, code generation (if any), `lib/` and the
/// template directories, then the files. Same inputs always give an equal
/// manifest.
pub fn build_manifest(architecture: Architecture, root: &Path) -> Manifest {
    let mut manifest = Manifest::new(root);

    let Some(def) = find_template(architecture) else {
        return manifest;
    };

    if !def.packages.is_empty() {
        manifest.add_command(pub_add(def.packages, root));
    }
    if def.codegen {
        manifest.add_command(build_runner(root));
    }

    manifest.add_directory(root.join(LIB_DIR), DirMode::STANDARD);
    for dir in def.directories {
        manifest.add_directory(root.join(dir), DirMode::STANDARD);
    }

    for file in def.files {
        manifest.add_file(root.join(file.path), file.content);
    }

    manifest
}

/// Parse `name` and build its manifest.
///
/// Unknown names yield [`DomainError::UnsupportedArchitecture`] without any
/// side effect.
pub fn build_manifest_for(name: &str, root: &Path) -> Result<Manifest, DomainError> {
    let architecture: Architecture = name.parse()?;
    Ok(build_manifest(architecture, root))
}

/// `flutter create <project>` run in the parent directory.
pub fn create_project(project_name: &str, parent: &Path) -> CommandSpec {
    CommandSpec::new(FLUTTER, ["create", project_name], parent)
}

fn pub_add(packages: &[&str], root: &Path) -> CommandSpec {
    let args = ["pub", "add"].into_iter().chain(packages.iter().copied());
    CommandSpec::new(FLUTTER, args, root)
}

fn build_runner(root: &Path) -> CommandSpec {
    CommandSpec::new(
        FLUTTER,
        ["packages", "pub", "run", "build_runner", "build"],
        root,
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
