pub mod config;
pub mod errors;
pub(crate) mod fs_util;
pub mod init;
pub mod languages;
pub mod license;
pub mod manifest;
pub mod models;
pub mod paths;
pub mod prompt;
pub mod repo;
pub mod resolver;
pub mod skeleton;
pub mod template;

// Re-export key types at crate root for convenience.
pub use config::ConfigStore;
pub use errors::{CcdsError, Result};
pub use init::{init_project, InitOutcome, InitReport};
pub use license::write_license;
pub use manifest::{build as build_manifest, Manifest};
pub use models::{Language, License, ProjectConfig};
pub use prompt::Prompter;
pub use repo::{init_repo, CommitStep, Git, COMMIT_PLAN};
pub use resolver::{resolve, InitOptions, Resolution};
pub use skeleton::apply as apply_skeleton;
pub use template::{BuiltinTemplates, Renderer, TemplateData};
