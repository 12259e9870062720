//! Well-known locations inside a project root.

use std::path::{Path, PathBuf};

/// Hidden directory holding the persisted project configuration.
pub const CONFIG_DIR: &str = ".ccds";

/// Empty marker file that keeps an otherwise-empty directory under version control.
pub const PLACEHOLDER: &str = ".gitkeep";

/// Repository marker directory created by `git init`.
pub const REPO_MARKER: &str = ".git";

#[must_use]
pub fn config_dir(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR)
}

#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    config_dir(root).join("config.yml")
}

#[must_use]
pub fn gitignore(root: &Path) -> PathBuf {
    root.join(".gitignore")
}

#[must_use]
pub fn license(root: &Path) -> PathBuf {
    root.join("LICENSE")
}

#[must_use]
pub fn dockerfile(root: &Path) -> PathBuf {
    root.join("Dockerfile")
}

#[must_use]
pub fn docker_compose(root: &Path) -> PathBuf {
    root.join("docker-compose.yml")
}
