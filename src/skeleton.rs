//! Realizes a [`Manifest`] on disk.
//!
//! Application is idempotent: existing directories are reused, placeholder
//! files are truncated and templated files are rewritten. It is not
//! transactional; the first failure stops the run and whatever was already
//! written stays in place.

use std::path::Path;

use crate::config::ConfigStore;
use crate::errors::{CcdsError, Result};
use crate::manifest::Manifest;
use crate::models::ProjectConfig;
use crate::paths;
use crate::template::{self, Renderer, TemplateData};

/// Create directories, placeholders and templated files from `manifest`
/// under `config.project_root`, then persist `config` to `store`.
pub fn apply(
    manifest: &Manifest,
    config: &ProjectConfig,
    renderer: &dyn Renderer,
    store: &ConfigStore,
) -> Result<()> {
    let root = &config.project_root;

    for (dir, keep) in &manifest.directories {
        let path = root.join(dir);
        ensure_dir(&path)?;
        if *keep {
            write_placeholder(&path)?;
        }
    }

    let data = TemplateData::new();
    for (name, dest) in &manifest.files {
        template::write(renderer, name, dest, &data)?;
    }

    store.save(config)
}

/// Create `path` and any missing parents. An existing directory is fine;
/// an existing non-directory is reported as a creation failure.
fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| CcdsError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "ensured directory");
    Ok(())
}

fn write_placeholder(dir: &Path) -> Result<()> {
    let path = dir.join(paths::PLACEHOLDER);
    std::fs::File::create(&path).map_err(|source| CcdsError::CreateFile {
        path: path.clone(),
        source,
    })?;
    Ok(())
}
