//! The `init` pipeline: resolve configuration, lay out the skeleton, write
//! the license and commit everything into a new repository.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::ConfigStore;
use crate::errors::Result;
use crate::license::write_license;
use crate::manifest;
use crate::models::ProjectConfig;
use crate::prompt::Prompter;
use crate::repo::{init_repo, Git};
use crate::resolver::{resolve, InitOptions, Resolution};
use crate::skeleton;
use crate::template::Renderer;

/// Summary of a completed `init`.
#[derive(Debug, Clone)]
pub struct InitReport {
    pub config: ProjectConfig,
    /// Path of the written LICENSE, if any.
    pub license: Option<PathBuf>,
    /// Messages of the commits made, in order.
    pub commits: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub enum InitOutcome {
    Created(InitReport),
    /// The user declined to initialize a non-empty directory.
    Declined,
}

/// Run the whole `init` pipeline for `root`.
///
/// Stages run strictly in order and the first error aborts the run. Files
/// written by earlier stages are left in place.
pub fn init_project<R: BufRead, W: Write>(
    root: &Path,
    opts: &InitOptions,
    prompter: &mut Prompter<R, W>,
    renderer: &dyn Renderer,
    git: &Git,
    year: i32,
) -> Result<InitOutcome> {
    let store = ConfigStore::for_root(root);

    let config = match resolve(root, opts, &store, prompter)? {
        Resolution::Configured(config) => config,
        Resolution::Declined => return Ok(InitOutcome::Declined),
    };

    tracing::info!(
        root = %root.display(),
        license = %config.license,
        language = %config.primary_language,
        "creating project skeleton"
    );
    let manifest = manifest::build(&config);
    skeleton::apply(&manifest, &config, renderer, &store)?;

    let license = write_license(root, &config.author, config.license, year, renderer)?;

    tracing::info!("initializing git repository");
    let commits = init_repo(root, git)?;

    Ok(InitOutcome::Created(InitReport {
        config,
        license,
        commits,
    }))
}
