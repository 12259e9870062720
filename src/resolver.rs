//! Resolves a [`ProjectConfig`] from command-line values and prompts.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::ConfigStore;
use crate::errors::{CcdsError, Result};
use crate::fs_util;
use crate::languages;
use crate::models::{Language, License, ProjectConfig};
use crate::prompt::Prompter;

/// Values supplied on the command line for `init`.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub author: Option<String>,
    pub license: Option<String>,
    pub language: Option<String>,
    /// Skip the non-empty directory confirmation.
    pub force: bool,
}

/// Result of configuration resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Configured(ProjectConfig),
    /// The user declined to initialize a non-empty directory.
    Declined,
}

/// Resolve the configuration for `root`.
///
/// Fails with [`CcdsError::AlreadyInitialized`] if `store` already marks the
/// root as initialized. Supplied `license`/`language` values are validated
/// before any prompt is shown; missing values are asked for through
/// `prompter`. Nothing is written to disk.
pub fn resolve<R: BufRead, W: Write>(
    root: &Path,
    opts: &InitOptions,
    store: &ConfigStore,
    prompter: &mut Prompter<R, W>,
) -> Result<Resolution> {
    if store.is_initialized()? {
        return Err(CcdsError::AlreadyInitialized {
            root: root.to_path_buf(),
        });
    }

    let license = opts
        .license
        .as_deref()
        .map(str::parse::<License>)
        .transpose()?;
    let language = opts
        .language
        .as_deref()
        .map(str::parse::<Language>)
        .transpose()?;

    if !opts.force && !fs_util::is_empty_dir(root)? {
        let proceed = prompter.confirm("This directory is not empty, initialize anyways?")?;
        if !proceed {
            return Ok(Resolution::Declined);
        }
    }

    let author = match &opts.author {
        Some(author) => author.clone(),
        None => prompter.ask("Author (Your name or organization/company/team)")?,
    };

    let license = match license {
        Some(license) => license,
        None => prompter.choose("Select your license", &License::ALL, None)?,
    };

    let primary_language = match language {
        Some(language) => language,
        None => prompter.choose("Select your primary language", languages::SUPPORTED, Some(0))?,
    };

    Ok(Resolution::Configured(ProjectConfig {
        project_root: root.to_path_buf(),
        author,
        license,
        primary_language,
    }))
}
