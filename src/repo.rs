//! Git repository initialization with a fixed commit narrative.
//!
//! Every generated group of files gets its own commit, in the order of
//! [`COMMIT_PLAN`]. Paths of a step that are absent on disk are left out,
//! and a step with nothing left to stage, or whose paths stage no changes
//! (everything ignored), is skipped. Any failing `git add`
//! or `git commit` aborts the run.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::errors::{CcdsError, Result};
use crate::fs_util;
use crate::paths;

/// One stage-then-commit step of the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitStep {
    pub paths: &'static [&'static str],
    pub message: &'static str,
}

/// The commit narrative, in order.
pub const COMMIT_PLAN: &[CommitStep] = &[
    CommitStep {
        paths: &[paths::CONFIG_DIR],
        message: "Add ccds config directory",
    },
    CommitStep {
        paths: &[".gitignore", "LICENSE"],
        message: "Add standard repo files",
    },
    CommitStep {
        paths: &["Dockerfile", "docker-compose.yml"],
        message: "Add Docker configuration for Jupyter",
    },
    CommitStep {
        paths: &["data"],
        message: "Add directory for storing datasets",
    },
    CommitStep {
        paths: &["docs"],
        message: "Add directory for storing documentation",
    },
    CommitStep {
        paths: &["models"],
        message: "Add directory for storing models",
    },
    CommitStep {
        paths: &["notebooks"],
        message: "Add directory for storing notebooks",
    },
    CommitStep {
        paths: &["references"],
        message: "Add directory for storing references",
    },
    CommitStep {
        paths: &["reports"],
        message: "Add directory for storing reports",
    },
    CommitStep {
        paths: &["src"],
        message: "Add directory for storing source code",
    },
];

/// Handle on the external `git` executable.
#[derive(Debug, Clone)]
pub struct Git {
    program: String,
    envs: Vec<(String, String)>,
}

impl Default for Git {
    fn default() -> Self {
        Self::new("git")
    }
}

impl Git {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            envs: Vec::new(),
        }
    }

    /// Set an environment variable for every git invocation.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    fn locate(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|source| CcdsError::VcsNotFound {
            program: self.program.clone(),
            source,
        })
    }

    fn output(&self, exe: &Path, root: &Path, args: &[&str]) -> Result<(String, Output)> {
        let command = format!("{} {}", self.program, args.join(" "));
        tracing::debug!(%command, "running");
        let output = Command::new(exe)
            .args(args)
            .current_dir(root)
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .output()
            .map_err(|e| CcdsError::Vcs {
                command: command.clone(),
                message: e.to_string(),
            })?;
        Ok((command, output))
    }

    fn run(&self, exe: &Path, root: &Path, args: &[&str]) -> Result<()> {
        let (command, output) = self.output(exe, root, args)?;
        if !output.status.success() {
            return Err(CcdsError::Vcs {
                command,
                message: failure_message(&output),
            });
        }
        Ok(())
    }

    /// Whether the index differs from `HEAD` (or, before the first commit,
    /// from the empty tree).
    fn has_staged_changes(&self, exe: &Path, root: &Path) -> Result<bool> {
        let (command, output) = self.output(exe, root, &["diff", "--cached", "--quiet"])?;
        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(CcdsError::Vcs {
                command,
                message: failure_message(&output),
            }),
        }
    }
}

/// Git reports most failures on stderr, but some (`nothing to commit`) only
/// on stdout.
fn failure_message(output: &Output) -> String {
    [&output.stderr, &output.stdout]
        .into_iter()
        .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| output.status.to_string())
}

/// Initialize a repository at `root` and commit the generated tree.
///
/// Fails with [`CcdsError::RepoExists`] if `root/.git` is already a
/// directory, and with [`CcdsError::VcsNotFound`] if `git` cannot be found,
/// in both cases before touching the tree. Returns the messages of the
/// commits that were made.
pub fn init_repo(root: &Path, git: &Git) -> Result<Vec<&'static str>> {
    let marker = root.join(paths::REPO_MARKER);
    if fs_util::is_regular_dir(&marker) {
        return Err(CcdsError::RepoExists { path: marker });
    }

    let exe = git.locate()?;
    git.run(&exe, root, &["init", "-q"])?;

    let mut committed = Vec::new();
    for step in COMMIT_PLAN {
        let present: Vec<&str> = step
            .paths
            .iter()
            .copied()
            .filter(|p| root.join(p).exists())
            .collect();
        if present.is_empty() {
            tracing::debug!(message = step.message, "nothing to stage, skipping");
            continue;
        }

        let mut add = vec!["add", "--"];
        add.extend(&present);
        git.run(&exe, root, &add)?;
        if !git.has_staged_changes(&exe, root)? {
            tracing::debug!(message = step.message, "paths staged no changes, skipping");
            continue;
        }
        git.run(&exe, root, &["commit", "-q", "-m", step.message])?;
        committed.push(step.message);
    }

    Ok(committed)
}
