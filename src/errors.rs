use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scaffolding a project.
#[derive(Error, Debug)]
pub enum CcdsError {
    /// The project root already carries a persisted configuration.
    #[error("project has already been initialized: {}", root.display())]
    AlreadyInitialized { root: PathBuf },

    /// License name outside the supported set.
    #[error("unknown license: {name}")]
    UnknownLicense { name: String },

    /// Language name outside the supported set.
    #[error("unknown language: {name}")]
    UnknownLanguage { name: String },

    /// A prompt was attempted in non-interactive mode.
    #[error("input required in non-interactive mode")]
    InputRequired,

    /// Input ended before a prompt received a valid answer.
    #[error("input closed before a valid answer was given")]
    InputClosed,

    /// Directory creation failed.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File creation or write failed.
    #[error("failed to create file {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Template lookup or rendering failed.
    #[error("template error ({name}): {message}")]
    Template { name: String, message: String },

    /// Persisted configuration could not be read or written.
    #[error("config error: {message}")]
    Config { message: String },

    /// A repository marker already exists at the project root.
    #[error("git repo already exists: {}", path.display())]
    RepoExists { path: PathBuf },

    /// The version control executable is not on the search path.
    #[error("{program} not found in path: {source}")]
    VcsNotFound {
        program: String,
        source: which::Error,
    },

    /// A version control command failed.
    #[error("`{command}` failed: {message}")]
    Vcs { command: String, message: String },

    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, CcdsError>`.
pub type Result<T> = std::result::Result<T, CcdsError>;
