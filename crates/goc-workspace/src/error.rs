// error.rs — Error types for staging.

use std::path::PathBuf;

use goc_packages::ListError;
use thiserror::Error;

/// Errors that can occur while staging a project into a temp workspace.
#[derive(Debug, Error)]
pub enum StageError {
    /// The current working directory could not be determined.
    #[error("cannot get current working directory: {0}")]
    EnvironmentQuery(#[source] std::io::Error),

    /// The temp workspace could not be removed or (re)created.
    #[error("failed to create the temporary build directory {path}: {source}")]
    WorkspaceCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Copying the project into the temp workspace failed.
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// The invocation does not match the project layout (e.g. run from
    /// outside the project tree).
    #[error("{message}")]
    Configuration { message: String },

    /// Internal state was used in an order the pipeline never produces.
    #[error("should never happen: {0}")]
    InvariantViolation(&'static str),

    /// The package lister failed.
    #[error("package listing failed: {0}")]
    PackageListing(#[from] ListError),

    /// `.goc/stage.toml` could not be read or parsed.
    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, StageError>;
