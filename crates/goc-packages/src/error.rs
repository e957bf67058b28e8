// error.rs — Error types for package listing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while enumerating packages.
#[derive(Debug, Error)]
pub enum ListError {
    /// The toolchain binary could not be started.
    #[error("failed to run '{program}' in {dir}: {source}")]
    Spawn {
        program: String,
        dir: PathBuf,
        source: std::io::Error,
    },

    /// The listing command ran but exited unsuccessfully.
    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The listing output was not a stream of package objects.
    #[error("malformed package metadata: {0}")]
    Decode(#[from] serde_json::Error),
}
