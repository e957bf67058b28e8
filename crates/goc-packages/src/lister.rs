// lister.rs — Package enumeration.
//
// The staging pipeline only needs an ordered list of packages for a
// directory. `PackageLister` is the seam; `GoListLister` is the real
// implementation and `StaticLister` serves tests and callers that already
// have metadata.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ListError;
use crate::package::Package;

/// Enumerates the packages under a directory.
///
/// Implementations must return packages in a stable order: the first entry
/// is treated as representative of the whole project.
pub trait PackageLister {
    /// List packages under `dir`, forwarding `build_flags` untouched.
    fn list(&self, dir: &Path, build_flags: &str) -> Result<Vec<Package>, ListError>;
}

/// Lists packages with `go list -json [flags] ./...`.
pub struct GoListLister {
    /// Toolchain executable.
    go: PathBuf,
}

impl GoListLister {
    /// Use the given `go` executable.
    pub fn new(go: impl Into<PathBuf>) -> Self {
        Self { go: go.into() }
    }

    /// Arguments passed to the toolchain for a given flag string.
    pub fn list_args(build_flags: &str) -> Vec<String> {
        let mut args = vec!["list".to_string(), "-json".to_string()];
        args.extend(build_flags.split_whitespace().map(str::to_string));
        args.push("./...".to_string());
        args
    }
}

impl Default for GoListLister {
    fn default() -> Self {
        Self::new("go")
    }
}

impl PackageLister for GoListLister {
    fn list(&self, dir: &Path, build_flags: &str) -> Result<Vec<Package>, ListError> {
        let args = Self::list_args(build_flags);
        let program = self.go.display().to_string();
        tracing::debug!("running {} {} in {}", program, args.join(" "), dir.display());

        let output = Command::new(&self.go)
            .args(&args)
            .current_dir(dir)
            .output()
            .map_err(|source| ListError::Spawn {
                program: program.clone(),
                dir: dir.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(ListError::CommandFailed {
                command: format!("{} {}", program, args.join(" ")),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        decode_stream(&output.stdout)
    }
}

/// Decode the concatenated JSON objects `go list -json` prints.
pub fn decode_stream(bytes: &[u8]) -> Result<Vec<Package>, ListError> {
    let stream = serde_json::Deserializer::from_slice(bytes).into_iter::<Package>();
    let mut packages = Vec::new();
    for pkg in stream {
        packages.push(pkg?);
    }
    Ok(packages)
}

/// Returns a fixed package list regardless of directory or flags.
#[derive(Debug, Clone, Default)]
pub struct StaticLister {
    packages: Vec<Package>,
}

impl StaticLister {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }
}

impl PackageLister for StaticLister {
    fn list(&self, _dir: &Path, _build_flags: &str) -> Result<Vec<Package>, ListError> {
        Ok(self.packages.clone())
    }
}
