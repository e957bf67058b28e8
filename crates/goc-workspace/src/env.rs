// env.rs — Snapshot of the Go-related environment.
//
// Resolvers read a `GoEnv` instead of the process environment so the
// precedence rules can be exercised without touching global state.

use std::path::{Path, PathBuf};

use crate::detect::ProjectKind;

/// Environment values consulted while staging and installing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoEnv {
    /// `GOPATH` as configured before staging.
    pub gopath: Option<String>,
    /// `GOBIN` install override.
    pub gobin: Option<String>,
    /// Home directory used for the default install location.
    pub home: Option<PathBuf>,
}

impl GoEnv {
    /// Capture `GOPATH`, `GOBIN` and `HOME` from the running process.
    ///
    /// Empty values count as unset. Falls back to the platform home
    /// directory when `HOME` is missing.
    pub fn from_process() -> Self {
        Self {
            gopath: non_empty_var("GOPATH"),
            gobin: non_empty_var("GOBIN"),
            home: non_empty_var("HOME")
                .map(PathBuf::from)
                .or_else(dirs::home_dir),
        }
    }

    /// First entry of a colon-separated `GOPATH`, if set.
    pub fn first_gopath_entry(&self) -> Option<&str> {
        self.gopath
            .as_deref()
            .and_then(|p| p.split(':').next())
            .filter(|p| !p.is_empty())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// The `GOPATH` the downstream build must use.
///
/// Module projects resolve dependencies without it, so it is empty. Legacy
/// projects get the temp root, placed ahead of any prior value so the
/// mirrored copy wins over the original tree.
pub fn effective_gopath(kind: ProjectKind, temp_root: &Path, prior: Option<&str>) -> String {
    match kind {
        ProjectKind::Module => String::new(),
        ProjectKind::Legacy => match prior.filter(|p| !p.is_empty()) {
            None => temp_root.display().to_string(),
            Some(prior) => format!("{}:{}", temp_root.display(), prior),
        },
    }
}
