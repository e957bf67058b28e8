// detect.rs — Legacy (GOPATH) vs module project detection.
//
// The first package entry decides. A project is assumed not to mix module
// and GOPATH packages, so the remaining entries are not consulted.

use std::path::Path;

use goc_packages::Package;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StageError};

/// How the project resolves its dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Everything lives under one shared GOPATH root.
    Legacy,
    /// Self-contained module with its own `go.mod`.
    Module,
}

/// Classify the project from its representative (first) package.
pub fn detect_project_kind(packages: &[Package]) -> Result<ProjectKind> {
    let representative = representative(packages)?;
    Ok(match representative.module {
        None => ProjectKind::Legacy,
        Some(_) => ProjectKind::Module,
    })
}

/// The package entry every layout decision is based on.
pub fn representative(packages: &[Package]) -> Result<&Package> {
    packages
        .first()
        .ok_or(StageError::InvariantViolation("no packages to inspect"))
}

/// The directory the project is mirrored from: the GOPATH root for legacy
/// projects, the module directory otherwise.
pub fn project_root(kind: ProjectKind, package: &Package) -> Result<&Path> {
    let root = match kind {
        ProjectKind::Legacy => package.root_dir(),
        ProjectKind::Module => package.module_dir(),
    };
    root.ok_or_else(|| StageError::Configuration {
        message: format!(
            "package '{}' reports no {} directory",
            package.import_path,
            match kind {
                ProjectKind::Legacy => "GOPATH root",
                ProjectKind::Module => "module",
            }
        ),
    })
}
