// mirror.rs — Copy the project into the temp workspace.
//
// The temp root is wiped and recreated with an empty `src/` on every run.
// Legacy projects are copied from their GOPATH root, so `root/src/x` lands
// at `temp/src/x`. Module projects are copied from the module directory
// straight into the temp root. Nothing is removed when the build finishes;
// the tree is left for inspection.

use std::fs;
use std::path::Path;

use goc_packages::Package;

use crate::detect::{project_root, ProjectKind};
use crate::error::{Result, StageError};

/// Names skipped while copying.
///
/// - `name/` — directories called `name`, at any depth
/// - `*.ext` — anything whose name ends in `.ext`
/// - `name` — exact name match
#[derive(Debug, Clone, Default)]
pub struct ExcludePatterns {
    patterns: Vec<String>,
}

impl ExcludePatterns {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(Into::into)
                .map(|p: String| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// No excludes; copy everything.
    pub fn none() -> Self {
        Self::default()
    }

    /// Check a single path component.
    pub fn should_exclude(&self, name: &str, is_dir: bool) -> bool {
        self.patterns.iter().any(|pattern| {
            if let Some(dir_name) = pattern.strip_suffix('/') {
                is_dir && name == dir_name
            } else if let Some(suffix) = pattern.strip_prefix('*') {
                name.ends_with(suffix)
            } else {
                name == pattern.as_str()
            }
        })
    }
}

/// Remove any previous workspace at `temp_root` and create `temp_root/src`.
pub fn prepare_temp_root(temp_root: &Path) -> Result<()> {
    if temp_root.exists() {
        fs::remove_dir_all(temp_root).map_err(|source| StageError::WorkspaceCreation {
            path: temp_root.to_path_buf(),
            source,
        })?;
    }

    let src = temp_root.join("src");
    fs::create_dir_all(&src).map_err(|source| StageError::WorkspaceCreation { path: src, source })?;

    tracing::info!("Tmp project generated in: {}", temp_root.display());
    Ok(())
}

/// Copy the project the representative package belongs to into `temp_root`.
pub fn mirror_project(
    kind: ProjectKind,
    representative: &Package,
    temp_root: &Path,
    excludes: &ExcludePatterns,
) -> Result<()> {
    let source = project_root(kind, representative)?;
    tracing::debug!(
        "mirroring {:?} project from {} into {}",
        kind,
        source.display(),
        temp_root.display()
    );
    copy_dir_recursive(source, temp_root, temp_root, excludes)
}

/// Recursively copy the contents of `src` into `dst`.
///
/// `skip` is never descended into, so a temp root nested inside the source
/// tree is not copied into itself. Directories are compared canonically.
pub fn copy_dir_recursive(
    src: &Path,
    dst: &Path,
    skip: &Path,
    excludes: &ExcludePatterns,
) -> Result<()> {
    fs::create_dir_all(dst).map_err(copy_err(src, dst))?;
    let entries = fs::read_dir(src).map_err(copy_err(src, dst))?;

    for entry in entries {
        let entry = entry.map_err(copy_err(src, dst))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        let file_type = entry.file_type().map_err(copy_err(&src_path, &dst_path))?;
        let name = entry.file_name();

        if file_type.is_dir() && is_same_dir(&src_path, skip) {
            continue;
        }
        if excludes.should_exclude(&name.to_string_lossy(), file_type.is_dir()) {
            continue;
        }

        if file_type.is_symlink() {
            copy_symlink(&src_path, &dst_path)?;
        } else if file_type.is_dir() {
            copy_dir_recursive(&src_path, &dst_path, skip, excludes)?;
        } else {
            fs::copy(&src_path, &dst_path).map_err(copy_err(&src_path, &dst_path))?;
        }
    }

    Ok(())
}

fn is_same_dir(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn copy_err(from: &Path, to: &Path) -> impl FnOnce(std::io::Error) -> StageError {
    let from = from.to_path_buf();
    let to = to.to_path_buf();
    move |source| StageError::Copy { from, to, source }
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    let target = fs::read_link(src).map_err(copy_err(src, dst))?;
    std::os::unix::fs::symlink(&target, dst).map_err(copy_err(src, dst))
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    if src.is_dir() {
        return copy_dir_recursive(src, dst, dst, &ExcludePatterns::none());
    }
    fs::copy(src, dst).map(|_| ()).map_err(copy_err(src, dst))
}
