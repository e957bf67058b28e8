// stage.rs — End-to-end staging pipeline.
//
// list packages → detect kind → recreate temp root → mirror → map working
// directory → derive GOPATH. Any failure stops the pipeline; there is no
// partially staged result.

use std::path::PathBuf;

use goc_packages::PackageLister;
use serde::Serialize;

use crate::context::BuildContext;
use crate::detect::ProjectKind;
use crate::env::GoEnv;
use crate::error::{Result, StageError};
use crate::mirror::ExcludePatterns;

/// Outcome of a successful staging run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedWorkspace {
    pub kind: ProjectKind,
    pub temp_root: PathBuf,
    pub temp_working_dir: PathBuf,
    /// Empty for module projects.
    pub effective_gopath: String,
}

/// Stage the project `ctx` was created for.
pub fn stage(
    ctx: &mut BuildContext,
    lister: &dyn PackageLister,
    env: &GoEnv,
    excludes: &ExcludePatterns,
) -> Result<StagedWorkspace> {
    let packages = lister.list(ctx.original_working_dir(), ctx.build_flags())?;
    if packages.is_empty() {
        return Err(StageError::InvariantViolation("package listing returned no packages"));
    }
    tracing::debug!("listed {} packages", packages.len());
    ctx.set_packages(packages);

    let kind = ctx.detect_project_kind()?;
    ctx.mirror(excludes)?;
    let temp_working_dir = ctx.map_working_dir()?.to_path_buf();
    let effective_gopath = ctx.derive_gopath(env)?.to_string();

    Ok(StagedWorkspace {
        kind,
        temp_root: ctx.temp_root().to_path_buf(),
        temp_working_dir,
        effective_gopath,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use goc_packages::{Package, StaticLister};
    use tempfile::tempdir;

    #[test]
    fn empty_listing_stops_before_touching_disk() {
        let base = tempdir().unwrap();
        let mut ctx = BuildContext::new("/go/src/a", base.path(), "");

        let result = stage(
            &mut ctx,
            &StaticLister::default(),
            &GoEnv::default(),
            &ExcludePatterns::none(),
        );

        assert!(matches!(result, Err(StageError::InvariantViolation(_))));
        assert!(!ctx.temp_root().exists());
    }

    #[test]
    fn outside_project_fails_after_mirroring() {
        let base = tempdir().unwrap();
        let module = tempdir().unwrap();
        std::fs::write(module.path().join("go.mod"), "module m").unwrap();
        let mut ctx = BuildContext::new("/elsewhere", base.path(), "");
        let lister = StaticLister::new(vec![Package::in_module("m", "m", module.path())]);

        let result = stage(&mut ctx, &lister, &GoEnv::default(), &ExcludePatterns::none());

        assert!(matches!(result, Err(StageError::Configuration { .. })));
    }
}
