// context.rs — State for one staging run.
//
// A BuildContext is created once per invocation and filled in pipeline
// order: packages, project kind, mirror, working directory, GOPATH. Reading
// a value before the step that produces it is an invariant violation, not
// a silent default.

use std::path::{Path, PathBuf};

use goc_packages::Package;

use crate::detect::{self, ProjectKind};
use crate::env::{self, GoEnv};
use crate::error::{Result, StageError};
use crate::install;
use crate::mirror::{self, ExcludePatterns};
use crate::naming::workspace_name;
use crate::workdir;

/// Everything produced and consumed while staging one project.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Where the user invoked the tool. Fixed for the run.
    original_working_dir: PathBuf,

    /// `<temp base>/goc-<hash of original_working_dir>`.
    temp_root: PathBuf,

    /// Raw flag string forwarded to the package lister.
    build_flags: String,

    /// Packages in lister order; the first one is representative.
    packages: Vec<Package>,

    /// Resolved once by `detect_project_kind`.
    project_kind: Option<ProjectKind>,

    mirrored: bool,
    temp_working_dir: Option<PathBuf>,
    effective_gopath: Option<String>,
}

impl BuildContext {
    /// Create a context for `original_working_dir`, placing the workspace
    /// under `temp_base`. A relative `temp_base` is taken relative to
    /// `original_working_dir`.
    pub fn new(
        original_working_dir: impl Into<PathBuf>,
        temp_base: impl AsRef<Path>,
        build_flags: impl Into<String>,
    ) -> Self {
        let original_working_dir = original_working_dir.into();
        let name = workspace_name(&original_working_dir.to_string_lossy());
        let temp_base = temp_base.as_ref();
        let temp_root = if temp_base.is_absolute() {
            temp_base.join(name)
        } else {
            original_working_dir.join(temp_base).join(name)
        };
        Self {
            temp_root,
            original_working_dir,
            build_flags: build_flags.into(),
            packages: Vec::new(),
            project_kind: None,
            mirrored: false,
            temp_working_dir: None,
            effective_gopath: None,
        }
    }

    /// Create a context for the process's current directory.
    pub fn from_current_dir(
        temp_base: impl AsRef<Path>,
        build_flags: impl Into<String>,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(StageError::EnvironmentQuery)?;
        Ok(Self::new(cwd, temp_base, build_flags))
    }

    pub fn original_working_dir(&self) -> &Path {
        &self.original_working_dir
    }

    pub fn temp_root(&self) -> &Path {
        &self.temp_root
    }

    pub fn build_flags(&self) -> &str {
        &self.build_flags
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Record the enumerated packages.
    pub fn set_packages(&mut self, packages: Vec<Package>) {
        self.packages = packages;
    }

    /// Classify the project. The first call decides; later calls return the
    /// cached kind without looking at the packages again.
    pub fn detect_project_kind(&mut self) -> Result<ProjectKind> {
        if let Some(kind) = self.project_kind {
            return Ok(kind);
        }
        let kind = detect::detect_project_kind(&self.packages)?;
        self.project_kind = Some(kind);
        Ok(kind)
    }

    /// The detected project kind.
    pub fn project_kind(&self) -> Result<ProjectKind> {
        self.project_kind
            .ok_or(StageError::InvariantViolation("project kind read before detection"))
    }

    /// Recreate the temp root and copy the project into it.
    pub fn mirror(&mut self, excludes: &ExcludePatterns) -> Result<()> {
        let kind = self.detect_project_kind()?;
        let representative = detect::representative(&self.packages)?;

        mirror::prepare_temp_root(&self.temp_root)?;
        mirror::mirror_project(kind, representative, &self.temp_root, excludes)?;
        self.mirrored = true;
        Ok(())
    }

    /// Compute and record the working directory inside the temp workspace.
    pub fn map_working_dir(&mut self) -> Result<&Path> {
        if !self.mirrored {
            return Err(StageError::InvariantViolation(
                "working directory mapped before mirroring",
            ));
        }
        let kind = self.project_kind()?;
        let representative = detect::representative(&self.packages)?;
        let root = detect::project_root(kind, representative)?;

        let mapped = workdir::map_working_dir(&self.original_working_dir, root, &self.temp_root)?;
        tracing::info!("New workingdir in tmp directory in: {}", mapped.display());
        Ok(self.temp_working_dir.insert(mapped).as_path())
    }

    /// The working directory inside the temp workspace.
    pub fn temp_working_dir(&self) -> Result<&Path> {
        self.temp_working_dir
            .as_deref()
            .ok_or(StageError::InvariantViolation("temp working directory read before mapping"))
    }

    /// Compute and record the GOPATH for the downstream build.
    pub fn derive_gopath(&mut self, env: &GoEnv) -> Result<&str> {
        if !self.mirrored {
            return Err(StageError::InvariantViolation("GOPATH derived before mirroring"));
        }
        let kind = self.project_kind()?;
        let gopath = env::effective_gopath(kind, &self.temp_root, env.gopath.as_deref());
        tracing::info!("New GOPATH: {}", gopath);
        Ok(self.effective_gopath.insert(gopath).as_str())
    }

    /// The GOPATH for the downstream build.
    pub fn effective_gopath(&self) -> Result<&str> {
        self.effective_gopath
            .as_deref()
            .ok_or(StageError::InvariantViolation("GOPATH read before derivation"))
    }

    /// Where built binaries should be installed.
    pub fn install_dir(&self, env: &GoEnv) -> Result<PathBuf> {
        Ok(install::resolve_install_dir(
            self.project_kind()?,
            &self.packages,
            env,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_root_is_derived_from_working_dir() {
        let a = BuildContext::new("/home/u/proj", "/tmp", "");
        let b = BuildContext::new("/home/u/proj", "/tmp", "-race");
        assert_eq!(a.temp_root(), b.temp_root());
        assert_eq!(
            a.temp_root(),
            Path::new("/tmp").join(workspace_name("/home/u/proj"))
        );
    }

    #[test]
    fn relative_temp_base_yields_absolute_temp_root() {
        let ctx = BuildContext::new("/home/u/proj", "tmp", "");
        assert!(ctx.temp_root().is_absolute());
        assert!(ctx.temp_root().starts_with("/home/u/proj/tmp"));
    }

    #[test]
    fn from_current_dir_captures_cwd() {
        let ctx = BuildContext::from_current_dir("/tmp", "").unwrap();
        assert_eq!(ctx.original_working_dir(), std::env::current_dir().unwrap());
    }

    #[test]
    fn detection_is_cached() {
        let mut ctx = BuildContext::new("/go/src/a", "/tmp", "");
        ctx.set_packages(vec![Package::legacy("a", "/go")]);
        assert_eq!(ctx.detect_project_kind().unwrap(), ProjectKind::Legacy);

        ctx.set_packages(vec![Package::in_module("m/a", "m", "/w/m")]);
        assert_eq!(ctx.detect_project_kind().unwrap(), ProjectKind::Legacy);
        assert_eq!(ctx.project_kind().unwrap(), ProjectKind::Legacy);
    }

    #[test]
    fn reading_kind_before_detection_fails() {
        let ctx = BuildContext::new("/go/src/a", "/tmp", "");
        assert!(matches!(
            ctx.project_kind(),
            Err(StageError::InvariantViolation(_))
        ));
        assert!(ctx.install_dir(&GoEnv::default()).is_err());
    }

    #[test]
    fn outputs_are_invalid_before_mirroring() {
        let mut ctx = BuildContext::new("/go/src/a", "/tmp", "");
        ctx.set_packages(vec![Package::legacy("a", "/go")]);
        ctx.detect_project_kind().unwrap();

        assert!(ctx.temp_working_dir().is_err());
        assert!(ctx.effective_gopath().is_err());
        assert!(matches!(
            ctx.map_working_dir(),
            Err(StageError::InvariantViolation(_))
        ));
        assert!(matches!(
            ctx.derive_gopath(&GoEnv::default()),
            Err(StageError::InvariantViolation(_))
        ));
    }

    #[test]
    fn detection_without_packages_fails() {
        let mut ctx = BuildContext::new("/go/src/a", "/tmp", "");
        let err = ctx.detect_project_kind().unwrap_err();
        assert!(err.to_string().contains("should never happen"));
    }
}
