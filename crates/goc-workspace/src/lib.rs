//! # goc-workspace
//!
//! Stages a Go project into a deterministic temporary workspace so a
//! coverage build can rewrite sources without touching the original tree.
//!
//! ## Key components
//!
//! - [`workspace_name`] — `goc-<12 hex>` name derived from the working
//!   directory, so reruns land in (and wipe) the same place.
//! - [`detect_project_kind`] — GOPATH vs module, decided by the first
//!   package the lister reports.
//! - [`mirror`] — recreates the temp root and copies the project in.
//! - [`map_working_dir`] — the directory inside the temp root matching
//!   where the user ran the tool.
//! - [`resolve_install_dir`] — GOBIN / GOPATH / `~/go/bin` precedence.
//! - [`BuildContext`] and [`stage`] tie these together.

pub mod config;
pub mod context;
pub mod detect;
pub mod env;
pub mod error;
pub mod install;
pub mod mirror;
pub mod naming;
pub mod stage;
pub mod workdir;

pub use config::StageConfig;
pub use context::BuildContext;
pub use detect::{detect_project_kind, ProjectKind};
pub use env::{effective_gopath, GoEnv};
pub use error::StageError;
pub use install::resolve_install_dir;
pub use mirror::ExcludePatterns;
pub use naming::workspace_name;
pub use stage::{stage, StagedWorkspace};
pub use workdir::map_working_dir;
