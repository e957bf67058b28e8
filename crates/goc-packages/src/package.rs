// package.rs — Package metadata as reported by `go list -json`.
//
// Only the fields the staging core reads are typed. Everything else the
// toolchain reports is preserved in `extra` so callers further down the
// build can still get at it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata for one Go package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Package {
    /// Import path, e.g. `github.com/acme/tool/cmd/tool`.
    #[serde(default)]
    pub import_path: String,

    /// Package name (`main` for commands).
    #[serde(default)]
    pub name: String,

    /// Directory holding the package sources.
    #[serde(default)]
    pub dir: PathBuf,

    /// GOPATH entry containing the package. Empty for module packages
    /// outside any GOPATH.
    #[serde(default)]
    pub root: PathBuf,

    /// Present when the package belongs to a module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleInfo>,

    /// Fields not interpreted by goc.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The module a package belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleInfo {
    /// Module path from `go.mod`.
    #[serde(default)]
    pub path: String,

    /// Directory containing `go.mod`.
    #[serde(default)]
    pub dir: PathBuf,

    /// Path to the `go.mod` file.
    #[serde(default)]
    pub go_mod: PathBuf,

    /// Whether this is the main module.
    #[serde(default)]
    pub main: bool,
}

impl Package {
    /// A package living under a GOPATH root, with no module.
    pub fn legacy(import_path: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        let import_path = import_path.into();
        let root = root.into();
        let dir = root.join("src").join(&import_path);
        Self {
            name: last_segment(&import_path),
            import_path,
            dir,
            root,
            ..Self::default()
        }
    }

    /// A package belonging to the module rooted at `module_dir`.
    pub fn in_module(
        import_path: impl Into<String>,
        module_path: impl Into<String>,
        module_dir: impl Into<PathBuf>,
    ) -> Self {
        let import_path = import_path.into();
        let module_path = module_path.into();
        let module_dir = module_dir.into();
        let dir = match import_path.strip_prefix(module_path.as_str()) {
            Some(rest) => module_dir.join(rest.trim_start_matches('/')),
            None => module_dir.clone(),
        };
        Self {
            name: last_segment(&import_path),
            import_path,
            dir,
            root: PathBuf::new(),
            module: Some(ModuleInfo {
                path: module_path,
                go_mod: module_dir.join("go.mod"),
                dir: module_dir,
                main: true,
            }),
            extra: Map::new(),
        }
    }

    /// Directory of the enclosing module, if any.
    pub fn module_dir(&self) -> Option<&Path> {
        self.module.as_ref().map(|m| m.dir.as_path())
    }

    /// The GOPATH root, or `None` when the toolchain reported none.
    pub fn root_dir(&self) -> Option<&Path> {
        if self.root.as_os_str().is_empty() {
            None
        } else {
            Some(&self.root)
        }
    }
}

fn last_segment(import_path: &str) -> String {
    import_path
        .rsplit('/')
        .next()
        .unwrap_or(import_path)
        .to_string()
}
