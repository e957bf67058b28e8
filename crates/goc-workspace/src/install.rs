// install.rs — Where built binaries get installed.
//
// Precedence: GOBIN, then the legacy project's GOPATH root, then the first
// GOPATH entry, then ~/go/bin. Always produces a path.

use std::path::PathBuf;

use goc_packages::Package;

use crate::detect::ProjectKind;
use crate::env::GoEnv;

/// Resolve the install directory for a built artifact.
pub fn resolve_install_dir(kind: ProjectKind, packages: &[Package], env: &GoEnv) -> PathBuf {
    if let Some(gobin) = env.gobin.as_deref().filter(|v| !v.is_empty()) {
        tracing::debug!("install dir from GOBIN: {}", gobin);
        return PathBuf::from(gobin);
    }

    if kind == ProjectKind::Legacy {
        if let Some(pkg) = packages.first() {
            tracing::debug!("install dir from GOPATH root of {}", pkg.import_path);
            return pkg.root.join("bin");
        }
    }

    if let Some(first) = env.first_gopath_entry() {
        tracing::debug!("install dir from first GOPATH entry: {}", first);
        return PathBuf::from(first).join("bin");
    }

    let home = env.home.clone().unwrap_or_default();
    home.join("go").join("bin")
}
