// name.rs — `goc-stage name`.

use std::path::{Path, PathBuf};

use goc_workspace::workspace_name;

pub fn execute(path: Option<&Path>) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let target = absolute_from(path, &cwd);
    println!("{}", workspace_name(&target.to_string_lossy()));
    Ok(())
}

/// Relative paths are taken relative to `cwd`; no path means `cwd` itself.
fn absolute_from(path: Option<&Path>, cwd: &Path) -> PathBuf {
    match path {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => cwd.join(p),
        None => cwd.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_resolve_against_cwd() {
        let cwd = Path::new("/home/u");
        assert_eq!(absolute_from(Some(Path::new("proj")), cwd), Path::new("/home/u/proj"));
        assert_eq!(absolute_from(Some(Path::new("/abs")), cwd), Path::new("/abs"));
        assert_eq!(absolute_from(None, cwd), Path::new("/home/u"));
    }

    #[test]
    fn same_directory_same_name() {
        let cwd = Path::new("/home/u");
        let a = workspace_name(&absolute_from(Some(Path::new("proj")), cwd).to_string_lossy());
        let b = workspace_name("/home/u/proj");
        assert_eq!(a, b);
    }
}
