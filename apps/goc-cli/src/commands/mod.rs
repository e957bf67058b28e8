pub mod install_dir;
pub mod name;
pub mod stage;

use std::path::Path;

use goc_packages::GoListLister;
use goc_workspace::StageConfig;

/// Find the project config from `start` upward and build the lister it names.
pub(crate) fn load_config(start: &Path) -> anyhow::Result<(StageConfig, GoListLister)> {
    let config = StageConfig::discover(start)?;
    let lister = GoListLister::new(&config.go.binary);
    Ok((config, lister))
}
