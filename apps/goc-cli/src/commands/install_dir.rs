// install_dir.rs — `goc-stage install-dir`.

use goc_packages::PackageLister;
use goc_workspace::{BuildContext, GoEnv};

pub fn execute(buildflags: &str) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, lister) = super::load_config(&cwd)?;

    let mut ctx = BuildContext::new(&cwd, config.temp_base()?, buildflags);
    ctx.set_packages(lister.list(&cwd, buildflags)?);
    let kind = ctx.detect_project_kind()?;
    tracing::debug!("detected {:?} project", kind);

    println!("{}", ctx.install_dir(&GoEnv::from_process())?.display());
    Ok(())
}
